//! Shape-only view of arbitrary values

use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// A value reduced to the shapes the table renderer understands.
///
/// Build one by hand with the constructors, or from any `Serialize` type with
/// [`Value::capture`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent or invalid value, rendered as `nil`
    Null,
    /// Transparent indirection (`Some`, boxes, pointers)
    Reference(Box<Value>),
    /// Ordered elements labelled by index
    Sequence(Vec<Value>),
    /// Unordered key/value pairs; sorted by key when rendered
    Mapping(Vec<(String, Value)>),
    /// Named fields in declaration order
    Record(Vec<(String, Value)>),
    /// Leaf rendered verbatim
    Scalar(String),
}

impl Value {
    /// Capture any serializable value
    pub fn capture<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        value.serialize(super::capture::ValueSerializer)
    }

    /// Leaf from anything displayable
    pub fn scalar(value: impl fmt::Display) -> Self {
        Value::Scalar(value.to_string())
    }

    /// Indirection to another value
    pub fn reference(value: Value) -> Self {
        Value::Reference(Box::new(value))
    }

    /// Sequence from an iterator of values
    pub fn sequence<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::Sequence(items.into_iter().collect())
    }

    /// Mapping from key/value pairs; keys are rendered with `Display`
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: fmt::Display,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    /// Record from named fields, kept in the given order
    pub fn record<N, I>(fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Value)>,
    {
        Value::Record(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }
}

impl From<Option<Value>> for Value {
    fn from(value: Option<Value>) -> Self {
        value.map_or(Value::Null, Value::reference)
    }
}

fn write_joined<'a, I, F>(f: &mut fmt::Formatter<'_>, items: I, mut each: F) -> fmt::Result
where
    I: IntoIterator<Item = &'a (String, Value)>,
    F: FnMut(&mut fmt::Formatter<'_>, &'a (String, Value)) -> fmt::Result,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        each(f, item)?;
    }
    Ok(())
}

/// One-line rendering, used for mapping keys: `nil`, `[a b]`, `map[k:v]`, `{a b}`
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("nil"),
            Value::Reference(inner) => fmt::Display::fmt(inner, f),
            Value::Scalar(text) => f.write_str(text),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Value::Mapping(entries) => {
                let mut sorted: Vec<&(String, Value)> = entries.iter().collect();
                sorted.sort_by(|a, b| a.0.cmp(&b.0));
                f.write_str("map[")?;
                write_joined(f, sorted, |f, (key, value)| write!(f, "{}:{}", key, value))?;
                f.write_str("]")
            }
            Value::Record(fields) => {
                f.write_str("{")?;
                write_joined(f, fields, |f, (_, value)| fmt::Display::fmt(value, f))?;
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "nil");
        assert_eq!(Value::scalar(3.5).to_string(), "3.5");
        assert_eq!(
            Value::sequence([Value::scalar(1), Value::Null]).to_string(),
            "[1 nil]"
        );
        assert_eq!(
            Value::mapping([("b", Value::scalar(2)), ("a", Value::scalar(1))]).to_string(),
            "map[a:1 b:2]"
        );
        assert_eq!(
            Value::record([("x", Value::scalar(1)), ("y", Value::scalar("z"))]).to_string(),
            "{1 z}"
        );
        assert_eq!(Value::reference(Value::scalar("in")).to_string(), "in");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None), Value::Null);
        assert_eq!(
            Value::from(Some(Value::scalar(1))),
            Value::Reference(Box::new(Value::Scalar("1".into())))
        );
    }
}
