//! serde `Serializer` that builds a [`Value`]
//!
//! Structs keep declaration order, maps keep insertion order (the renderer
//! sorts them), and enums use the externally tagged layout: unit variants
//! become scalars, everything else a one-field record named after the variant.
//! Unit structs are records without fields, like `struct Empty {}`.

use super::value::Value;
use crate::error::DevlogError;
use serde::ser::{self, Serialize};

pub(crate) struct ValueSerializer;

type Result<T> = std::result::Result<T, DevlogError>;

fn capture<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

fn tagged(variant: &'static str, value: Value) -> Value {
    Value::Record(vec![(variant.to_string(), value)])
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = DevlogError;

    type SerializeSeq = SeqCollector;
    type SerializeTuple = SeqCollector;
    type SerializeTupleStruct = SeqCollector;
    type SerializeTupleVariant = SeqCollector;
    type SerializeMap = MapCollector;
    type SerializeStruct = RecordCollector;
    type SerializeStructVariant = RecordCollector;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::scalar(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::scalar(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::scalar(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::scalar(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::scalar(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::scalar(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::scalar(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::scalar(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::scalar(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::scalar(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::scalar(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::scalar(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::scalar(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::scalar(v))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::scalar(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::sequence(v.iter().map(Value::scalar)))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value> {
        Ok(Value::reference(capture(value)?))
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Record(Vec::new()))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::scalar(variant))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value> {
        capture(value)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value> {
        Ok(tagged(variant, capture(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqCollector> {
        Ok(SeqCollector::new(None, len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqCollector> {
        Ok(SeqCollector::new(None, len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SeqCollector> {
        Ok(SeqCollector::new(None, len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SeqCollector> {
        Ok(SeqCollector::new(Some(variant), len))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapCollector> {
        Ok(MapCollector {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<RecordCollector> {
        Ok(RecordCollector::new(None, len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<RecordCollector> {
        Ok(RecordCollector::new(Some(variant), len))
    }
}

pub(crate) struct SeqCollector {
    variant: Option<&'static str>,
    items: Vec<Value>,
}

impl SeqCollector {
    fn new(variant: Option<&'static str>, len: usize) -> Self {
        Self {
            variant,
            items: Vec::with_capacity(len),
        }
    }

    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.items.push(capture(value)?);
        Ok(())
    }

    fn finish(self) -> Value {
        let sequence = Value::Sequence(self.items);
        match self.variant {
            Some(variant) => tagged(variant, sequence),
            None => sequence,
        }
    }
}

impl ser::SerializeSeq for SeqCollector {
    type Ok = Value;
    type Error = DevlogError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SeqCollector {
    type Ok = Value;
    type Error = DevlogError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SeqCollector {
    type Ok = Value;
    type Error = DevlogError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SeqCollector {
    type Ok = Value;
    type Error = DevlogError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

pub(crate) struct MapCollector {
    entries: Vec<(String, Value)>,
    pending_key: Option<String>,
}

impl ser::SerializeMap for MapCollector {
    type Ok = Value;
    type Error = DevlogError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
        self.pending_key = Some(capture(key)?.to_string());
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| DevlogError::Capture("map value without a key".to_string()))?;
        self.entries.push((key, capture(value)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Mapping(self.entries))
    }
}

pub(crate) struct RecordCollector {
    variant: Option<&'static str>,
    fields: Vec<(String, Value)>,
}

impl RecordCollector {
    fn new(variant: Option<&'static str>, len: usize) -> Self {
        Self {
            variant,
            fields: Vec::with_capacity(len),
        }
    }

    fn push<T: Serialize + ?Sized>(&mut self, name: &'static str, value: &T) -> Result<()> {
        self.fields.push((name.to_string(), capture(value)?));
        Ok(())
    }

    fn finish(self) -> Value {
        let record = Value::Record(self.fields);
        match self.variant {
            Some(variant) => tagged(variant, record),
            None => record,
        }
    }
}

impl ser::SerializeStruct for RecordCollector {
    type Ok = Value;
    type Error = DevlogError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.push(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for RecordCollector {
    type Ok = Value;
    type Error = DevlogError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.push(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Server {
        name: String,
        port: u16,
        tags: Vec<&'static str>,
        backup: Option<Box<Server>>,
    }

    #[derive(Serialize)]
    enum Event {
        Started,
        Moved(i32, i32),
        Renamed { from: String },
    }

    #[derive(Serialize)]
    struct Meters(f64);

    #[derive(Serialize)]
    struct Marker;

    #[derive(Serialize)]
    struct Empty {}

    #[test]
    fn test_struct_keeps_field_order() {
        let server = Server {
            name: "edge".to_string(),
            port: 8080,
            tags: vec!["a"],
            backup: None,
        };

        let value = Value::capture(&server).unwrap();
        let Value::Record(fields) = value else {
            panic!("expected record");
        };
        let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["name", "port", "tags", "backup"]);
        assert_eq!(fields[1].1, Value::scalar(8080));
        assert_eq!(fields[2].1, Value::sequence([Value::scalar("a")]));
        assert_eq!(fields[3].1, Value::Null);
    }

    #[test]
    fn test_some_is_reference() {
        assert_eq!(
            Value::capture(&Some(5)).unwrap(),
            Value::reference(Value::scalar(5))
        );
    }

    #[test]
    fn test_map_keys_rendered() {
        let mut map = BTreeMap::new();
        map.insert((1, 2), "pair");
        assert_eq!(
            Value::capture(&map).unwrap(),
            Value::mapping([("[1 2]", Value::scalar("pair"))])
        );
    }

    #[test]
    fn test_enums() {
        assert_eq!(Value::capture(&Event::Started).unwrap(), Value::scalar("Started"));
        assert_eq!(
            Value::capture(&Event::Moved(1, -1)).unwrap(),
            Value::record([(
                "Moved",
                Value::sequence([Value::scalar(1), Value::scalar(-1)])
            )])
        );
        assert_eq!(
            Value::capture(&Event::Renamed { from: "a".into() }).unwrap(),
            Value::record([("Renamed", Value::record([("from", Value::scalar("a"))]))])
        );
    }

    #[test]
    fn test_newtype_is_transparent() {
        assert_eq!(Value::capture(&Meters(1.5)).unwrap(), Value::scalar(1.5));
        assert_eq!(Value::capture(&()).unwrap(), Value::Null);
    }

    #[test]
    fn test_unit_struct_is_empty_record() {
        assert_eq!(Value::capture(&Marker).unwrap(), Value::Record(Vec::new()));
        assert_eq!(
            Value::capture(&Marker).unwrap(),
            Value::capture(&Empty {}).unwrap()
        );
    }

    #[test]
    fn test_failing_serialize_reports_error() {
        struct Broken;

        impl Serialize for Broken {
            fn serialize<S: serde::Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
                Err(ser::Error::custom("cannot show this"))
            }
        }

        let err = Value::capture(&Broken).unwrap_err();
        assert!(matches!(err, DevlogError::Capture(ref msg) if msg == "cannot show this"));
    }
}
