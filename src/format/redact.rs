//! Masking of secrets for display

/// Character used to hide the masked half
pub const MASK: char = '*';

/// Keep the first half of `secret` (rounded down) and mask the rest.
///
/// This is a display helper only. It hides nothing from anyone who can read
/// the source of the value and gives no cryptographic guarantee.
///
/// ```
/// assert_eq!(devlog::redact("hunter2!"), "hunt****");
/// assert_eq!(devlog::redact("a"), "*");
/// ```
pub fn redact(secret: &str) -> String {
    let len = secret.chars().count();
    let kept = len / 2;

    let mut out: String = secret.chars().take(kept).collect();
    out.extend(std::iter::repeat(MASK).take(len - kept));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact() {
        assert_eq!(redact("password123"), "passw******");
        assert_eq!(redact("abcd"), "ab**");
        assert_eq!(redact(""), "");
        assert_eq!(redact("a"), "*");
        assert_eq!(redact("ab"), "a*");
    }

    #[test]
    fn test_redact_counts_characters() {
        assert_eq!(redact("ñañá"), "ña**");
    }
}
