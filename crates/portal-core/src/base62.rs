use crate::error::{CoreError, Result};

/// Digits of the base-62 alphabet, in value order.
///
/// The ordering (`0-9`, then `a-z`, then `A-Z`) determines which key a given
/// counter value maps to and must not change.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = ALPHABET.len() as u64;

/// Encodes `n` as a minimal-length base-62 string, most significant digit first.
///
/// # Examples
///
/// ```
/// use portal_core::base62;
///
/// assert_eq!(base62::encode(0), "0");
/// assert_eq!(base62::encode(61), "Z");
/// assert_eq!(base62::encode(62), "10");
/// ```
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    // u64::MAX needs 11 base-62 digits.
    let mut digits = Vec::with_capacity(11);
    while n > 0 {
        digits.push(ALPHABET[(n % BASE) as usize]);
        n /= BASE;
    }
    digits.reverse();

    // every byte comes from ALPHABET, which is ASCII
    digits.into_iter().map(char::from).collect()
}

/// Decodes a base-62 string produced by [`encode`].
///
/// Fails on empty input, on characters outside [`ALPHABET`], and on values
/// that do not fit in a `u64`.
pub fn decode(s: &str) -> Result<u64> {
    if s.is_empty() {
        return Err(CoreError::InvalidShortCode(
            "short code cannot be empty".to_string(),
        ));
    }

    s.bytes().try_fold(0_u64, |acc, byte| {
        let digit = digit_value(byte).ok_or_else(|| {
            CoreError::InvalidShortCode(format!(
                "'{}' is not a base62 character in '{}'",
                byte.escape_ascii(),
                s
            ))
        })?;

        acc.checked_mul(BASE)
            .and_then(|shifted| shifted.checked_add(digit))
            .ok_or_else(|| CoreError::InvalidShortCode(format!("'{}' overflows u64", s)))
    })
}

/// Returns true if every character of `s` belongs to [`ALPHABET`].
pub fn is_base62(s: &str) -> bool {
    s.bytes().all(|byte| digit_value(byte).is_some())
}

fn digit_value(byte: u8) -> Option<u64> {
    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'z' => byte - b'a' + 10,
        b'A'..=b'Z' => byte - b'A' + 36,
        _ => return None,
    };
    Some(u64::from(value))
}
