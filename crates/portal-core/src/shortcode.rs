use crate::base62;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::borrow::Borrow;
use std::fmt::Display;

/// A short code identifying a shortened URL.
///
/// Short codes are the base-62 rendering of the sequence number under which
/// the URL was first shortened, so they only ever contain `[0-9a-zA-Z]`.
///
/// Codes are not ordered. Compare their [`sequence`](Self::sequence) values
/// instead, since `"10"` sorts before `"2"` as a string:
///
/// ```compile_fail
/// use portal_core::ShortCode;
///
/// let _ = ShortCode::from_sequence(62) < ShortCode::from_sequence(2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(SmolStr);

impl ShortCode {
    /// Creates the short code for the given sequence number.
    ///
    /// # Examples
    ///
    /// ```
    /// use portal_core::ShortCode;
    ///
    /// assert_eq!(ShortCode::from_sequence(1).as_str(), "1");
    /// assert_eq!(ShortCode::from_sequence(62).as_str(), "10");
    /// ```
    pub fn from_sequence(n: u64) -> Self {
        Self(SmolStr::new(base62::encode(n)))
    }

    /// Parses a short code received from an untrusted source.
    ///
    /// The code must be non-empty and consist only of base-62 characters.
    /// Parsing does not check that the code was ever issued.
    pub fn parse(code: impl AsRef<str>) -> Result<Self> {
        let code = code.as_ref();
        if code.is_empty() {
            return Err(CoreError::InvalidShortCode(
                "short code cannot be empty".to_string(),
            ));
        }
        if !base62::is_base62(code) {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only base62 characters: '{}'",
                code
            )));
        }
        Ok(Self(SmolStr::new(code)))
    }

    /// Returns the sequence number this code encodes.
    pub fn sequence(&self) -> Result<u64> {
        base62::decode(&self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortCode").field(&self.0).finish()
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ShortCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ShortCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShortCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Self::parse(s).map_err(serde::de::Error::custom)
    }
}
