//! Core types for the key-value store
//!
//! - [`Key`]: non-empty string key, ordered lexicographically
//! - [`Value`]: signed 32-bit integer payload

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::error::{Error, Result};

/// Value stored under a key.
///
/// Values are bounded integers; anything outside the `i32` range is rejected
/// at the parsing boundary by [`parse_value`].
pub type Value = i32;

/// Parse a decimal integer value.
///
/// # Examples
///
/// ```
/// use nestkv_core::parse_value;
///
/// assert_eq!(parse_value("-42").unwrap(), -42);
/// assert!(parse_value("ten").is_err());
/// ```
pub fn parse_value(raw: &str) -> Result<Value> {
    raw.parse::<Value>()
        .map_err(|e| Error::InvalidValue(format!("{:?}: {}", raw, e)))
}

/// Key in the store
///
/// A key is any non-empty string. Keys order lexicographically by their
/// bytes, which gives the store a deterministic scan order.
///
/// # Examples
///
/// ```
/// use nestkv_core::Key;
///
/// let key = Key::new("a").unwrap();
/// assert_eq!(key.as_str(), "a");
/// assert!(Key::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Key(String);

impl Key {
    /// Create a key, rejecting the empty string.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidKey("key must not be empty".to_string()));
        }
        Ok(Key(name))
    }

    /// Borrow the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// `Ord` on `Key` is derived from `String`, so ordered maps keyed by `Key`
// can be searched with a plain `&str`.
impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Key {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        Key::new(name)
    }
}

impl TryFrom<&str> for Key {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        Key::new(name)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.0
    }
}
