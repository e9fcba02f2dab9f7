//! MongoDB Extended JSON wrappers.
//!
//! Identifier and timestamp fields are exported as single-key objects,
//! `{"$oid": "..."}` and `{"$date": "..."}`, so that `mongoimport` restores
//! them as native `ObjectId` and `Date` values. The types here keep that
//! nesting intact in both directions.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of hexadecimal characters in an object identifier.
pub const OBJECT_ID_LEN: usize = 24;

/// A 24-character lowercase hexadecimal document identifier.
///
/// Serializes as `{"$oid": "<hex>"}`.
///
/// # Example
///
/// ```
/// use mock_users::ObjectId;
///
/// let id = ObjectId::parse("693fd7702625f60ef471e58c").expect("valid object id");
/// let json = serde_json::to_string(&id).expect("serialize");
///
/// assert_eq!(json, r#"{"$oid":"693fd7702625f60ef471e58c"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawObjectId", into = "RawObjectId")]
pub struct ObjectId(String);

impl ObjectId {
    /// Parses an object identifier from its hexadecimal form.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectIdError`] when the input is not exactly
    /// [`OBJECT_ID_LEN`] lowercase hexadecimal characters.
    pub fn parse(hex: &str) -> Result<Self, ObjectIdError> {
        let length = hex.chars().count();
        if length != OBJECT_ID_LEN {
            return Err(ObjectIdError::InvalidLength { length });
        }
        if let Some((index, character)) = hex
            .chars()
            .enumerate()
            .find(|&(_, c)| !is_object_id_char(c))
        {
            return Err(ObjectIdError::InvalidCharacter { index, character });
        }
        Ok(Self(hex.to_owned()))
    }

    /// Wraps hex produced by the identifier generator.
    pub(crate) const fn from_generated(hex: String) -> Self {
        Self(hex)
    }

    /// Returns the hexadecimal form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns `true` for characters allowed in an object identifier.
const fn is_object_id_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, 'a'..='f')
}

/// Errors raised when parsing an [`ObjectId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectIdError {
    /// The identifier does not have exactly 24 characters.
    #[error("object id must be 24 characters, found {length}")]
    InvalidLength {
        /// Number of characters supplied.
        length: usize,
    },
    /// The identifier contains a character outside `0-9a-f`.
    #[error("object id has invalid character '{character}' at index {index}")]
    InvalidCharacter {
        /// Position of the offending character.
        index: usize,
        /// The offending character.
        character: char,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawObjectId {
    #[serde(rename = "$oid")]
    oid: String,
}

impl TryFrom<RawObjectId> for ObjectId {
    type Error = ObjectIdError;

    fn try_from(raw: RawObjectId) -> Result<Self, Self::Error> {
        Self::parse(&raw.oid)
    }
}

impl From<ObjectId> for RawObjectId {
    fn from(id: ObjectId) -> Self {
        Self { oid: id.0 }
    }
}

/// A UTC timestamp exported as `{"$date": "<RFC 3339>"}`.
///
/// Timestamps render with millisecond precision and a `Z` suffix, matching
/// what `mongoexport` emits.
///
/// # Example
///
/// ```
/// use mock_users::ExtendedDate;
///
/// let date = ExtendedDate::parse("2025-12-15T09:40:00.639Z").expect("valid date");
/// let json = serde_json::to_string(&date).expect("serialize");
///
/// assert_eq!(json, r#"{"$date":"2025-12-15T09:40:00.639Z"}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDate", into = "RawDate")]
pub struct ExtendedDate(DateTime<Utc>);

impl ExtendedDate {
    /// Parses an RFC 3339 timestamp, normalizing it to UTC.
    ///
    /// # Errors
    ///
    /// Returns [`chrono::ParseError`] when the input is not RFC 3339.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(value).map(|parsed| Self(parsed.with_timezone(&Utc)))
    }

    /// Returns the wrapped timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for ExtendedDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for ExtendedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDate {
    #[serde(rename = "$date")]
    date: String,
}

impl TryFrom<RawDate> for ExtendedDate {
    type Error = chrono::ParseError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Self::parse(&raw.date)
    }
}

impl From<ExtendedDate> for RawDate {
    fn from(date: ExtendedDate) -> Self {
        Self {
            date: date.to_string(),
        }
    }
}
