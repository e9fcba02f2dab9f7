//! Record templates.
//!
//! A template document holds one fully-formed user and one fully-formed
//! profile. Every generated record starts as a copy of both; the user
//! template's own `profile` is a placeholder and is always replaced.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::TemplateError;
use crate::record::{ProfileRecord, UserRecord};

/// Template document bundled with the crate.
const BUILTIN_TEMPLATES_JSON: &str = include_str!("../templates/pookiey_user.json");

/// The user and profile templates that generated records are cloned from.
///
/// # Example
///
/// ```
/// use mock_users::Templates;
///
/// let templates = Templates::builtin().expect("bundled templates parse");
///
/// assert_eq!(templates.user().display_name, "Sanjay Mahto");
/// assert_eq!(templates.profile().photos.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Templates {
    user: UserRecord,
    profile: ProfileRecord,
}

impl Templates {
    /// Returns the templates bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] only if the bundled document is invalid.
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::from_json(BUILTIN_TEMPLATES_JSON)
    }

    /// Parses a template document from a JSON string.
    ///
    /// The document has the form `{"user": {...}, "profile": {...}}`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if:
    /// - The JSON is malformed or a required field is missing
    /// - An `$oid` or `$date` value is invalid
    /// - The profile template has no photos
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let raw: RawTemplates =
            serde_json::from_str(json).map_err(|e| TemplateError::ParseError {
                message: e.to_string(),
            })?;

        Self::new(raw.user, raw.profile)
    }

    /// Loads a template document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let contents = fs::read_to_string(path).map_err(|e| TemplateError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Builds templates from already-constructed records.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NoPhotos`] if the profile has no photos.
    pub fn new(user: UserRecord, profile: ProfileRecord) -> Result<Self, TemplateError> {
        if profile.photos.is_empty() {
            return Err(TemplateError::NoPhotos);
        }
        Ok(Self { user, profile })
    }

    /// Returns the user template.
    #[must_use]
    pub const fn user(&self) -> &UserRecord {
        &self.user
    }

    /// Returns the profile template.
    #[must_use]
    pub const fn profile(&self) -> &ProfileRecord {
        &self.profile
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
struct RawTemplates {
    user: UserRecord,
    profile: ProfileRecord,
}
