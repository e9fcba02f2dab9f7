//! JSON artifact output.
//!
//! The artifact is a top-level array pretty-printed with two-space
//! indentation, ready for `mongoimport --jsonArray`.

use std::path::Path;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};

use crate::atomic_io::write_atomic;
use crate::error::OutputError;
use crate::record::UserRecord;

/// Serializes records as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`OutputError::SerializeError`] if serialization fails.
///
/// # Example
///
/// ```
/// use mock_users::{Templates, generate_users, to_pretty_json};
///
/// let users = generate_users(&Templates::builtin().expect("templates"), 1, Some(1));
/// let json = to_pretty_json(&users).expect("serialize");
///
/// assert!(json.starts_with("[\n  {\n    \"_id\": {\n      \"$oid\""));
/// ```
pub fn to_pretty_json(records: &[UserRecord]) -> Result<String, OutputError> {
    serde_json::to_string_pretty(records).map_err(|e| OutputError::SerializeError {
        message: e.to_string(),
    })
}

/// Writes records to `path`, replacing any existing file.
///
/// The payload is fully serialized before the file is touched and then
/// written atomically, so a failure leaves any previous file intact.
///
/// # Errors
///
/// Returns [`OutputError`] if serialization fails, the path is not a UTF-8
/// file path, or the file cannot be written.
pub fn write_users(path: &Path, records: &[UserRecord]) -> Result<(), OutputError> {
    let contents = to_pretty_json(records)?;
    let utf8_path = Utf8Path::from_path(path).ok_or_else(|| OutputError::InvalidPath {
        path: path.to_path_buf(),
        message: "output path must be valid UTF-8".to_owned(),
    })?;
    // camino drops trailing separators and `.` components, so `out/` would
    // otherwise name the file `out`.
    let file_name = utf8_path
        .file_name()
        .filter(|name| utf8_path.as_str().ends_with(name))
        .ok_or_else(|| OutputError::InvalidPath {
            path: path.to_path_buf(),
            message: "output path must be a file".to_owned(),
        })?;
    let parent = utf8_path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        OutputError::WriteError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;
    write_atomic(&dir, Utf8Path::new(file_name), &contents)
}
