//! Mock user documents for seeding a dating-app MongoDB collection.
//!
//! This crate clones a user template and a profile template into a batch of
//! records, giving each record a fresh document id, user id, email address
//! and photo ids, and writes the batch as a MongoDB Extended JSON array.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Bundled templates, or a template document loaded from JSON
//! - An injectable randomness provider, seeded for reproducible batches
//! - `{"$oid": ...}` and `{"$date": ...}` wrappers preserved on output
//! - Atomic replacement of the output file
//!
//! # Example
//!
//! ```
//! use mock_users::{Templates, generate_users, to_pretty_json};
//!
//! let templates = Templates::builtin().expect("bundled templates");
//! let users = generate_users(&templates, 3, Some(42));
//! let json = to_pretty_json(&users).expect("serialize");
//!
//! assert_eq!(users.len(), 3);
//! assert!(json.contains("\"$oid\""));
//! ```

mod atomic_io;
mod config;
mod error;
mod extended_json;
mod generator;
mod identifier;
mod output;
mod record;
mod run;
mod template;

pub use config::{DEFAULT_COUNT, DEFAULT_OUTPUT_PATH, GeneratorSettings};
pub use error::{OutputError, RunError, TemplateError};
pub use extended_json::{ExtendedDate, OBJECT_ID_LEN, ObjectId, ObjectIdError};
pub use generator::{RecordGenerator, generate_users};
pub use identifier::{
    EMAIL_DOMAIN, EMAIL_SUFFIX_LEN, email_suffix, generate_email, generate_object_id,
    generate_user_id,
};
pub use output::{to_pretty_json, write_users};
pub use record::{
    AccountStatus, AuthProvider, Gender, GeoPoint, GeoPointKind, Photo, Preferences,
    ProfileRecord, Subscription, UserRecord,
};
pub use run::{RunSummary, run};
pub use template::Templates;
