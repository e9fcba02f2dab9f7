//! Generator configuration loaded via OrthoConfig.
//!
//! With nothing supplied a run writes twenty users to
//! `20_users_for_mongodb.json` using the bundled templates.

use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Number of users generated when no count is configured.
pub const DEFAULT_COUNT: usize = 20;

/// Output file written when no path is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "20_users_for_mongodb.json";

/// Configuration values controlling a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MOCK_USERS")]
pub struct GeneratorSettings {
    /// Number of users to generate.
    #[ortho_config(default = 20)]
    pub count: usize,
    /// Path of the JSON file to write.
    pub output_path: Option<PathBuf>,
    /// RNG seed for reproducible output; random when absent.
    pub seed: Option<u64>,
    /// Template document to use instead of the bundled one.
    pub templates_path: Option<PathBuf>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            output_path: None,
            seed: None,
            templates_path: None,
        }
    }
}

impl GeneratorSettings {
    /// Return the configured output path, falling back to the default.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }

    /// Return the configured template document path, if any.
    #[must_use]
    pub fn templates_path(&self) -> Option<&Path> {
        self.templates_path.as_deref()
    }
}
