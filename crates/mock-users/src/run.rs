//! One-shot generation run.

use std::path::PathBuf;

use tracing::info;

use crate::config::GeneratorSettings;
use crate::error::RunError;
use crate::generator::generate_users;
use crate::output::write_users;
use crate::template::Templates;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of users written.
    pub user_count: usize,
    /// File the users were written to.
    pub output_path: PathBuf,
}

/// Loads templates, generates users and writes them to the output file.
///
/// Any existing file at the output path is replaced. Reruns are not
/// reproducible unless a seed is configured.
///
/// # Errors
///
/// Returns [`RunError`] if the templates cannot be loaded or the output file
/// cannot be written.
///
/// # Example
///
/// ```
/// use mock_users::{GeneratorSettings, run};
///
/// let dir = std::env::temp_dir().join(format!("mock-users-doc-{}", std::process::id()));
/// std::fs::create_dir_all(&dir).expect("create temp dir");
/// let settings = GeneratorSettings {
///     count: 3,
///     output_path: Some(dir.join("users.json")),
///     ..GeneratorSettings::default()
/// };
///
/// let summary = run(&settings).expect("run succeeds");
///
/// assert_eq!(summary.user_count, 3);
/// std::fs::remove_dir_all(&dir).expect("clean up");
/// ```
pub fn run(settings: &GeneratorSettings) -> Result<RunSummary, RunError> {
    let templates = match settings.templates_path() {
        Some(path) => Templates::from_file(path)?,
        None => Templates::builtin()?,
    };

    let count = settings.count;
    let output_path = settings.output_path();
    let users = generate_users(&templates, count, settings.seed);
    write_users(&output_path, &users)?;

    info!(
        user_count = users.len(),
        output_path = %output_path.display(),
        seeded = settings.seed.is_some(),
        "mock users written"
    );

    Ok(RunSummary {
        user_count: users.len(),
        output_path,
    })
}
