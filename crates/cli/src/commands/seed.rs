//! Seed the `names` table from YAML.
//!
//! ```yaml
//! names:
//!   - name: Amara
//!     gender: female
//!     origin: African
//!     meaning: Grace
//!     characteristics: [strong, classic]
//!     popularity_score: 87
//! ```
//!
//! Records are upserted on `(name, gender)`, so re-running a file updates
//! rows instead of duplicating them.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use namenest_core::NameRecord;
use namenest_web::db::{NameRepository, RepositoryError};

use super::{MissingDatabaseUrl, database_url};

#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub names: Vec<NameRecord>,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0} validation errors found")]
    Invalid(usize),

    #[error(transparent)]
    MissingEnvVar(#[from] MissingDatabaseUrl),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Parse a seed file's contents.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or a gender is unknown.
pub fn parse(content: &str) -> Result<SeedFile, SeedError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Problems that would make a record useless on the listing pages.
#[must_use]
pub fn validate(file: &SeedFile) -> Vec<String> {
    let mut errors = Vec::new();

    for (i, record) in file.names.iter().enumerate() {
        let label = if record.name.trim().is_empty() {
            format!("#{}", i + 1)
        } else {
            record.name.clone()
        };

        if record.name.trim().is_empty() {
            errors.push(format!("{label}: name is empty"));
        }
        if record.origin.trim().is_empty() {
            errors.push(format!("{label}: origin is empty"));
        }
        if !(0..=100).contains(&record.popularity_score) {
            errors.push(format!(
                "{label}: popularity_score {} outside 0-100",
                record.popularity_score
            ));
        }
    }

    errors
}

/// Load, validate and upsert names from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or validated, or if a
/// database write fails.
pub async fn names(path: &Path, dry_run: bool) -> Result<(), SeedError> {
    if !path.exists() {
        return Err(SeedError::FileNotFound(path.display().to_string()));
    }

    info!(path = %path.display(), "Loading names from file");

    // Validate before connecting to the database
    let content = tokio::fs::read_to_string(path).await?;
    let file = parse(&content)?;
    info!(names = file.names.len(), "Parsed seed file");

    let errors = validate(&file);
    if !errors.is_empty() {
        error!("Seed file validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(SeedError::Invalid(errors.len()));
    }

    if dry_run {
        info!("Dry run: seed file is valid, nothing written");
        return Ok(());
    }

    let pool = namenest_web::db::create_pool(&database_url()?).await?;
    info!("Connected to database");

    let repo = NameRepository::new(&pool);
    for record in &file.names {
        repo.upsert(record).await?;
    }

    let total = repo.count().await?;
    info!("Seeding complete!");
    info!("  Names upserted: {}", file.names.len());
    info!("  Names in table: {total}");

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use namenest_core::Gender;

    const SAMPLE: &str = r"
names:
  - name: Amara
    gender: female
    origin: African
    meaning: Grace
    characteristics: [strong, classic]
    popularity_score: 87
  - name: Rowan
    gender: unisex
    origin: Irish
    meaning: Little red one
    popularity_score: 64
";

    #[test]
    fn test_parse_sample() {
        let file = parse(SAMPLE).unwrap();
        assert_eq!(file.names.len(), 2);
        assert_eq!(file.names[0].gender, Gender::Female);
        assert_eq!(file.names[0].characteristics, vec!["strong", "classic"]);
        assert!(file.names[1].characteristics.is_empty());
        assert!(validate(&file).is_empty());
    }

    #[test]
    fn test_bundled_seed_file_is_valid() {
        let file = parse(include_str!("../../seeds/names.yaml")).unwrap();
        assert!(!file.names.is_empty());
        assert_eq!(validate(&file), Vec::<String>::new());
    }

    #[test]
    fn test_parse_rejects_unknown_gender() {
        let yaml = "names:\n  - {name: X, gender: other, origin: Y, meaning: Z, popularity_score: 1}\n";
        assert!(matches!(parse(yaml), Err(SeedError::Yaml(_))));
    }

    #[test]
    fn test_validate_reports_each_problem() {
        let yaml = "names:\n  - {name: ' ', gender: male, origin: '', meaning: '', popularity_score: 140}\n";
        let errors = validate(&parse(yaml).unwrap());
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.starts_with("#1")));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = names(Path::new("does/not/exist.yaml"), true).await;
        assert!(matches!(result, Err(SeedError::FileNotFound(_))));
    }

    #[tokio::test]
    async fn test_dry_run_skips_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.yaml");
        std::fs::write(&path, SAMPLE).unwrap();

        names(&path, true).await.unwrap();
    }
}
