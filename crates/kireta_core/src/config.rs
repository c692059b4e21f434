//! Session configuration.
//!
//! # Responsibility
//! - Describe how a session is bootstrapped (journal location, seed data).
//! - Resolve overrides from the process environment for shells and tests.

use std::path::PathBuf;

pub const JOURNAL_PATH_ENV: &str = "KIRETA_JOURNAL_PATH";
pub const SEED_SAMPLE_DATA_ENV: &str = "KIRETA_SEED_SAMPLE_DATA";

/// Bootstrap options for a [`Session`](crate::service::session::Session).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed the sample catalog when the journal is empty.
    pub seed_sample_data: bool,
    /// SQLite journal file; `None` keeps the session in memory only.
    pub journal_path: Option<PathBuf>,
}

impl SessionConfig {
    /// In-memory session without seed data.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn with_journal_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.journal_path = Some(path.into());
        self
    }

    pub fn with_sample_data(mut self, seed: bool) -> Self {
        self.seed_sample_data = seed;
        self
    }

    /// Reads `KIRETA_JOURNAL_PATH` and `KIRETA_SEED_SAMPLE_DATA`.
    ///
    /// Blank values are treated as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let journal_path = lookup(JOURNAL_PATH_ENV)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);
        let seed_sample_data = lookup(SEED_SAMPLE_DATA_ENV)
            .map(|raw| parse_flag(&raw))
            .unwrap_or(false);
        Self {
            seed_sample_data,
            journal_path,
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::{SessionConfig, JOURNAL_PATH_ENV, SEED_SAMPLE_DATA_ENV};
    use std::path::PathBuf;

    #[test]
    fn lookup_reads_path_and_flag() {
        let config = SessionConfig::from_lookup(|key| match key {
            JOURNAL_PATH_ENV => Some(" /tmp/kireta.sqlite3 ".to_string()),
            SEED_SAMPLE_DATA_ENV => Some("Yes".to_string()),
            _ => None,
        });
        assert_eq!(config.journal_path, Some(PathBuf::from("/tmp/kireta.sqlite3")));
        assert!(config.seed_sample_data);
    }

    #[test]
    fn blank_or_unknown_values_fall_back_to_defaults() {
        let config = SessionConfig::from_lookup(|key| match key {
            JOURNAL_PATH_ENV => Some("   ".to_string()),
            SEED_SAMPLE_DATA_ENV => Some("maybe".to_string()),
            _ => None,
        });
        assert_eq!(config, SessionConfig::in_memory());
    }
}
