//! Runtime configuration read from the environment.

use crate::domain::{DomainError, DomainResult};
use std::path::PathBuf;

pub const LOG_DIR_VAR: &str = "PTRACK_LOG_DIR";
pub const LOG_LEVEL_VAR: &str = "PTRACK_LOG";
pub const MAX_PEOPLE_VAR: &str = "PTRACK_MAX_PEOPLE";

/// Limits applied by the project form before a project reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct FormRules {
    pub title_max_length: Option<usize>,
    pub description_min_length: usize,
    pub description_max_length: Option<usize>,
    pub min_people: u32,
    pub max_people: u32,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title_max_length: None,
            description_min_length: 5,
            description_max_length: None,
            min_people: 1,
            max_people: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rules: FormRules,
    pub log_level: String,
    /// Logging stays off while this is `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: FormRules::default(),
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Config::default();

        if let Some(level) = get(LOG_LEVEL_VAR) {
            config.log_level = level.trim().to_string();
        }
        config.log_dir = get(LOG_DIR_VAR).map(|dir| PathBuf::from(dir.trim()));

        if let Some(raw) = get(MAX_PEOPLE_VAR) {
            let max_people = raw.trim().parse::<u32>().map_err(|_| {
                DomainError::InvalidConfig(format!("{MAX_PEOPLE_VAR} must be a whole number, got `{raw}`"))
            })?;
            if max_people < config.rules.min_people {
                return Err(DomainError::InvalidConfig(format!(
                    "{MAX_PEOPLE_VAR} must be at least {}, got {max_people}",
                    config.rules.min_people
                )));
            }
            config.rules.max_people = max_people;
        }

        Ok(config)
    }
}
