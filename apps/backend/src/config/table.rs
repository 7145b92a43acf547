use std::env;

use crate::error::AppError;

pub const DEAL_SEED_VAR: &str = "SHEEPSHEAD_DEAL_SEED";
pub const MAX_TABLES_VAR: &str = "SHEEPSHEAD_MAX_TABLES";
pub const DEFAULT_MAX_TABLES: usize = 1024;

/// Table registry settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Base seed for reproducible dealing; `None` deals from OS entropy.
    pub deal_seed: Option<u64>,
    /// Cap on live tables in one registry.
    pub max_tables: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            deal_seed: None,
            max_tables: DEFAULT_MAX_TABLES,
        }
    }
}

impl TableConfig {
    /// Reproducible dealing from `seed`, default table cap.
    pub fn seeded(seed: u64) -> Self {
        Self {
            deal_seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_max_tables(mut self, max_tables: usize) -> Self {
        self.max_tables = max_tables;
        self
    }

    /// Read settings from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        let deal_seed = optional_var(DEAL_SEED_VAR)?;
        let max_tables = optional_var(MAX_TABLES_VAR)?.unwrap_or(DEFAULT_MAX_TABLES);
        if max_tables == 0 {
            return Err(AppError::config(format!(
                "'{MAX_TABLES_VAR}' must be at least 1"
            )));
        }
        Ok(Self {
            deal_seed,
            max_tables,
        })
    }
}

/// Parse an optional environment variable; unset or empty is `None`.
fn optional_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw.trim().parse().map(Some).map_err(|_| {
            AppError::config(format!(
                "Environment variable '{name}' has an invalid value: '{raw}'"
            ))
        }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(AppError::config(format!(
            "Environment variable '{name}' is not valid unicode"
        ))),
    }
}
