use std::env;

use atelier_core::{AppError, AppResult};

/// Environment variable bounding inlined studio rosters.
pub const MAX_INLINE_OWNER_IDS_ENV: &str = "ATELIER_MAX_INLINE_OWNER_IDS";

const DEFAULT_MAX_INLINE_OWNER_IDS: usize = 500;

/// Tuning for studio filter resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceScopeConfig {
    /// Largest roster inlined as an owner-id set; larger rosters stay a join.
    pub max_inline_owner_ids: usize,
}

impl ResourceScopeConfig {
    /// Creates a config with an explicit inline limit.
    #[must_use]
    pub fn new(max_inline_owner_ids: usize) -> Self {
        Self {
            max_inline_owner_ids,
        }
    }

    /// Loads the config from the process environment.
    pub fn from_env() -> AppResult<Self> {
        Self::from_env_value(env::var(MAX_INLINE_OWNER_IDS_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> AppResult<Self> {
        let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(Self::default());
        };

        let max_inline_owner_ids = value.parse::<usize>().map_err(|error| {
            AppError::Validation(format!("invalid {MAX_INLINE_OWNER_IDS_ENV}: {error}"))
        })?;
        if max_inline_owner_ids == 0 {
            return Err(AppError::Validation(format!(
                "{MAX_INLINE_OWNER_IDS_ENV} must be greater than zero"
            )));
        }

        Ok(Self::new(max_inline_owner_ids))
    }
}

impl Default for ResourceScopeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INLINE_OWNER_IDS)
    }
}
