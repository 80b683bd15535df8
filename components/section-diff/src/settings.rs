//! Engine settings, loadable from the environment.

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::DiffError;

/// Prefix for environment variables read by [`DiffSettings::load`].
pub const ENV_PREFIX: &str = "SECTION_DIFF";

/// Tunables for the diff engine.
///
/// Every search step scans the full product of both windows, so callers
/// diffing untrusted input may want to cap it with `max_window_cells`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiffSettings {
    /// Largest accepted `old_window_len * new_window_len` for a top-level call.
    /// `None` means unlimited.
    pub max_window_cells: Option<usize>,
}

impl DiffSettings {
    /// Loads settings from `SECTION_DIFF__*` environment variables,
    /// e.g. `SECTION_DIFF__MAX_WINDOW_CELLS=1000000`.
    ///
    /// # Errors
    /// Returns [`DiffError::Settings`] if a variable cannot be parsed.
    pub fn load() -> Result<Self, DiffError> {
        let cfg = Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Self::from_config(cfg)
    }

    /// Deserializes settings from an already-built configuration.
    ///
    /// # Errors
    /// Returns [`DiffError::Settings`] if the configuration has the wrong shape.
    pub fn from_config(cfg: Config) -> Result<Self, DiffError> {
        Ok(cfg.try_deserialize()?)
    }

    /// Sets the window-product limit.
    #[must_use]
    pub const fn with_max_window_cells(mut self, cells: usize) -> Self {
        self.max_window_cells = Some(cells);
        self
    }

    /// Checks a window pair against the configured limit.
    pub(crate) fn check_window(&self, old_len: usize, new_len: usize) -> Result<(), DiffError> {
        let Some(limit) = self.max_window_cells else {
            return Ok(());
        };
        let cells = old_len.saturating_mul(new_len);
        if cells > limit {
            return Err(DiffError::WindowTooLarge { cells, limit });
        }
        Ok(())
    }
}
