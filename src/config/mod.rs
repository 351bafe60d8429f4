// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for dotload.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. dotload.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. DOTLOAD_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! DOTLOAD_LOAD__OVERRIDE=true   → load.override = true
//! DOTLOAD_GLOBAL__LOG_LEVEL=4   → global.log_level = 4
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use loader::ConfigLoader;
use types::{GlobalConfig, LoadConfig};

/// Default configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "dotload.toml";

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "DOTLOAD";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Load options.
    pub load: LoadConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dotload::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("dotload.toml")
    ///     .with_env_prefix("DOTLOAD")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Returns the dotenv files to load, resolved against `base_dir`.
    #[must_use]
    pub fn dotenv_files(&self, base_dir: &Path) -> Vec<PathBuf> {
        self.load.files.iter().map(|f| base_dir.join(f)).collect()
    }
}
