//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Days past today that `expand` covers when no `--until` is given.
    pub horizon_days: u32,

    /// Longest span, in days, that `expand` will materialize.
    pub max_expand_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            horizon_days: 90,
            max_expand_days: 3660,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // SCHED_HORIZON_DAYS, SCHED_MAX_EXPAND_DAYS
        figment = figment.merge(Env::prefixed("SCHED_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for sched.
///
/// On Linux: `~/.config/sched`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sched"))
}
