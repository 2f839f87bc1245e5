//! teamcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REMOTE_TIMEOUT_SECS;
use crate::error::{TeamCalError, TeamCalResult};
use crate::rotation::RotationRule;

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("teamcal"))
        .unwrap_or_else(|| PathBuf::from("~/.teamcal"))
}

fn default_timeout_secs() -> u64 {
    DEFAULT_REMOTE_TIMEOUT_SECS
}

/// `TEAMCAL_DATA_DIR`, `TEAMCAL_REMOTE__DATABASE_URL`, ...
fn environment() -> Environment {
    Environment::with_prefix("TEAMCAL")
        .prefix_separator("_")
        .separator("__")
}

/// Configuration at ~/.config/teamcal/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamCalConfig {
    /// Where the local JSON documents live.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub rotation: RotationRule,

    /// Real-time mirror. Absent means local-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteSettings>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RemoteSettings {
    /// Base URL of the hosted database, e.g.
    /// `https://example-default-rtdb.firebaseio.com`.
    pub database_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TeamCalConfig {
    fn default() -> Self {
        TeamCalConfig {
            data_dir: default_data_dir(),
            rotation: RotationRule::default(),
            remote: None,
        }
    }
}

impl TeamCalConfig {
    pub fn config_path() -> TeamCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TeamCalError::Config("Could not determine config directory".into()))?
            .join("teamcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default path, writing a commented-out template first if
    /// none exists. `TEAMCAL_*` environment variables override file values.
    pub fn load() -> TeamCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> TeamCalResult<Self> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: &Path, env: Environment) -> TeamCalResult<Self> {
        let config: TeamCalConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| TeamCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TeamCalError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), remote = config.remote.is_some(), "loaded config");
        Ok(config)
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> TeamCalResult<()> {
        let contents = "\
# teamcal configuration

# Where the task list and calendar documents are stored:
# data_dir = \"~/.local/share/teamcal\"

# Person-of-the-month rule: \"calendar-month\" or \"elapsed-months\"
# rotation = \"calendar-month\"

# Real-time mirror, shared by everyone using the same database:
# [remote]
# database_url = \"https://example-default-rtdb.firebaseio.com\"
# timeout_secs = 10
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TeamCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TeamCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
