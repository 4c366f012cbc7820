use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
/// Default pause between Targets in batch mode.
pub const DEFAULT_PAUSE_MS: u64 = 1000;
/// Default User-Agent header value.
pub const DEFAULT_USER_AGENT: &str = concat!("wikitables/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("config file '{}' sets timeout_secs = 0; the timeout must be at least 1 second", path.display())]
    ZeroTimeout { path: PathBuf },
}

/// Settings for one run, optionally loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Request timeout in seconds (whole request, including connect).
    pub timeout_secs: u64,
    /// Value sent as the `User-Agent` header.
    pub user_agent: String,
    /// Pause after each processed Target in batch mode, in milliseconds.
    pub pause_ms: u64,
    /// Root under which per-Target directories are created. `None` = current dir.
    pub out_dir: Option<PathBuf>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pause_ms: DEFAULT_PAUSE_MS,
            out_dir: None,
        }
    }
}

/// Command-line values that take precedence over file values.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub pause_ms: Option<u64>,
    pub out_dir: Option<PathBuf>,
}

impl ScrapeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// Output root, falling back to `cwd` when none is configured.
    pub fn out_root(&self, cwd: &Path) -> PathBuf {
        self.out_dir.clone().unwrap_or_else(|| cwd.to_path_buf())
    }

    pub fn with_overrides(mut self, o: ConfigOverrides) -> Self {
        if let Some(t) = o.timeout_secs {
            self.timeout_secs = t;
        }
        if let Some(ua) = o.user_agent {
            self.user_agent = ua;
        }
        if let Some(p) = o.pause_ms {
            self.pause_ms = p;
        }
        if o.out_dir.is_some() {
            self.out_dir = o.out_dir;
        }
        self
    }
}

/// Load configuration from an explicit TOML file. Missing keys keep their defaults.
pub fn load_from_path(path: &Path) -> Result<ScrapeConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: ScrapeConfig = toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if cfg.timeout_secs == 0 {
        return Err(ConfigError::ZeroTimeout {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}
