//! Configuration parsing for the PMD tools.
//!
//! Settings come from an optional JSON file; command-line flags override
//! individual values.
//!
//! # Example config
//!
//! ```json
//! {
//!   "profile": "narrow",
//!   "log_level": "debug",
//!   "log_path": "/tmp/log",
//!   "log_json": true,
//!   "module_name": "pmd"
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

/// Field-width profile of the PMD wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// 32-bit timestamps and quantities, full message set.
    Narrow,
    /// 64-bit timestamps and quantities, no Seconds/OrderDeleted/BrokenTrade.
    #[default]
    Wide,
}

impl std::str::FromStr for ProfileKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "narrow" => Ok(Self::Narrow),
            "wide" => Ok(Self::Wide),
            other => Err(anyhow::anyhow!("unknown profile: {other}")),
        }
    }
}

impl std::fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Narrow => write!(f, "narrow"),
            Self::Wide => write!(f, "wide"),
        }
    }
}

/// Top-level application config, deserialized from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Wire profile (default: wide).
    #[serde(default)]
    pub profile: ProfileKind,

    /// Default log level when `RUST_LOG` is unset.
    pub log_level: Option<String>,

    /// Directory for rotating log files.
    pub log_path: Option<String>,

    /// Write file logs as JSON lines.
    #[serde(default)]
    pub log_json: bool,

    /// Log file prefix.
    pub module_name: Option<String>,
}

impl AppConfig {
    /// Returns the log level, defaulting to `"info"`.
    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    /// Returns the module name, defaulting to `"pmd"`.
    pub fn effective_module_name(&self) -> &str {
        self.module_name.as_deref().unwrap_or("pmd")
    }
}

/// Load and parse a JSON config file.
pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
