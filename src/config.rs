use crate::core::errors::{Error, Result};
use crate::parse::SignalPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Document discovery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// File extensions treated as requirement documents
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns excluded from discovery
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore: Vec::new(),
        }
    }
}

/// Signal recognition settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// How lowercase-bearing bracket tokens are treated
    #[serde(default = "default_signal_case")]
    pub signal_case: SignalPolicy,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            signal_case: default_signal_case(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SigmapConfig {
    #[serde(default)]
    pub documents: DocumentConfig,

    #[serde(default)]
    pub policy: PolicyConfig,
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string()]
}

fn default_signal_case() -> SignalPolicy {
    SignalPolicy::Strict
}

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "sigmap.toml";

/// Load configuration. An explicit path must exist; otherwise
/// `./sigmap.toml` is used when present, else built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<SigmapConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(Error::Configuration(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let default = Path::new(CONFIG_FILE);
            if !default.is_file() {
                return Ok(SigmapConfig::default());
            }
            default.to_path_buf()
        }
    };

    let content = std::fs::read_to_string(&path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Configuration(format!("{}: {e}", path.display())))
}
