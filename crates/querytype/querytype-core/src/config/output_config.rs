use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// How the response document is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// `", "` / `": "` separators and ASCII-only escaping, matching
    /// Python's `json.dumps` defaults byte for byte.
    Python,
    /// `serde_json` compact output, UTF-8 left unescaped.
    Compact,
}

impl OutputStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Compact => "compact",
        }
    }
}

impl Default for OutputStyle {
    fn default() -> Self {
        defaults::DEFAULT_OUTPUT_STYLE
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "python" => Ok(Self::Python),
            "compact" => Ok(Self::Compact),
            other => Err(ConfigError::InvalidValue {
                field: "output.style".to_string(),
                message: format!("expected \"python\" or \"compact\", got \"{other}\""),
            }),
        }
    }
}

/// Output rendering configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub style: OutputStyle,
}
