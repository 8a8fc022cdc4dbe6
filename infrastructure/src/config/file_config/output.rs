//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// How the session is reported on stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    /// Transcript lines as they are produced
    #[default]
    Text,
    /// Transcript lines, then the full transcript as JSON
    Json,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: FileOutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress bars while calls are in flight
    pub show_progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: FileOutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}
