//! Configuration file loading for expert-council
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COUNCIL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./council.toml` or `./.council.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/expert-council/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileClientConfig, FileConfig, FileExpertConfig, FileOutputConfig,
    FileOutputFormat, FileSessionConfig,
};
pub use loader::ConfigLoader;
