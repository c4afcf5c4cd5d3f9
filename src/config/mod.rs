//! Configuration module for Berth
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BERTH_*)
//! 3. Project config (.berth/config.toml) or `--config PATH`
//! 4. User config (~/.config/berth/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_file, ConfigWarning, LoadedConfig, PROJECT_CONFIG};
pub use types::{
    AnimationMode, ClusterConfig, ColorMode, Config, GeneratedConfig, OutputConfig, Verbosity,
};
