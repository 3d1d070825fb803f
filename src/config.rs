//! Updater settings and plan file loading
/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::{
    SETTINGS_FILE_NAME,
    load_from_dir,
    load_plan_file,
    load_settings_file,
};
pub use types::{
    ConfigError,
    UpdaterSettings,
    ValidationError,
};
