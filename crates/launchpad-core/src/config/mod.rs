mod dirs;
mod settings;
mod validation;

pub use dirs::Directories;
pub use settings::{Config, DEFAULT_PLACEHOLDER_ICON, DisplayConfig, LaunchConfig, StorageConfig};
pub use validation::warn_unknown_fields;
