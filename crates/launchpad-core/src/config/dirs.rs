use crate::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Application directories following XDG spec
#[derive(Debug, Clone)]
pub struct Directories {
    /// Config directory (~/.config/launchpad)
    pub config: PathBuf,

    /// Data directory (~/.local/share/launchpad)
    pub data: PathBuf,

    /// Config file path
    pub config_file: PathBuf,

    /// Key-value store directory, one file per key
    pub store: PathBuf,
}

impl Directories {
    /// Create a new `Directories` instance with standard XDG paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the system's project directories cannot be determined
    /// (no home directory).
    pub fn new() -> Result<Self> {
        let project = ProjectDirs::from("", "", "launchpad").ok_or_else(|| {
            Error::Config("Failed to determine project directories".to_string())
        })?;

        let config = project.config_dir().to_path_buf();
        let data = project.data_dir().to_path_buf();

        Ok(Self {
            config_file: config.join("config.json"),
            store: data.join("storage"),
            config,
            data,
        })
    }

    /// Everything under one directory (tests, portable installs)
    #[must_use]
    pub fn with_base(base: PathBuf) -> Self {
        Self {
            config_file: base.join("config.json"),
            store: base.join("storage"),
            config: base.clone(),
            data: base,
        }
    }

    /// Keep the config location but move the data directory
    #[must_use]
    pub fn with_data_dir(mut self, data: PathBuf) -> Self {
        self.store = data.join("storage");
        self.data = data;
        self
    }

    /// Ensure all directories exist.
    ///
    /// # Errors
    ///
    /// Returns an error if any directory cannot be created.
    pub fn ensure_exists(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config)?;
        std::fs::create_dir_all(&self.data)?;
        std::fs::create_dir_all(&self.store)?;
        Ok(())
    }
}
