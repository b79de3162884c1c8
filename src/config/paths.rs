//! Path management for EduEasy
//!
//! ## Path Resolution Order
//!
//! 1. `EDUEASY_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/edueasy` or `~/.config/edueasy`
//! 3. Windows: `%APPDATA%\edueasy`

use std::path::PathBuf;

use crate::error::EduEasyError;

/// Manages all paths used by EduEasy
#[derive(Debug, Clone)]
pub struct EduEasyPaths {
    base_dir: PathBuf,
}

impl EduEasyPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, EduEasyError> {
        let base_dir = match std::env::var("EDUEASY_DATA_DIR") {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create EduEasyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/edueasy/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Holds the first-use timestamp; written once, never rewritten
    pub fn install_marker(&self) -> PathBuf {
        self.base_dir.join("install.json")
    }

    pub fn loans_file(&self) -> PathBuf {
        self.data_dir().join("loans.json")
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    pub fn goals_file(&self) -> PathBuf {
        self.data_dir().join("goals.json")
    }

    pub fn badges_file(&self) -> PathBuf {
        self.data_dir().join("badges.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), EduEasyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EduEasyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| EduEasyError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if EduEasy has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, EduEasyError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                EduEasyError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("edueasy"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, EduEasyError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| EduEasyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("edueasy"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EduEasyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.install_marker(), temp_dir.path().join("install.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EduEasyPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EduEasyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.loans_file(),
            temp_dir.path().join("data").join("loans.json")
        );
        assert_eq!(
            paths.goals_file(),
            temp_dir.path().join("data").join("goals.json")
        );
    }
}
