use bevy::prelude::Resource;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::options::ModConfig;

/// Default location of the options file.
pub const DEFAULT_CONFIG_PATH: &str = "config/waymark.ron";

/// Error type for config I/O operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON serialization error: {0}")]
    Ron(#[from] ron::Error),
    #[error("RON parse error: {0}")]
    RonSpanned(#[from] ron::error::SpannedError),
}

/// Result of reading the options file at startup.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: ModConfig,
    /// Defaults were filled in, so the file should be written back.
    pub needs_save: bool,
}

/// Save the options to a RON file, creating the parent directory.
pub fn save_config(path: &Path, config: &ModConfig) -> Result<(), ConfigError> {
    let pretty_config = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .separate_tuple_members(true);

    let ron_string = ron::ser::to_string_pretty(config, pretty_config)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, ron_string)?;
    Ok(())
}

/// Load the options from a RON file.
pub fn load_config(path: &Path) -> Result<ModConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: ModConfig = ron::from_str(&contents)?;
    Ok(config)
}

/// Load the options file if it exists, otherwise start from defaults, then
/// add any missing arrow sections.
///
/// A file that exists but does not parse is an error; it is never silently
/// replaced.
pub fn load_or_default(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let (mut config, existed) = if path.exists() {
        (load_config(path)?, true)
    } else {
        (ModConfig::default(), false)
    };

    let added = config.ensure_arrow_sections();
    Ok(LoadedConfig {
        config,
        needs_save: added || !existed,
    })
}

/// Path of the options file, overridable before the config plugin is added.
#[derive(Resource, Clone, Debug)]
pub struct ConfigPath(pub PathBuf);

impl Default for ConfigPath {
    fn default() -> Self {
        Self(PathBuf::from(DEFAULT_CONFIG_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ArrowConfig;
    use tempfile::tempdir;
    use wm_core::{ArrowId, CellLevel};

    #[test]
    fn save_and_load_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("waymark.ron");

        let mut config = ModConfig::default();
        config.general.number_of_arrows = 2;
        config.general.cell_level = CellLevel::Far;
        config.ensure_arrow_sections();
        config.arrow_mut(ArrowId(2)).unwrap().intensity = 1.5;

        save_config(&path, &config).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_starts_from_defaults() {
        let dir = tempdir().unwrap();
        let loaded = load_or_default(&dir.path().join("absent.ron")).unwrap();
        assert!(loaded.needs_save);
        assert_eq!(loaded.config.general.number_of_arrows, 1);
        assert_eq!(
            loaded.config.arrow(ArrowId(1)),
            Some(&ArrowConfig::new(ArrowId(1)))
        );
    }

    #[test]
    fn partial_file_is_completed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("waymark.ron");
        fs::write(
            &path,
            "(general: (number_of_arrows: 2), arrows: { 1: (name: \"Left\", intensity: 2.0) })",
        )
        .unwrap();

        let loaded = load_or_default(&path).unwrap();
        assert!(loaded.needs_save);
        let first = loaded.config.arrow(ArrowId(1)).unwrap();
        assert_eq!(first.name, "Left");
        assert_eq!(first.intensity, 2.0);
        assert_eq!(first.place_max_distance, 5.0);
        assert_eq!(loaded.config.arrow(ArrowId(2)).unwrap().name, "Arrow 2");
    }

    #[test]
    fn complete_file_needs_no_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("waymark.ron");
        let mut config = ModConfig::default();
        config.ensure_arrow_sections();
        save_config(&path, &config).unwrap();

        let loaded = load_or_default(&path).unwrap();
        assert!(!loaded.needs_save);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("waymark.ron");
        fs::write(&path, "(general: [oops").unwrap();
        assert!(matches!(
            load_or_default(&path),
            Err(ConfigError::RonSpanned(_))
        ));
    }
}
