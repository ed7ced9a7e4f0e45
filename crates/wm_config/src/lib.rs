use bevy::prelude::*;

pub mod config_io;
pub mod options;

pub use config_io::{
    load_config, load_or_default, save_config, ConfigError, ConfigPath, LoadedConfig,
    DEFAULT_CONFIG_PATH,
};
pub use options::{
    ArrowConfig, GeneralConfig, ModConfig, SliderRange, ARROW_COUNT_RANGE, ICON_ALPHA_RANGE,
    INTENSITY_RANGE, PLACE_DEFAULT_DISTANCE_RANGE, PLACE_MAX_DISTANCE_RANGE, SCALE_RANGE,
};

/// Config plugin for Waymark.
/// Loads the persisted options at build time and writes them back whenever
/// they change.
pub struct WmConfigPlugin;

impl Plugin for WmConfigPlugin {
    fn build(&self, app: &mut App) {
        let path = app
            .world()
            .get_resource::<ConfigPath>()
            .cloned()
            .unwrap_or_default();

        let config = match load_or_default(&path.0) {
            Ok(loaded) => {
                if loaded.needs_save {
                    match save_config(&path.0, &loaded.config) {
                        Ok(()) => info!("Wrote default options to {}", path.0.display()),
                        Err(e) => error!("Failed to write options to {}: {}", path.0.display(), e),
                    }
                }
                loaded.config
            }
            Err(e) => {
                error!(
                    "Failed to read options from {}: {}; using defaults",
                    path.0.display(),
                    e
                );
                let mut config = ModConfig::default();
                config.ensure_arrow_sections();
                config
            }
        };

        info!("Loaded options for {} arrow(s)", config.general.number_of_arrows);

        app.insert_resource(path)
            .insert_resource(config)
            .add_systems(Last, save_config_on_change);
    }
}

/// Persist the options the frame after they were edited.
pub fn save_config_on_change(config: Res<ModConfig>, path: Res<ConfigPath>) {
    if !config.is_changed() || config.is_added() {
        return;
    }

    if let Err(e) = save_config(&path.0, &config) {
        error!("Failed to save options to {}: {}", path.0.display(), e);
    }
}
