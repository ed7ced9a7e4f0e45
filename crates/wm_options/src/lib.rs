use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod options_ui;

pub use options_ui::{OptionsUiState, TOGGLE_KEY};

/// Options plugin for Waymark.
/// Provides the egui panel that edits the persisted options and forwards
/// every edit as an option-change event.
pub struct WmOptionsPlugin;

impl Plugin for WmOptionsPlugin {
    fn build(&self, app: &mut App) {
        // Only add EguiPlugin if not already added
        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin);
        }

        app.init_resource::<OptionsUiState>().add_systems(
            Update,
            (
                options_ui::toggle_options_panel,
                options_ui::options_ui_system,
            )
                .chain()
                .before(wm_placeable::apply_arrow_option_changes),
        );
    }
}
