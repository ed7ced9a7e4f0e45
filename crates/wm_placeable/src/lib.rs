//! Configurable arrow placeables.
//!
//! Every arrow configured in [`wm_config::ModConfig`] is cloned from one base
//! prefab, gets its own material and tinted catalog icon, and is registered
//! in the [`BuildCatalog`]. Option edits arrive as [`ArrowOptionChanged`]
//! events and are applied by a single handler.

use bevy::prelude::*;

pub mod catalog;
pub mod events;
pub mod icon;
pub mod prefab;
pub mod recipe;
pub mod register;
pub mod registry;
pub mod spawn;

pub use catalog::{BuildCatalog, CatalogEntry};
pub use events::{apply_arrow_option_changes, ArrowOptionChange, ArrowOptionChanged};
pub use icon::{build_icon, IconError};
pub use prefab::{
    ArrowModel, ArrowPrefab, ArrowTemplate, ModPaths, PlacedArrow, PrefabIdentifier,
    StreamingCell,
};
pub use recipe::{load_recipe, Ingredient, Recipe, RecipeError};
pub use register::register_arrows;
pub use registry::{ArrowEntry, ArrowRegistry};
pub use spawn::{spawn_arrow_instances, SpawnArrow};

/// Placeable plugin for Waymark.
/// Registers the arrows at startup and keeps them in sync with option edits.
/// Needs [`wm_config::WmConfigPlugin`] to be added first.
pub struct WmPlaceablePlugin;

impl Plugin for WmPlaceablePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ModPaths>()
            .init_resource::<ArrowRegistry>()
            .init_resource::<BuildCatalog>()
            .add_event::<ArrowOptionChanged>()
            .add_event::<SpawnArrow>()
            .add_systems(
                Startup,
                (prefab::load_arrow_prefab, register::register_arrows).chain(),
            )
            .add_systems(
                Update,
                (
                    events::apply_arrow_option_changes,
                    spawn::spawn_arrow_instances,
                )
                    .chain(),
            );
    }
}
