use bevy::prelude::*;

pub mod catalog;
pub mod construct;
pub mod ids;
pub mod tint;

pub use catalog::{CellLevel, TechCategory, TechGroup};
pub use construct::{BoxCollider, CollisionLayer, Constructable, ConstructableFlags};
pub use ids::{ArrowId, Axis, TechType, BASE_PREFAB_CLASS_ID};
pub use tint::{recolor_icon, recolor_icon_in_place, Rgba, TintColor, TintError, TintableImage};

/// Core plugin providing the shared arrow types.
pub struct WmCorePlugin;

impl Plugin for WmCorePlugin {
    fn build(&self, _app: &mut App) {
        // Core types are used by other crates; no systems to register here.
    }
}
