use bevy::prelude::*;
use bitflags::bitflags;

bitflags! {
    /// Surfaces and contexts a constructable object may be placed in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ConstructableFlags: u16 {
        const GROUND = 0b0000_0000_0001;
        const WALL = 0b0000_0000_0010;
        const CEILING = 0b0000_0000_0100;
        const BASE = 0b0000_0000_1000;
        const SUBMARINE = 0b0000_0001_0000;
        const OUTSIDE = 0b0000_0010_0000;
        const ALLOWED_ON_CONSTRUCTABLE = 0b0000_0100_0000;
        const ROTATABLE = 0b0000_1000_0000;
    }
}

impl ConstructableFlags {
    /// Every placement flag an arrow uses: it can go anywhere and be rotated.
    pub fn arrow() -> Self {
        Self::GROUND
            | Self::WALL
            | Self::CEILING
            | Self::BASE
            | Self::SUBMARINE
            | Self::OUTSIDE
            | Self::ALLOWED_ON_CONSTRUCTABLE
            | Self::ROTATABLE
    }
}

/// Marks an entity as player-placeable with the builder tool.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Constructable {
    pub flags: ConstructableFlags,
    pub place_default_distance: f32,
    pub place_max_distance: f32,
    pub force_upright: bool,
}

/// Box collider; a trigger collider can be walked through.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct BoxCollider {
    pub half_extents: Vec3,
    pub is_trigger: bool,
}

/// Interaction layer of a placed object.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CollisionLayer {
    #[default]
    Default,
    /// Reachable by the player's use/deconstruct ray but not solid.
    Useable,
}
