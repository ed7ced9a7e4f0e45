use serde::{Deserialize, Serialize};

/// Group tab of the builder tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TechGroup {
    #[default]
    BasePieces,
    ExteriorModules,
    InteriorPieces,
    InteriorModules,
    Miscellaneous,
}

impl TechGroup {
    pub fn all() -> &'static [TechGroup] {
        &[
            Self::BasePieces,
            Self::ExteriorModules,
            Self::InteriorPieces,
            Self::InteriorModules,
            Self::Miscellaneous,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BasePieces => "Base Pieces",
            Self::ExteriorModules => "Exterior Modules",
            Self::InteriorPieces => "Interior Pieces",
            Self::InteriorModules => "Interior Modules",
            Self::Miscellaneous => "Miscellaneous",
        }
    }
}

/// Category tab inside a builder group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TechCategory {
    #[default]
    BasePiece,
    BaseWall,
    ExteriorModule,
    ExteriorLight,
    ExteriorOther,
    InteriorPiece,
    InteriorRoom,
    InteriorModule,
    Misc,
}

impl TechCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BasePiece => "Base Piece",
            Self::BaseWall => "Base Wall",
            Self::ExteriorModule => "Exterior Module",
            Self::ExteriorLight => "Exterior Light",
            Self::ExteriorOther => "Exterior Other",
            Self::InteriorPiece => "Interior Piece",
            Self::InteriorRoom => "Interior Room",
            Self::InteriorModule => "Interior Module",
            Self::Misc => "Misc",
        }
    }
}

/// How far away a placed object stays loaded before the world streamer
/// unloads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellLevel {
    Near,
    #[default]
    Medium,
    Far,
    VeryFar,
    Batch,
    Global,
}

impl CellLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Near => "Near",
            Self::Medium => "Medium",
            Self::Far => "Far",
            Self::VeryFar => "Very Far",
            Self::Batch => "Batch",
            Self::Global => "Global",
        }
    }
}
