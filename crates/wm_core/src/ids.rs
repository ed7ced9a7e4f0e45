use serde::{Deserialize, Serialize};
use std::fmt;

/// Class id of the shared base prefab every arrow is cloned from.
pub const BASE_PREFAB_CLASS_ID: &str = "CustomArrowPrefab";

/// Prefix of each arrow's own tech type class id.
pub const ARROW_CLASS_PREFIX: &str = "Arrow";

/// Identifier of one configured arrow. Ids start at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrowId(pub u32);

impl ArrowId {
    /// Ids `1..=count`, in order.
    pub fn range(count: u32) -> impl Iterator<Item = ArrowId> {
        (1..=count).map(ArrowId)
    }

    /// Class id of the tech type registered for this arrow, e.g. `Arrow2`.
    pub fn class_id(&self) -> String {
        format!("{}{}", ARROW_CLASS_PREFIX, self.0)
    }
}

impl fmt::Display for ArrowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tech type identifier assigned to a registered prefab.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TechType(pub String);

impl TechType {
    pub fn for_arrow(id: ArrowId) -> Self {
        Self(id.class_id())
    }

    pub fn base_prefab() -> Self {
        Self(BASE_PREFAB_CLASS_ID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TechType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scale axis edited by one of the three scale sliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn all() -> &'static [Axis] {
        &[Self::X, Self::Y, Self::Z]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }

    /// Return `v` with this axis replaced by `value`.
    pub fn with(&self, v: [f32; 3], value: f32) -> [f32; 3] {
        let [x, y, z] = v;
        match self {
            Self::X => [value, y, z],
            Self::Y => [x, value, z],
            Self::Z => [x, y, value],
        }
    }

    pub fn get(&self, v: [f32; 3]) -> f32 {
        match self {
            Self::X => v[0],
            Self::Y => v[1],
            Self::Z => v[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_one_based() {
        let ids: Vec<_> = ArrowId::range(3).collect();
        assert_eq!(ids, vec![ArrowId(1), ArrowId(2), ArrowId(3)]);
        assert_eq!(ArrowId::range(0).count(), 0);
    }

    #[test]
    fn class_id_embeds_number() {
        assert_eq!(ArrowId(7).class_id(), "Arrow7");
        assert_eq!(TechType::for_arrow(ArrowId(7)).as_str(), "Arrow7");
    }

    #[test]
    fn axis_replaces_only_its_component() {
        let v = [1.0, 2.0, 3.0];
        assert_eq!(Axis::X.with(v, 9.0), [9.0, 2.0, 3.0]);
        assert_eq!(Axis::Y.with(v, 9.0), [1.0, 9.0, 3.0]);
        assert_eq!(Axis::Z.with(v, 9.0), [1.0, 2.0, 9.0]);
        assert_eq!(Axis::Z.get(v), 3.0);
    }
}
