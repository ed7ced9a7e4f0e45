use bevy::prelude::*;
use std::collections::BTreeMap;
use wm_config::ArrowConfig;
use wm_core::{ArrowId, TechType};

/// Runtime state of one registered arrow.
#[derive(Debug, Clone)]
pub struct ArrowEntry {
    /// Live copy of the arrow's options; option events write here first.
    pub config: ArrowConfig,
    pub tech_type: TechType,
    /// Hidden template entity new placements are cloned from.
    pub template: Option<Entity>,
    /// Material shared by the template and every placed instance.
    pub material: Option<Handle<StandardMaterial>>,
    /// Catalog icon.
    pub icon: Handle<Image>,
}

impl ArrowEntry {
    pub fn new(id: ArrowId, config: ArrowConfig) -> Self {
        Self {
            config,
            tech_type: TechType::for_arrow(id),
            template: None,
            material: None,
            icon: Handle::default(),
        }
    }
}

/// Every registered arrow, keyed by id.
///
/// Owned by the app; systems that need to resolve an id reach it through
/// `Res<ArrowRegistry>`.
#[derive(Resource, Debug, Default)]
pub struct ArrowRegistry {
    entries: BTreeMap<ArrowId, ArrowEntry>,
}

impl ArrowRegistry {
    /// Insert or replace the entry for `id`.
    pub fn insert(&mut self, id: ArrowId, entry: ArrowEntry) -> Option<ArrowEntry> {
        self.entries.insert(id, entry)
    }

    pub fn get(&self, id: ArrowId) -> Option<&ArrowEntry> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: ArrowId) -> Option<&mut ArrowEntry> {
        self.entries.get_mut(&id)
    }

    pub fn contains(&self, id: ArrowId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ArrowId> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArrowId, &ArrowEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the arrow whose template is `entity`.
    pub fn by_template(&self, entity: Entity) -> Option<ArrowId> {
        self.entries
            .iter()
            .find(|(_, entry)| entry.template == Some(entity))
            .map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_ordered_by_id() {
        let mut registry = ArrowRegistry::default();
        for n in [3, 1, 2] {
            let id = ArrowId(n);
            registry.insert(id, ArrowEntry::new(id, ArrowConfig::new(id)));
        }
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, vec![ArrowId(1), ArrowId(2), ArrowId(3)]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn lookup_by_template() {
        let mut registry = ArrowRegistry::default();
        let id = ArrowId(4);
        let mut entry = ArrowEntry::new(id, ArrowConfig::new(id));
        let entity = Entity::from_raw(42);
        entry.template = Some(entity);
        registry.insert(id, entry);

        assert_eq!(registry.by_template(entity), Some(id));
        assert_eq!(registry.by_template(Entity::from_raw(7)), None);
        assert_eq!(registry.get(id).unwrap().tech_type.as_str(), "Arrow4");
    }
}
