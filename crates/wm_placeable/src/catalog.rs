use bevy::prelude::*;
use wm_core::{TechCategory, TechGroup, TechType};

use crate::recipe::Recipe;

/// A buildable item as shown in the builder tool and the PDA.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub tech_type: TechType,
    pub name: String,
    pub description: String,
    pub icon: Handle<Image>,
    pub group: TechGroup,
    pub category: TechCategory,
    pub recipe: Recipe,
}

/// Registered buildables, in registration order.
#[derive(Resource, Debug, Default)]
pub struct BuildCatalog {
    entries: Vec<CatalogEntry>,
}

impl BuildCatalog {
    /// Add an entry, replacing any previous entry with the same tech type.
    pub fn register(&mut self, entry: CatalogEntry) {
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|e| e.tech_type == entry.tech_type)
        {
            *existing = entry;
        } else {
            self.entries.push(entry);
        }
    }

    pub fn get(&self, tech_type: &TechType) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| &e.tech_type == tech_type)
    }

    /// Entries shown under a builder tab.
    pub fn in_tab(
        &self,
        group: TechGroup,
        category: TechCategory,
    ) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(move |e| e.group == group && e.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
