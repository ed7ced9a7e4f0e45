use bevy::prelude::*;
use wm_config::{ArrowConfig, ModConfig};
use wm_core::ArrowId;

use crate::catalog::{BuildCatalog, CatalogEntry};
use crate::icon::build_icon;
use crate::prefab::{arrow_material, spawn_template, ArrowPrefab, ModPaths};
use crate::recipe::{load_recipe, Recipe, RECIPE_FILE};
use crate::registry::{ArrowEntry, ArrowRegistry};

/// Register every configured arrow: icon, material, template, catalog entry.
pub fn register_arrows(
    mut commands: Commands,
    config: Res<ModConfig>,
    prefab: Res<ArrowPrefab>,
    paths: Res<ModPaths>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    mut registry: ResMut<ArrowRegistry>,
    mut catalog: ResMut<BuildCatalog>,
) {
    let recipe = match load_recipe(&paths.asset(RECIPE_FILE)) {
        Ok(recipe) => recipe,
        Err(e) => {
            warn!("Failed to load {}: {}; arrows will cost nothing", RECIPE_FILE, e);
            Recipe::default()
        }
    };

    for id in config.arrow_ids() {
        let arrow_config = config
            .arrow(id)
            .cloned()
            .unwrap_or_else(|| ArrowConfig::new(id));

        let entry = register_arrow(
            &mut commands,
            id,
            arrow_config,
            &prefab,
            &paths,
            &mut materials,
            &mut images,
        );

        catalog.register(CatalogEntry {
            tech_type: entry.tech_type.clone(),
            name: entry.config.name.clone(),
            description: entry.config.description.clone(),
            icon: entry.icon.clone(),
            group: config.general.tech_group,
            category: config.general.tech_category,
            recipe: recipe.clone(),
        });

        info!("Registered {} ({})", entry.config.name, entry.tech_type);
        registry.insert(id, entry);
    }
}

/// Build the icon, material and template of one arrow.
pub fn register_arrow(
    commands: &mut Commands,
    id: ArrowId,
    config: ArrowConfig,
    prefab: &ArrowPrefab,
    paths: &ModPaths,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
) -> ArrowEntry {
    let icon = match build_icon(&paths.asset(&config.icon_file), &config) {
        Ok(image) => images.add(image),
        Err(e) => {
            warn!("Arrow {} has no catalog icon: {}", id, e);
            Handle::default()
        }
    };

    let material = materials.add(arrow_material(&config));
    let template = spawn_template(commands, id, &config, prefab, material.clone());

    let mut entry = ArrowEntry::new(id, config);
    entry.icon = icon;
    entry.material = Some(material);
    entry.template = Some(template);
    entry
}
