use bevy::prelude::*;
use std::path::PathBuf;
use wm_config::{ArrowConfig, ModConfig};
use wm_core::{
    ArrowId, BoxCollider, CellLevel, CollisionLayer, Constructable, ConstructableFlags, TechType,
};

/// Name of the child entity carrying the arrow's mesh and material.
pub const MODEL_NAME: &str = "model";

/// Mesh file of the base prefab, relative to the assets folder.
pub const MODEL_FILE: &str = "models/arrow.glb";

/// Where the add-on reads its files from.
#[derive(Resource, Clone, Debug)]
pub struct ModPaths {
    /// Folder holding icons, the model and the recipe.
    pub assets_dir: PathBuf,
}

impl Default for ModPaths {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl ModPaths {
    pub fn asset(&self, file: &str) -> PathBuf {
        self.assets_dir.join(file)
    }
}

/// The shared base prefab every arrow is cloned from.
#[derive(Resource, Clone, Debug)]
pub struct ArrowPrefab {
    pub tech_type: TechType,
    pub mesh: Handle<Mesh>,
    pub collider_half_extents: Vec3,
    pub cell_level: CellLevel,
}

/// Identifies which prefab an entity was built from.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct PrefabIdentifier {
    pub class_id: String,
    pub tech_type: TechType,
}

/// How far away the entity stays loaded.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct StreamingCell(pub CellLevel);

/// Hidden per-arrow template; new placements copy its state.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrowTemplate(pub ArrowId);

/// A placed arrow in the world.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedArrow(pub ArrowId);

/// Marker for the mesh child of an arrow.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ArrowModel;

/// Load the base prefab. Uses the packaged model when present and a plain
/// cone otherwise.
pub fn load_arrow_prefab(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    paths: Res<ModPaths>,
    config: Res<ModConfig>,
) {
    let mesh = if paths.asset(MODEL_FILE).exists() {
        asset_server.load(
            GltfAssetLabel::Primitive {
                mesh: 0,
                primitive: 0,
            }
            .from_asset(MODEL_FILE),
        )
    } else {
        warn!("{} not found, using a placeholder cone", MODEL_FILE);
        meshes.add(Cone {
            radius: 0.3,
            height: 0.6,
        })
    };

    commands.insert_resource(ArrowPrefab {
        tech_type: TechType::base_prefab(),
        mesh,
        collider_half_extents: Vec3::new(0.3, 0.3, 0.3),
        cell_level: config.general.cell_level,
    });
    info!("Registered base prefab {}", wm_core::BASE_PREFAB_CLASS_ID);
}

/// Collider trigger flag and layer for the hologram option.
pub fn hologram_state(is_hologram: bool) -> (bool, CollisionLayer) {
    if is_hologram {
        (true, CollisionLayer::Useable)
    } else {
        (false, CollisionLayer::Default)
    }
}

/// Make the collider walk-through (and useable) or solid.
pub fn apply_hologram(collider: &mut BoxCollider, layer: &mut CollisionLayer, is_hologram: bool) {
    let (is_trigger, new_layer) = hologram_state(is_hologram);
    collider.is_trigger = is_trigger;
    *layer = new_layer;
}

/// Push color and emission intensity into the arrow's material.
pub fn apply_color(material: &mut StandardMaterial, config: &ArrowConfig) {
    material.base_color = config.color();
    material.emissive = config.emissive();
}

/// Create the arrow's own material from its options.
pub fn arrow_material(config: &ArrowConfig) -> StandardMaterial {
    let mut material = StandardMaterial::default();
    apply_color(&mut material, config);
    material
}

/// Placement parameters for an arrow.
pub fn arrow_constructable(config: &ArrowConfig) -> Constructable {
    Constructable {
        flags: ConstructableFlags::arrow(),
        place_default_distance: config.place_default_distance,
        place_max_distance: config.place_max_distance,
        force_upright: config.force_upright,
    }
}

/// Spawn the hidden template of an arrow: a clone of the base prefab with
/// every option applied.
pub fn spawn_template(
    commands: &mut Commands,
    id: ArrowId,
    config: &ArrowConfig,
    prefab: &ArrowPrefab,
    material: Handle<StandardMaterial>,
) -> Entity {
    let (is_trigger, layer) = hologram_state(config.is_hologram);

    commands
        .spawn((
            Name::new(id.class_id()),
            ArrowTemplate(id),
            PrefabIdentifier {
                class_id: id.class_id(),
                tech_type: TechType::for_arrow(id),
            },
            StreamingCell(prefab.cell_level),
            arrow_constructable(config),
            BoxCollider {
                half_extents: prefab.collider_half_extents,
                is_trigger,
            },
            layer,
            Transform::from_scale(config.scale_vec()),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new(MODEL_NAME),
                ArrowModel,
                Mesh3d(prefab.mesh.clone()),
                MeshMaterial3d(material),
                Transform::default(),
            ));
        })
        .id()
}
