use bevy::prelude::*;
use wm_config::ArrowConfig;
use wm_core::{ArrowId, Axis, BoxCollider, CollisionLayer, Constructable};

use crate::prefab::{apply_color, apply_hologram, ArrowTemplate};
use crate::registry::ArrowRegistry;

/// A single option edit for one arrow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArrowOptionChange {
    Color(Color),
    Intensity(f32),
    Scale { axis: Axis, value: f32 },
    PlaceDefaultDistance(f32),
    PlaceMaxDistance(f32),
    ForceUpright(bool),
    Hologram(bool),
}

impl ArrowOptionChange {
    /// Write the new value into an arrow's options.
    pub fn apply_to_config(&self, config: &mut ArrowConfig) {
        match *self {
            Self::Color(color) => config.set_color(color),
            Self::Intensity(value) => config.intensity = value,
            Self::Scale { axis, value } => config.scale = axis.with(config.scale, value),
            Self::PlaceDefaultDistance(value) => config.place_default_distance = value,
            Self::PlaceMaxDistance(value) => config.place_max_distance = value,
            Self::ForceUpright(value) => config.force_upright = value,
            Self::Hologram(value) => config.is_hologram = value,
        }
    }
}

/// Fired when an option of a registered arrow is edited.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct ArrowOptionChanged {
    pub id: ArrowId,
    pub change: ArrowOptionChange,
}

impl ArrowOptionChanged {
    pub fn new(id: ArrowId, change: ArrowOptionChange) -> Self {
        Self { id, change }
    }
}

/// Apply option edits to the registry and to the live objects of the
/// targeted arrow.
///
/// Color and intensity update the shared material, so they show on placed
/// arrows right away. Everything else goes to the template and only affects
/// later placements.
pub fn apply_arrow_option_changes(
    mut events: EventReader<ArrowOptionChanged>,
    mut registry: ResMut<ArrowRegistry>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut templates: Query<
        (
            &mut Constructable,
            &mut BoxCollider,
            &mut CollisionLayer,
            &mut Transform,
        ),
        With<ArrowTemplate>,
    >,
) {
    for event in events.read() {
        let Some(entry) = registry.get_mut(event.id) else {
            warn!("Option change for unknown arrow {}: {:?}", event.id, event.change);
            continue;
        };

        event.change.apply_to_config(&mut entry.config);

        if let ArrowOptionChange::Color(_) | ArrowOptionChange::Intensity(_) = event.change {
            if let Some(material) = entry
                .material
                .as_ref()
                .and_then(|handle| materials.get_mut(handle))
            {
                apply_color(material, &entry.config);
            }
            continue;
        }

        let Some((mut constructable, mut collider, mut layer, mut transform)) = entry
            .template
            .and_then(|entity| templates.get_mut(entity).ok())
        else {
            continue;
        };

        match event.change {
            ArrowOptionChange::Scale { .. } => transform.scale = entry.config.scale_vec(),
            ArrowOptionChange::PlaceDefaultDistance(value) => {
                constructable.place_default_distance = value
            }
            ArrowOptionChange::PlaceMaxDistance(value) => constructable.place_max_distance = value,
            ArrowOptionChange::ForceUpright(value) => constructable.force_upright = value,
            ArrowOptionChange::Hologram(value) => {
                apply_hologram(&mut collider, &mut layer, value)
            }
            ArrowOptionChange::Color(_) | ArrowOptionChange::Intensity(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefab::{arrow_material, spawn_template, ArrowPrefab};
    use crate::registry::ArrowEntry;
    use bevy::ecs::system::RunSystemOnce;
    use wm_core::{CellLevel, TechType};

    fn test_app(ids: &[u32]) -> App {
        let mut app = App::new();
        app.init_resource::<Assets<StandardMaterial>>()
            .init_resource::<ArrowRegistry>()
            .add_event::<ArrowOptionChanged>()
            .add_systems(Update, apply_arrow_option_changes);

        let prefab = ArrowPrefab {
            tech_type: TechType::base_prefab(),
            mesh: Handle::default(),
            collider_half_extents: Vec3::splat(0.3),
            cell_level: CellLevel::Medium,
        };

        for &n in ids {
            let id = ArrowId(n);
            let config = ArrowConfig::new(id);
            let material = app
                .world_mut()
                .resource_mut::<Assets<StandardMaterial>>()
                .add(arrow_material(&config));
            let template = app
                .world_mut()
                .run_system_once({
                    let config = config.clone();
                    let prefab = prefab.clone();
                    let material = material.clone();
                    move |mut commands: Commands| {
                        spawn_template(&mut commands, id, &config, &prefab, material.clone())
                    }
                })
                .unwrap();

            let mut entry = ArrowEntry::new(id, config);
            entry.template = Some(template);
            entry.material = Some(material);
            app.world_mut().resource_mut::<ArrowRegistry>().insert(id, entry);
        }
        app
    }

    fn send(app: &mut App, id: u32, change: ArrowOptionChange) {
        app.world_mut()
            .send_event(ArrowOptionChanged::new(ArrowId(id), change));
        app.update();
    }

    fn template(app: &App, id: u32) -> Entity {
        app.world()
            .resource::<ArrowRegistry>()
            .get(ArrowId(id))
            .unwrap()
            .template
            .unwrap()
    }

    fn material(app: &App, id: u32) -> StandardMaterial {
        let registry = app.world().resource::<ArrowRegistry>();
        let handle = registry.get(ArrowId(id)).unwrap().material.clone().unwrap();
        app.world()
            .resource::<Assets<StandardMaterial>>()
            .get(&handle)
            .unwrap()
            .clone()
    }

    #[test]
    fn hologram_change_updates_template_collider() {
        let mut app = test_app(&[1]);
        send(&mut app, 1, ArrowOptionChange::Hologram(true));

        let entity = template(&app, 1);
        let collider = app.world().get::<BoxCollider>(entity).unwrap();
        assert!(collider.is_trigger);
        assert_eq!(
            app.world().get::<CollisionLayer>(entity),
            Some(&CollisionLayer::Useable)
        );

        send(&mut app, 1, ArrowOptionChange::Hologram(false));
        assert!(!app.world().get::<BoxCollider>(entity).unwrap().is_trigger);
        assert_eq!(
            app.world().get::<CollisionLayer>(entity),
            Some(&CollisionLayer::Default)
        );
    }

    #[test]
    fn color_and_intensity_update_material() {
        let mut app = test_app(&[1]);
        send(
            &mut app,
            1,
            ArrowOptionChange::Color(Color::srgba(1.0, 0.0, 0.0, 1.0)),
        );
        send(&mut app, 1, ArrowOptionChange::Intensity(3.0));

        let mat = material(&app, 1);
        assert_eq!(mat.base_color, Color::srgba(1.0, 0.0, 0.0, 1.0));
        assert!((mat.emissive.red - 8.0).abs() < 1e-4);
        assert_eq!(mat.emissive.green, 0.0);

        let registry = app.world().resource::<ArrowRegistry>();
        let config = &registry.get(ArrowId(1)).unwrap().config;
        assert_eq!(config.color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(config.intensity, 3.0);
    }

    #[test]
    fn scale_change_keeps_other_axes() {
        let mut app = test_app(&[1]);
        send(
            &mut app,
            1,
            ArrowOptionChange::Scale {
                axis: Axis::Y,
                value: 2.5,
            },
        );
        send(
            &mut app,
            1,
            ArrowOptionChange::Scale {
                axis: Axis::Z,
                value: 0.5,
            },
        );

        let transform = app.world().get::<Transform>(template(&app, 1)).unwrap();
        assert_eq!(transform.scale, Vec3::new(1.0, 2.5, 0.5));
    }

    #[test]
    fn placement_changes_update_constructable() {
        let mut app = test_app(&[1]);
        send(&mut app, 1, ArrowOptionChange::PlaceDefaultDistance(7.0));
        send(&mut app, 1, ArrowOptionChange::PlaceMaxDistance(20.0));
        send(&mut app, 1, ArrowOptionChange::ForceUpright(true));

        let constructable = app
            .world()
            .get::<Constructable>(template(&app, 1))
            .unwrap();
        assert_eq!(constructable.place_default_distance, 7.0);
        assert_eq!(constructable.place_max_distance, 20.0);
        assert!(constructable.force_upright);
    }

    #[test]
    fn change_targets_only_its_arrow() {
        let mut app = test_app(&[1, 2]);
        send(&mut app, 2, ArrowOptionChange::Hologram(true));

        assert!(!app.world().get::<BoxCollider>(template(&app, 1)).unwrap().is_trigger);
        assert!(app.world().get::<BoxCollider>(template(&app, 2)).unwrap().is_trigger);
    }

    #[test]
    fn unknown_arrow_is_ignored() {
        let mut app = test_app(&[1]);
        send(&mut app, 9, ArrowOptionChange::Hologram(true));

        let registry = app.world().resource::<ArrowRegistry>();
        assert_eq!(registry.len(), 1);
        assert!(!registry.get(ArrowId(1)).unwrap().config.is_hologram);
        assert!(!app.world().get::<BoxCollider>(template(&app, 1)).unwrap().is_trigger);
    }

    #[test]
    fn entry_without_template_only_updates_config() {
        let mut app = test_app(&[]);
        let id = ArrowId(5);
        app.world_mut()
            .resource_mut::<ArrowRegistry>()
            .insert(id, ArrowEntry::new(id, ArrowConfig::new(id)));

        send(&mut app, 5, ArrowOptionChange::ForceUpright(true));
        send(&mut app, 5, ArrowOptionChange::Intensity(1.0));

        let registry = app.world().resource::<ArrowRegistry>();
        let config = &registry.get(id).unwrap().config;
        assert!(config.force_upright);
        assert_eq!(config.intensity, 1.0);
    }
}
