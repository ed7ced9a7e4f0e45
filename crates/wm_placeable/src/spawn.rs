use bevy::prelude::*;
use wm_core::{ArrowId, BoxCollider, CollisionLayer, Constructable};

use crate::prefab::{
    ArrowModel, ArrowPrefab, ArrowTemplate, PlacedArrow, PrefabIdentifier, StreamingCell,
    MODEL_NAME,
};
use crate::registry::ArrowRegistry;

/// Request to place a copy of an arrow.
#[derive(Event, Clone, Copy, Debug)]
pub struct SpawnArrow {
    pub id: ArrowId,
    /// Placement position and rotation; scale comes from the template.
    pub transform: Transform,
}

/// Rotation kept when the arrow must stand upright: yaw only.
pub fn upright_rotation(rotation: Quat) -> Quat {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    Quat::from_rotation_y(yaw)
}

/// Spawn placed arrows from their templates.
pub fn spawn_arrow_instances(
    mut commands: Commands,
    mut events: EventReader<SpawnArrow>,
    registry: Res<ArrowRegistry>,
    prefab: Res<ArrowPrefab>,
    templates: Query<
        (
            &PrefabIdentifier,
            &StreamingCell,
            &Constructable,
            &BoxCollider,
            &CollisionLayer,
            &Transform,
        ),
        With<ArrowTemplate>,
    >,
) {
    for event in events.read() {
        let Some(entry) = registry.get(event.id) else {
            warn!("Cannot place unknown arrow {}", event.id);
            continue;
        };
        let Some((identifier, cell, constructable, collider, layer, template_transform)) = entry
            .template
            .and_then(|entity| templates.get(entity).ok())
        else {
            warn!("Arrow {} has no template yet", event.id);
            continue;
        };
        let Some(material) = entry.material.clone() else {
            continue;
        };

        let mut transform = event.transform;
        transform.scale = template_transform.scale;
        if constructable.force_upright {
            transform.rotation = upright_rotation(transform.rotation);
        }

        let entity = commands
            .spawn((
                Name::new(format!("{} (placed)", entry.config.name)),
                PlacedArrow(event.id),
                identifier.clone(),
                *cell,
                constructable.clone(),
                *collider,
                *layer,
                transform,
                Visibility::Visible,
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
            .id();

        debug!("Placed arrow {} as {:?}", event.id, entity);
    }
}
