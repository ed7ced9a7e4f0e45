use bevy::prelude::*;
use wm_config::{ModConfig, WmConfigPlugin};
use wm_core::WmCorePlugin;
use wm_options::WmOptionsPlugin;
use wm_placeable::{
    register_arrows, ArrowOptionChanged, ArrowRegistry, BuildCatalog, SpawnArrow,
    WmPlaceablePlugin,
};

/// Spacing between the preview arrows along X.
const ARROW_SPACING: f32 = 1.5;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Waymark - Arrow Preview".into(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        // Plugins
        .add_plugins((
            WmCorePlugin,
            WmConfigPlugin,
            WmPlaceablePlugin,
            WmOptionsPlugin,
        ))
        .add_systems(Startup, setup_scene)
        .add_systems(Startup, place_preview_arrows.after(register_arrows))
        .add_systems(Update, log_option_changes)
        .run();
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ModConfig>,
) {
    let width = config.general.number_of_arrows as f32 * ARROW_SPACING;

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(width / 2.0, 3.0, 6.0).looking_at(Vec3::new(width / 2.0, 0.0, -2.0), Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(width + 10.0, 20.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.15, 0.18, 0.22))),
        Transform::from_xyz(width / 2.0, -0.3, -4.0),
    ));
}

/// Place one copy of every registered arrow so the options have something to act on.
fn place_preview_arrows(
    registry: Res<ArrowRegistry>,
    catalog: Res<BuildCatalog>,
    mut spawn_events: EventWriter<SpawnArrow>,
) {
    for id in registry.ids() {
        spawn_events.send(SpawnArrow {
            id,
            transform: Transform::from_xyz((id.0 as f32 - 1.0) * ARROW_SPACING, 0.0, 0.0),
        });
    }
    info!(
        "Preview ready: {} arrow(s), {} catalog entr(ies)",
        registry.len(),
        catalog.len()
    );
}

fn log_option_changes(mut events: EventReader<ArrowOptionChanged>) {
    for event in events.read() {
        info!("Arrow {}: {:?}", event.id, event.change);
    }
}
