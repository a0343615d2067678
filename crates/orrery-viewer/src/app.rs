//! Bevy application setup

use bevy::prelude::*;
use orrery_scene::camera::pose_transform;
use orrery_scene::{MainCamera, NavigationPlugin, NavigationRig, TransitionFinished};
use tracing::{debug, info};

use crate::catalog::{spawn_objects, Catalog};
use crate::config::{Config, ObjectConfig};

/// Objects to spawn at startup
#[derive(Resource)]
struct SceneObjects(Vec<ObjectConfig>);

/// Build and run the viewer until the window closes
pub fn run(config: Config) -> AppExit {
    let mut window = Window {
        title: config.window.title.clone(),
        ..default()
    };
    window
        .resolution
        .set(config.window.width as f32, config.window.height as f32);

    let catalog = Catalog::from_objects(&config.objects);
    let hotkeys = catalog.hotkeys();

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.01, 0.01, 0.03)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(NavigationPlugin::new(
            config.navigation.clone(),
            config.camera.pose(),
        ))
        .insert_resource(hotkeys)
        .insert_resource(catalog)
        .insert_resource(SceneObjects(config.objects))
        .add_systems(Startup, (setup_scene, register_arrival_callback))
        .add_systems(Update, announce_arrivals)
        .run()
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    objects: Res<SceneObjects>,
    rig: Res<NavigationRig>,
) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 60.0_f32.to_radians(),
            far: 5000.0,
            ..default()
        }),
        pose_transform(rig.pose()),
        MainCamera,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 2000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(50.0, 100.0, 80.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    spawn_objects(&mut commands, &mut meshes, &mut materials, &objects.0);
}

fn register_arrival_callback(mut rig: ResMut<NavigationRig>) {
    rig.on_complete(|| debug!("Fly-to complete, orbit control restored"));
}

fn announce_arrivals(mut finished: MessageReader<TransitionFinished>, catalog: Res<Catalog>) {
    for TransitionFinished(id) in finished.read() {
        let name = catalog.name(id).unwrap_or(id.as_str());
        info!(target = %id, name, "Arrived");
    }
}
