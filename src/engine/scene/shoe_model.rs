use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::engine::assets::shoe_manifest::ShoeManifest;
use crate::engine::core::app_state::AppState;
use crate::engine::scene::parts::PartName;

/// Root of the spawned shoe gltf scene.
#[derive(Component)]
pub struct ShoeModel;

/// Spawn the shoe scene with the manifest's fixed orientation and uniform
/// scale. The attached observer flips the app into `Running` once the scene
/// instance is ready.
pub fn spawn_shoe_model(
    commands: &mut Commands,
    asset_server: &AssetServer,
    manifest: &ShoeManifest,
) -> Handle<Scene> {
    info!("Loading shoe model: {}", manifest.model.scene_path);

    let scene_handle: Handle<Scene> =
        asset_server.load(GltfAssetLabel::Scene(0).from_asset(manifest.model.scene_path.clone()));

    commands
        .spawn((
            SceneRoot(scene_handle.clone()),
            Transform::from_rotation(Quat::from_rotation_y(manifest.model.yaw_degrees.to_radians()))
                .with_scale(Vec3::splat(manifest.model.scale)),
            ShoeModel,
        ))
        .observe(on_shoe_scene_ready);

    scene_handle
}

fn on_shoe_scene_ready(_trigger: Trigger<SceneInstanceReady>, mut next: ResMut<NextState<AppState>>) {
    info!("Shoe model ready, scene is now interactive");
    next.set(AppState::Running);
}

/// One-time post-load pass over freshly spawned meshes.
///
/// Every mesh gets its own plain white standard material so recoloring one
/// part never bleeds into another (gltf primitives may share materials), and
/// entities whose name matches the part set are tagged with `PartName`.
pub fn tag_shoe_meshes(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    new_meshes: Query<(Entity, Option<&Name>, Option<&ChildOf>), Added<Mesh3d>>,
    names: Query<&Name>,
) {
    for (entity, name, child_of) in &new_meshes {
        let material = materials.add(StandardMaterial {
            base_color: Color::WHITE,
            ..default()
        });
        commands.entity(entity).insert(MeshMaterial3d(material));

        if let Some(name) = name {
            info!("Scene node: {}", name.as_str());
        }

        // Part names may sit on the primitive entity itself or on the gltf
        // node above it, depending on how the asset was authored.
        let direct = name.and_then(|n| PartName::from_mesh_name(n.as_str()));
        let inherited = child_of
            .and_then(|child_of| names.get(child_of.parent()).ok())
            .and_then(|n| PartName::from_mesh_name(n.as_str()));

        if let Some(part) = direct.or(inherited) {
            commands.entity(entity).insert(part);
            info!("Tagged customizable part: {}", part.as_str());
        }
    }
}
