use bevy::asset::LoadState;
use bevy::core_pipeline::Skybox;
use bevy::prelude::*;

use crate::constants::path::MANIFEST_PATH;
use crate::engine::assets::shoe_manifest::ShoeManifest;
use crate::engine::scene::shoe_model;

/// Handles for the session's one-shot loads. The part set is fixed once the
/// model resolves; nothing here changes after startup.
#[derive(Resource, Default)]
pub struct ConfiguratorAssets {
    pub manifest: Option<Handle<ShoeManifest>>,
    pub manifest_failed: bool,
    pub shoe_scene: Option<Handle<Scene>>,
}

impl ConfiguratorAssets {
    pub fn manifest_data<'a>(
        &self,
        manifests: &'a Assets<ShoeManifest>,
    ) -> Option<&'a ShoeManifest> {
        manifests.get(self.manifest.as_ref()?)
    }
}

/// Poll the manifest load and attach the model once it resolves.
///
/// Runs only while the app is in `AppState::Loading`. A failed manifest load
/// is reported once; the scene then simply never becomes interactive.
pub fn load_manifest_system(
    mut commands: Commands,
    mut assets: ResMut<ConfiguratorAssets>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<ShoeManifest>>,
    cameras: Query<Entity, With<Camera3d>>,
) {
    let Some(handle) = assets.manifest.clone() else {
        info!("Loading configurator manifest: {}", MANIFEST_PATH);
        assets.manifest = Some(asset_server.load(MANIFEST_PATH));
        return;
    };

    if assets.shoe_scene.is_some() || assets.manifest_failed {
        return;
    }

    if let LoadState::Failed(err) = asset_server.load_state(handle.id()) {
        error!("Failed to load configurator manifest: {}", err);
        assets.manifest_failed = true;
        return;
    }

    let Some(manifest) = manifests.get(&handle) else {
        return;
    };

    let scene_handle = shoe_model::spawn_shoe_model(&mut commands, &asset_server, manifest);
    assets.shoe_scene = Some(scene_handle);

    if let Some(skybox_path) = &manifest.skybox {
        if let Ok(camera_entity) = cameras.single() {
            commands.entity(camera_entity).insert(Skybox {
                image: asset_server.load(skybox_path.as_str()),
                brightness: 1000.0,
                rotation: Quat::IDENTITY,
            });
        }
    }
}
