use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_common_assets::json::JsonAssetPlugin;

mod constants;
mod engine;
mod rpc;
mod tools;
mod ui;

use crate::constants::render_settings::{
    POINT_LIGHT_INTENSITY, POINT_LIGHT_POSITION, REST_CAMERA_POSITION,
};
use crate::engine::assets::configurator_assets::{ConfiguratorAssets, load_manifest_system};
use crate::engine::assets::shoe_manifest::ShoeManifest;
use crate::engine::camera::{ViewportCamera, camera_controller};
use crate::engine::core::app_state::AppState;
use crate::engine::scene::shoe_model::tag_shoe_meshes;
use crate::rpc::web_rpc::StorefrontRpcPlugin;
use crate::tools::hover::{HoverState, hover_highlight_system};
use crate::tools::order::{OrderPlaced, OrderRequested, place_order};
use crate::tools::paint::{ColorChosen, apply_chosen_color};
use crate::tools::select::{SelectionChanged, SelectionState, handle_part_selection};
use crate::ui::color_menu::{
    ColorMenuState, animate_color_menu, handle_swatch_interaction, setup_color_menu,
};
use crate::ui::order_panel::{handle_order_button, setup_order_panel, update_order_panel};

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}

fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(JsonAssetPlugin::<ShoeManifest>::new(&["json"]))
        .add_plugins(StorefrontRpcPlugin);

    app.init_state::<AppState>()
        .init_resource::<ConfiguratorAssets>()
        .init_resource::<ViewportCamera>()
        .init_resource::<HoverState>()
        .init_resource::<SelectionState>()
        .init_resource::<ColorMenuState>()
        .add_event::<SelectionChanged>()
        .add_event::<ColorChosen>()
        .add_event::<OrderRequested>()
        .add_event::<OrderPlaced>()
        .add_systems(Startup, setup)
        .add_systems(OnEnter(AppState::Running), (setup_color_menu, setup_order_panel))
        .add_systems(
            Update,
            (
                load_manifest_system.run_if(in_state(AppState::Loading)),
                tag_shoe_meshes,
                camera_controller,
                animate_color_menu,
            ),
        )
        .add_systems(
            Update,
            (
                hover_highlight_system,
                handle_part_selection,
                handle_swatch_interaction,
                handle_order_button,
                apply_chosen_color,
                place_order,
                update_order_panel,
            )
                .run_if(in_state(AppState::Running)),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Shoe Configurator".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

/// Camera and lighting; the model and skybox follow once the manifest loads.
fn setup(mut commands: Commands) {
    println!("=== SHOE CONFIGURATOR ===");

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(REST_CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        PointLight {
            intensity: POINT_LIGHT_INTENSITY,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(POINT_LIGHT_POSITION),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 150.0,
        ..default()
    });
}
