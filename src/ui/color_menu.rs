use bevy::prelude::*;

use crate::constants::render_settings::{
    MENU_HIDDEN_BOTTOM_PX, MENU_SLIDE_DURATION, MENU_VISIBLE_BOTTOM_PX,
};
use crate::engine::assets::configurator_assets::ConfiguratorAssets;
use crate::engine::assets::shoe_manifest::ShoeManifest;
use crate::engine::tween::Tween;
use crate::tools::paint::ColorChosen;

#[derive(Component)]
pub struct ColorMenuRoot;

/// Palette colour carried by one swatch button.
#[derive(Component)]
pub struct ColorSwatch(pub Color);

/// Menu visibility as a tweened bottom offset, hidden below the viewport
/// edge when nothing is selected. Open/close mid-slide retargets from the
/// current offset.
#[derive(Resource)]
pub struct ColorMenuState {
    offset: f32,
    tween: Option<Tween<f32>>,
}

impl Default for ColorMenuState {
    fn default() -> Self {
        Self {
            offset: MENU_HIDDEN_BOTTOM_PX,
            tween: None,
        }
    }
}

impl ColorMenuState {
    pub fn open(&mut self) {
        self.tween = Some(Tween::new(
            self.offset,
            MENU_VISIBLE_BOTTOM_PX,
            MENU_SLIDE_DURATION,
        ));
    }

    pub fn close(&mut self) {
        self.tween = Some(Tween::new(
            self.offset,
            MENU_HIDDEN_BOTTOM_PX,
            MENU_SLIDE_DURATION,
        ));
    }

    pub fn is_visible(&self) -> bool {
        self.offset > MENU_HIDDEN_BOTTOM_PX
    }
}

/// Build the swatch bar from the manifest palette once the scene is running.
pub fn setup_color_menu(
    mut commands: Commands,
    assets: Res<ConfiguratorAssets>,
    manifests: Res<Assets<ShoeManifest>>,
) {
    let Some(manifest) = assets.manifest_data(&manifests) else {
        warn!("Colour menu built without a manifest, no swatches available");
        return;
    };

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(MENU_HIDDEN_BOTTOM_PX),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(8.0),
                padding: UiRect::all(Val::Px(12.0)),
                ..default()
            },
            ColorMenuRoot,
        ))
        .with_children(|parent| {
            for color in manifest.palette_colors() {
                parent.spawn((
                    Button,
                    Node {
                        width: Val::Px(42.0),
                        height: Val::Px(42.0),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(color),
                    BorderColor(Color::WHITE),
                    ColorSwatch(color),
                ));
            }
        });
}

/// Slide the menu toward its current visibility target.
pub fn animate_color_menu(
    time: Res<Time>,
    mut menu: ResMut<ColorMenuState>,
    mut roots: Query<&mut Node, With<ColorMenuRoot>>,
) {
    let Some(tween) = menu.tween.as_mut() else {
        return;
    };
    let offset = tween.tick(time.delta_secs());
    let done = tween.finished();

    menu.offset = offset;
    if done {
        menu.tween = None;
    }
    for mut node in &mut roots {
        node.bottom = Val::Px(offset);
    }
}

/// Turn swatch presses into colour-chosen events. Presses that land while the
/// menu is still hidden below the viewport edge are ignored.
pub fn handle_swatch_interaction(
    menu: Res<ColorMenuState>,
    interactions: Query<(&Interaction, &ColorSwatch), (Changed<Interaction>, With<Button>)>,
    mut chosen: EventWriter<ColorChosen>,
) {
    if !menu.is_visible() {
        return;
    }
    for (interaction, swatch) in &interactions {
        if *interaction == Interaction::Pressed {
            chosen.write(ColorChosen(swatch.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_hidden() {
        let menu = ColorMenuState::default();
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_open_then_close_returns_to_hidden() {
        let mut menu = ColorMenuState::default();
        menu.open();
        let offset = menu.tween.as_mut().unwrap().tick(MENU_SLIDE_DURATION);
        menu.offset = offset;
        assert_eq!(offset, MENU_VISIBLE_BOTTOM_PX);
        assert!(menu.is_visible());

        menu.close();
        let offset = menu.tween.as_mut().unwrap().tick(MENU_SLIDE_DURATION);
        menu.offset = offset;
        assert_eq!(offset, MENU_HIDDEN_BOTTOM_PX);
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_reopen_mid_slide_starts_from_current_offset() {
        let mut menu = ColorMenuState::default();
        menu.open();
        menu.offset = menu.tween.as_mut().unwrap().tick(MENU_SLIDE_DURATION * 0.25);
        let partial = menu.offset;
        assert!(partial > MENU_HIDDEN_BOTTOM_PX && partial < MENU_VISIBLE_BOTTOM_PX);

        menu.close();
        // First instant of the close tween must continue from where the open
        // animation left off, not snap to either end.
        let first = menu.tween.as_mut().unwrap().tick(0.0);
        assert_eq!(first, partial);
    }
}
