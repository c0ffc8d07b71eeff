use bevy::picking::mesh_picking::ray_cast::MeshRayCast;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::camera::ViewportCamera;
use crate::engine::scene::parts::PartName;
use crate::tools::pick::pick_part_under_cursor;
use crate::ui::color_menu::ColorMenuState;

/// The persistently selected part, if any. Set on click, survives hover
/// changes, cleared by clicking empty space.
#[derive(Resource, Default)]
pub struct SelectionState {
    pub selected: Option<(Entity, PartName)>,
}

impl SelectionState {
    pub fn part(&self) -> Option<PartName> {
        self.selected.map(|(_, part)| part)
    }
}

/// Fired whenever a click changes the selection (including clearing it).
#[derive(Event)]
pub struct SelectionChanged(pub Option<PartName>);

/// Camera framing requested by a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramingRequest {
    Part(PartName),
    Rest,
}

/// Outcome of resolving one click against the part set.
#[derive(Debug, PartialEq)]
pub struct SelectionUpdate {
    pub selected: Option<(Entity, PartName)>,
    pub framing: FramingRequest,
    pub menu_visible: bool,
}

/// Pure click transition: a hit on a named part becomes the selection and
/// frames it with the menu open; anything else clears the selection and
/// returns to the rest framing. Depends only on the hit, so clearing an
/// already-empty selection lands in the same state.
pub fn selection_transition(hit: Option<(Entity, PartName)>) -> SelectionUpdate {
    match hit {
        Some((entity, part)) => SelectionUpdate {
            selected: Some((entity, part)),
            framing: FramingRequest::Part(part),
            menu_visible: true,
        },
        None => SelectionUpdate {
            selected: None,
            framing: FramingRequest::Rest,
            menu_visible: false,
        },
    }
}

/// Resolve clicks against the part set and update selection, camera framing,
/// and menu visibility.
///
/// Clicks landing on the UI are ignored here so pressing a swatch cannot fall
/// through to the scene and clear the selection it is painting.
pub fn handle_part_selection(
    mut ray_cast: MeshRayCast,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Transform, &GlobalTransform, &Camera), With<Camera3d>>,
    parts: Query<&PartName>,
    ui_interactions: Query<&Interaction>,
    mut selection: ResMut<SelectionState>,
    mut viewport_camera: ResMut<ViewportCamera>,
    mut menu: ResMut<ColorMenuState>,
    mut changed: EventWriter<SelectionChanged>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    if ui_interactions
        .iter()
        .any(|interaction| *interaction != Interaction::None)
    {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera_local, camera_transform, camera)) = cameras.single() else {
        return;
    };

    let hit = window.cursor_position().and_then(|cursor_pos| {
        pick_part_under_cursor(&mut ray_cast, camera, camera_transform, cursor_pos, &parts)
    });

    if let Some(hit) = hit {
        info!(
            "Selected part: {} ({:.2} units from camera)",
            hit.part.as_str(),
            hit.distance
        );
    }

    let previous = selection.part();
    let update = selection_transition(hit.map(|hit| (hit.entity, hit.part)));

    match update.framing {
        FramingRequest::Part(part) => viewport_camera.frame_part(camera_local.translation, part),
        FramingRequest::Rest => viewport_camera.reset(camera_local.translation),
    }
    if update.menu_visible {
        menu.open();
    } else {
        menu.close();
    }
    selection.selected = update.selected;

    if selection.part() != previous {
        changed.write(SelectionChanged(selection.part()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::hover::hover_transition;

    fn entity(index: u32) -> Entity {
        Entity::from_raw(index)
    }

    #[test]
    fn test_part_click_selects_and_frames_it() {
        let update = selection_transition(Some((entity(1), PartName::Laces)));
        assert_eq!(update.selected, Some((entity(1), PartName::Laces)));
        assert_eq!(update.framing, FramingRequest::Part(PartName::Laces));
        assert!(update.menu_visible);
    }

    #[test]
    fn test_empty_click_clears_selection() {
        let update = selection_transition(None);
        assert_eq!(update.selected, None);
        assert_eq!(update.framing, FramingRequest::Rest);
        assert!(!update.menu_visible);
    }

    #[test]
    fn test_clearing_twice_matches_clearing_once() {
        let mut selection = SelectionState {
            selected: Some((entity(2), PartName::Inside)),
        };

        selection.selected = selection_transition(None).selected;
        let after_one = selection.part();
        selection.selected = selection_transition(None).selected;

        assert_eq!(after_one, None);
        assert_eq!(selection.part(), after_one);
        assert_eq!(selection_transition(None), selection_transition(None));
    }

    #[test]
    fn test_reselecting_switches_parts() {
        let mut selection = SelectionState::default();
        selection.selected = selection_transition(Some((entity(1), PartName::Laces))).selected;
        selection.selected = selection_transition(Some((entity(3), PartName::SoleTop))).selected;
        assert_eq!(selection.part(), Some(PartName::SoleTop));
    }

    #[test]
    fn test_selection_survives_hover_only_changes() {
        let selection = SelectionState {
            selected: Some((entity(1), PartName::Laces)),
        };

        // Sweep the hover across other parts, over the selected part, and
        // off the model. Hover updates only name emissive targets; the
        // selection is untouched throughout, including when the hovered part
        // is the selected one.
        let mut current = None;
        for hovered in [Some(entity(4)), Some(entity(1)), Some(entity(5)), None] {
            let update = hover_transition(current, hovered);
            assert_eq!(update.clear, current);
            assert_eq!(update.apply, hovered);
            current = hovered;
        }
        assert_eq!(selection.part(), Some(PartName::Laces));
    }
}
