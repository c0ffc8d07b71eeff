use bevy::picking::mesh_picking::ray_cast::MeshRayCast;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::render_settings::{HOVER_EMISSIVE, NEUTRAL_EMISSIVE};
use crate::engine::scene::parts::PartName;
use crate::tools::pick::pick_part_under_cursor;

/// At most one currently hovered part. Holds a lookup key into the scene,
/// never ownership of the mesh.
#[derive(Resource, Default)]
pub struct HoverState {
    pub hovered: Option<Entity>,
}

/// Material changes required to move the highlight from one target to another.
#[derive(Debug, PartialEq, Eq)]
pub struct HoverUpdate {
    pub clear: Option<Entity>,
    pub apply: Option<Entity>,
}

/// Pure hover transition: unchanged targets touch nothing, otherwise the old
/// highlight is cleared and the new one applied. Exactly one part can carry
/// the highlight at a time.
pub fn hover_transition(current: Option<Entity>, hit: Option<Entity>) -> HoverUpdate {
    if current == hit {
        return HoverUpdate {
            clear: None,
            apply: None,
        };
    }
    HoverUpdate {
        clear: current,
        apply: hit,
    }
}

/// Recompute the hovered part every frame and keep the emissive highlight
/// consistent with it.
pub fn hover_highlight_system(
    mut ray_cast: MeshRayCast,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    parts: Query<&PartName>,
    material_handles: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut hover: ResMut<HoverState>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera_transform, camera)) = cameras.single() else {
        return;
    };

    let hit = window.cursor_position().and_then(|cursor_pos| {
        pick_part_under_cursor(&mut ray_cast, camera, camera_transform, cursor_pos, &parts)
    });

    let update = hover_transition(hover.hovered, hit.map(|h| h.entity));
    if let Some(previous) = update.clear {
        set_emissive(previous, NEUTRAL_EMISSIVE, &material_handles, &mut materials);
    }
    if let Some(next) = update.apply {
        set_emissive(next, HOVER_EMISSIVE, &material_handles, &mut materials);
    }
    hover.hovered = hit.map(|h| h.entity);
}

fn set_emissive(
    entity: Entity,
    emissive: LinearRgba,
    material_handles: &Query<&MeshMaterial3d<StandardMaterial>>,
    materials: &mut Assets<StandardMaterial>,
) {
    let Ok(handle) = material_handles.get(entity) else {
        return;
    };
    let Some(material) = materials.get_mut(&handle.0) else {
        return;
    };
    material.emissive = emissive;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(index: u32) -> Entity {
        Entity::from_raw(index)
    }

    #[test]
    fn test_no_hit_clears_existing_highlight() {
        let update = hover_transition(Some(entity(1)), None);
        assert_eq!(update.clear, Some(entity(1)));
        assert_eq!(update.apply, None);
    }

    #[test]
    fn test_no_hit_with_nothing_hovered_is_a_no_op() {
        let update = hover_transition(None, None);
        assert_eq!(update.clear, None);
        assert_eq!(update.apply, None);
    }

    #[test]
    fn test_moving_between_parts_swaps_the_highlight() {
        let update = hover_transition(Some(entity(1)), Some(entity(2)));
        assert_eq!(update.clear, Some(entity(1)));
        assert_eq!(update.apply, Some(entity(2)));
    }

    #[test]
    fn test_steady_hover_touches_nothing() {
        let update = hover_transition(Some(entity(3)), Some(entity(3)));
        assert_eq!(update.clear, None);
        assert_eq!(update.apply, None);
    }

    #[test]
    fn test_fresh_hover_only_applies() {
        let update = hover_transition(None, Some(entity(4)));
        assert_eq!(update.clear, None);
        assert_eq!(update.apply, Some(entity(4)));
    }
}
