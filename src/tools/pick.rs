use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;

use crate::engine::scene::parts::PartName;

/// Nearest named part under the pointer.
#[derive(Debug, Clone, Copy)]
pub struct PickHit {
    pub entity: Entity,
    pub part: PartName,
    pub distance: f32,
}

/// Resolve the pointer to a customizable part.
///
/// The camera builds the world ray from window-pixel coordinates (the engine
/// handles NDC normalization and the y flip), and the mesh ray cast returns
/// hits ordered by increasing distance. Only the nearest hit counts: if it is
/// not a named part the whole pick is treated as a miss, so inert geometry in
/// front of a part shields it rather than being skipped over.
pub fn pick_part_under_cursor(
    ray_cast: &mut MeshRayCast,
    camera: &Camera,
    camera_transform: &GlobalTransform,
    cursor_pos: Vec2,
    parts: &Query<&PartName>,
) -> Option<PickHit> {
    let ray = camera.viewport_to_world(camera_transform, cursor_pos).ok()?;

    let settings = MeshRayCastSettings::default().always_early_exit();
    let (entity, hit) = ray_cast.cast_ray(ray, &settings).first()?;

    let part = parts.get(*entity).ok().copied()?;
    Some(PickHit {
        entity: *entity,
        part,
        distance: hit.distance,
    })
}
