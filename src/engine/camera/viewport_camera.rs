use bevy::prelude::*;

use crate::constants::render_settings::{
    CAMERA_LOOK_TARGET, FRAMING_DURATION, REST_CAMERA_POSITION,
};
use crate::engine::camera::framing::framing_target;
use crate::engine::scene::parts::PartName;
use crate::engine::tween::Tween;

/// Camera framing state: the rest pose and the in-flight framing tween.
///
/// Framing requests are fire-and-forget; a new request replaces whatever
/// tween is currently running, starting from the camera's present position.
#[derive(Resource)]
pub struct ViewportCamera {
    pub rest_position: Vec3,
    pub look_target: Vec3,
    tween: Option<Tween<Vec3>>,
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self {
            rest_position: REST_CAMERA_POSITION,
            look_target: CAMERA_LOOK_TARGET,
            tween: None,
        }
    }
}

impl ViewportCamera {
    /// Start framing the given part from the camera's current position.
    pub fn frame_part(&mut self, current: Vec3, part: PartName) {
        self.tween = Some(Tween::new(current, framing_target(part), FRAMING_DURATION));
    }

    /// Tween back to the rest pose.
    pub fn reset(&mut self, current: Vec3) {
        self.tween = Some(Tween::new(current, self.rest_position, FRAMING_DURATION));
    }
}

/// Drive the active framing tween and keep the camera pointed at the model.
pub fn camera_controller(
    time: Res<Time>,
    mut viewport_camera: ResMut<ViewportCamera>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut camera_transform) = cameras.single_mut() else {
        return;
    };

    let Some(tween) = viewport_camera.tween.as_mut() else {
        return;
    };
    let position = tween.tick(time.delta_secs());
    let done = tween.finished();

    camera_transform.translation = position;
    let look_target = viewport_camera.look_target;
    camera_transform.look_at(look_target, Vec3::Y);

    if done {
        viewport_camera.tween = None;
    }
}
