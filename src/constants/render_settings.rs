use bevy::prelude::*;

/// Emissive colour applied to the hovered part.
pub const HOVER_EMISSIVE: LinearRgba = LinearRgba::RED;

/// Emissive colour of a part at rest.
pub const NEUTRAL_EMISSIVE: LinearRgba = LinearRgba::BLACK;

/// Surface response once a part has been painted from the palette.
pub const PAINTED_METALLIC: f32 = 0.2;
pub const PAINTED_ROUGHNESS: f32 = 0.2;

/// Camera rest pose, looking at the model origin.
pub const REST_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const CAMERA_LOOK_TARGET: Vec3 = Vec3::ZERO;

/// Duration of the camera framing tween, seconds.
pub const FRAMING_DURATION: f32 = 1.0;

/// Colour menu slide animation.
pub const MENU_SLIDE_DURATION: f32 = 1.0;
pub const MENU_HIDDEN_BOTTOM_PX: f32 = -100.0;
pub const MENU_VISIBLE_BOTTOM_PX: f32 = 0.0;

pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(1.0, 2.0, 2.0);
pub const POINT_LIGHT_INTENSITY: f32 = 2_000_000.0;
