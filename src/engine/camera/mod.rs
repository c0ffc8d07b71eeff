//! Viewport camera for the configurator: a fixed rest pose with tweened
//! per-part framing, always looking at the model origin.

/// Per-part camera framing targets.
pub mod framing;

/// Viewport camera resource and controller system.
pub mod viewport_camera;

pub use viewport_camera::{ViewportCamera, camera_controller};
