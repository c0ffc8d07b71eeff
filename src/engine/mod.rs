pub mod assets;
pub mod camera;
pub mod core;
pub mod scene;
pub mod tween;
