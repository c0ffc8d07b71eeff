use bevy::prelude::*;

/// Application lifecycle. The scene is not interactive until the manifest and
/// model have resolved; the transition is one-way and happens once.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}
