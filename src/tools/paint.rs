use bevy::prelude::*;

use crate::constants::render_settings::{PAINTED_METALLIC, PAINTED_ROUGHNESS};
use crate::engine::scene::parts::PartName;
use crate::tools::order::color_to_hex;
use crate::tools::select::SelectionState;

/// A palette colour chosen via the menu or the RPC bridge.
#[derive(Event)]
pub struct ColorChosen(pub Color);

/// The only part a chosen colour may land on: the selected one, or nothing.
pub fn paint_target(selection: &SelectionState) -> Option<(Entity, PartName)> {
    selection.selected
}

/// Recolour the selected part. With no selection the event is a silent no-op;
/// only the selected part's material is ever touched.
pub fn apply_chosen_color(
    mut events: EventReader<ColorChosen>,
    selection: Res<SelectionState>,
    material_handles: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for ColorChosen(color) in events.read() {
        let Some((entity, part)) = paint_target(&selection) else {
            continue;
        };
        let Ok(handle) = material_handles.get(entity) else {
            continue;
        };
        let Some(material) = materials.get_mut(&handle.0) else {
            continue;
        };

        material.base_color = *color;
        material.metallic = PAINTED_METALLIC;
        material.perceptual_roughness = PAINTED_ROUGHNESS;
        info!("Painted {}: {}", part.as_str(), color_to_hex(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_selection_paints_nothing() {
        let selection = SelectionState::default();
        assert_eq!(paint_target(&selection), None);
    }

    #[test]
    fn test_paint_lands_only_on_the_selected_part() {
        let entity = Entity::from_raw(7);
        let selection = SelectionState {
            selected: Some((entity, PartName::SoleTop)),
        };
        assert_eq!(paint_target(&selection), Some((entity, PartName::SoleTop)));
    }
}
