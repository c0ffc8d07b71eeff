use bevy::prelude::*;

use crate::engine::scene::parts::PartName;

/// Request from the order button or the RPC bridge.
#[derive(Event)]
pub struct OrderRequested;

/// Completed summary, consumed by the UI panel and the RPC bridge.
#[derive(Event)]
pub struct OrderPlaced {
    pub lines: Vec<OrderLine>,
    pub message: String,
}

/// One part's resolved colour at the moment the order was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub part: PartName,
    pub color_hex: String,
}

/// Snapshot the current material colour of every part found in the scene.
pub fn place_order(
    mut requests: EventReader<OrderRequested>,
    parts: Query<(&PartName, &MeshMaterial3d<StandardMaterial>)>,
    materials: Res<Assets<StandardMaterial>>,
    mut placed: EventWriter<OrderPlaced>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    let found: Vec<(PartName, Color)> = parts
        .iter()
        .filter_map(|(part, handle)| {
            materials.get(&handle.0).map(|material| (*part, material.base_color))
        })
        .collect();

    let lines = order_lines(&found);
    let message = format_order(&lines);
    info!("{}", message);
    placed.write(OrderPlaced { lines, message });
}

/// Order lines in canonical part order, omitting parts absent from the scene.
pub fn order_lines(found: &[(PartName, Color)]) -> Vec<OrderLine> {
    PartName::ALL
        .iter()
        .filter_map(|part| {
            let (_, color) = found.iter().find(|(candidate, _)| candidate == part)?;
            Some(OrderLine {
                part: *part,
                color_hex: color_to_hex(color),
            })
        })
        .collect()
}

/// Human-readable report, one `name: rrggbb` line per part.
pub fn format_order(lines: &[OrderLine]) -> String {
    let mut message = String::from("Order placed!\n");
    for line in lines {
        message.push_str(&format!("{}: {}\n", line.part.as_str(), line.color_hex));
    }
    message
}

/// Lowercase 6-digit hex of a colour's sRGB components, without `#`.
pub fn color_to_hex(color: &Color) -> String {
    let [r, g, b, _] = color.to_srgba().to_u8_array();
    format!("{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_renders_as_ff0000() {
        assert_eq!(color_to_hex(&Color::srgb_u8(255, 0, 0)), "ff0000");
        assert_eq!(color_to_hex(&Color::srgb_u8(0, 0, 0)), "000000");
        assert_eq!(color_to_hex(&Color::WHITE), "ffffff");
    }

    #[test]
    fn test_lines_follow_declaration_order() {
        // Deliberately out of order.
        let found = vec![
            (PartName::SoleTop, Color::srgb_u8(0, 0, 255)),
            (PartName::Laces, Color::srgb_u8(255, 0, 0)),
        ];
        let lines = order_lines(&found);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].part, PartName::Laces);
        assert_eq!(lines[0].color_hex, "ff0000");
        assert_eq!(lines[1].part, PartName::SoleTop);
        assert_eq!(lines[1].color_hex, "0000ff");
    }

    #[test]
    fn test_missing_parts_are_omitted() {
        let found = vec![(PartName::Inside, Color::srgb_u8(0, 255, 0))];
        let lines = order_lines(&found);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].part, PartName::Inside);
    }

    #[test]
    fn test_empty_scene_gives_header_only() {
        let lines = order_lines(&[]);
        assert!(lines.is_empty());
        assert_eq!(format_order(&lines), "Order placed!\n");
    }

    #[test]
    fn test_click_laces_choose_red_scenario() {
        let found = vec![(PartName::Laces, Color::srgb_u8(255, 0, 0))];
        let lines = order_lines(&found);
        assert_eq!(format_order(&lines), "Order placed!\nlaces: ff0000\n");
    }
}
