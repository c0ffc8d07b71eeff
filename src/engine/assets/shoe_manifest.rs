use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Model placement applied once when the gltf scene is attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelData {
    pub scene_path: String,
    pub yaw_degrees: f32,
    pub scale: f32,
}

/// Complete configurator manifest as a Bevy asset. Mirrors the JSON exactly.
///
/// The palette is the set of swatches offered by the colour menu; entries are
/// `#rrggbb` hex strings. The model and skybox are opaque external assets
/// referenced by path.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct ShoeManifest {
    pub model: ModelData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skybox: Option<String>,
    pub palette: Vec<String>,
}

impl ShoeManifest {
    /// Palette entries resolved to colours, skipping (and logging) any entry
    /// that does not parse as hex.
    pub fn palette_colors(&self) -> Vec<Color> {
        self.palette
            .iter()
            .filter_map(|entry| {
                let color = parse_hex_color(entry);
                if color.is_none() {
                    warn!("Ignoring unparseable palette entry: {}", entry);
                }
                color
            })
            .collect()
    }
}

/// Parse a `#rrggbb` (or `rrggbb`) string into a colour.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    Srgba::hex(value).ok().map(Color::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_manifest_deserializes() {
        let raw = include_str!("../../../assets/config/shoe_manifest.json");
        let manifest: ShoeManifest = serde_json::from_str(raw).expect("manifest must parse");
        assert_eq!(manifest.model.scene_path, "models/shoe.glb");
        assert_eq!(manifest.model.scale, 15.0);
        assert!(!manifest.palette.is_empty());
        assert_eq!(manifest.palette_colors().len(), manifest.palette.len());
    }

    #[test]
    fn test_hex_parsing_accepts_both_forms() {
        assert_eq!(
            parse_hex_color("#ff0000"),
            Some(Color::srgb_u8(255, 0, 0))
        );
        assert_eq!(
            parse_hex_color("00ff00"),
            Some(Color::srgb_u8(0, 255, 0))
        );
        assert_eq!(parse_hex_color("not-a-colour"), None);
    }

    #[test]
    fn test_bad_palette_entries_are_skipped() {
        let manifest = ShoeManifest {
            model: ModelData {
                scene_path: "models/shoe.glb".into(),
                yaw_degrees: 90.0,
                scale: 15.0,
            },
            skybox: None,
            palette: vec!["#ff0000".into(), "bogus".into()],
        };
        assert_eq!(manifest.palette_colors().len(), 1);
    }
}
