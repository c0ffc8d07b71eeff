/// Configurator manifest, relative to the asset root.
pub const MANIFEST_PATH: &'static str = "config/shoe_manifest.json";
