/// JSON manifest describing the model, skybox, and palette.
pub mod shoe_manifest;

/// Handle-tracking resource and manifest load polling.
pub mod configurator_assets;
