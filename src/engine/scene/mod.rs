//! Shoe scene setup: the fixed part registry and the one-shot model load.

/// Registry of customizable sub-mesh names and their component tag.
pub mod parts;

/// Model spawn, material override, and part tagging systems.
pub mod shoe_model;
