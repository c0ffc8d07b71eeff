//! Native UI overlay: the sliding colour menu and the order panel.

/// Palette swatch bar, slide animation, and swatch press handling.
pub mod color_menu;

/// Order button and the latest order summary readout.
pub mod order_panel;
