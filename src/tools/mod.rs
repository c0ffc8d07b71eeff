//! Pointer interaction loop for the configurator.
//!
//! Every rendered frame, the pointer position is resolved to the nearest
//! named shoe part (or nothing) and the hover highlight follows. Clicks run
//! the same resolution and drive the persistent selection:
//!
//! ```text
//! cursor position
//!   └─> pick::pick_part_under_cursor()          (nearest named hit, if any)
//!       ├─> hover::hover_highlight_system()     every frame, emissive feedback
//!       └─> select::handle_part_selection()     on click
//!           ├─> camera framing tween for the part
//!           ├─> colour menu slide in/out
//!           └─> SelectionChanged event (UI + RPC)
//! ```
//!
//! Colour choices (`paint`) and the order summary (`order`) read the
//! selection and the parts' materials; with no selection or no parts both
//! degrade to a silent no-op.

/// Pointer-to-part resolution over the engine's mesh ray cast.
pub mod pick;

/// Per-frame hover tracking and emissive highlight.
pub mod hover;

/// Click selection, camera framing, and menu visibility.
pub mod select;

/// Applying a chosen palette colour to the selected part.
pub mod paint;

/// Order summary over the current material state.
pub mod order;
