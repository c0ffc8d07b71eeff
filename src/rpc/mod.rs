//! JSON-RPC 2.0 bridge to the hosting storefront page.
//!
//! In iframe deployments the palette and the order button live in the parent
//! page; this layer mirrors the native UI over `postMessage`:
//!
//! - **Requests** (parent → engine): `choose_color {color}`, `place_order`,
//!   `get_selection`. Each returns an ack/response with the matching id.
//! - **Notifications** (engine → parent): `selection_changed {part|null}`
//!   when a click changes the selection, `order_placed {lines}` once a
//!   summary has been computed.
//!
//! Native builds compile the same module; message transmission is a no-op.

/// Message structures, the postMessage listener, and request dispatch.
pub mod web_rpc;
