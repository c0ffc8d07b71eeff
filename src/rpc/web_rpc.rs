use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::assets::shoe_manifest::parse_hex_color;
use crate::tools::order::{OrderPlaced, OrderRequested};
use crate::tools::paint::ColorChosen;
use crate::tools::select::{SelectionChanged, SelectionState};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request from the storefront page.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response to a request with an id.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// One-way notification to the storefront page.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }
}

/// Outbound message queues, drained to the parent window every frame.
#[derive(Resource, Default)]
pub struct StorefrontBridge {
    notifications: Vec<RpcNotification>,
    responses: Vec<RpcResponse>,
}

impl StorefrontBridge {
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.responses.push(response);
    }
}

/// Plugin wiring the postMessage listener, request dispatch, and outbound
/// notification systems.
pub struct StorefrontRpcPlugin;

impl Plugin for StorefrontRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StorefrontBridge>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    drain_message_queue,
                    handle_rpc_messages,
                    notify_selection_changed,
                    notify_order_placed,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

/// Raw message text received from the parent window.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

#[cfg(target_arch = "wasm32")]
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::{Arc, Mutex};

    let queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let listener_queue = queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        let Ok(data) = event.data().dyn_into::<js_sys::JsString>() else {
            return;
        };
        let message: String = data.into();
        // Cheap pre-filter; real validation happens at parse time.
        if message.contains("jsonrpc") {
            if let Ok(mut queue) = listener_queue.lock() {
                queue.push(message);
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(err) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register storefront message listener: {:?}", err);
        }
    }

    // The closure must outlive this function; ownership moves to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(queue));
}

#[cfg(target_arch = "wasm32")]
fn drain_message_queue(
    queue: Option<Res<MessageQueue>>,
    mut messages: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue) = queue else {
        return;
    };
    let drained = match queue.0.lock() {
        Ok(mut queue) => std::mem::take(&mut *queue),
        Err(_) => Vec::new(),
    };
    for content in drained {
        messages.write(IncomingRpcMessage { content });
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn drain_message_queue() {
    // Requests only arrive via postMessage in browser builds.
}

fn handle_rpc_messages(
    mut messages: EventReader<IncomingRpcMessage>,
    mut bridge: ResMut<StorefrontBridge>,
    selection: Res<SelectionState>,
    mut colors: EventWriter<ColorChosen>,
    mut orders: EventWriter<OrderRequested>,
) {
    for message in messages.read() {
        let request = match serde_json::from_str::<RpcRequest>(&message.content) {
            Ok(request) => request,
            Err(parse_error) => {
                warn!("Discarding malformed RPC message: {}", parse_error);
                continue;
            }
        };

        if let Some(response) =
            handle_rpc_request(&request, &selection, &mut colors, &mut orders)
        {
            bridge.queue_response(response);
        }
    }
}

/// Dispatch one request. Requests without an id are notifications and get no
/// response.
fn handle_rpc_request(
    request: &RpcRequest,
    selection: &SelectionState,
    colors: &mut EventWriter<ColorChosen>,
    orders: &mut EventWriter<OrderRequested>,
) -> Option<RpcResponse> {
    let id = request.id.clone()?;

    let result = match request.method.as_str() {
        "choose_color" => handle_choose_color(&request.params, colors),
        "place_order" => {
            orders.write(OrderRequested);
            // The summary follows as an order_placed notification.
            Ok(serde_json::json!({ "accepted": true }))
        }
        "get_selection" => Ok(serde_json::json!({
            "part": selection.part().map(|part| part.as_str())
        })),
        other => {
            warn!("Unknown RPC method: {}", other);
            Err(RpcError::method_not_found(other))
        }
    };

    Some(match result {
        Ok(value) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
    })
}

fn handle_choose_color(
    params: &serde_json::Value,
    colors: &mut EventWriter<ColorChosen>,
) -> Result<serde_json::Value, RpcError> {
    let color_value = parse_choose_color_params(params)
        .ok_or_else(|| RpcError::invalid_params("Expected 'color' as a #rrggbb string"))?;

    colors.write(ColorChosen(color_value));
    Ok(serde_json::json!({ "accepted": true }))
}

/// Extract and parse the `color` parameter.
fn parse_choose_color_params(params: &serde_json::Value) -> Option<Color> {
    let hex = params.get("color")?.as_str()?;
    parse_hex_color(hex)
}

fn notify_selection_changed(
    mut changes: EventReader<SelectionChanged>,
    mut bridge: ResMut<StorefrontBridge>,
) {
    for SelectionChanged(part) in changes.read() {
        bridge.send_notification(
            "selection_changed",
            serde_json::json!({ "part": part.map(|part| part.as_str()) }),
        );
    }
}

fn notify_order_placed(mut orders: EventReader<OrderPlaced>, mut bridge: ResMut<StorefrontBridge>) {
    for order in orders.read() {
        let lines: Vec<serde_json::Value> = order
            .lines
            .iter()
            .map(|line| {
                serde_json::json!({
                    "part": line.part.as_str(),
                    "color": line.color_hex,
                })
            })
            .collect();
        bridge.send_notification("order_placed", serde_json::json!({ "lines": lines }));
    }
}

fn send_outgoing_messages(mut bridge: ResMut<StorefrontBridge>) {
    for notification in bridge.notifications.drain(..) {
        send_message_to_parent(&notification);
    }
    for response in bridge.responses.drain(..) {
        send_message_to_parent(&response);
    }
}

fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        let json = match serde_json::to_string(message) {
            Ok(json) => json,
            Err(err) => {
                error!("Failed to serialize RPC message: {}", err);
                return;
            }
        };
        let Some(window) = window() else {
            return;
        };
        let Some(parent) = window.parent().ok().flatten() else {
            return;
        };
        if let Err(err) = parent.post_message(&JsValue::from_str(&json), "*") {
            error!("Failed to post RPC message to parent: {:?}", err);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parses_without_params() {
        let raw = r#"{"jsonrpc":"2.0","method":"place_order","id":1}"#;
        let request: RpcRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.method, "place_order");
        assert!(request.params.is_null());
        assert_eq!(request.id, Some(serde_json::json!(1)));
    }

    #[test]
    fn test_choose_color_params() {
        let params = serde_json::json!({ "color": "#ff0000" });
        assert_eq!(
            parse_choose_color_params(&params),
            Some(Color::srgb_u8(255, 0, 0))
        );

        assert_eq!(parse_choose_color_params(&serde_json::json!({})), None);
        assert_eq!(
            parse_choose_color_params(&serde_json::json!({ "color": "chartreuse" })),
            None
        );
    }

    #[test]
    fn test_error_shapes_use_jsonrpc_codes() {
        assert_eq!(RpcError::invalid_params("x").code, -32602);
        let not_found = RpcError::method_not_found("mystery");
        assert_eq!(not_found.code, -32601);
        assert_eq!(
            not_found.data,
            Some(serde_json::json!({ "method": "mystery" }))
        );
    }
}
