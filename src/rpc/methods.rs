//! RPC Method Implementations
//!
//! Each method corresponds to a JSON-RPC call made by the page or by
//! external tools.

use crate::address::{AddressCodec, FormatOptions, TonAddress, TonCodec};
use crate::constants::{COPY_FEEDBACK, INVALID_ADDRESS_MESSAGE};
use crate::converter::convert;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// JSON-RPC 2.0 Request
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Option<serde_json::Value>,
    pub id: serde_json::Value,
}

/// JSON-RPC 2.0 Response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: serde_json::Value,
}

/// JSON-RPC Error
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    pub fn success(id: serde_json::Value, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: serde_json::Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(JsonRpcError { code, message }),
            id,
        }
    }
}

const INVALID_PARAMS: i32 = -32602;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_ADDRESS: i32 = -5;

/// RPC Handler State
#[derive(Debug, Clone)]
pub struct RpcState {
    pub codec: TonCodec,
    /// How long the page keeps a "Copied" label
    pub copy_feedback_ms: u64,
}

impl Default for RpcState {
    fn default() -> Self {
        Self {
            codec: TonCodec,
            copy_feedback_ms: COPY_FEEDBACK.as_millis() as u64,
        }
    }
}

/// Process a JSON-RPC request and return a response
pub fn handle_request(state: &RpcState, request: JsonRpcRequest) -> JsonRpcResponse {
    debug!(method = %request.method, "rpc request");
    match request.method.as_str() {
        "convert" => convert_address(state, request.id, request.params),
        "parse" => parse_address(request.id, request.params),
        "format" => format_address(state, request.id, request.params),
        _ => JsonRpcResponse::error(
            request.id,
            METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        ),
    }
}

/// First positional param, or the param itself when it is a bare string
fn address_param(params: &Option<serde_json::Value>) -> Option<&str> {
    match params {
        Some(serde_json::Value::Array(arr)) => arr.first().and_then(|v| v.as_str()),
        Some(serde_json::Value::String(s)) => Some(s.as_str()),
        _ => None,
    }
}

/// Runs the conversion workflow on the given input
/// Params: [address]
fn convert_address(
    state: &RpcState,
    id: serde_json::Value,
    params: Option<serde_json::Value>,
) -> JsonRpcResponse {
    let Some(input) = address_param(&params) else {
        return JsonRpcResponse::error(id, INVALID_PARAMS, "Invalid params: expected address".into());
    };

    let conversion = convert(&state.codec, input);
    let mut result = serde_json::json!({ "state": conversion.name() });
    if let Some(formats) = conversion.formats() {
        result["formats"] = serde_json::json!(formats);
    }
    if let Some(message) = conversion.message() {
        result["error"] = serde_json::json!(message);
    }
    JsonRpcResponse::success(id, result)
}

/// Returns the decoded parts of an address and how it was written
/// Params: [address]
fn parse_address(id: serde_json::Value, params: Option<serde_json::Value>) -> JsonRpcResponse {
    let Some(input) = address_param(&params) else {
        return JsonRpcResponse::error(id, INVALID_PARAMS, "Invalid params: expected address".into());
    };

    let (address, kind) = match TonAddress::inspect(input) {
        Ok(parsed) => parsed,
        Err(_) => return JsonRpcResponse::error(id, INVALID_ADDRESS, INVALID_ADDRESS_MESSAGE.into()),
    };

    let mut info = serde_json::json!(kind);
    info["workchain"] = serde_json::json!(address.workchain);
    info["hash"] = serde_json::json!(hex::encode(address.hash));
    info["raw"] = serde_json::json!(address.to_raw_string());
    JsonRpcResponse::success(id, info)
}

/// Renders one friendly form
/// Params: [address, {urlSafe?, bounceable?, testOnly?}]
fn format_address(
    state: &RpcState,
    id: serde_json::Value,
    params: Option<serde_json::Value>,
) -> JsonRpcResponse {
    let Some(input) = address_param(&params) else {
        return JsonRpcResponse::error(id, INVALID_PARAMS, "Invalid params: expected address".into());
    };

    let options = match params.as_ref().and_then(|p| p.get(1)) {
        Some(value) => match serde_json::from_value::<FormatOptions>(value.clone()) {
            Ok(options) => options,
            Err(e) => {
                return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {}", e))
            }
        },
        None => FormatOptions::default(),
    };

    match state.codec.parse(input) {
        Ok(address) => {
            JsonRpcResponse::success(id, serde_json::json!(state.codec.format(&address, options)))
        }
        Err(_) => JsonRpcResponse::error(id, INVALID_ADDRESS, INVALID_ADDRESS_MESSAGE.into()),
    }
}
