//! RPC HTTP Server
//!
//! Axum-based HTTP server that handles JSON-RPC requests and serves the
//! converter page.

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::ServerConfig;
use crate::page::render_page;
use crate::rpc::methods::{handle_request, JsonRpcRequest, JsonRpcResponse, RpcState};

/// Build the router: `GET /` serves the page, `POST /` takes JSON-RPC
pub fn router(state: Arc<RpcState>, enable_cors: bool) -> Router {
    let app = Router::new()
        .route("/", get(serve_page).post(handle_rpc))
        .with_state(state);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app.layer(cors)
    } else {
        app
    }
}

/// Start the RPC server and run until the task is cancelled
pub async fn start_rpc_server(state: Arc<RpcState>, config: &ServerConfig) -> std::io::Result<()> {
    let app = router(state, config.enable_cors);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "converter listening on http://{}", addr);

    axum::serve(listener, app).await
}

/// Serve the converter HTML page
async fn serve_page(State(state): State<Arc<RpcState>>) -> Html<String> {
    Html(render_page(state.copy_feedback_ms))
}

/// Handle incoming JSON-RPC requests
async fn handle_rpc(
    State(state): State<Arc<RpcState>>,
    Json(request): Json<JsonRpcRequest>,
) -> (StatusCode, Json<JsonRpcResponse>) {
    let response = handle_request(&state, request);
    (StatusCode::OK, Json(response))
}
