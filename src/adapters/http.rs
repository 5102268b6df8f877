//! 本機開發用 HTTP server，路徑與 serverless 部署相同

use crate::core::handler::ContactHandler;
use crate::domain::ports::EmailSender;
use crate::utils::error::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;

pub const CONTACT_ROUTE: &str = "/api/contact";

pub fn router<S: EmailSender + 'static>(handler: Arc<ContactHandler<S>>) -> Router {
    Router::new()
        .route(CONTACT_ROUTE, any(contact::<S>))
        .route("/health", get(health))
        .with_state(handler)
}

// 方法檢查交給 ContactHandler，確保 405 回應格式一致
async fn contact<S: EmailSender + 'static>(
    State(handler): State<Arc<ContactHandler<S>>>,
    method: Method,
    body: Bytes,
) -> Response {
    let reply = handler.handle(method.as_str(), &body).await;
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(reply.body)).into_response()
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn serve<S: EmailSender + 'static>(
    handler: Arc<ContactHandler<S>>,
    addr: SocketAddr,
) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}{}", listener.local_addr()?, CONTACT_ROUTE);
    axum::serve(listener, router(handler)).await?;
    Ok(())
}
