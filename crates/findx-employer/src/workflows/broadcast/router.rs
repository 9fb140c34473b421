use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::gateway::{BroadcastError, BroadcastTarget, NotificationGateway, PushSink};
use super::message::BroadcastMessage;

pub fn broadcast_router<S>(gateway: Arc<NotificationGateway<S>>) -> Router
where
    S: PushSink + 'static,
{
    Router::new()
        .route(
            "/api/v1/broadcast/tokens",
            post(register_handler::<S>).get(list_handler::<S>),
        )
        .route(
            "/api/v1/broadcast/tokens/:token",
            delete(unregister_handler::<S>),
        )
        .route("/api/v1/broadcast", post(broadcast_handler::<S>))
        .with_state(gateway)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterTokenRequest {
    token: String,
}

/// Console request; omitting `tokens` targets every registered device.
#[derive(Debug, Deserialize)]
pub(crate) struct BroadcastRequest {
    #[serde(flatten)]
    message: BroadcastMessage,
    #[serde(default)]
    tokens: Option<Vec<String>>,
}

pub(crate) async fn register_handler<S>(
    State(gateway): State<Arc<NotificationGateway<S>>>,
    axum::Json(request): axum::Json<RegisterTokenRequest>,
) -> Response
where
    S: PushSink + 'static,
{
    match gateway.register_token(&request.token) {
        Ok(created) => {
            let status = if created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            let payload = json!({
                "token": request.token.trim(),
                "registered": created,
            });
            (status, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<S>(
    State(gateway): State<Arc<NotificationGateway<S>>>,
) -> Response
where
    S: PushSink + 'static,
{
    let payload = json!({ "tokens": gateway.tokens() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn unregister_handler<S>(
    State(gateway): State<Arc<NotificationGateway<S>>>,
    Path(token): Path<String>,
) -> Response
where
    S: PushSink + 'static,
{
    if gateway.unregister_token(&token) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        let payload = json!({
            "error": format!("device token {token} is not registered"),
            "kind": "unknown_token",
        });
        (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
    }
}

pub(crate) async fn broadcast_handler<S>(
    State(gateway): State<Arc<NotificationGateway<S>>>,
    axum::Json(request): axum::Json<BroadcastRequest>,
) -> Response
where
    S: PushSink + 'static,
{
    let target = match request.tokens {
        Some(tokens) => BroadcastTarget::Tokens(tokens),
        None => BroadcastTarget::All,
    };

    match gateway.broadcast(&request.message, target).await {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: BroadcastError) -> Response {
    let payload = json!({
        "error": error.to_string(),
        "kind": error.kind(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
