use crate::core::bridge::EventBridge;
use crate::core::Acknowledgement;
use crate::utils::error::{BridgeError, Result};
use axum::{
    extract::{Query, State},
    http::Method,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Query pairs in request order, so repeated keys resolve to the first value.
type QueryPairs = Vec<(String, String)>;

impl IntoResponse for Acknowledgement {
    fn into_response(self) -> Response {
        self.as_str().into_response()
    }
}

pub fn router(bridge: EventBridge) -> Router {
    Router::new()
        .route("/event", get(handle_event))
        .route("/healthz", get(health))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(bridge)
}

// 解碼到字串對時不會失敗：無效的 %xx 原樣保留，非 UTF-8 位元組以 U+FFFD 取代
async fn handle_event(
    State(bridge): State<EventBridge>,
    Query(pairs): Query<QueryPairs>,
) -> Acknowledgement {
    bridge
        .handle(param(&pairs, "name"), param(&pairs, "data"))
        .await
}

async fn health() -> &'static str {
    Acknowledgement::BODY
}

fn param(pairs: &[(String, String)], key: &str) -> String {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .unwrap_or_default()
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| BridgeError::ServerError {
            message: format!("cannot listen on {}: {}", addr, e),
        })
}

pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| BridgeError::ServerError {
            message: e.to_string(),
        })
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("🛑 Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> QueryPairs {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_param_defaults_to_empty() {
        assert_eq!(param(&pairs(&[("data", "x")]), "name"), "");
    }

    #[test]
    fn test_param_first_value_wins() {
        let query = pairs(&[("name", "kill"), ("name", "death")]);
        assert_eq!(param(&query, "name"), "kill");
    }
}
