pub mod products;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub details: String,
}

impl HealthStatus {
    pub fn up() -> Self {
        Self {
            status: "OK",
            details: "connected".to_string(),
        }
    }

    pub fn down(details: impl Into<String>) -> Self {
        Self {
            status: "ERROR",
            details: details.into(),
        }
    }
}

/// Liveness probe. Always answers 200; a down datastore shows up only in the
/// body.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let status = match state.datastore.check_connection().await {
        Ok(()) => HealthStatus::up(),
        Err(err) => {
            warn!(error = %err, "Health check could not reach the datastore");
            HealthStatus::down(err.to_string())
        }
    };
    (StatusCode::OK, Json(status))
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }
}
