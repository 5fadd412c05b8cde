use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderName, Request, Response, StatusCode};
use axum::Router;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use signcoach_api::config::ServerConfig;
use signcoach_api::routes;
use signcoach_api::state::AppState;
use signcoach_core::DecodedFrame;
use signcoach_gemini::{GatewayError, VisionGateway};

/// A scripted [`VisionGateway`] that records how it was called.
pub struct MockGateway {
    reply: Result<String, String>,
    /// Frame count of each `generate_content` invocation.
    calls: Mutex<Vec<usize>>,
}

impl MockGateway {
    /// A gateway whose every call succeeds with `reply`.
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// A gateway whose every call fails with an API error.
    pub fn failing(description: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(description.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Frame counts passed to each call, in order.
    pub fn calls(&self) -> Vec<usize> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VisionGateway for MockGateway {
    async fn generate_content(
        &self,
        frames: &[DecodedFrame],
        _instruction: &str,
    ) -> Result<String, GatewayError> {
        self.calls.lock().unwrap().push(frames.len());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(description) => Err(GatewayError::Api {
                status: 503,
                body: description.clone(),
            }),
        }
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given gateway.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(gateway: Arc<MockGateway>) -> Router {
    let state = AppState {
        config: Arc::new(test_config()),
        gateway,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::router())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, uri: &str, body: &serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid data-URL frame containing a 1x1 PNG.
pub fn png_frame() -> String {
    let img = image::RgbImage::new(1, 1);
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .unwrap();
    format!("data:image/png;base64,{}", BASE64.encode(&bytes))
}
