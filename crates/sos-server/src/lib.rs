//! HTTP surface of the SOS alarm.
//!
//! Routes:
//!
//! - `GET|POST /sos`: raise the alarm, see [`handlers::sos::trigger`]
//! - `GET /health`: liveness probe

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::get;
use axum::Router;
use sos_alarm::{
    default_player, Alarm, AlertPlayer, DesktopNotifier, NoopNotifier, Notifier, SilentPlayer,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;

pub struct ServerState {
    pub alarm: Alarm,
}

impl ServerState {
    pub fn new(alarm: Alarm) -> Self {
        Self { alarm }
    }

    /// Builds the collaborators the config asks for.
    pub fn from_config(config: &ServerConfig) -> Self {
        let player: Arc<dyn AlertPlayer> = if config.sound {
            default_player()
        } else {
            info!("Alert sound disabled");
            Arc::new(SilentPlayer)
        };
        let notifier: Arc<dyn Notifier> = if config.notify {
            Arc::new(DesktopNotifier::new())
        } else {
            info!("Desktop notifications disabled");
            Arc::new(NoopNotifier)
        };
        Self::new(Alarm::new(player, notifier))
    }
}

/// Builds the application router.
pub fn app(state: Arc<ServerState>) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/sos", get(handlers::sos::trigger).post(handlers::sos::trigger))
        .layer(trace_layer);

    let routes = Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::health));

    with_common_layers(routes).with_state(state)
}

/// Panic-to-500 conversion and permissive CORS, shared by every route.
fn with_common_layers(router: Router<Arc<ServerState>>) -> Router<Arc<ServerState>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(cors)
}
