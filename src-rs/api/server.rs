use std::net::SocketAddr;

use axum::routing::{any, get};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{handle_generate, handle_health, handle_panic};
use crate::config::ServiceConfig;
use crate::generator::CaptionGenerator;

pub const GENERATE_PATH: &str = "/api/gerar";

pub fn build_router(generator: CaptionGenerator) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route(GENERATE_PATH, any(handle_generate))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(generator)
}

pub struct CaptionServer {
    pub port: u16,
    pub generator: CaptionGenerator,
}

impl CaptionServer {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            port: config.port,
            generator: CaptionGenerator::from_config(config),
        }
    }

    pub async fn start(&self) -> Result<(), String> {
        let app = build_router(self.generator.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!(address = %addr, "caption service listening");
        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .map_err(|err| err.to_string())
    }
}
