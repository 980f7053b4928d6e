use caption_service::api::server::CaptionServer;
use caption_service::ServiceConfig;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "caption_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = ServiceConfig::from_env();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.port,
        model = %config.upstream.model,
        "starting caption service"
    );

    let server = CaptionServer::new(config);
    if let Err(err) = server.start().await {
        error!(error = %err, "server error");
        return Err(anyhow::anyhow!(err));
    }
    Ok(())
}
