use anyhow::Context;
use cars_api_rust::{config::Config, constants::API_NAME, create_app, repository::CarRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "{} Starting {} v{} on {}",
        API_NAME,
        config.app_name,
        config.app_version,
        config.bind_address()
    );
    tracing::debug!("{} {}", API_NAME, config.app_description);

    let addr = config.bind_address();
    let app = create_app(config, CarRepository::new());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("{} Server listening on {}", API_NAME, listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
