use time_balance_engine::api::{AppState, create_router};
use time_balance_engine::config::ConfigLoader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "time_balance_engine=info,axum=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // First argument wins over TIME_BALANCE_CONFIG
    let config_dir = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TIME_BALANCE_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    let bind_address = config.engine().bind_address.clone();
    tracing::info!(config_dir = %config_dir, "Configuration loaded");

    let app = create_router(AppState::new(config));

    tracing::info!("listening on {}", bind_address);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
