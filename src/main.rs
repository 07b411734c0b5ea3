use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use touralytics::api::ApiState;
use touralytics::config::LoggingConfig;
use touralytics::{Dataset, TouralyticsConfig, web};

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match TouralyticsConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);
    tracing::info!("TourAlytics v{} starting", touralytics::VERSION);

    // A missing or malformed dataset is fatal; there is no partial operation
    let dataset = match Dataset::load(&config.dataset.path) {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            tracing::error!("{}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    let state = ApiState::new(dataset, config.defaults.clone());
    if let Err(e) = web::run(config.server.port, state).await {
        tracing::error!("Server error: {e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
