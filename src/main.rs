//! HR Portal server entry point.

use hrportal_core::config::AppConfig;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = %config.backend.base_url,
        "starting HR Portal"
    );

    if let Err(e) = hrportal_web::run_server(config).await {
        tracing::error!(error = %e, "server exited with error");
        std::process::exit(1);
    }
}

/// Loads configuration for the environment named in `HRPORTAL_ENV`
/// (defaults to `default`).
fn load_configuration() -> Result<AppConfig, hrportal_core::error::AppError> {
    let env = std::env::var("HRPORTAL_ENV").unwrap_or_else(|_| "default".to_string());
    AppConfig::load(&env)
}

/// Initializes the tracing subscriber. `RUST_LOG` wins over the configured
/// level when set.
fn init_logging(config: &AppConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
}
