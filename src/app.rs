use std::sync::Arc;

use actix_web::{middleware::Logger, App, HttpServer};
use env_logger::Env;
use log::{debug, info};

use crate::{
    config::{Config, Environment},
    errors::AppError,
    middleware::{RequestId, RequestLogger},
    repositories::InMemoryUrlRecordRepository,
    routes, services,
};

// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;

// Log filter for the given environment
fn log_filter(config: &Config) -> String {
    match config.app.environment {
        Environment::Development => config.app.log_level.clone(),
        Environment::Testing => "debug,actix_web=info".to_string(),
        Environment::Production => "info,actix_web=warn".to_string(),
    }
}

fn setup_logging(config: &Config) -> AppResult<()> {
    let env = Env::default()
        .filter_or("RUST_LOG", log_filter(config))
        .write_style_or("RUST_LOG_STYLE", "always");

    env_logger::try_init_from_env(env)
        .map_err(|e| AppError::Logger(format!("Failed to initialize logger: {}", e)))
}

pub async fn server() -> AppResult<()> {
    let config = Config::load()?;
    setup_logging(&config)?;

    info!("Starting {} v{}", config.app.name, config.app.version);
    info!("Environment: {:?}", config.app.environment);
    info!(
        "Binding to {}:{} with {} workers",
        config.server.host, config.server.port, config.server.workers
    );

    if config.app.environment == Environment::Development {
        debug!("Full configuration: {:?}", config);
    }

    let enable_debug_logging = config.app.environment != Environment::Production;

    let log_format = if enable_debug_logging {
        "%a \"%r\" %s %b %T \"%{Referer}i\" \"%{User-Agent}i\" %{x-request-id}o"
    } else {
        "%a \"%r\" %s %b %T %{x-request-id}o"
    };

    // One store for the whole process, shared by every worker
    let repository = Arc::new(InMemoryUrlRecordRepository::new());
    if repository.is_empty() {
        debug!("URL store initialized empty");
    }

    let store = Arc::clone(&repository);
    HttpServer::new(move || {
        let repository = Arc::clone(&store);
        App::new()
            .configure(|cfg| services::register(repository, cfg))
            .configure(routes::configure_routes)
            .wrap(RequestLogger::new(enable_debug_logging))
            .wrap(Logger::new(log_format))
            .wrap(RequestId)
    })
    .workers(config.server.workers)
    .bind((config.server.host, config.server.port))?
    .run()
    .await?;

    info!("Server stopped with {} stored URLs", repository.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(environment: &str) -> Config {
        Config::from_lookup(|key| match key {
            "APP_ENVIRONMENT" => Ok(environment.to_string()),
            "RUST_LOG" => Ok("trace".to_string()),
            _ => Err(std::env::VarError::NotPresent),
        })
        .unwrap()
    }

    #[test]
    fn test_log_filter_per_environment() {
        assert_eq!(log_filter(&config_for("development")), "trace");
        assert_eq!(log_filter(&config_for("testing")), "debug,actix_web=info");
        assert_eq!(log_filter(&config_for("production")), "info,actix_web=warn");
    }
}
