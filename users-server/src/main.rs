#[macro_use]
extern crate tracing;

use std::error::Error;
use std::path::PathBuf;

use actix_web::{App, HttpServer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

use users_lib::config::Config;

const SERVICE_NAME: &str = "users-server";

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default());
    let tracing_guard = tracing::subscriber::set_default(subscriber);
    info!("tracing initialized");

    let config = match get_config_file() {
        Some(config_path) => {
            info!(config_path = %config_path.display(), "Reading config file");
            Config::from_file(config_path)?
        }
        None => {
            info!("No config file found, reading config from environment");
            Config::from_env()?
        }
    };

    let telemetry_layer = config
        .otlp
        .as_ref()
        .map(|otlp_config| {
            users_lib::tracing::create_opentelemetry_layer(SERVICE_NAME, otlp_config)
        })
        .transpose()?;

    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default())
        .with(telemetry_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    drop(tracing_guard);

    let user_repo =
        users_repo::sqlx_repo::create_repo(&config.database_url, config.max_pool_size).await?;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(users_lib::tracing::create_middleware())
            .configure(users_lib::app_config_func(user_repo.clone()))
    })
    .client_request_timeout(config.read_timeout())
    .client_disconnect_timeout(config.write_timeout())
    .bind(("0.0.0.0", config.port))?;

    info!(port = config.port, "Server started");
    server.run().await?;

    Ok(())
}

fn get_config_file() -> Option<PathBuf> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Some(config_current_dir);
    }
    if let Ok(config_env) = std::env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}
