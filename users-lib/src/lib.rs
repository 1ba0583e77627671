use actix_web::web::{Data, ServiceConfig};
use std::sync::Arc;
use users_repo::user_repo::UserRepo;

pub mod config;
mod error;
pub mod tracing;
pub mod user;

/// Registers the user routes together with the repo they run against and the extractor configs
/// that turn malformed requests into client errors.
pub fn app_config_func(user_repo: Arc<dyn UserRepo>) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        cfg.app_data(Data::new(user_repo))
            .app_data(user::json_config())
            .app_data(user::query_config())
            .service(user::user_service());
    }
}
