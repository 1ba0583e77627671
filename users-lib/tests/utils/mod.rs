use std::sync::Arc;

use fake::faker::name::en::FirstName;
use fake::{Fake, Faker};
use rstest::*;
use tracing::info;
use tracing::Level;

use users_repo::user_repo::{User, UserRepo};

pub mod mock;

macro_rules! build_app {
    ($user_repo:expr) => {{
        let app = App::new()
            .wrap(users_lib::tracing::create_middleware())
            .configure(users_lib::app_config_func($user_repo));
        tracing::info!("Built app");
        app
    }};
}

macro_rules! create_user {
    (&$service:ident, $user:expr) => {{
        let request = TestRequest::post()
            .uri("/users")
            .set_json(&$user)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert!(
            response.status().is_success(),
            "Got {} response when creating user",
            response.status()
        );
        let created: User = test::read_body_json(response).await;
        created
    }};
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn user_repo() -> Arc<dyn UserRepo> {
    users_repo::mem_repo::create_repo()
}

#[fixture]
pub fn user() -> User {
    User::new(Faker.fake(), FirstName().fake())
}
