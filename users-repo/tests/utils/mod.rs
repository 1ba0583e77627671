use fake::faker::name::en::FirstName;
use fake::{Fake, Faker};
use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use std::fs;
use std::sync::Arc;
use users_repo::user_repo::{User, UserRepo};

#[derive(Deserialize)]
struct TestConfig {
    database_url: String,
}

#[allow(dead_code)]
#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

pub async fn build_repo(repo_type: RepoType) -> Arc<dyn UserRepo> {
    match repo_type {
        RepoType::SQLx => {
            let config = fs::read_to_string("config_test.toml").unwrap();
            let config: TestConfig = toml::from_str(config.as_str()).unwrap();

            let pool = PgPoolOptions::new()
                .max_connections(1)
                .connect(&config.database_url)
                .await
                .unwrap();
            sqlx::query(include_str!("../../schema.sql"))
                .execute(&pool)
                .await
                .unwrap();

            users_repo::sqlx_repo::create_repo(&config.database_url, 1)
                .await
                .unwrap()
        }
        RepoType::Mem => users_repo::mem_repo::create_repo(),
    }
}

pub fn fake_user() -> User {
    User::new(Faker.fake(), FirstName().fake())
}
