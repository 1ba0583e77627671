use crate::user_repo::{User, UserId, UserRepo, UserRepoError};
use crate::HealthCheck;
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{query, query_as, Pool, Postgres};
use tracing::{instrument, warn};

#[derive(sqlx::FromRow)]
struct UserEntry {
    user_id: i64,
    user_name: String,
}

impl From<UserEntry> for User {
    fn from(value: UserEntry) -> Self {
        User::new(value.user_id, value.user_name)
    }
}

pub struct SQLxUserRepo {
    pool: Pool<Postgres>,
}

impl SQLxUserRepo {
    pub fn new(pool: Pool<Postgres>) -> SQLxUserRepo {
        SQLxUserRepo { pool }
    }
}

#[async_trait]
impl UserRepo for SQLxUserRepo {
    #[instrument(skip(self))]
    async fn create_user(&self, user: User) -> Result<User, UserRepoError> {
        let result = query(
            "INSERT INTO users(user_id, user_name) VALUES($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(user.id)
        .bind(&user.name)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Unable to create user {}", user.id))?;
        if result.rows_affected() == 1 {
            Ok(user)
        } else {
            Err(UserRepoError::UserAlreadyExists(user.id))
        }
    }

    #[instrument(skip(self))]
    async fn get_user(&self, user_id: UserId) -> Result<User, UserRepoError> {
        let entry = query_as::<_, UserEntry>(
            "SELECT user_id, user_name FROM users WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to get user {}", user_id))?;
        entry
            .map(User::from)
            .ok_or(UserRepoError::UserNotFound(user_id))
    }

    #[instrument(skip(self))]
    async fn update_user(&self, user: User) -> Result<User, UserRepoError> {
        query("UPDATE users SET user_name = $1 WHERE user_id = $2")
            .bind(&user.name)
            .bind(user.id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to update user {}", user.id))?;
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepoError> {
        query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to delete user {}", user_id))?;
        Ok(())
    }
}

#[async_trait]
impl HealthCheck for SQLxUserRepo {
    async fn check(&self) -> bool {
        match query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                warn!(%e, "Health check failed");
                false
            }
        }
    }
}
