use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type UserId = i64;

/// Storage operations on user records.
///
/// `update_user` and `delete_user` do not check whether a row was matched, so both succeed for an
/// id that does not exist.
#[async_trait]
pub trait UserRepo: Sync + Send {
    async fn create_user(&self, user: User) -> Result<User, UserRepoError>;
    async fn get_user(&self, user_id: UserId) -> Result<User, UserRepoError>;
    async fn update_user(&self, user: User) -> Result<User, UserRepoError>;
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepoError>;
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(alias = "id", alias = "ID")]
    pub id: UserId,
    #[serde(default, alias = "name", alias = "NAME")]
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: String) -> User {
        User { id, name }
    }
}

#[derive(Error, Debug)]
pub enum UserRepoError {
    #[error("User {0} not found")]
    UserNotFound(UserId),
    #[error("User {0} already exists")]
    UserAlreadyExists(UserId),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
