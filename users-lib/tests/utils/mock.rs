use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use users_repo::mem_repo::MemUserRepo;
use users_repo::user_repo::{User, UserId, UserRepo, UserRepoError};

/// Counts the calls that reach the repo and forwards them to an in-memory one.
#[derive(Default)]
pub struct RecordingUserRepo {
    inner: MemUserRepo,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl RecordingUserRepo {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepo for RecordingUserRepo {
    async fn create_user(&self, user: User) -> Result<User, UserRepoError> {
        self.record();
        self.inner.create_user(user).await
    }

    async fn get_user(&self, user_id: UserId) -> Result<User, UserRepoError> {
        self.record();
        self.inner.get_user(user_id).await
    }

    async fn update_user(&self, user: User) -> Result<User, UserRepoError> {
        self.record();
        self.inner.update_user(user).await
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepoError> {
        self.record();
        self.inner.delete_user(user_id).await
    }
}

/// Fails every operation the way a lost database connection would.
pub struct FailingUserRepo;

fn connection_lost() -> UserRepoError {
    UserRepoError::Other(anyhow!("connection to server was lost"))
}

#[async_trait]
impl UserRepo for FailingUserRepo {
    async fn create_user(&self, _user: User) -> Result<User, UserRepoError> {
        Err(connection_lost())
    }

    async fn get_user(&self, _user_id: UserId) -> Result<User, UserRepoError> {
        Err(connection_lost())
    }

    async fn update_user(&self, _user: User) -> Result<User, UserRepoError> {
        Err(connection_lost())
    }

    async fn delete_user(&self, _user_id: UserId) -> Result<(), UserRepoError> {
        Err(connection_lost())
    }
}
