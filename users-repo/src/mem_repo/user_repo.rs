use crate::user_repo::UserRepoError::{UserAlreadyExists, UserNotFound};
use crate::user_repo::{User, UserId, UserRepo, UserRepoError};
use crate::HealthCheck;
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
pub struct MemUserRepo {
    names: RwLock<HashMap<UserId, String>>,
}

impl MemUserRepo {
    pub fn new() -> MemUserRepo {
        MemUserRepo::default()
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<HashMap<UserId, String>>, anyhow::Error> {
        self.names
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<HashMap<UserId, String>>, anyhow::Error> {
        self.names
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

#[async_trait]
impl UserRepo for MemUserRepo {
    async fn create_user(&self, user: User) -> Result<User, UserRepoError> {
        let mut write_guard = self.write_lock()?;

        match write_guard.entry(user.id) {
            Entry::Occupied(_) => Err(UserAlreadyExists(user.id)),
            Entry::Vacant(e) => {
                e.insert(user.name.clone());
                Ok(user)
            }
        }
    }

    async fn get_user(&self, user_id: UserId) -> Result<User, UserRepoError> {
        let read_guard = self.read_lock()?;

        if let Some(name) = read_guard.get(&user_id) {
            Ok(User::new(user_id, name.to_owned()))
        } else {
            Err(UserNotFound(user_id))
        }
    }

    async fn update_user(&self, user: User) -> Result<User, UserRepoError> {
        let mut write_guard = self.write_lock()?;

        // same as an UPDATE matching no rows: nothing changes, the input is still returned
        if let Some(name) = write_guard.get_mut(&user.id) {
            *name = user.name.clone();
        }
        Ok(user)
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepoError> {
        let mut write_guard = self.write_lock()?;

        write_guard.remove(&user_id);
        Ok(())
    }
}

#[async_trait]
impl HealthCheck for MemUserRepo {
    async fn check(&self) -> bool {
        self.read_lock().is_ok()
    }
}
