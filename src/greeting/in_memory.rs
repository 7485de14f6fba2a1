use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{GettingUserNameRepository, GreetingError};

/// User name repository backed by a map. Used by the demo binary and tests.
#[derive(Default)]
pub struct InMemoryUserNameRepository {
    names: RwLock<HashMap<u64, String>>,
}

impl InMemoryUserNameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or renames) a user.
    pub async fn insert(&self, user_id: u64, name: impl Into<String>) {
        self.names.write().await.insert(user_id, name.into());
    }
}

impl<S: Into<String>> FromIterator<(u64, S)> for InMemoryUserNameRepository {
    fn from_iter<I: IntoIterator<Item = (u64, S)>>(iter: I) -> Self {
        let names = iter.into_iter().map(|(id, name)| (id, name.into())).collect();
        Self {
            names: RwLock::new(names),
        }
    }
}

#[async_trait]
impl GettingUserNameRepository for InMemoryUserNameRepository {
    async fn get_user_name(&self, user_id: u64) -> Result<String, GreetingError> {
        self.names
            .read()
            .await
            .get(&user_id)
            .cloned()
            .ok_or(GreetingError::UserNotFound(user_id))
    }
}
