//! # Logging Decorator
//!
//! [`LoggingUserNameRepository`] wraps any [`GettingUserNameRepository`] and
//! records a structured `tracing` event before and after each lookup.
//!
//! Because it implements the same trait it wraps, it can be slotted in front of
//! any repository without the service noticing:
//!
//! ```rust,ignore
//! let repo = LoggingUserNameRepository::new(InMemoryUserNameRepository::new());
//! let service = HelloService::new(repo);
//! ```
//!
//! With `RUST_LOG=info` a successful lookup shows:
//!
//! ```text
//! INFO Getting user name user_id=1
//! INFO Got user name user_id=1 user_name="Alice"
//! ```

use async_trait::async_trait;
use tracing::{info, warn};

use super::{GettingUserNameRepository, GreetingError};

/// Decorator adding observability to a user name repository.
///
/// Results and errors pass through untouched.
pub struct LoggingUserNameRepository<R: GettingUserNameRepository> {
    inner: R,
}

impl<R: GettingUserNameRepository> LoggingUserNameRepository<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped repository.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[async_trait]
impl<R: GettingUserNameRepository> GettingUserNameRepository for LoggingUserNameRepository<R> {
    async fn get_user_name(&self, user_id: u64) -> Result<String, GreetingError> {
        info!(user_id, "Getting user name");
        match self.inner.get_user_name(user_id).await {
            Ok(user_name) => {
                info!(user_id, %user_name, "Got user name");
                Ok(user_name)
            }
            Err(e) => {
                warn!(user_id, error = %e, "Failed to get user name");
                Err(e)
            }
        }
    }
}
