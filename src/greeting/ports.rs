//! Ports (traits) of the greeting service.

use async_trait::async_trait;

use super::GreetingError;

/// Driving port: what callers can ask the greeting service to do.
#[async_trait]
pub trait SayHelloPort: Send + Sync {
    /// Builds a greeting for the given user.
    async fn say_hello(&self, user_id: u64) -> Result<String, GreetingError>;
}

/// Driven port: where the greeting service gets user names from.
#[async_trait]
pub trait GettingUserNameRepository: Send + Sync {
    /// Resolves the display name of a user.
    async fn get_user_name(&self, user_id: u64) -> Result<String, GreetingError>;
}
