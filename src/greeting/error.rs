//! Error types for the greeting service.

use thiserror::Error;

/// Errors that can occur while looking up a user name.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GreetingError {
    /// No user is registered under the given id.
    #[error("user not found: {0}")]
    UserNotFound(u64),

    /// The backing store failed. The message is shown verbatim.
    #[error("{0}")]
    Repository(String),
}
