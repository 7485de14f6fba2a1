//! Greeting example: a service that formats a message for a user whose name
//! comes from a [`GettingUserNameRepository`].

pub mod error;
pub mod in_memory;
pub mod logging;
pub mod ports;
pub mod service;

pub use error::*;
pub use in_memory::*;
pub use logging::*;
pub use ports::*;
pub use service::*;
