//! Runtime setup shared by the demo binary.
//!
//! - [`AppConfig`] - configuration loaded from the environment
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod config;
pub mod tracing;

pub use self::config::*;
pub use self::tracing::*;
