//! # Hexagonal Recipe
//!
//! > **Two small application services built with ports and adapters.**
//!
//! The crate shows how to keep application logic independent of the outside
//! world by talking to it only through traits (ports), and plugging concrete
//! implementations (adapters) in at the edges.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Greeting ([`greeting`])
//! A `HelloService` that asks a [`GettingUserNameRepository`](greeting::GettingUserNameRepository)
//! for a name and formats a message.
//! - **Key items**: [`HelloService`](greeting::HelloService),
//!   [`LoggingUserNameRepository`](greeting::LoggingUserNameRepository) (a decorator that
//!   adds tracing around any repository).
//!
//! ### 2. Orders ([`orders`])
//! A catalog, a per-user cart and order placement with pluggable notification.
//! - **Key items**: [`OrderApp`](orders::OrderApp), [`OrderAppBuilder`](orders::OrderAppBuilder),
//!   [`BroadcastOrderPlacedNotifier`](orders::BroadcastOrderPlacedNotifier).
//!
//! ### 3. Runtime ([`runtime`])
//! Tracing setup and configuration shared by the demo binary.
//!
//! ## Architecture Notes
//!
//! ### Ports are async traits
//! Every capability is an `#[async_trait]` trait that is `Send + Sync`, so a real adapter
//! can do I/O and services can be shared behind an `Arc`. Services still await each
//! collaborator strictly one after another.
//!
//! ### Errors travel unchanged
//! Each example has its own `thiserror` enum. Services return the first collaborator error
//! as-is with `?`; nothing is wrapped, retried or aggregated.
//!
//! ### Missing capabilities fail loudly
//! An [`OrderApp`](orders::OrderApp) built without a repository gets an
//! [`Unconfigured`](orders::Unconfigured) stand-in that returns
//! [`OrderError::NotConfigured`](orders::OrderError::NotConfigured) on every call.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Only notify through SMS
//! ORDER_NOTIFIERS=sms cargo run
//! ```

pub mod greeting;
pub mod orders;
pub mod runtime;
