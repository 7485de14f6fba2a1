//! Order example: a product catalog, a per-user cart and order placement with
//! pluggable notification.
//!
//! [`OrderApp`] only talks to the outside through the ports in [`ports`]. Ready-made
//! adapters live in [`in_memory`] (storage) and [`notifier`] (notification).

pub mod app;
pub mod error;
pub mod in_memory;
pub mod model;
pub mod notifier;
pub mod ports;
pub mod unconfigured;

pub use app::*;
pub use error::*;
pub use in_memory::*;
pub use model::*;
pub use notifier::*;
pub use ports::*;
pub use unconfigured::*;
