//! Imperative shell around the pure core.
//!
//! The shell owns the single mutable cell of the whole system (the current
//! state), wires inbound calls to events, and relays each freshly-entered
//! state to the outward observer:
//! - [`RepositioningMachine`]: applies events, commits, then notifies
//! - [`PositionObserver`]: the outbound notification handler
//! - [`RepositioningSession`]/[`RepositioningDatasource`]: the inbound
//!   surface and session ownership

mod machine;
mod observer;
mod session;

pub use machine::RepositioningMachine;
pub use observer::PositionObserver;
pub use session::{RepositioningDatasource, RepositioningSession};
