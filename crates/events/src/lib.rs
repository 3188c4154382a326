//! `kimhoan-events` — event mechanics for cross-module notifications.
//!
//! Domain crates define their own event enums and implement [`Event`]; this
//! crate only provides the plumbing: the trait, the envelope, and the
//! publish/subscribe port with an in-memory reference bus for tests/dev.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
