//! `kimhoan-infra` — composition of the pricing domain with its ports.
//!
//! The domain crates stay pure; this crate wires the façade to a gold-price
//! repository and an event bus, and owns the logging at that boundary.

pub mod runtime;


pub use runtime::{PricingRuntime, RuntimeError};
