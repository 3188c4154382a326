use chrono::{DateTime, Utc};

/// A domain event: an immutable fact another module may react to.
///
/// Implementations live in the domain crates (e.g. a gold-price update in
/// the pricing crate); consumers only depend on this trait.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable dotted event name (e.g. "pricing.gold_price.updated").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
