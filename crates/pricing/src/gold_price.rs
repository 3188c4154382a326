//! Gold market price update use case and its domain event.
//!
//! The use case validates and constructs; persisting the record and
//! notifying other modules is the runtime's job, so the domain stays pure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kimhoan_catalog::{GoldMarketPrice, GoldType};
use kimhoan_core::{DomainError, DomainResult, Vnd};
use kimhoan_events::Event;

/// Command: accept a new market quote for one gold type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateGoldPrice {
    pub gold_type: GoldType,
    /// VND per chỉ; must be strictly positive.
    pub new_price_per_chi: Vnd,
    /// Quote origin, e.g. `manual`, `sjc_api`, `pnj_api`.
    pub source: String,
}

/// Validate a quote and build the market price record.
///
/// Fails with [`DomainError::Validation`] when the quoted price is not
/// strictly positive. Never touches storage.
pub fn execute_update_gold_price(
    command: &UpdateGoldPrice,
    updated_at: DateTime<Utc>,
) -> DomainResult<GoldMarketPrice> {
    if command.new_price_per_chi <= 0 {
        return Err(DomainError::validation(
            "gold price per chỉ must be greater than zero",
        ));
    }

    Ok(GoldMarketPrice::new(
        command.gold_type,
        command.new_price_per_chi,
        command.source.clone(),
        updated_at,
    ))
}

/// Event: a gold market price was accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldMarketPriceUpdated {
    pub gold_type: GoldType,
    pub price_per_chi: Vnd,
    pub price_per_gram: Vnd,
    pub source: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PricingEvent {
    GoldMarketPriceUpdated(GoldMarketPriceUpdated),
}

impl PricingEvent {
    /// Build the update notification for an accepted price record.
    pub fn price_updated(price: &GoldMarketPrice) -> Self {
        PricingEvent::GoldMarketPriceUpdated(GoldMarketPriceUpdated {
            gold_type: price.gold_type,
            price_per_chi: price.price_per_chi,
            price_per_gram: price.price_per_gram,
            source: price.source.clone(),
            occurred_at: price.updated_at,
        })
    }
}

impl Event for PricingEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PricingEvent::GoldMarketPriceUpdated(_) => "pricing.gold_price.updated",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            PricingEvent::GoldMarketPriceUpdated(e) => e.occurred_at,
        }
    }
}
