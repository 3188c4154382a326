//! Pricing runtime: façade + repository + event bus.
//!
//! `update_gold_price` is the one write path: validate and build the record,
//! append it to the per-type history, then publish the change notification.
//! The record is persisted before publication, so republishing after a
//! failed publish is always safe.

use thiserror::Error;
use uuid::Uuid;

use kimhoan_catalog::{GoldMarketPrice, GoldType};
use kimhoan_core::DomainError;
use kimhoan_events::{EventBus, EventEnvelope};
use kimhoan_pricing::{
    GoldPriceRepository, GoldPriceRepositoryError, PricingBreakdown, PricingEvent, PricingInput,
    PricingService, UpdateGoldPrice,
};

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] GoldPriceRepositoryError),

    #[error("failed to publish price update: {0}")]
    Publish(String),
}

/// Wires the pricing façade to a gold-price repository and an event bus.
pub struct PricingRuntime<R, B> {
    service: PricingService,
    repository: R,
    bus: B,
}

impl<R, B> PricingRuntime<R, B>
where
    R: GoldPriceRepository,
    B: EventBus<EventEnvelope<PricingEvent>>,
{
    pub fn new(repository: R, bus: B) -> Self {
        Self {
            service: PricingService::new(),
            repository,
            bus,
        }
    }

    /// Price one item with the caller-supplied input as-is.
    pub fn calculate_price(&self, input: PricingInput) -> Result<PricingBreakdown, RuntimeError> {
        let breakdown = self.service.calculate_price(input)?;
        tracing::debug!(
            product_code = %breakdown.input.product_code,
            category = %breakdown.input.category,
            final_price_vnd = breakdown.final_price_vnd,
            requires_custom_quote = breakdown.requires_custom_quote,
            "price calculated"
        );
        Ok(breakdown)
    }

    /// Price one item against the latest stored market price.
    ///
    /// When the input carries no override and the repository holds a quote
    /// for the item's gold type, that quote is used instead of the baseline.
    pub fn calculate_price_at_market(
        &self,
        mut input: PricingInput,
    ) -> Result<PricingBreakdown, RuntimeError> {
        if input.gold_market_price_override.is_none() {
            input.gold_market_price_override = self.repository.latest_price(input.gold_type)?;
        }
        self.calculate_price(input)
    }

    /// Accept a new gold quote: validate, append to history, publish.
    pub fn update_gold_price(
        &self,
        command: &UpdateGoldPrice,
    ) -> Result<GoldMarketPrice, RuntimeError> {
        let price = self.service.update_gold_price(command)?;
        self.repository.save_price(price.clone())?;

        let correlation_id = Uuid::now_v7();
        let envelope = EventEnvelope::new(
            Uuid::now_v7(),
            correlation_id,
            PricingEvent::price_updated(&price),
        );
        self.bus
            .publish(envelope)
            .map_err(|e| RuntimeError::Publish(format!("{e:?}")))?;

        tracing::info!(
            gold_type = %price.gold_type,
            price_per_chi = price.price_per_chi,
            source = %price.source,
            %correlation_id,
            "gold market price updated"
        );
        Ok(price)
    }

    /// Latest stored quote for a gold type.
    ///
    /// Fails with [`DomainError::NotFound`] when no quote was ever saved.
    pub fn latest_market_price(&self, gold_type: GoldType) -> Result<GoldMarketPrice, RuntimeError> {
        self.repository
            .latest_price(gold_type)?
            .ok_or_else(|| RuntimeError::Domain(DomainError::not_found()))
    }

    /// Stored quotes for the last `days` days, oldest first.
    pub fn market_price_history(
        &self,
        gold_type: GoldType,
        days: u32,
    ) -> Result<Vec<GoldMarketPrice>, RuntimeError> {
        Ok(self.repository.price_history(gold_type, days)?)
    }
}
