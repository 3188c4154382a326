//! Full price calculation.
//!
//! Sell price = (gold price × weight + stone/plate value + labor) × markup.
//! The calculator is a pure function of its input plus the static catalogs;
//! it performs no IO and is safe to call concurrently without coordination.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kimhoan_catalog::{GoldMarketPrice, GoldType, MarkupTier, ProductCategory, Unit, CHI_TO_GRAM};
use kimhoan_core::{round_vnd, DomainError, DomainResult, ValueObject, Vnd};

use crate::labor::{calculate_labor_cost, LaborCostInput, LaborCostResult};

/// One pricing request. Constructed per call, immutable, not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    pub product_code: String,
    pub category: ProductCategory,
    pub gold_type: GoldType,
    /// Gold weight after finishing, grams. Must be non-negative.
    pub gold_weight_gram: f64,
    /// Stone/plate value, VND. Must be non-negative.
    pub stone_value_vnd: Vnd,
    pub design_description: String,
    /// Unit of sale; required only by the fixed-table categories.
    pub unit: Option<Unit>,
    /// Markup tier; defaults to [`MarkupTier::Standard`] when absent.
    pub markup_tier: Option<MarkupTier>,
    /// Live market price; overrides the baseline catalog price when present.
    pub gold_market_price_override: Option<GoldMarketPrice>,
    /// Curban construction flag, read only by the necklace formula.
    pub special_construction: bool,
}

impl ValueObject for PricingInput {}

/// Where the gold price used in a breakdown came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoldPriceSource {
    Baseline,
    MarketOverride,
}

/// Auditable result of one price calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// The request this breakdown answers, kept for traceability.
    pub input: PricingInput,
    /// Gold price per chỉ actually used.
    pub gold_price_per_chi: Vnd,
    pub gold_price_source: GoldPriceSource,
    /// round(price-per-gram × weight).
    pub gold_component_vnd: Vnd,
    /// Stone/plate value, passed through unchanged.
    pub stone_component_vnd: Vnd,
    pub labor_result: LaborCostResult,
    /// The labor amount actually added to the subtotal.
    pub labor_amount_vnd: Vnd,
    /// gold + stone + labor.
    pub subtotal_vnd: Vnd,
    pub markup_tier: MarkupTier,
    pub markup_multiplier: f64,
    /// round(subtotal × multiplier).
    pub final_price_vnd: Vnd,
    /// Advisory: the number is provisional, a human must quote manually.
    pub requires_custom_quote: bool,
    pub calculated_at: DateTime<Utc>,
}

impl ValueObject for PricingBreakdown {}

/// Compute a full, auditable price for one item.
///
/// Fails with [`DomainError::Validation`] when the gold weight is negative
/// or non-finite, or the stone value is negative. Business-rule outcomes
/// (manual quote, missing inputs) never fail — they flow through
/// [`LaborCostResult`] and `requires_custom_quote`.
pub fn calculate_full_price(
    input: PricingInput,
    calculated_at: DateTime<Utc>,
) -> DomainResult<PricingBreakdown> {
    if !input.gold_weight_gram.is_finite() || input.gold_weight_gram < 0.0 {
        return Err(DomainError::validation(
            "gold weight must be a non-negative number of grams",
        ));
    }
    if input.stone_value_vnd < 0 {
        return Err(DomainError::validation(
            "stone value must be a non-negative VND amount",
        ));
    }

    let (gold_price_per_chi, gold_price_source) = match &input.gold_market_price_override {
        Some(market) => (market.price_per_chi, GoldPriceSource::MarketOverride),
        None => (
            input.gold_type.baseline_price_per_chi(),
            GoldPriceSource::Baseline,
        ),
    };

    let price_per_gram = gold_price_per_chi as f64 / CHI_TO_GRAM;
    let gold_component_vnd = round_vnd(price_per_gram * input.gold_weight_gram);
    let stone_component_vnd = input.stone_value_vnd;

    let labor_result = calculate_labor_cost(&LaborCostInput {
        category: input.category,
        gold_weight_gram: input.gold_weight_gram,
        stone_value_vnd: input.stone_value_vnd,
        design_description: input.design_description.clone(),
        unit: input.unit,
        special_construction: input.special_construction,
    });
    let labor_amount_vnd = labor_result.amount_applied();
    let requires_custom_quote = labor_result.requires_custom_quote();

    let subtotal_vnd = gold_component_vnd + stone_component_vnd + labor_amount_vnd;

    let markup_tier = input.markup_tier.unwrap_or_default();
    let markup_multiplier = markup_tier.multiplier();
    let final_price_vnd = round_vnd(subtotal_vnd as f64 * markup_multiplier);

    Ok(PricingBreakdown {
        input,
        gold_price_per_chi,
        gold_price_source,
        gold_component_vnd,
        stone_component_vnd,
        labor_result,
        labor_amount_vnd,
        subtotal_vnd,
        markup_tier,
        markup_multiplier,
        final_price_vnd,
        requires_custom_quote,
        calculated_at,
    })
}
