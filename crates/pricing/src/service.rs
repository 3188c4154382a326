//! Pricing façade: the two operations other modules call.

use chrono::Utc;

use kimhoan_catalog::GoldMarketPrice;
use kimhoan_core::DomainResult;

use crate::calculator::{calculate_full_price, PricingBreakdown, PricingInput};
use crate::gold_price::{execute_update_gold_price, UpdateGoldPrice};

/// Stateless façade over the pure pricing use cases.
///
/// Stamps wall-clock time and translates invalid input into errors; every
/// business-rule outcome stays inside the returned breakdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingService;

impl PricingService {
    pub fn new() -> Self {
        Self
    }

    /// Price one item.
    pub fn calculate_price(&self, input: PricingInput) -> DomainResult<PricingBreakdown> {
        calculate_full_price(input, Utc::now())
    }

    /// Validate and build a new market price record.
    pub fn update_gold_price(&self, command: &UpdateGoldPrice) -> DomainResult<GoldMarketPrice> {
        execute_update_gold_price(command, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use kimhoan_catalog::{GoldType, ProductCategory};
    use kimhoan_core::DomainError;

    use super::*;

    #[test]
    fn calculate_price_returns_a_stamped_breakdown() {
        let service = PricingService::new();
        let before = Utc::now();
        let breakdown = service
            .calculate_price(PricingInput {
                product_code: "NN-0042".to_string(),
                category: ProductCategory::WomensRing,
                gold_type: GoldType::G750,
                gold_weight_gram: 2.0,
                stone_value_vnd: 10_000_000,
                design_description: String::new(),
                unit: None,
                markup_tier: None,
                gold_market_price_override: None,
                special_construction: false,
            })
            .unwrap();

        assert_eq!(breakdown.labor_amount_vnd, 3_000_000);
        assert!(breakdown.calculated_at >= before);
    }

    #[test]
    fn invalid_input_surfaces_as_a_validation_error() {
        let service = PricingService::new();
        let err = service
            .calculate_price(PricingInput {
                product_code: "NN-0042".to_string(),
                category: ProductCategory::WomensRing,
                gold_type: GoldType::G750,
                gold_weight_gram: -1.0,
                stone_value_vnd: 0,
                design_description: String::new(),
                unit: None,
                markup_tier: None,
                gold_market_price_override: None,
                special_construction: false,
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn update_gold_price_validates_and_stamps() {
        let service = PricingService::new();
        let before = Utc::now();
        let price = service
            .update_gold_price(&UpdateGoldPrice {
                gold_type: GoldType::G750,
                new_price_per_chi: 11_800_000,
                source: "manual".to_string(),
            })
            .unwrap();
        assert_eq!(price.price_per_chi, 11_800_000);
        assert!(price.updated_at >= before);

        let err = service
            .update_gold_price(&UpdateGoldPrice {
                gold_type: GoldType::G750,
                new_price_per_chi: 0,
                source: "manual".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
