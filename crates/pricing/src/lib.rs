//! Pricing domain module.
//!
//! This crate contains the labor-cost engine, the full price calculator,
//! the gold-price update use case and the gold-price repository port,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod calculator;
pub mod gold_price;
pub mod labor;
pub mod repository;
pub mod service;

pub use calculator::{
    calculate_full_price, GoldPriceSource, PricingBreakdown, PricingInput,
};
pub use gold_price::{
    execute_update_gold_price, GoldMarketPriceUpdated, PricingEvent, UpdateGoldPrice,
};
pub use labor::{calculate_labor_cost, LaborCostInput, LaborCostResult, FALLBACK_LABOR_VND};
pub use repository::{
    GoldPriceRepository, GoldPriceRepositoryError, InMemoryGoldPriceRepository,
};
pub use service::PricingService;
