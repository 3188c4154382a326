//! Static pricing catalogs (price sheet 2025).
//!
//! This crate contains the **closed** reference data the pricing engine
//! dispatches on: gold purities with baseline prices, markup tiers, product
//! categories with their labor-formula families, and the custom-quote
//! trigger keywords. Everything here is immutable at runtime; adding an
//! entry is a source change that every consuming `match` surfaces at
//! compile time.

pub mod category;
pub mod gold;
pub mod markup;

pub use category::{
    triggers_custom_quote, LaborFormula, ProductCategory, Unit, CUSTOM_QUOTE_TRIGGERS,
};
pub use gold::{GoldMarketPrice, GoldType, CHI_TO_GRAM};
pub use markup::MarkupTier;
