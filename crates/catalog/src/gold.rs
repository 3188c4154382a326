//! Gold purities, baseline prices and market price records.
//!
//! Catalog prices are quoted per chỉ (3.75 g) and converted to per-gram
//! values inside the calculator.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kimhoan_core::{round_vnd, DomainError, ValueObject, Vnd};

/// Grams per chỉ, the traditional Vietnamese gold-trading unit.
pub const CHI_TO_GRAM: f64 = 3.75;

/// Gold purity, keyed by the Vietnamese jewelry-industry purity code.
///
/// Closed set: integrating a new purity is a source change here, not a
/// runtime lookup that silently resolves to a plausible number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoldType {
    /// 18K (75.0%), the workhorse purity for stone-set jewelry.
    #[serde(rename = "750")]
    G750,
    /// 14K (58.5%).
    #[serde(rename = "585")]
    G585,
    /// 10K (41.6%).
    #[serde(rename = "416")]
    G416,
    /// SJC ring gold (99.0%).
    #[serde(rename = "990")]
    G990,
    /// 24K (99.9%).
    #[serde(rename = "999")]
    G999,
}

impl GoldType {
    /// Every gold type, in catalog order.
    pub const ALL: [GoldType; 5] = [
        GoldType::G750,
        GoldType::G585,
        GoldType::G416,
        GoldType::G990,
        GoldType::G999,
    ];

    /// Purity code as printed on the price sheet.
    pub const fn code(self) -> &'static str {
        match self {
            GoldType::G750 => "750",
            GoldType::G585 => "585",
            GoldType::G416 => "416",
            GoldType::G990 => "990",
            GoldType::G999 => "999",
        }
    }

    pub const fn karat_label(self) -> &'static str {
        match self {
            GoldType::G750 => "18K",
            GoldType::G585 => "14K",
            GoldType::G416 => "10K",
            GoldType::G990 => "SJC Nhẫn",
            GoldType::G999 => "24K",
        }
    }

    pub const fn purity_percent(self) -> f64 {
        match self {
            GoldType::G750 => 75.0,
            GoldType::G585 => 58.5,
            GoldType::G416 => 41.6,
            GoldType::G990 => 99.0,
            GoldType::G999 => 99.9,
        }
    }

    /// Baseline buy-in price per chỉ from the 2025 price sheet.
    ///
    /// Used when a pricing request carries no market-price override.
    pub const fn baseline_price_per_chi(self) -> Vnd {
        match self {
            GoldType::G750 => 11_409_091,
            GoldType::G585 => 9_009_091,
            GoldType::G416 => 6_550_909,
            GoldType::G990 => 14_400_000,
            GoldType::G999 => 15_000_000,
        }
    }

    /// Stable position in [`GoldType::ALL`]; used for per-type storage.
    pub const fn index(self) -> usize {
        match self {
            GoldType::G750 => 0,
            GoldType::G585 => 1,
            GoldType::G416 => 2,
            GoldType::G990 => 3,
            GoldType::G999 => 4,
        }
    }
}

impl core::fmt::Display for GoldType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GoldType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "750" => Ok(GoldType::G750),
            "585" => Ok(GoldType::G585),
            "416" => Ok(GoldType::G416),
            "990" => Ok(GoldType::G990),
            "999" => Ok(GoldType::G999),
            other => Err(DomainError::invalid_code(format!(
                "GoldType: unknown purity code '{other}'"
            ))),
        }
    }
}

impl ValueObject for GoldType {}

/// A market price observation for one gold type.
///
/// Append-only: every update produces a fresh record; history is never
/// rewritten. `price_per_gram` is derived from the per-chỉ quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldMarketPrice {
    pub gold_type: GoldType,
    /// VND per chỉ (3.75 g).
    pub price_per_chi: Vnd,
    /// VND per gram, `round(price_per_chi / 3.75)`.
    pub price_per_gram: Vnd,
    pub updated_at: DateTime<Utc>,
    /// Where the quote came from, e.g. `manual`, `sjc_api`, `pnj_api`.
    pub source: String,
}

impl GoldMarketPrice {
    pub fn new(
        gold_type: GoldType,
        price_per_chi: Vnd,
        source: impl Into<String>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            gold_type,
            price_per_chi,
            price_per_gram: round_vnd(price_per_chi as f64 / CHI_TO_GRAM),
            updated_at,
            source: source.into(),
        }
    }
}

impl ValueObject for GoldMarketPrice {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_str() {
        for gold_type in GoldType::ALL {
            assert_eq!(gold_type.code().parse::<GoldType>().unwrap(), gold_type);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "617".parse::<GoldType>().unwrap_err();
        match err {
            DomainError::InvalidCode(msg) => assert!(msg.contains("617")),
            other => panic!("Expected InvalidCode, got {other:?}"),
        }
    }

    #[test]
    fn baseline_prices_match_the_price_sheet() {
        assert_eq!(GoldType::G750.baseline_price_per_chi(), 11_409_091);
        assert_eq!(GoldType::G585.baseline_price_per_chi(), 9_009_091);
        assert_eq!(GoldType::G416.baseline_price_per_chi(), 6_550_909);
        assert_eq!(GoldType::G990.baseline_price_per_chi(), 14_400_000);
        assert_eq!(GoldType::G999.baseline_price_per_chi(), 15_000_000);
    }

    #[test]
    fn indexes_match_catalog_order() {
        for (position, gold_type) in GoldType::ALL.iter().enumerate() {
            assert_eq!(gold_type.index(), position);
        }
    }

    #[test]
    fn market_price_derives_per_gram_from_per_chi() {
        let price = GoldMarketPrice::new(GoldType::G750, 11_409_091, "manual", Utc::now());
        // 11,409,091 / 3.75 = 3,042,424.27
        assert_eq!(price.price_per_gram, 3_042_424);
        assert_eq!(price.gold_type, GoldType::G750);
        assert_eq!(price.source, "manual");
    }

    #[test]
    fn serde_uses_purity_codes() {
        let json = serde_json::to_string(&GoldType::G990).unwrap();
        assert_eq!(json, "\"990\"");
        let back: GoldType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GoldType::G990);
    }
}
