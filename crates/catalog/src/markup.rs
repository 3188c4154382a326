//! Markup tiers: the margin multiplier applied to a full subtotal.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use kimhoan_core::{DomainError, ValueObject};

/// Markup tier applied once, multiplicatively, to the whole subtotal
/// (gold + stone + labor) — never to individual components.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarkupTier {
    /// Regular stock items.
    Standard,
    /// High-end / made-to-order designs.
    Premium,
    /// Luxury, limited edition, VIP clientele.
    Luxury,
}

impl MarkupTier {
    pub const ALL: [MarkupTier; 3] = [MarkupTier::Standard, MarkupTier::Premium, MarkupTier::Luxury];

    pub const fn code(self) -> &'static str {
        match self {
            MarkupTier::Standard => "STANDARD",
            MarkupTier::Premium => "PREMIUM",
            MarkupTier::Luxury => "LUXURY",
        }
    }

    /// Multiplier over the subtotal; strictly greater than 1.0.
    pub const fn multiplier(self) -> f64 {
        match self {
            MarkupTier::Standard => 1.15,
            MarkupTier::Premium => 1.20,
            MarkupTier::Luxury => 1.30,
        }
    }

    pub const fn percent_label(self) -> &'static str {
        match self {
            MarkupTier::Standard => "15%",
            MarkupTier::Premium => "20%",
            MarkupTier::Luxury => "30%",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            MarkupTier::Standard => "Sản phẩm thông thường",
            MarkupTier::Premium => "Sản phẩm cao cấp / thiết kế riêng",
            MarkupTier::Luxury => "Hàng luxury / limited edition / VIP",
        }
    }
}

impl Default for MarkupTier {
    /// Tier used when a pricing request does not name one.
    fn default() -> Self {
        MarkupTier::Standard
    }
}

impl core::fmt::Display for MarkupTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MarkupTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STANDARD" => Ok(MarkupTier::Standard),
            "PREMIUM" => Ok(MarkupTier::Premium),
            "LUXURY" => Ok(MarkupTier::Luxury),
            other => Err(DomainError::invalid_code(format!(
                "MarkupTier: unknown tier code '{other}'"
            ))),
        }
    }
}

impl ValueObject for MarkupTier {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_multiplier_is_strictly_above_one() {
        for tier in MarkupTier::ALL {
            assert!(tier.multiplier() > 1.0, "{tier} multiplier must exceed 1.0");
        }
    }

    #[test]
    fn standard_is_the_default_tier() {
        assert_eq!(MarkupTier::default(), MarkupTier::Standard);
        assert_eq!(MarkupTier::default().multiplier(), 1.15);
    }

    #[test]
    fn codes_round_trip_through_from_str() {
        for tier in MarkupTier::ALL {
            assert_eq!(tier.code().parse::<MarkupTier>().unwrap(), tier);
        }
    }

    #[test]
    fn unknown_tier_code_is_rejected() {
        assert!(matches!(
            "GOLD".parse::<MarkupTier>(),
            Err(DomainError::InvalidCode(_))
        ));
    }
}
