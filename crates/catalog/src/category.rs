//! Product categories and their labor-formula families.
//!
//! The registry decouples "which category uses which formula shape" from the
//! formula arithmetic itself, so both can be audited and tested on their own.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use kimhoan_core::{DomainError, ValueObject};

/// The five mathematical shapes labor-cost rules follow.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaborFormula {
    /// Fixed price rows keyed on weight/stone bounds and unit.
    FixedTable,
    /// Base × (1 + max(0, N/T − 1) × 0.4).
    ScaleType1,
    /// Base × max(1, N/T).
    ScaleType2,
    /// Base + N × 10%.
    Additive,
    /// max(floor, E × rate + N × 12% + bonus).
    Composite,
}

/// The ten jewelry categories on the price sheet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "BONG_TAI")]
    Earrings,
    #[serde(rename = "DAY_CHUYEN")]
    Necklace,
    #[serde(rename = "MAT_DAY")]
    Pendant,
    #[serde(rename = "VONG_TAY")]
    Bracelet,
    #[serde(rename = "LAC_TAY")]
    Bangle,
    #[serde(rename = "NHAN_CUOI")]
    WeddingRing,
    #[serde(rename = "NHAN_KET")]
    EngagementRing,
    #[serde(rename = "NHAN_NAM")]
    MensRing,
    #[serde(rename = "NHAN_NU")]
    WomensRing,
    #[serde(rename = "PHU_KIEN")]
    Accessories,
}

impl ProductCategory {
    /// Every category, in price-sheet order.
    pub const ALL: [ProductCategory; 10] = [
        ProductCategory::Earrings,
        ProductCategory::Necklace,
        ProductCategory::Pendant,
        ProductCategory::Bracelet,
        ProductCategory::Bangle,
        ProductCategory::WeddingRing,
        ProductCategory::EngagementRing,
        ProductCategory::MensRing,
        ProductCategory::WomensRing,
        ProductCategory::Accessories,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            ProductCategory::Earrings => "BONG_TAI",
            ProductCategory::Necklace => "DAY_CHUYEN",
            ProductCategory::Pendant => "MAT_DAY",
            ProductCategory::Bracelet => "VONG_TAY",
            ProductCategory::Bangle => "LAC_TAY",
            ProductCategory::WeddingRing => "NHAN_CUOI",
            ProductCategory::EngagementRing => "NHAN_KET",
            ProductCategory::MensRing => "NHAN_NAM",
            ProductCategory::WomensRing => "NHAN_NU",
            ProductCategory::Accessories => "PHU_KIEN",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ProductCategory::Earrings => "Earrings",
            ProductCategory::Necklace => "Necklace",
            ProductCategory::Pendant => "Pendant",
            ProductCategory::Bracelet => "Bracelet",
            ProductCategory::Bangle => "Bangle",
            ProductCategory::WeddingRing => "Wedding Ring",
            ProductCategory::EngagementRing => "Engagement Ring",
            ProductCategory::MensRing => "Men Ring",
            ProductCategory::WomensRing => "Women Ring",
            ProductCategory::Accessories => "Accessories",
        }
    }

    pub const fn label_vi(self) -> &'static str {
        match self {
            ProductCategory::Earrings => "Bông Tai",
            ProductCategory::Necklace => "Dây Chuyền",
            ProductCategory::Pendant => "Mặt Dây",
            ProductCategory::Bracelet => "Vòng Tay",
            ProductCategory::Bangle => "Lắc Tay",
            ProductCategory::WeddingRing => "Nhẫn Cưới",
            ProductCategory::EngagementRing => "Nhẫn Kết",
            ProductCategory::MensRing => "Nhẫn Nam",
            ProductCategory::WomensRing => "Nhẫn Nữ",
            ProductCategory::Accessories => "Phụ Kiện",
        }
    }

    /// Which formula family prices this category's labor.
    pub const fn labor_formula(self) -> LaborFormula {
        match self {
            ProductCategory::Earrings | ProductCategory::WeddingRing => LaborFormula::FixedTable,
            ProductCategory::Necklace => LaborFormula::ScaleType1,
            ProductCategory::Pendant
            | ProductCategory::Bracelet
            | ProductCategory::Bangle
            | ProductCategory::EngagementRing
            | ProductCategory::MensRing => LaborFormula::ScaleType2,
            ProductCategory::WomensRing => LaborFormula::Additive,
            ProductCategory::Accessories => LaborFormula::Composite,
        }
    }
}

impl core::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ProductCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BONG_TAI" => Ok(ProductCategory::Earrings),
            "DAY_CHUYEN" => Ok(ProductCategory::Necklace),
            "MAT_DAY" => Ok(ProductCategory::Pendant),
            "VONG_TAY" => Ok(ProductCategory::Bracelet),
            "LAC_TAY" => Ok(ProductCategory::Bangle),
            "NHAN_CUOI" => Ok(ProductCategory::WeddingRing),
            "NHAN_KET" => Ok(ProductCategory::EngagementRing),
            "NHAN_NAM" => Ok(ProductCategory::MensRing),
            "NHAN_NU" => Ok(ProductCategory::WomensRing),
            "PHU_KIEN" => Ok(ProductCategory::Accessories),
            other => Err(DomainError::invalid_code(format!(
                "ProductCategory: unknown category code '{other}'"
            ))),
        }
    }
}

impl ValueObject for ProductCategory {}

/// Unit of sale: single piece or pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "CHIEC")]
    Chiec,
    #[serde(rename = "DOI")]
    Doi,
}

impl Unit {
    pub const fn label_vi(self) -> &'static str {
        match self {
            Unit::Chiec => "Chiếc",
            Unit::Doi => "Đôi",
        }
    }
}

impl FromStr for Unit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHIEC" => Ok(Unit::Chiec),
            "DOI" => Ok(Unit::Doi),
            other => Err(DomainError::invalid_code(format!(
                "Unit: unknown unit code '{other}'"
            ))),
        }
    }
}

/// Description markers that always force a manual quote, whatever the
/// numbers say: oversized, fully stone-set, imported and VIP work.
pub const CUSTOM_QUOTE_TRIGGERS: [&str; 10] = [
    "VIP",
    "siêu to",
    "full tấm",
    "đặc biệt",
    "max tấm",
    "khủng",
    "KAT",
    "dây vàng nhiều",
    "hàng nhập",
    "cao cấp",
];

/// Case-insensitive substring scan of a design description against
/// [`CUSTOM_QUOTE_TRIGGERS`].
pub fn triggers_custom_quote(description: &str) -> bool {
    let haystack = description.to_uppercase();
    CUSTOM_QUOTE_TRIGGERS
        .iter()
        .any(|trigger| haystack.contains(&trigger.to_uppercase()))
}
