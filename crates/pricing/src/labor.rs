//! Labor-cost calculation engine (công thợ).
//!
//! Transcribes the 2025 price sheet: ten product categories priced by five
//! formula families. Inputs follow the sheet's column names: E = gold weight
//! after finishing (gram), N = stone/plate value (VND), H = design
//! description, L = unit (piece/pair).
//!
//! Every rule set is an ordered table evaluated first-match-wins, so the
//! priority of overlapping rows is visible in one place and every bucket
//! boundary can be exercised by a test.

use serde::{Deserialize, Serialize};

use kimhoan_catalog::{triggers_custom_quote, LaborFormula, ProductCategory, Unit};
use kimhoan_core::{round_vnd, Vnd};

/// Conservative labor amount used when a formula cannot run; the result is
/// flagged so a human reviews the quote.
pub const FALLBACK_LABOR_VND: Vnd = 3_000_000;

/// Stone-value floor for the privileged Curban necklace rung.
const CURBAN_STONE_FLOOR_VND: Vnd = 200_000_000;

/// Everything the engine needs to price fabrication labor for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborCostInput {
    pub category: ProductCategory,
    /// E — gold weight after finishing, grams.
    pub gold_weight_gram: f64,
    /// N — stone/plate value, VND.
    pub stone_value_vnd: Vnd,
    /// H — free-text design description.
    pub design_description: String,
    /// L — unit of sale; only the fixed-table categories require it.
    pub unit: Option<Unit>,
    /// Curban construction flag; only the necklace formula reads it.
    pub special_construction: bool,
}

/// Outcome of a labor-cost calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaborCostResult {
    /// A concrete labor price was computed.
    Calculated { amount: Vnd },
    /// The design must be quoted manually; no amount is computed.
    CustomQuote { reason: String },
    /// Required inputs (unit, weight) are missing; not yet computable.
    Waiting { reason: String },
    /// No gold weight and no stone value; nothing to price.
    Zero,
    /// Unexpected category/input combination; the caller still gets a
    /// usable, conservative number plus a flag for human review.
    Error { fallback_amount: Vnd, reason: String },
}

impl LaborCostResult {
    /// The amount a price breakdown actually adds to its subtotal.
    pub fn amount_applied(&self) -> Vnd {
        match self {
            LaborCostResult::Calculated { amount } => *amount,
            LaborCostResult::Error {
                fallback_amount, ..
            } => *fallback_amount,
            LaborCostResult::CustomQuote { .. }
            | LaborCostResult::Waiting { .. }
            | LaborCostResult::Zero => 0,
        }
    }

    /// True exactly for the outcomes that need a human quote before sale.
    pub fn requires_custom_quote(&self) -> bool {
        matches!(
            self,
            LaborCostResult::CustomQuote { .. } | LaborCostResult::Waiting { .. }
        )
    }
}

/// Weight interval with per-bound inclusivity. Unbounded ends use infinity.
#[derive(Debug, Clone, Copy)]
struct WeightRange {
    min: f64,
    min_inclusive: bool,
    max: f64,
    max_inclusive: bool,
}

impl WeightRange {
    /// e ≤ max
    const fn at_most(max: f64) -> Self {
        Self {
            min: f64::NEG_INFINITY,
            min_inclusive: false,
            max,
            max_inclusive: true,
        }
    }

    /// e > min
    const fn more_than(min: f64) -> Self {
        Self {
            min,
            min_inclusive: false,
            max: f64::INFINITY,
            max_inclusive: false,
        }
    }

    /// e ≥ min
    const fn at_least(min: f64) -> Self {
        Self {
            min,
            min_inclusive: true,
            max: f64::INFINITY,
            max_inclusive: false,
        }
    }

    /// min ≤ e ≤ max
    const fn inclusive(min: f64, max: f64) -> Self {
        Self {
            min,
            min_inclusive: true,
            max,
            max_inclusive: true,
        }
    }

    /// min < e < max
    const fn exclusive(min: f64, max: f64) -> Self {
        Self {
            min,
            min_inclusive: false,
            max,
            max_inclusive: false,
        }
    }

    /// min < e ≤ max
    const fn over_up_to(min: f64, max: f64) -> Self {
        Self {
            min,
            min_inclusive: false,
            max,
            max_inclusive: true,
        }
    }

    /// Matches every weight.
    const fn any() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            min_inclusive: false,
            max: f64::INFINITY,
            max_inclusive: true,
        }
    }

    fn contains(&self, e: f64) -> bool {
        let above = if self.min_inclusive {
            e >= self.min
        } else {
            e > self.min
        };
        let below = if self.max_inclusive {
            e <= self.max
        } else {
            e < self.max
        };
        above && below
    }
}

/// Fixed-table row: weight bound, optional stone cap, fixed amount.
struct FixedRule {
    weight: WeightRange,
    max_stone: Option<Vnd>,
    amount: Vnd,
}

/// Weight bucket selecting a (base, threshold) pair for the scale formulas.
struct ScaleBucket {
    weight: WeightRange,
    base: Vnd,
    threshold: Vnd,
}

/// Base-selection row for the additive formula: weight bound, optional
/// halo-keyword requirement, optional stone floor.
struct AdditiveRule {
    weight: WeightRange,
    requires_halo: bool,
    min_stone: Option<Vnd>,
    base: Vnd,
}

const EARRING_PIECE_RULES: &[FixedRule] = &[
    FixedRule { weight: WeightRange::at_most(0.6), max_stone: None, amount: 500_000 },
    FixedRule { weight: WeightRange::at_most(1.2), max_stone: None, amount: 1_000_000 },
    FixedRule { weight: WeightRange::at_most(2.0), max_stone: Some(20_000_000), amount: 1_000_000 },
    FixedRule { weight: WeightRange::at_most(2.0), max_stone: Some(30_000_000), amount: 1_500_000 },
    FixedRule { weight: WeightRange::at_most(2.0), max_stone: Some(80_000_000), amount: 2_500_000 },
];

const EARRING_PAIR_RULES: &[FixedRule] = &[
    FixedRule { weight: WeightRange::at_most(2.0), max_stone: Some(20_000_000), amount: 2_000_000 },
    FixedRule { weight: WeightRange::at_most(2.5), max_stone: Some(30_000_000), amount: 3_000_000 },
    FixedRule { weight: WeightRange::at_most(3.5), max_stone: Some(80_000_000), amount: 5_000_000 },
    FixedRule { weight: WeightRange::at_most(8.0), max_stone: Some(120_000_000), amount: 7_000_000 },
    FixedRule { weight: WeightRange::more_than(8.0), max_stone: None, amount: 10_000_000 },
];

const WEDDING_RING_PIECE_RULES: &[FixedRule] = &[
    FixedRule { weight: WeightRange::at_most(2.0), max_stone: Some(15_000_000), amount: 1_500_000 },
    FixedRule { weight: WeightRange::at_most(3.0), max_stone: Some(30_000_000), amount: 2_500_000 },
    FixedRule { weight: WeightRange::at_most(5.0), max_stone: Some(50_000_000), amount: 4_000_000 },
];

const WEDDING_RING_PAIR_RULES: &[FixedRule] = &[
    FixedRule { weight: WeightRange::at_most(3.0), max_stone: Some(20_000_000), amount: 3_000_000 },
    FixedRule { weight: WeightRange::at_most(5.0), max_stone: Some(40_000_000), amount: 5_000_000 },
    FixedRule { weight: WeightRange::at_most(8.0), max_stone: Some(80_000_000), amount: 8_000_000 },
];

/// Privileged Curban rung: flag + 15–25 g + stone value above the floor.
const NECKLACE_CURBAN_BUCKET: ScaleBucket = ScaleBucket {
    weight: WeightRange::inclusive(15.0, 25.0),
    base: 50_000_000,
    threshold: 200_000_000,
};

// Weights from 8 up to 12 g price on the default rung.
const NECKLACE_BUCKETS: &[ScaleBucket] = &[
    ScaleBucket { weight: WeightRange::over_up_to(15.0, 25.0), base: 35_000_000, threshold: 200_000_000 },
    ScaleBucket { weight: WeightRange::inclusive(12.0, 15.0), base: 32_000_000, threshold: 100_000_000 },
    ScaleBucket { weight: WeightRange::exclusive(5.0, 8.0), base: 28_000_000, threshold: 60_000_000 },
    ScaleBucket { weight: WeightRange::over_up_to(2.5, 5.0), base: 27_000_000, threshold: 30_000_000 },
    ScaleBucket { weight: WeightRange::any(), base: 25_000_000, threshold: 20_000_000 },
];

/// Small inscribed-lettering pendants price on their own rung.
const PENDANT_INSCRIBED_BUCKET: ScaleBucket = ScaleBucket {
    weight: WeightRange::at_most(3.0),
    base: 3_000_000,
    threshold: 30_000_000,
};

const PENDANT_BUCKETS: &[ScaleBucket] = &[
    ScaleBucket { weight: WeightRange::more_than(10.0), base: 12_000_000, threshold: 70_000_000 },
    ScaleBucket { weight: WeightRange::more_than(7.0), base: 8_000_000, threshold: 70_000_000 },
    ScaleBucket { weight: WeightRange::more_than(5.0), base: 6_000_000, threshold: 50_000_000 },
    ScaleBucket { weight: WeightRange::more_than(4.0), base: 5_000_000, threshold: 50_000_000 },
    ScaleBucket { weight: WeightRange::more_than(3.0), base: 4_000_000, threshold: 40_000_000 },
    ScaleBucket { weight: WeightRange::more_than(2.5), base: 3_000_000, threshold: 30_000_000 },
    ScaleBucket { weight: WeightRange::more_than(1.0), base: 2_500_000, threshold: 20_000_000 },
    ScaleBucket { weight: WeightRange::any(), base: 2_000_000, threshold: 10_000_000 },
];

const BRACELET_BUCKETS: &[ScaleBucket] = &[
    ScaleBucket { weight: WeightRange::more_than(5.0), base: 20_000_000, threshold: 50_000_000 },
    ScaleBucket { weight: WeightRange::at_least(3.0), base: 8_000_000, threshold: 30_000_000 },
    ScaleBucket { weight: WeightRange::any(), base: 5_000_000, threshold: 20_000_000 },
];

const BANGLE_BUCKETS: &[ScaleBucket] = &[
    ScaleBucket { weight: WeightRange::more_than(10.0), base: 15_000_000, threshold: 80_000_000 },
    ScaleBucket { weight: WeightRange::more_than(5.0), base: 10_000_000, threshold: 50_000_000 },
    ScaleBucket { weight: WeightRange::at_least(3.0), base: 7_000_000, threshold: 30_000_000 },
    ScaleBucket { weight: WeightRange::any(), base: 5_000_000, threshold: 20_000_000 },
];

const ENGAGEMENT_RING_BUCKETS: &[ScaleBucket] = &[
    ScaleBucket { weight: WeightRange::more_than(5.0), base: 8_000_000, threshold: 80_000_000 },
    ScaleBucket { weight: WeightRange::more_than(3.0), base: 5_000_000, threshold: 50_000_000 },
    ScaleBucket { weight: WeightRange::more_than(1.5), base: 3_000_000, threshold: 30_000_000 },
    ScaleBucket { weight: WeightRange::any(), base: 2_000_000, threshold: 20_000_000 },
];

const MENS_RING_BUCKETS: &[ScaleBucket] = &[
    ScaleBucket { weight: WeightRange::more_than(8.0), base: 10_000_000, threshold: 80_000_000 },
    ScaleBucket { weight: WeightRange::more_than(5.0), base: 7_000_000, threshold: 50_000_000 },
    ScaleBucket { weight: WeightRange::more_than(3.0), base: 5_000_000, threshold: 40_000_000 },
    ScaleBucket { weight: WeightRange::any(), base: 3_000_000, threshold: 20_000_000 },
];

/// The halo/stone tiers pick the base only; `+ N × 10%` always applies, so
/// the amount never drops when the stone value crosses a tier boundary.
const WOMENS_RING_BASE_RULES: &[AdditiveRule] = &[
    AdditiveRule { weight: WeightRange::more_than(3.0), requires_halo: true, min_stone: Some(100_000_000), base: 10_000_000 },
    AdditiveRule { weight: WeightRange::more_than(3.0), requires_halo: true, min_stone: Some(50_000_000), base: 8_000_000 },
    AdditiveRule { weight: WeightRange::more_than(3.0), requires_halo: true, min_stone: None, base: 5_000_000 },
    AdditiveRule { weight: WeightRange::more_than(3.0), requires_halo: false, min_stone: None, base: 3_000_000 },
    AdditiveRule { weight: WeightRange::at_least(2.0), requires_halo: false, min_stone: None, base: 2_000_000 },
    AdditiveRule { weight: WeightRange::at_least(1.0), requires_halo: false, min_stone: None, base: 1_500_000 },
    AdditiveRule { weight: WeightRange::more_than(0.0), requires_halo: false, min_stone: None, base: 1_000_000 },
];

const ADDITIVE_STONE_RATE: f64 = 0.1;

const COMPOSITE_FLOOR_VND: Vnd = 1_500_000;
const COMPOSITE_PER_GRAM_VND: f64 = 1_800_000.0;
const COMPOSITE_STONE_RATE: f64 = 0.12;
const COMPOSITE_COMPLEXITY_BONUS_VND: Vnd = 1_500_000;

/// Compute the labor-cost contribution for one item, or signal why it
/// cannot be computed.
///
/// The custom-quote keyword scan runs before any category-specific logic
/// and overrides every numeric branch. The engine never panics: anything it
/// cannot price degrades to [`LaborCostResult::Error`] with
/// [`FALLBACK_LABOR_VND`].
pub fn calculate_labor_cost(input: &LaborCostInput) -> LaborCostResult {
    if !input.gold_weight_gram.is_finite() {
        return error_fallback(format!(
            "{}: trọng lượng vàng không hợp lệ",
            input.category.code()
        ));
    }

    if triggers_custom_quote(&input.design_description) {
        return LaborCostResult::CustomQuote {
            reason: format!("{} thiết kế đặc biệt", input.category.label_vi()),
        };
    }

    match input.category.labor_formula() {
        LaborFormula::FixedTable => fixed_table(input),
        LaborFormula::ScaleType1 => scale_type_1(input),
        LaborFormula::ScaleType2 => scale_type_2(input),
        LaborFormula::Additive => additive(input),
        LaborFormula::Composite => composite(input),
    }
}

fn error_fallback(reason: String) -> LaborCostResult {
    LaborCostResult::Error {
        fallback_amount: FALLBACK_LABOR_VND,
        reason,
    }
}

/// Earrings and wedding rings: fixed rows keyed on unit, weight and stone
/// caps. Without a unit or a positive weight there is nothing to look up.
fn fixed_table(input: &LaborCostInput) -> LaborCostResult {
    let Some(unit) = input.unit else {
        return LaborCostResult::Waiting {
            reason: "thiếu đơn vị tính hoặc trọng lượng vàng".to_string(),
        };
    };
    if input.gold_weight_gram <= 0.0 {
        return LaborCostResult::Waiting {
            reason: "thiếu đơn vị tính hoặc trọng lượng vàng".to_string(),
        };
    }

    let (rules, out_of_table) = match (input.category, unit) {
        (ProductCategory::Earrings, Unit::Chiec) => {
            (EARRING_PIECE_RULES, "bông tai chiếc ngoài bảng giá")
        }
        (ProductCategory::Earrings, Unit::Doi) => {
            (EARRING_PAIR_RULES, "bông tai đôi ngoài bảng giá")
        }
        (ProductCategory::WeddingRing, Unit::Chiec) => {
            (WEDDING_RING_PIECE_RULES, "nhẫn cưới chiếc ngoài bảng giá")
        }
        (ProductCategory::WeddingRing, Unit::Doi) => {
            (WEDDING_RING_PAIR_RULES, "nhẫn cưới đôi ngoài bảng giá")
        }
        (other, _) => {
            return error_fallback(format!(
                "{}: không có bảng giá cố định cho hạng mục này",
                other.code()
            ));
        }
    };

    for rule in rules {
        let weight_ok = rule.weight.contains(input.gold_weight_gram);
        let stone_ok = rule
            .max_stone
            .is_none_or(|cap| input.stone_value_vnd <= cap);
        if weight_ok && stone_ok {
            return LaborCostResult::Calculated {
                amount: rule.amount,
            };
        }
    }

    LaborCostResult::CustomQuote {
        reason: out_of_table.to_string(),
    }
}

/// Necklaces: base × (1 + max(0, N/T − 1) × 0.4) over weight rungs, with a
/// privileged Curban rung checked first.
fn scale_type_1(input: &LaborCostInput) -> LaborCostResult {
    let e = input.gold_weight_gram;
    let n = input.stone_value_vnd;
    if e <= 0.0 || n <= 0 {
        return LaborCostResult::Zero;
    }

    let curban_applies = input.special_construction
        && NECKLACE_CURBAN_BUCKET.weight.contains(e)
        && n > CURBAN_STONE_FLOOR_VND;

    let bucket = if curban_applies {
        &NECKLACE_CURBAN_BUCKET
    } else {
        match NECKLACE_BUCKETS.iter().find(|b| b.weight.contains(e)) {
            Some(bucket) => bucket,
            None => {
                return error_fallback(format!(
                    "{}: không có bậc trọng lượng phù hợp",
                    input.category.code()
                ));
            }
        }
    };

    let ratio = n as f64 / bucket.threshold as f64;
    let factor = 1.0 + (ratio - 1.0).max(0.0) * 0.4;
    LaborCostResult::Calculated {
        amount: round_vnd(bucket.base as f64 * factor),
    }
}

/// Pendants, bracelets, bangles, engagement and men's rings:
/// base × max(1, N/T) over per-category weight rungs.
fn scale_type_2(input: &LaborCostInput) -> LaborCostResult {
    let e = input.gold_weight_gram;
    let n = input.stone_value_vnd;
    if e <= 0.0 && n <= 0 {
        return LaborCostResult::Zero;
    }

    // Inscribed-lettering pendants take their own rung before the general
    // weight rungs.
    if input.category == ProductCategory::Pendant
        && input.design_description.contains("chữ")
        && PENDANT_INSCRIBED_BUCKET.weight.contains(e)
    {
        return LaborCostResult::Calculated {
            amount: scale_2_amount(&PENDANT_INSCRIBED_BUCKET, n),
        };
    }

    let buckets = match input.category {
        ProductCategory::Pendant => PENDANT_BUCKETS,
        ProductCategory::Bracelet => BRACELET_BUCKETS,
        ProductCategory::Bangle => BANGLE_BUCKETS,
        ProductCategory::EngagementRing => ENGAGEMENT_RING_BUCKETS,
        ProductCategory::MensRing => MENS_RING_BUCKETS,
        other => {
            return error_fallback(format!(
                "{}: không có bậc tỷ lệ cho hạng mục này",
                other.code()
            ));
        }
    };

    match buckets.iter().find(|b| b.weight.contains(e)) {
        Some(bucket) => LaborCostResult::Calculated {
            amount: scale_2_amount(bucket, n),
        },
        None => error_fallback(format!(
            "{}: không có bậc trọng lượng phù hợp",
            input.category.code()
        )),
    }
}

fn scale_2_amount(bucket: &ScaleBucket, n: Vnd) -> Vnd {
    let ratio = n as f64 / bucket.threshold as f64;
    round_vnd(bucket.base as f64 * ratio.max(1.0))
}

/// Women's rings: base + N × 10%, base picked from weight/halo/stone rows.
fn additive(input: &LaborCostInput) -> LaborCostResult {
    let e = input.gold_weight_gram;
    let n = input.stone_value_vnd;
    if e <= 0.0 {
        return LaborCostResult::Zero;
    }

    let upper = input.design_description.to_uppercase();
    let halo = upper.contains("TO") || upper.contains("HALO");

    let rule = WOMENS_RING_BASE_RULES.iter().find(|r| {
        r.weight.contains(e)
            && (!r.requires_halo || halo)
            && r.min_stone.is_none_or(|floor| n > floor)
    });

    match rule {
        Some(rule) => LaborCostResult::Calculated {
            amount: round_vnd(rule.base as f64 + n as f64 * ADDITIVE_STONE_RATE),
        },
        None => LaborCostResult::Zero,
    }
}

/// Accessories: max(floor, E × 1.8M + N × 12% + complexity bonus).
fn composite(input: &LaborCostInput) -> LaborCostResult {
    let e = input.gold_weight_gram;
    let n = input.stone_value_vnd;
    if e <= 0.0 && n <= 0 {
        return LaborCostResult::Zero;
    }

    let upper = input.design_description.to_uppercase();
    let bonus = if upper.contains("PHỨC TẠP") || upper.contains("KỸ THUẬT CAO") {
        COMPOSITE_COMPLEXITY_BONUS_VND
    } else {
        0
    };

    let raw = e * COMPOSITE_PER_GRAM_VND + n as f64 * COMPOSITE_STONE_RATE + bonus as f64;
    LaborCostResult::Calculated {
        amount: round_vnd(raw).max(COMPOSITE_FLOOR_VND),
    }
}
