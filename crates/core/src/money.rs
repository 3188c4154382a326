//! VND money primitives.
//!
//! All amounts in this codebase are whole Vietnamese đồng. Intermediate
//! formula arithmetic runs in `f64` and is rounded back to `Vnd` at each
//! component boundary, never silently truncated.

/// An amount in Vietnamese đồng.
///
/// Signed so that boundary validation can reject negative inputs instead of
/// making them unrepresentable.
pub type Vnd = i64;

/// Round an intermediate `f64` amount to whole đồng (half away from zero).
pub fn round_vnd(amount: f64) -> Vnd {
    amount.round() as Vnd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_vnd(1_000_000.4), 1_000_000);
        assert_eq!(round_vnd(1_000_000.5), 1_000_001);
        assert_eq!(round_vnd(999_999.99), 1_000_000);
    }

    #[test]
    fn exact_amounts_pass_through() {
        assert_eq!(round_vnd(3_042_424.0), 3_042_424);
        assert_eq!(round_vnd(0.0), 0);
    }
}
