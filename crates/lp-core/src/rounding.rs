//! Ceiling arithmetic over whole-number percentages.
//!
//! Discounted prices are `ceil(base × p₁/100 × p₂/100 × …)`. Working in
//! integers keeps the product exact, so the ceiling is taken once on the true
//! rational value rather than on a binary floating-point approximation.

use crate::{Cost, Percent};

/// Return `ceil(base × percent / 100)`.
///
/// ```
/// use lp_core::ceil_percent;
/// assert_eq!(ceil_percent(100, 40), 40);
/// assert_eq!(ceil_percent(35, 70), 25); // 24.5 rounds up
/// ```
pub fn ceil_percent(base: Cost, percent: Percent) -> Cost {
    ceil_percent_chain(base, &[percent])
}

/// Return `ceil(base × Π percents / 100ⁿ)`, with a single final ceiling.
///
/// An empty slice returns `base` unchanged. Percentages above 100 are
/// allowed; the result saturates at `Cost::MAX`. The ceiling is exact while
/// the running numerator and denominator fit in 128 bits; past that point the
/// partial product is rounded up once and the chain continues from it.
pub fn ceil_percent_chain(base: Cost, percents: &[Percent]) -> Cost {
    // a zero factor zeroes the product however long the chain
    if percents.contains(&0) {
        return 0;
    }
    let mut numerator = u128::from(base);
    let mut denominator = 1u128;
    for &p in percents.iter().filter(|&&p| p != 100) {
        let scaled = numerator
            .checked_mul(u128::from(p))
            .zip(denominator.checked_mul(100));
        match scaled {
            Some((n, d)) => {
                numerator = n;
                denominator = d;
            }
            None => {
                // reduce to a whole-cost ceiling and keep going from there
                let partial = numerator.div_ceil(denominator);
                if partial > u128::from(Cost::MAX) {
                    return Cost::MAX;
                }
                numerator = partial * u128::from(p);
                denominator = 100;
            }
        }
    }
    let cost = numerator.div_ceil(denominator);
    Cost::try_from(cost).unwrap_or(Cost::MAX)
}
