//! Pricing engine
//!
//! Derives a plan's final price from its original price and discount
//! percent. The result is never taken from input: `PricingPlanService` runs
//! this before every insert and update.

use crate::error::PricingError;

/// A discount at or above this percentage makes the plan free
pub const FULL_DISCOUNT_PERCENT: f64 = 100.0;

/// Round to 2 decimal places, ties away from zero.
///
/// Matches integer rounding of `value * 100`, so 123.455 becomes 123.46.
/// Values too large to scale have no fractional cents and pass through.
pub fn round2(value: f64) -> f64 {
    let cents = value * 100.0;
    if !cents.is_finite() {
        return value;
    }
    cents.round() / 100.0
}

/// Compute the final price for a plan.
///
/// - no original price: no final price
/// - negative original price: error
/// - no discount, or a discount `<= 0`: the original price unchanged
/// - discount `>= 100`: `0.0`
/// - otherwise the discounted price rounded to cents, never below zero
pub fn calculate_final_price(
    original_price: Option<f64>,
    discount_percent: Option<f64>,
) -> Result<Option<f64>, PricingError> {
    let Some(original) = original_price else {
        return Ok(None);
    };

    if original.is_nan() || original.is_infinite() {
        return Err(PricingError::NotANumber);
    }
    if original < 0.0 {
        return Err(PricingError::NegativeOriginalPrice);
    }

    let discount = match discount_percent {
        None => return Ok(Some(original)),
        Some(d) if d.is_nan() => return Err(PricingError::NotANumber),
        Some(d) if d <= 0.0 => return Ok(Some(original)),
        Some(d) => d,
    };

    if discount >= FULL_DISCOUNT_PERCENT {
        return Ok(Some(0.0));
    }

    let discount_amount = original * (discount / 100.0);
    let final_price = round2(original - discount_amount);

    Ok(Some(final_price.max(0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(original: f64, discount: f64) -> f64 {
        calculate_final_price(Some(original), Some(discount))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn ten_percent_off_hundred() {
        assert_eq!(price(100.0, 10.0), 90.0);
    }

    #[test]
    fn quarter_off_two_hundred() {
        assert_eq!(price(200.0, 25.0), 150.0);
    }

    #[test]
    fn twenty_percent_off_one_fifty() {
        assert_eq!(price(150.0, 20.0), 120.0);
    }

    #[test]
    fn missing_original_price_yields_no_final_price() {
        assert_eq!(calculate_final_price(None, Some(10.0)), Ok(None));
        assert_eq!(calculate_final_price(None, None), Ok(None));
    }

    #[test]
    fn negative_original_price_is_rejected() {
        assert_eq!(
            calculate_final_price(Some(-0.01), Some(10.0)),
            Err(PricingError::NegativeOriginalPrice)
        );
        assert_eq!(
            calculate_final_price(Some(-100.0), None),
            Err(PricingError::NegativeOriginalPrice)
        );
    }

    #[test]
    fn absent_or_non_positive_discount_keeps_original() {
        for original in [0.0, 9.99, 100.0, 1234.567] {
            assert_eq!(calculate_final_price(Some(original), None), Ok(Some(original)));
            assert_eq!(price(original, 0.0), original);
            assert_eq!(price(original, -5.0), original);
        }
    }

    #[test]
    fn full_discount_is_free() {
        for original in [0.0, 1.0, 99.99, 5000.0] {
            assert_eq!(price(original, 100.0), 0.0);
            assert_eq!(price(original, 150.0), 0.0);
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(
            calculate_final_price(Some(f64::NAN), Some(10.0)),
            Err(PricingError::NotANumber)
        );
        assert_eq!(
            calculate_final_price(Some(f64::INFINITY), None),
            Err(PricingError::NotANumber)
        );
        assert_eq!(
            calculate_final_price(Some(10.0), Some(f64::NAN)),
            Err(PricingError::NotANumber)
        );
    }

    #[test]
    fn rounds_to_cents() {
        // 19.99 * 0.85 = 16.9915
        assert_eq!(price(19.99, 15.0), 16.99);
        // 10 * (1 - 1/3 %) = 9.9666..
        assert_eq!(price(10.0, 1.0 / 3.0), 9.97);
    }

    #[test]
    fn round2_ties_away_from_zero() {
        assert_eq!(round2(123.455), 123.46);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn huge_prices_stay_finite() {
        assert_eq!(round2(1e307), 1e307);
        assert_eq!(round2(f64::MAX), f64::MAX);

        let discounted = price(1e307, 10.0);
        assert!(discounted.is_finite());
        assert_eq!(discounted, 1e307 - 1e307 * 0.1);
        assert!(price(f64::MAX, 0.5).is_finite());
        assert_eq!(price(f64::MAX, 0.0), f64::MAX);
    }

    #[test]
    fn final_price_within_bounds_for_partial_discounts() {
        let originals = [0.0, 0.01, 1.0, 49.5, 100.0, 199.99, 10_000.0];
        let discounts = [0.5, 1.0, 10.0, 33.3, 50.0, 75.25, 99.0, 99.99];

        for &original in &originals {
            for &discount in &discounts {
                let expected = round2(original * (1.0 - discount / 100.0));
                let actual = price(original, discount);
                // Both formulas may land on opposite sides of a half-cent tie.
                assert!(
                    (actual - expected).abs() <= 0.01 + 1e-9,
                    "{original} at {discount}%: {actual} != {expected}"
                );
                assert!(((actual * 100.0).round() - actual * 100.0).abs() < 1e-6);
                assert!(actual >= 0.0);
                assert!(actual <= original);
            }
        }
    }
}
