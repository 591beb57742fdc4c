//! Mortgage default-insurance (CMHC) premium calculation.
//!
//! Default insurance is required whenever the down payment is below 20% of
//! the purchase price. The premium rate is tiered by the down-payment
//! percentage, with each boundary belonging to the higher tier (exactly 10%
//! down pays the 3.1% rate, not 4.0%):
//!
//! | Down payment | Premium rate |
//! |--------------|--------------|
//! | < 10% | 4.0% |
//! | 10% – 15% | 3.1% |
//! | 15% – 20% | 2.8% |
//! | ≥ 20% | none |
//!
//! The premium applies to the financed amount (price minus down payment).
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use mortgage_core::calculations::insurance_premium;
//!
//! // 5% down on 200000: 4% of the financed 190000
//! assert_eq!(insurance_premium(dec!(200000), dec!(10000)), dec!(7600.00));
//!
//! // 20% down: no insurance required
//! assert_eq!(insurance_premium(dec!(200000), dec!(40000)), dec!(0.00));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Computes the default-insurance premium for a purchase.
///
/// Price must be positive; the quote engine enforces this at its mutation
/// seams. A down payment above the price lands in the ≥ 20% tier and so
/// yields a zero premium.
pub fn insurance_premium(
    price: Decimal,
    down_payment: Decimal,
) -> Decimal {
    let percent = down_payment / price * Decimal::ONE_HUNDRED;

    let rate = if percent < Decimal::from(10) {
        Decimal::new(4, 2)
    } else if percent < Decimal::from(15) {
        Decimal::new(31, 3)
    } else if percent < Decimal::from(20) {
        Decimal::new(28, 3)
    } else {
        Decimal::ZERO
    };

    round_half_up((price - down_payment) * rate)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn premium_below_ten_percent_uses_four_percent_rate() {
        let result = insurance_premium(dec!(200000), dec!(10000));

        assert_eq!(result, dec!(7600.00));
    }

    #[test]
    fn premium_just_under_ten_percent_boundary() {
        let result = insurance_premium(dec!(300000), dec!(29999.99));

        // Still the 4% tier
        assert_eq!(result, dec!(10800.00));
    }

    #[test]
    fn premium_at_ten_percent_boundary_takes_higher_tier() {
        let result = insurance_premium(dec!(300000), dec!(30000));

        // Exactly 10% pays 3.1%, not 4%
        assert_eq!(result, dec!(8370.00));
    }

    #[test]
    fn premium_at_fifteen_percent_boundary_takes_higher_tier() {
        let result = insurance_premium(dec!(300000), dec!(45000));

        // 2.8% of 255000
        assert_eq!(result, dec!(7140.00));
    }

    #[test]
    fn premium_just_under_twenty_percent() {
        let result = insurance_premium(dec!(300000), dec!(59999.99));

        // 2.8% of 240000.01
        assert_eq!(result, dec!(6720.00));
    }

    #[test]
    fn premium_is_zero_at_twenty_percent() {
        let result = insurance_premium(dec!(300000), dec!(60000));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn premium_is_zero_above_twenty_percent() {
        let result = insurance_premium(dec!(300000), dec!(150000));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn premium_is_zero_when_down_payment_exceeds_price() {
        let result = insurance_premium(dec!(300000), dec!(350000));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn premium_rounds_to_cents() {
        let result = insurance_premium(dec!(123456.78), dec!(6172.84));

        // 4% of 117283.94 = 4691.3576
        assert_eq!(result, dec!(4691.36));
    }
}
