//! Minimum down-payment policy and advisory validation.
//!
//! The legal minimum is tiered by purchase price:
//!
//! | Price | Minimum down payment |
//! |-------|----------------------|
//! | ≤ $500,000 | 5% of price |
//! | $500,000 – $1,000,000 | $25,000 + 10% of the amount above $500,000 |
//! | ≥ $1,000,000 | 20% of price |
//!
//! Validation is advisory: a below-minimum down payment is still accepted
//! into the quote, with an error message carried alongside the derived
//! figures.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use mortgage_core::calculations::{minimum_down_payment, validate_down_payment};
//!
//! let min = minimum_down_payment(dec!(750000));
//! assert_eq!(min.amount, dec!(50000.00));
//!
//! let check = validate_down_payment(dec!(750000), dec!(40000));
//! assert_eq!(
//!     check.error.as_deref(),
//!     Some("Minimum down payment for this price is $50000.00")
//! );
//! assert_eq!(check.amount, dec!(40000)); // accepted anyway
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// Upper bound of the 5% tier.
fn first_tier_cap() -> Decimal {
    Decimal::from(500_000)
}

/// Lower bound of the 20% tier.
fn second_tier_cap() -> Decimal {
    Decimal::from(1_000_000)
}

/// The legally-required minimum down payment for a purchase price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumDownPayment {
    /// Minimum amount in dollars, rounded to cents.
    pub amount: Decimal,

    /// The minimum expressed as a percentage of the price.
    pub percent: Decimal,
}

/// Result of checking a proposed down payment against the policy minimum.
///
/// The proposed amount is carried through even when it fails the check —
/// callers display `error` next to the figures rather than rejecting the
/// edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownPaymentCheck {
    pub amount: Decimal,
    pub percent: Decimal,
    pub error: Option<String>,
}

/// Computes the minimum down payment for a purchase price.
///
/// Price must be positive; the quote engine enforces this at its mutation
/// seams.
pub fn minimum_down_payment(price: Decimal) -> MinimumDownPayment {
    let five_percent = Decimal::new(5, 2);
    let ten_percent = Decimal::new(10, 2);
    let twenty_percent = Decimal::new(20, 2);

    if price <= first_tier_cap() {
        MinimumDownPayment {
            amount: round_half_up(price * five_percent),
            percent: Decimal::from(5),
        }
    } else if price < second_tier_cap() {
        let amount = round_half_up(
            first_tier_cap() * five_percent + (price - first_tier_cap()) * ten_percent,
        );
        MinimumDownPayment {
            amount,
            percent: amount / price * Decimal::ONE_HUNDRED,
        }
    } else {
        MinimumDownPayment {
            amount: round_half_up(price * twenty_percent),
            percent: Decimal::from(20),
        }
    }
}

/// Checks a proposed down-payment amount against the policy minimum.
///
/// Returns the proposed amount, its percentage of the price, and an advisory
/// error when the amount falls short of [`minimum_down_payment`]. Percent
/// edits convert to dollars (`percent / 100 × price`) before calling this.
pub fn validate_down_payment(
    price: Decimal,
    proposed: Decimal,
) -> DownPaymentCheck {
    let minimum = minimum_down_payment(price);
    let percent = proposed / price * Decimal::ONE_HUNDRED;

    let error = if proposed < minimum.amount {
        Some(format!(
            "Minimum down payment for this price is ${:.2}",
            minimum.amount
        ))
    } else {
        None
    };

    DownPaymentCheck {
        amount: proposed,
        percent,
        error,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // minimum_down_payment tests
    // =========================================================================

    #[test]
    fn minimum_is_five_percent_below_first_cap() {
        let min = minimum_down_payment(dec!(200000));

        assert_eq!(min.amount, dec!(10000.00));
        assert_eq!(min.percent, dec!(5));
    }

    #[test]
    fn minimum_is_five_percent_at_first_cap() {
        let min = minimum_down_payment(dec!(500000));

        assert_eq!(min.amount, dec!(25000.00));
        assert_eq!(min.percent, dec!(5));
    }

    #[test]
    fn minimum_blends_tiers_between_caps() {
        let min = minimum_down_payment(dec!(750000));

        // 25000 + 10% of 250000
        assert_eq!(min.amount, dec!(50000.00));
        assert_eq!(round_half_up(min.percent), dec!(6.67));
    }

    #[test]
    fn minimum_just_above_first_cap() {
        let min = minimum_down_payment(dec!(500001));

        assert_eq!(min.amount, dec!(25000.10));
    }

    #[test]
    fn minimum_just_below_second_cap() {
        let min = minimum_down_payment(dec!(999999.99));

        // 25000 + 10% of 499999.99 = 75000.00 (rounded from 74999.999)
        assert_eq!(min.amount, dec!(75000.00));
    }

    #[test]
    fn minimum_is_twenty_percent_at_second_cap() {
        let min = minimum_down_payment(dec!(1000000));

        assert_eq!(min.amount, dec!(200000.00));
        assert_eq!(min.percent, dec!(20));
    }

    #[test]
    fn minimum_is_twenty_percent_above_second_cap() {
        let min = minimum_down_payment(dec!(1500000));

        assert_eq!(min.amount, dec!(300000.00));
        assert_eq!(min.percent, dec!(20));
    }

    // =========================================================================
    // validate_down_payment tests
    // =========================================================================

    #[test]
    fn validate_accepts_amount_at_minimum() {
        let check = validate_down_payment(dec!(200000), dec!(10000));

        assert_eq!(check.amount, dec!(10000));
        assert_eq!(check.percent, dec!(5));
        assert_eq!(check.error, None);
    }

    #[test]
    fn validate_accepts_amount_above_minimum() {
        let check = validate_down_payment(dec!(200000), dec!(50000));

        assert_eq!(check.percent, dec!(25));
        assert_eq!(check.error, None);
    }

    #[test]
    fn validate_flags_amount_below_minimum() {
        let check = validate_down_payment(dec!(200000), dec!(5000));

        assert_eq!(check.amount, dec!(5000));
        assert_eq!(check.percent, dec!(2.5));
        assert_eq!(
            check.error.as_deref(),
            Some("Minimum down payment for this price is $10000.00")
        );
    }

    #[test]
    fn validate_message_shows_two_decimals() {
        let check = validate_down_payment(dec!(500001), dec!(1000));

        assert_eq!(
            check.error.as_deref(),
            Some("Minimum down payment for this price is $25000.10")
        );
    }

    #[test]
    fn validate_never_flags_the_computed_minimum() {
        for price in [dec!(100000), dec!(500000), dec!(750000), dec!(2000000)] {
            let min = minimum_down_payment(price);
            let check = validate_down_payment(price, min.amount);

            assert_eq!(check.error, None, "price {price}");
        }
    }
}
