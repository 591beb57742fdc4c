//! Total mortgage principal and periodic payment (annuity formula).
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use mortgage_core::PaymentFrequency;
//! use mortgage_core::calculations::{periodic_payment, total_mortgage};
//!
//! let total = total_mortgage(dec!(200000), dec!(10000), dec!(7600.00));
//! assert_eq!(total, dec!(197600.00));
//!
//! let payment = periodic_payment(total, dec!(4.64), 25, PaymentFrequency::Monthly);
//! assert_eq!(payment, dec!(1114.09));
//! ```

use rust_decimal::{Decimal, MathematicalOps};

use crate::calculations::common::round_half_up;
use crate::models::PaymentFrequency;

/// Total amount financed: price minus down payment plus insurance premium.
///
/// Deliberately unfloored — a down payment above the price produces a
/// negative total, mirroring the unguarded source arithmetic.
pub fn total_mortgage(
    price: Decimal,
    down_payment: Decimal,
    insurance_premium: Decimal,
) -> Decimal {
    round_half_up(price - down_payment + insurance_premium)
}

/// Payment due each period, by the standard annuity formula.
///
/// The periodic rate is always the annual rate divided by 12, whatever the
/// selected frequency. The source calculator prices every frequency against
/// a monthly rate base, and that behavior is kept as-is.
///
/// A zero rate degenerates the formula (division by zero); that case is
/// defined as straight-line repayment, `total / number_of_payments`.
///
/// Extreme rates push the annuity terms outside `Decimal`'s range. The
/// source calculator degrades to Infinity/NaN there; `Decimal` has neither,
/// so each lost term takes its mathematical limit instead:
///
/// * growth factor overflows → the discount term becomes zero and the
///   payment tends to `total × rate`;
/// * growth factor vanishes (e.g. an annual rate of −1200%, a periodic rate
///   of exactly −1) → the payment tends to zero;
/// * the payment itself exceeds `Decimal`'s range → it saturates at
///   [`Decimal::MAX`] (or [`Decimal::MIN`], by sign).
///
/// `amortization_years` must be positive; the quote engine enforces this at
/// its mutation seams.
pub fn periodic_payment(
    total_mortgage: Decimal,
    annual_rate_percent: Decimal,
    amortization_years: u32,
    frequency: PaymentFrequency,
) -> Decimal {
    let periods = u64::from(amortization_years) * u64::from(frequency.periods_per_year());
    let monthly_rate = annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(12);

    if monthly_rate.is_zero() {
        return round_half_up(total_mortgage / Decimal::from(periods));
    }

    // periods < 2^38, so the cast is lossless
    let discount = match (Decimal::ONE + monthly_rate).checked_powi(periods as i64) {
        Some(growth) if growth.is_zero() => return Decimal::ZERO,
        Some(growth) => match Decimal::ONE.checked_div(growth) {
            Some(discount) => discount,
            // |growth| too small to invert: the discount is unbounded and
            // the payment tends to zero
            None => return Decimal::ZERO,
        },
        None => Decimal::ZERO,
    };

    let denominator = Decimal::ONE - discount;
    if denominator.is_zero() {
        return round_half_up(total_mortgage / Decimal::from(periods));
    }

    let payment = total_mortgage
        .checked_mul(monthly_rate)
        .and_then(|numerator| numerator.checked_div(denominator));
    match payment {
        Some(payment) => round_half_up(payment),
        None => saturated(total_mortgage, monthly_rate),
    }
}

/// Range limit for a payment that overflowed `Decimal`, signed like the
/// true result.
fn saturated(
    total_mortgage: Decimal,
    monthly_rate: Decimal,
) -> Decimal {
    if total_mortgage.is_sign_negative() == monthly_rate.is_sign_negative() {
        Decimal::MAX
    } else {
        Decimal::MIN
    }
}
