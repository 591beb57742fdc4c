use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PaymentFrequency;

/// One fully-derived affordability snapshot.
///
/// The five input fields come from the user; the three derived fields are
/// recomputed as a unit whenever any input changes. `down_payment_error` is
/// advisory only — derived figures are always present, even when the down
/// payment is below the legal minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub price: Decimal,
    pub down_payment_amount: Decimal,
    pub down_payment_percent: Decimal,
    pub rate: Decimal,
    pub amortization_years: u32,
    pub payment_frequency: PaymentFrequency,

    pub insurance_premium: Decimal,
    pub total_mortgage: Decimal,
    pub periodic_payment: Decimal,
    pub down_payment_error: Option<String>,
}
