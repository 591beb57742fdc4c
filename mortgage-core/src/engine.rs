//! The quote engine: input mutations and reactive recomputation.
//!
//! [`QuoteEngine`] owns a single [`Quote`] snapshot. Every accepted input
//! edit runs one full derivation pass — insurance premium, then total
//! mortgage, then periodic payment, in that order, since each step consumes
//! the previous one's output — before the mutating call returns. Readers
//! never observe a partially-derived snapshot.
//!
//! Edits that would break hard constraints (non-positive price, zero
//! amortization years) are ignored with a warning; the prior value stands.
//! An insufficient down payment is advisory only: the edit is accepted, the
//! figures are derived from it, and [`Quote::down_payment_error`] carries
//! the message.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::{
    insurance_premium, minimum_down_payment, periodic_payment, total_mortgage,
    validate_down_payment,
};
use crate::models::{PaymentFrequency, Quote};

/// Default purchase price when none is supplied at initialization.
fn default_price() -> Decimal {
    Decimal::from(200_000)
}

/// Default annual rate in percent.
fn default_rate() -> Decimal {
    Decimal::new(464, 2)
}

const DEFAULT_AMORTIZATION_YEARS: u32 = 25;

/// Lifecycle of the engine's snapshot.
///
/// `Stale` is only ever observable mid-pass; every public mutation settles
/// the snapshot before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Initialized,
    Stale,
    Settled,
}

/// Derives mortgage affordability figures from user-edited inputs.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    quote: Quote,
    phase: Phase,
}

impl QuoteEngine {
    /// Creates an engine seeded with defaults and runs the first derivation
    /// pass.
    ///
    /// The down payment starts at the legal minimum for the starting price.
    /// A missing or non-positive `initial_price` falls back to 200000,
    /// matching the host page's behavior for an absent or non-numeric
    /// shortcode attribute.
    pub fn new(initial_price: Option<Decimal>) -> Self {
        let mut engine = Self {
            quote: Quote {
                price: Decimal::ZERO,
                down_payment_amount: Decimal::ZERO,
                down_payment_percent: Decimal::ZERO,
                rate: default_rate(),
                amortization_years: DEFAULT_AMORTIZATION_YEARS,
                payment_frequency: PaymentFrequency::default(),
                insurance_premium: Decimal::ZERO,
                total_mortgage: Decimal::ZERO,
                periodic_payment: Decimal::ZERO,
                down_payment_error: None,
            },
            phase: Phase::Uninitialized,
        };
        engine.initialize(initial_price);
        engine.recompute();
        engine
    }

    /// Read-only view of the current snapshot.
    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Sets the purchase price. Non-positive values are ignored.
    ///
    /// The down payment amount is kept and re-validated against the new
    /// price, so its percentage and the advisory error stay consistent.
    pub fn set_price(
        &mut self,
        price: Decimal,
    ) {
        if price <= Decimal::ZERO {
            warn!(%price, "ignoring non-positive price");
            return;
        }
        self.quote.price = price;
        let check = validate_down_payment(price, self.quote.down_payment_amount);
        self.quote.down_payment_percent = check.percent;
        self.quote.down_payment_error = check.error;
        self.phase = Phase::Stale;
        self.recompute();
    }

    /// Sets the down payment as a dollar amount.
    ///
    /// Any amount is accepted; a below-minimum amount sets the advisory
    /// error alongside the derived figures.
    pub fn set_down_payment_amount(
        &mut self,
        amount: Decimal,
    ) {
        let check = validate_down_payment(self.quote.price, amount);
        self.quote.down_payment_amount = check.amount;
        self.quote.down_payment_percent = check.percent;
        self.quote.down_payment_error = check.error;
        self.phase = Phase::Stale;
        self.recompute();
    }

    /// Sets the down payment as a percentage of the price.
    ///
    /// Converted to dollars first, then validated like an amount edit.
    pub fn set_down_payment_percent(
        &mut self,
        percent: Decimal,
    ) {
        let amount = percent / Decimal::ONE_HUNDRED * self.quote.price;
        self.set_down_payment_amount(amount);
    }

    /// Sets the annual rate in percent. Zero and negative rates are
    /// accepted; zero takes the straight-line branch of the payment formula.
    pub fn set_rate(
        &mut self,
        rate: Decimal,
    ) {
        self.quote.rate = rate;
        self.phase = Phase::Stale;
        self.recompute();
    }

    /// Sets the amortization period. Zero years is ignored.
    pub fn set_amortization_years(
        &mut self,
        years: u32,
    ) {
        if years == 0 {
            warn!("ignoring zero amortization years");
            return;
        }
        self.quote.amortization_years = years;
        self.phase = Phase::Stale;
        self.recompute();
    }

    pub fn set_payment_frequency(
        &mut self,
        frequency: PaymentFrequency,
    ) {
        self.quote.payment_frequency = frequency;
        self.phase = Phase::Stale;
        self.recompute();
    }

    /// Seeds price and the minimum down payment for it.
    fn initialize(
        &mut self,
        initial_price: Option<Decimal>,
    ) {
        let price = match initial_price {
            Some(p) if p > Decimal::ZERO => p,
            Some(p) => {
                warn!(%p, "non-positive initial price, using default");
                default_price()
            }
            None => default_price(),
        };
        let minimum = minimum_down_payment(price);
        self.quote.price = price;
        self.quote.down_payment_amount = minimum.amount;
        self.quote.down_payment_percent = minimum.percent;
        self.phase = Phase::Initialized;
    }

    /// One derivation pass: premium, then total, then payment.
    fn recompute(&mut self) {
        self.quote.insurance_premium =
            insurance_premium(self.quote.price, self.quote.down_payment_amount);
        self.quote.total_mortgage = total_mortgage(
            self.quote.price,
            self.quote.down_payment_amount,
            self.quote.insurance_premium,
        );
        self.quote.periodic_payment = periodic_payment(
            self.quote.total_mortgage,
            self.quote.rate,
            self.quote.amortization_years,
            self.quote.payment_frequency,
        );
        self.phase = Phase::Settled;
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new(None)
    }
}
