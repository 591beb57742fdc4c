//! Mortgage affordability calculations.
//!
//! The functions here are pure and run in a fixed order per derivation pass:
//! down-payment policy, then insurance premium, then total mortgage, then
//! periodic payment — each step consumes the previous step's output.

pub mod common;
pub mod down_payment;
pub mod insurance;
pub mod payment;

pub use down_payment::{
    DownPaymentCheck, MinimumDownPayment, minimum_down_payment, validate_down_payment,
};
pub use insurance::insurance_premium;
pub use payment::{periodic_payment, total_mortgage};
