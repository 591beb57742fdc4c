mod payment_frequency;
mod quote;

pub use payment_frequency::{ParsePaymentFrequencyError, PaymentFrequency};
pub use quote::Quote;
