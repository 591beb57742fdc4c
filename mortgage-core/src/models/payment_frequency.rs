use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a payment frequency.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown payment frequency '{0}'")]
pub struct ParsePaymentFrequencyError(String);

/// How often a mortgage payment comes due.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Weekly,
    BiWeekly,
    #[default]
    Monthly,
    SemiMonthly,
    Quarterly,
    Annually,
}

impl PaymentFrequency {
    /// Every frequency, in display order.
    pub const ALL: [Self; 6] = [
        Self::Weekly,
        Self::BiWeekly,
        Self::Monthly,
        Self::SemiMonthly,
        Self::Quarterly,
        Self::Annually,
    ];

    /// Number of payment periods in one year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Weekly => 52,
            Self::BiWeekly => 26,
            Self::Monthly => 12,
            Self::SemiMonthly => 24,
            Self::Quarterly => 4,
            Self::Annually => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::BiWeekly => "Bi-weekly",
            Self::Monthly => "Monthly",
            Self::SemiMonthly => "Semi-monthly",
            Self::Quarterly => "Quarterly",
            Self::Annually => "Annually",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentFrequency {
    type Err = ParsePaymentFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Weekly" => Ok(Self::Weekly),
            "Bi-weekly" => Ok(Self::BiWeekly),
            "Monthly" => Ok(Self::Monthly),
            "Semi-monthly" => Ok(Self::SemiMonthly),
            "Quarterly" => Ok(Self::Quarterly),
            "Annually" => Ok(Self::Annually),
            other => Err(ParsePaymentFrequencyError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn periods_per_year_matches_labels() {
        assert_eq!(PaymentFrequency::Weekly.periods_per_year(), 52);
        assert_eq!(PaymentFrequency::BiWeekly.periods_per_year(), 26);
        assert_eq!(PaymentFrequency::Monthly.periods_per_year(), 12);
        assert_eq!(PaymentFrequency::SemiMonthly.periods_per_year(), 24);
        assert_eq!(PaymentFrequency::Quarterly.periods_per_year(), 4);
        assert_eq!(PaymentFrequency::Annually.periods_per_year(), 1);
    }

    #[test]
    fn from_str_round_trips_every_label() {
        for frequency in PaymentFrequency::ALL {
            assert_eq!(frequency.as_str().parse(), Ok(frequency));
        }
    }

    #[test]
    fn from_str_rejects_unknown_label() {
        let result = "Fortnightly".parse::<PaymentFrequency>();

        assert_eq!(
            result,
            Err(ParsePaymentFrequencyError("Fortnightly".to_string()))
        );
    }

    #[test]
    fn default_is_monthly() {
        assert_eq!(PaymentFrequency::default(), PaymentFrequency::Monthly);
    }
}
