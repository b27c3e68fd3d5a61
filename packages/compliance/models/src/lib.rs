#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Labour Welfare Fund and ESIC data model types.
//!
//! These are the shapes that flow between the normalizer, the matcher and
//! the JSON writer. Serialized field names match the published
//! `lwf-extracted.json` / `esic-extracted.json` layouts, so changing a
//! `#[serde]` attribute here changes the output files.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Gross monthly wage ceiling (in rupees) up to which ESIC contributions
/// are deducted. Identical for every state.
pub const ESIC_WAGE_THRESHOLD: u32 = 21_000;

/// How often an LWF contribution is collected in the source document.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Frequency {
    /// Collected once a year.
    #[serde(rename = "yearly")]
    #[strum(to_string = "yearly")]
    Yearly,
    /// Collected twice a year (typically June and December).
    #[serde(rename = "half yearly", alias = "half-yearly", alias = "half_yearly")]
    #[strum(to_string = "half yearly", serialize = "half-yearly", serialize = "half_yearly")]
    HalfYearly,
    /// Collected every month.
    #[serde(rename = "monthly")]
    #[strum(to_string = "monthly")]
    Monthly,
}

impl Frequency {
    /// Number of months covered by one contribution.
    #[must_use]
    pub const fn months(self) -> u8 {
        match self {
            Self::Yearly => 12,
            Self::HalfYearly => 6,
            Self::Monthly => 1,
        }
    }

    /// Strictly parses a frequency label, ignoring surrounding whitespace
    /// and ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownFrequencyError`] if the label is not one of the
    /// recognized spellings.
    pub fn parse_label(label: &str) -> Result<Self, UnknownFrequencyError> {
        let trimmed = label.trim();
        trimmed.parse().map_err(|_| UnknownFrequencyError::new(label))
    }
}

/// Error returned when a frequency label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFrequencyError {
    /// The label that failed to parse.
    pub label: String,
}

impl UnknownFrequencyError {
    /// Creates an error for `label`.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }
}

impl std::fmt::Display for UnknownFrequencyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown contribution frequency '{}': expected yearly, half yearly or monthly",
            self.label
        )
    }
}

impl std::error::Error for UnknownFrequencyError {}

/// A contribution rate as printed in the source document.
///
/// Whole-number rates serialize as JSON integers (`70`) and fractional
/// rates as floats (`2.25`), matching how the document states them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Rate(pub f64);

impl Rate {
    /// Largest magnitude an `f64` can hold with every integer exactly
    /// representable.
    const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

    /// Returns the raw decimal value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[allow(clippy::cast_possible_truncation)]
    fn as_whole(self) -> Option<i64> {
        let whole = self.0.is_finite() && self.0.fract() == 0.0;
        (whole && self.0.abs() <= Self::MAX_EXACT_INTEGER).then_some(self.0 as i64)
    }
}

impl Serialize for Rate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_whole() {
            Some(whole) => serializer.serialize_i64(whole),
            None => serializer.serialize_f64(self.0),
        }
    }
}

/// One state's LWF rates in the document's native frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateContribution {
    /// Employer share per collection period.
    pub employer_rate: Rate,
    /// Employee share per collection period.
    pub employee_rate: Rate,
    /// Collection period.
    pub frequency: Frequency,
}

/// One state's LWF contribution converted to monthly amounts.
///
/// The raw rates and the frequency are kept alongside the converted
/// amounts so the output can be audited against the source document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyContribution {
    /// Employee share per month, in whole rupees.
    #[serde(rename = "employee")]
    pub employee_monthly: u64,
    /// Employer share per month, in whole rupees.
    #[serde(rename = "employer")]
    pub employer_monthly: u64,
    /// Collection period of the raw rates.
    pub frequency: Frequency,
    /// Employee share as printed in the document.
    pub raw_employee: Rate,
    /// Employer share as printed in the document.
    pub raw_employer: Rate,
}

impl MonthlyContribution {
    /// Drops the audit fields, keeping only the monthly amounts.
    #[must_use]
    pub const fn amounts(&self) -> MonthlyAmounts {
        MonthlyAmounts {
            employee: self.employee_monthly,
            employer: self.employer_monthly,
        }
    }
}

/// Monthly LWF amounts without audit fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAmounts {
    /// Employee share per month.
    pub employee: u64,
    /// Employer share per month.
    pub employer: u64,
}

/// ESIC applicability for one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsicEntry {
    /// Whether the state has at least one notified district.
    pub applicable: bool,
    /// Gross monthly wage ceiling for ESIC deductions.
    pub threshold: u32,
}

impl EsicEntry {
    /// Creates an entry with the standard [`ESIC_WAGE_THRESHOLD`].
    #[must_use]
    pub const fn new(applicable: bool) -> Self {
        Self {
            applicable,
            threshold: ESIC_WAGE_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_display_matches_output_labels() {
        assert_eq!(Frequency::Yearly.to_string(), "yearly");
        assert_eq!(Frequency::HalfYearly.to_string(), "half yearly");
        assert_eq!(Frequency::Monthly.to_string(), "monthly");
    }

    #[test]
    fn frequency_parse_label_accepts_variants() {
        assert_eq!(Frequency::parse_label("Half-Yearly"), Ok(Frequency::HalfYearly));
        assert_eq!(Frequency::parse_label(" half_yearly "), Ok(Frequency::HalfYearly));
        assert_eq!(Frequency::parse_label("YEARLY"), Ok(Frequency::Yearly));
        assert_eq!(Frequency::parse_label("Monthly"), Ok(Frequency::Monthly));
    }

    #[test]
    fn frequency_parse_label_rejects_unknown() {
        let err = Frequency::parse_label("quarterly").unwrap_err();
        assert_eq!(err.label, "quarterly");
        assert!(err.to_string().contains("quarterly"));
        assert!(Frequency::parse_label("annual").is_err());
    }

    #[test]
    fn frequency_serializes_as_lowercase_label() {
        let json = serde_json::to_string(&Frequency::HalfYearly).unwrap();
        assert_eq!(json, "\"half yearly\"");
        let parsed: Frequency = serde_json::from_str("\"half-yearly\"").unwrap();
        assert_eq!(parsed, Frequency::HalfYearly);
    }

    #[test]
    fn rate_serializes_whole_numbers_as_integers() {
        assert_eq!(serde_json::to_string(&Rate(70.0)).unwrap(), "70");
        assert_eq!(serde_json::to_string(&Rate(2.25)).unwrap(), "2.25");
        assert_eq!(serde_json::to_string(&Rate(0.75)).unwrap(), "0.75");
    }

    #[test]
    fn monthly_contribution_uses_published_field_names() {
        let entry = MonthlyContribution {
            employee_monthly: 3,
            employer_monthly: 2,
            frequency: Frequency::Yearly,
            raw_employee: Rate(40.0),
            raw_employer: Rate(20.0),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let expected = concat!(
            r#"{"employee":3,"employer":2,"frequency":"yearly","#,
            r#""raw_employee":40,"raw_employer":20}"#,
        );
        assert_eq!(json, expected);

        let amounts = MonthlyAmounts {
            employee: 3,
            employer: 2,
        };
        assert_eq!(entry.amounts(), amounts);
    }

    #[test]
    fn esic_entry_carries_standard_threshold() {
        let entry = EsicEntry::new(false);
        assert_eq!(entry.threshold, 21_000);
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"applicable":false,"threshold":21000}"#
        );
    }
}
