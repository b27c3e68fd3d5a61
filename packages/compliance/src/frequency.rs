//! Conversion of periodic contribution rates to monthly amounts.
//!
//! Labels come straight from the transcribed document, so they are matched
//! loosely: anything mentioning "half" is half-yearly, anything else
//! mentioning "yearly" is yearly, and everything else is monthly.
//! Labels that match none of the three are still treated as monthly, but
//! the fallback is logged so it never goes unnoticed.

use labour_compliance_models::Frequency;

/// Result of loosely classifying a free-text frequency label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLabel {
    /// The frequency the label maps to.
    pub frequency: Frequency,
    /// `false` when the label matched nothing and fell back to
    /// [`Frequency::Monthly`].
    pub recognized: bool,
}

/// Classifies a free-text frequency label, case-insensitively.
///
/// Exact spellings accepted by [`Frequency::parse_label`] are taken as is.
/// Anything else goes through the substring rules, where "half" is
/// checked before "yearly" so that `"half yearly"` is not mistaken for a
/// yearly contribution.
#[must_use]
pub fn classify_label(label: &str) -> ClassifiedLabel {
    if let Ok(frequency) = Frequency::parse_label(label) {
        return ClassifiedLabel {
            frequency,
            recognized: true,
        };
    }

    let lower = label.to_lowercase();

    let (frequency, recognized) = if lower.contains("half") {
        (Frequency::HalfYearly, true)
    } else if lower.contains("yearly") {
        (Frequency::Yearly, true)
    } else {
        (Frequency::Monthly, lower.contains("monthly"))
    };

    ClassifiedLabel {
        frequency,
        recognized,
    }
}

/// Converts a rate collected at `frequency` into a whole monthly amount.
///
/// Yearly and half-yearly rates are divided by 12 and 6 and rounded half
/// to even, so `0.375` becomes `0` and `2.5` becomes `2`. Monthly rates
/// are truncated, not rounded. Negative and NaN rates count as zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn monthly_amount(rate: f64, frequency: Frequency) -> u64 {
    let rate = rate.max(0.0);

    match frequency {
        Frequency::Monthly => rate.trunc() as u64,
        Frequency::Yearly | Frequency::HalfYearly => {
            (rate / f64::from(frequency.months())).round_ties_even() as u64
        }
    }
}

/// Converts a rate with a free-text frequency label into a whole monthly
/// amount.
///
/// Unrecognized labels are converted as monthly and a warning is logged.
#[must_use]
pub fn to_monthly(rate: f64, label: &str) -> u64 {
    let classified = classify_label(label);

    if !classified.recognized {
        log::warn!("Unrecognized contribution frequency '{label}', treating it as monthly");
    }

    monthly_amount(rate, classified.frequency)
}
