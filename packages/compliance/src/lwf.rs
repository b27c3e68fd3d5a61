//! Labour Welfare Fund contribution table.
//!
//! Rates are copied from the LWF state-wise table. Each row keeps the
//! frequency label exactly as the document prints it; the label is
//! classified when the row is normalized.

use std::collections::BTreeMap;

use labour_compliance_models::{MonthlyAmounts, MonthlyContribution, Rate, StateContribution};

use crate::frequency::{classify_label, monthly_amount};

/// One transcribed row of the LWF table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LwfRateRow {
    /// State or union territory name.
    pub state: &'static str,
    /// Employer share per collection period.
    pub employer: f64,
    /// Employee share per collection period.
    pub employee: f64,
    /// Collection period as printed.
    pub frequency: &'static str,
}

const fn row(
    state: &'static str,
    employer: f64,
    employee: f64,
    frequency: &'static str,
) -> LwfRateRow {
    LwfRateRow {
        state,
        employer,
        employee,
        frequency,
    }
}

/// LWF rates for every state that levies the fund.
pub static LWF_RATES: &[LwfRateRow] = &[
    row("Andhra Pradesh", 30.0, 70.0, "yearly"),
    row("Chandigarh", 5.0, 20.0, "monthly"),
    row("Chhattisgarh", 15.0, 45.0, "half yearly"),
    row("Delhi", 0.75, 2.25, "half yearly"),
    row("Goa", 60.0, 180.0, "half yearly"),
    row("Gujarat", 6.0, 12.0, "half yearly"),
    row("Haryana", 24.0, 50.0, "monthly"),
    row("Karnataka", 20.0, 40.0, "yearly"),
    row("Kerala", 45.0, 45.0, "half yearly"),
    row("Madhya Pradesh", 10.0, 30.0, "half yearly"),
    row("Maharashtra", 12.0, 36.0, "half yearly"),
    row("Odisha", 10.0, 20.0, "half yearly"),
    row("Punjab", 5.0, 20.0, "monthly"),
    row("Tamil Nadu", 20.0, 40.0, "yearly"),
    row("Telangana", 2.0, 5.0, "yearly"),
    row("West Bengal", 3.0, 15.0, "half yearly"),
];

impl LwfRateRow {
    /// Classifies the row's frequency label into a [`StateContribution`].
    ///
    /// A label that is not recognized is treated as monthly and logged.
    #[must_use]
    pub fn contribution(&self) -> StateContribution {
        let classified = classify_label(self.frequency);
        if !classified.recognized {
            log::warn!(
                "{}: unrecognized LWF frequency '{}', treating it as monthly",
                self.state,
                self.frequency
            );
        }

        StateContribution {
            employer_rate: Rate(self.employer),
            employee_rate: Rate(self.employee),
            frequency: classified.frequency,
        }
    }
}

/// Converts one state's contribution to monthly amounts.
#[must_use]
pub fn normalize(contribution: &StateContribution) -> MonthlyContribution {
    MonthlyContribution {
        employee_monthly: monthly_amount(
            contribution.employee_rate.value(),
            contribution.frequency,
        ),
        employer_monthly: monthly_amount(
            contribution.employer_rate.value(),
            contribution.frequency,
        ),
        frequency: contribution.frequency,
        raw_employee: contribution.employee_rate,
        raw_employer: contribution.employer_rate,
    }
}

/// Normalizes a set of transcribed rows, keyed by state name.
///
/// A state listed twice keeps its last row.
#[must_use]
pub fn normalize_rows(rows: &[LwfRateRow]) -> BTreeMap<String, MonthlyContribution> {
    rows.iter()
        .map(|row| (row.state.to_string(), normalize(&row.contribution())))
        .collect()
}

/// The full LWF table converted to monthly amounts.
#[must_use]
pub fn monthly_table() -> BTreeMap<String, MonthlyContribution> {
    normalize_rows(LWF_RATES)
}

/// The LWF table reduced to monthly employee/employer amounts only.
#[must_use]
pub fn monthly_amounts() -> BTreeMap<String, MonthlyAmounts> {
    monthly_table()
        .into_iter()
        .map(|(state, contribution)| (state, contribution.amounts()))
        .collect()
}

#[cfg(test)]
mod tests {
    use labour_compliance_models::Frequency;

    use super::*;

    #[test]
    fn every_row_has_a_recognized_frequency() {
        for row in LWF_RATES {
            assert!(
                classify_label(row.frequency).recognized,
                "{} has label {}",
                row.state,
                row.frequency
            );
        }
    }

    #[test]
    fn table_has_one_entry_per_row() {
        assert_eq!(monthly_table().len(), LWF_RATES.len());
    }

    #[test]
    fn monthly_states_truncate_raw_rates() {
        for (state, entry) in monthly_table() {
            if entry.frequency == Frequency::Monthly {
                let employee = entry.raw_employee.value().trunc() as u64;
                let employer = entry.raw_employer.value().trunc() as u64;
                assert_eq!(entry.employee_monthly, employee, "{state}");
                assert_eq!(entry.employer_monthly, employer, "{state}");
            }
        }
    }

    #[test]
    fn periodic_states_divide_and_round() {
        for (state, entry) in monthly_table() {
            let divisor = match entry.frequency {
                Frequency::Yearly => 12.0,
                Frequency::HalfYearly => 6.0,
                Frequency::Monthly => continue,
            };
            let expected = (entry.raw_employee.value() / divisor).round_ties_even() as u64;
            assert_eq!(entry.employee_monthly, expected, "{state}");
        }
    }

    #[test]
    fn delhi_half_yearly_rounds_down_to_zero() {
        let table = monthly_table();
        let delhi = &table["Delhi"];
        assert_eq!(delhi.frequency, Frequency::HalfYearly);
        assert_eq!(delhi.raw_employee, Rate(2.25));
        assert_eq!(delhi.employee_monthly, 0);
        assert_eq!(delhi.employer_monthly, 0);
    }

    #[test]
    fn haryana_monthly_is_unchanged() {
        let table = monthly_table();
        assert_eq!(table["Haryana"].employee_monthly, 50);
        assert_eq!(table["Haryana"].employer_monthly, 24);
    }

    #[test]
    fn karnataka_yearly_is_divided_by_twelve() {
        let table = monthly_table();
        assert_eq!(table["Karnataka"].employee_monthly, 3);
        assert_eq!(table["Karnataka"].employer_monthly, 2);
    }

    #[test]
    fn chhattisgarh_uses_half_yearly_divisor() {
        // 45 / 6 = 7.5 and 15 / 6 = 2.5, both ties
        let table = monthly_table();
        assert_eq!(table["Chhattisgarh"].employee_monthly, 8);
        assert_eq!(table["Chhattisgarh"].employer_monthly, 2);
    }

    #[test]
    fn unknown_label_row_is_treated_as_monthly() {
        let rows = [row("Nowhere", 9.0, 18.5, "quarterly")];
        let table = normalize_rows(&rows);
        assert_eq!(table["Nowhere"].frequency, Frequency::Monthly);
        assert_eq!(table["Nowhere"].employee_monthly, 18);
    }

    #[test]
    fn serialization_is_deterministic() {
        let first = serde_json::to_string_pretty(&monthly_table()).unwrap();
        let second = serde_json::to_string_pretty(&monthly_table()).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("\"raw_employee\": 2.25"));
        assert!(first.contains("\"frequency\": \"half yearly\""));
    }

    #[test]
    fn amounts_drop_audit_fields() {
        let expected = MonthlyAmounts {
            employee: 30,
            employer: 10,
        };
        assert_eq!(monthly_amounts()["Goa"], expected);
    }
}
