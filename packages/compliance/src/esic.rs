//! ESIC applicability table.
//!
//! A state is ESIC-applicable when the state-wise document lists at least
//! one fully or partially notified district for it.

use std::collections::BTreeMap;

use labour_compliance_models::EsicEntry;

use crate::matching::{LooseSubstringMatcher, StateMatcher};

/// Every state and union territory that gets an entry in the output.
pub static ALL_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chandigarh",
    "Chhattisgarh",
    "Delhi",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Puducherry",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

/// States with at least one notified district, spelled as the document
/// spells them.
pub static APPLICABLE_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Assam",
    "Bihar",
    "Chandigarh",
    "Chhattisgarh",
    "Delhi",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Tamil Nadu",
    "Telangana",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman & Nicobar Island",
    "Dadra and Nagar Haveli and Daman and diu",
    "Jammu and Kashmir",
];

/// Whether ESIC applies to `state`, using the default loose matcher.
#[must_use]
pub fn is_applicable(state: &str) -> bool {
    LooseSubstringMatcher.matches(state, APPLICABLE_STATES)
}

/// Builds one [`EsicEntry`] per state in `states`.
#[must_use]
pub fn build_table(
    states: &[&str],
    applicable: &[&str],
    matcher: &dyn StateMatcher,
) -> BTreeMap<String, EsicEntry> {
    states
        .iter()
        .map(|state| {
            let entry = EsicEntry::new(matcher.matches(state, applicable));
            ((*state).to_string(), entry)
        })
        .collect()
}

/// The full ESIC table for [`ALL_STATES`].
#[must_use]
pub fn applicability_table(matcher: &dyn StateMatcher) -> BTreeMap<String, EsicEntry> {
    let table = build_table(ALL_STATES, APPLICABLE_STATES, matcher);

    log::debug!(
        "ESIC applicable in {}/{} states",
        table.values().filter(|entry| entry.applicable).count(),
        table.len()
    );

    table
}
