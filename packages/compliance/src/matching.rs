//! State-name matching strategies.
//!
//! The ESIC document and the list of states spell some names differently
//! ("Jammu & Kashmir" vs "Jammu and Kashmir"). Matching goes through the
//! [`StateMatcher`] trait so callers never depend on which heuristic is in
//! use.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use strum_macros::{Display, EnumString};

/// Decides whether a state appears in a list of state names.
pub trait StateMatcher {
    /// Returns `true` if `state` matches any entry of `listed`.
    fn matches(&self, state: &str, listed: &[&str]) -> bool;
}

/// Exact membership, or case-insensitive substring containment in either
/// direction.
///
/// Tolerates naming variants at the cost of false positives for short
/// names: `"Daman"` matches `"Dadra and Nagar Haveli and Daman and diu"`,
/// and an empty name matches everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct LooseSubstringMatcher;

impl StateMatcher for LooseSubstringMatcher {
    fn matches(&self, state: &str, listed: &[&str]) -> bool {
        if listed.contains(&state) {
            return true;
        }

        let state = state.to_lowercase();
        listed.iter().any(|candidate| {
            let candidate = candidate.to_lowercase();
            candidate.contains(&state) || state.contains(&candidate)
        })
    }
}

/// Case-insensitive exact matching after mapping known spelling variants
/// to one canonical name.
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasMatcher;

/// Maps lowercase spelling variants to their canonical lowercase name.
static STATE_ALIASES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("jammu & kashmir", "jammu and kashmir"),
        ("j&k", "jammu and kashmir"),
        ("orissa", "odisha"),
        ("pondicherry", "puducherry"),
        ("nct of delhi", "delhi"),
        ("new delhi", "delhi"),
        ("uttaranchal", "uttarakhand"),
        ("andaman & nicobar island", "andaman and nicobar islands"),
        ("andaman & nicobar islands", "andaman and nicobar islands"),
        ("andaman and nicobar island", "andaman and nicobar islands"),
        ("dadra & nagar haveli", "dadra and nagar haveli and daman and diu"),
        ("dadra and nagar haveli", "dadra and nagar haveli and daman and diu"),
        ("daman & diu", "dadra and nagar haveli and daman and diu"),
        ("daman and diu", "dadra and nagar haveli and daman and diu"),
    ])
});

/// Lowercases, collapses whitespace and resolves aliases.
#[must_use]
pub fn canonical_state_name(name: &str) -> String {
    let normalized = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    STATE_ALIASES
        .get(normalized.as_str())
        .map_or(normalized, |canonical| (*canonical).to_string())
}

impl StateMatcher for AliasMatcher {
    fn matches(&self, state: &str, listed: &[&str]) -> bool {
        let state = canonical_state_name(state);
        listed
            .iter()
            .any(|candidate| canonical_state_name(candidate) == state)
    }
}

/// Selectable matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StateMatching {
    /// [`LooseSubstringMatcher`].
    #[default]
    Loose,
    /// [`AliasMatcher`].
    Alias,
}

impl StateMatching {
    /// Returns the matcher implementing this strategy.
    #[must_use]
    pub fn matcher(self) -> &'static dyn StateMatcher {
        match self {
            Self::Loose => &LooseSubstringMatcher,
            Self::Alias => &AliasMatcher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTED: &[&str] = &[
        "Delhi",
        "Jammu and Kashmir",
        "Dadra and Nagar Haveli and Daman and diu",
        "Odisha",
    ];

    #[test]
    fn loose_matches_exact_and_case_variants() {
        let m = LooseSubstringMatcher;
        assert!(m.matches("Delhi", LISTED));
        assert!(m.matches("DELHI", LISTED));
        assert!(m.matches("jammu and kashmir", LISTED));
        assert!(!m.matches("Sikkim", LISTED));
    }

    #[test]
    fn loose_matches_substrings_in_both_directions() {
        let m = LooseSubstringMatcher;
        assert!(m.matches("New Delhi", LISTED));
        assert!(m.matches("Daman", LISTED));
    }

    #[test]
    fn loose_misses_ampersand_variant() {
        assert!(!LooseSubstringMatcher.matches("Jammu & Kashmir", LISTED));
    }

    #[test]
    fn loose_empty_name_matches_everything() {
        assert!(LooseSubstringMatcher.matches("", LISTED));
    }

    #[test]
    fn alias_resolves_known_variants() {
        let m = AliasMatcher;
        assert!(m.matches("Jammu & Kashmir", LISTED));
        assert!(m.matches("Orissa", LISTED));
        assert!(m.matches("  NCT  of Delhi ", LISTED));
        assert!(m.matches("Daman & Diu", LISTED));
    }

    #[test]
    fn alias_rejects_partial_names() {
        let m = AliasMatcher;
        assert!(!m.matches("Daman", LISTED));
        assert!(!m.matches("", LISTED));
        assert!(!m.matches("Sikkim", LISTED));
    }

    #[test]
    fn canonical_name_collapses_whitespace() {
        assert_eq!(canonical_state_name("  Tamil   Nadu "), "tamil nadu");
        assert_eq!(canonical_state_name("Pondicherry"), "puducherry");
    }

    #[test]
    fn strategy_parses_from_cli_values() {
        assert_eq!("loose".parse::<StateMatching>().unwrap(), StateMatching::Loose);
        assert_eq!("ALIAS".parse::<StateMatching>().unwrap(), StateMatching::Alias);
        assert!("fuzzy".parse::<StateMatching>().is_err());
        assert_eq!(StateMatching::default().to_string(), "loose");
    }
}
