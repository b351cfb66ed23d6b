//! Official district registry, indexed per state.

use std::collections::{HashMap, HashSet};

use crate::error::ReconError;
use crate::normalize::normalize;

/// One state's canonical districts, in two forms: an ordered list of
/// normalized names in registry load order and a set for O(1) membership
/// checks.
#[derive(Debug, Default, Clone)]
pub struct StateCandidates {
    pub names: Vec<String>,
    set: HashSet<String>,
}

impl StateCandidates {
    pub fn contains(&self, district_norm: &str) -> bool {
        self.set.contains(district_norm)
    }
}

/// Per-state lookup index over the official (state, district) registry.
///
/// Built once per run from the registry file, immutable thereafter, and
/// shareable read-only across workers since state partitions are
/// independent.
#[derive(Debug, Clone)]
pub struct RegistryIndex {
    states: HashMap<String, StateCandidates>,
    pair_count: usize,
}

impl RegistryIndex {
    /// Build the index from (state, district) pairs. Both sides are
    /// normalized and the index is deduplicated on the canonicalization
    /// key. Fails only on an empty registry; an unknown state at lookup
    /// time is a legitimate miss, not an error.
    pub fn build<I, S>(rows: I) -> Result<Self, ReconError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut states: HashMap<String, StateCandidates> = HashMap::new();
        let mut pair_count = 0;

        for (state, district) in rows {
            let state_norm = normalize(state.as_ref());
            let district_norm = normalize(district.as_ref());
            if state_norm.is_empty() || district_norm.is_empty() {
                continue;
            }
            let entry = states.entry(state_norm).or_default();
            if entry.set.insert(district_norm.clone()) {
                entry.names.push(district_norm);
                pair_count += 1;
            }
        }

        if pair_count == 0 {
            return Err(ReconError::EmptyRegistry);
        }

        Ok(Self { states, pair_count })
    }

    /// Candidates for a normalized state name, if the state is known.
    pub fn candidates(&self, state_norm: &str) -> Option<&StateCandidates> {
        self.states.get(state_norm)
    }

    /// Exact-pair membership on the canonicalization key.
    pub fn contains_pair(&self, state_norm: &str, district_norm: &str) -> bool {
        self.states
            .get(state_norm)
            .is_some_and(|c| c.contains(district_norm))
    }

    /// Number of distinct (state, district) pairs indexed.
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Number of distinct states indexed.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> RegistryIndex {
        RegistryIndex::build(vec![
            ("Maharashtra", "Pune"),
            ("Maharashtra", "Nagpur"),
            ("Gujarat", "Ahmedabad"),
        ])
        .unwrap()
    }

    #[test]
    fn builds_normalized_pairs() {
        let idx = index();
        assert_eq!(idx.pair_count(), 3);
        assert_eq!(idx.state_count(), 2);
        assert!(idx.contains_pair("MAHARASHTRA", "PUNE"));
        assert!(idx.contains_pair("GUJARAT", "AHMEDABAD"));
        assert!(!idx.contains_pair("GUJARAT", "PUNE"));
    }

    #[test]
    fn dedupes_on_canonical_key() {
        let idx = RegistryIndex::build(vec![
            ("Maharashtra", "Pune"),
            ("MAHARASHTRA", "pune "),
            ("maharashtra", "  PUNE"),
        ])
        .unwrap();
        assert_eq!(idx.pair_count(), 1);
        assert_eq!(idx.candidates("MAHARASHTRA").unwrap().names, vec!["PUNE"]);
    }

    #[test]
    fn unknown_state_is_a_miss() {
        let idx = index();
        assert!(idx.candidates("SIKKIM").is_none());
        assert!(!idx.contains_pair("SIKKIM", "GANGTOK"));
    }

    #[test]
    fn empty_registry_is_fatal() {
        let err = RegistryIndex::build(Vec::<(&str, &str)>::new()).unwrap_err();
        assert!(matches!(err, ReconError::EmptyRegistry));

        // Blank-only rows count as empty too.
        let err = RegistryIndex::build(vec![("", "Pune"), ("Gujarat", "  ")]).unwrap_err();
        assert!(matches!(err, ReconError::EmptyRegistry));
    }

    #[test]
    fn candidate_order_preserves_load_order() {
        let idx = index();
        assert_eq!(
            idx.candidates("MAHARASHTRA").unwrap().names,
            vec!["PUNE", "NAGPUR"]
        );
    }
}
