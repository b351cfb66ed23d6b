//! Tiered district-name matching: exact, then alias, then fuzzy.

use crate::aliases::AliasTable;
use crate::model::{MatchType, Resolution};
use crate::normalize::normalize;
use crate::registry::RegistryIndex;

/// Default acceptance threshold for fuzzy matches, on the 0..=100 scale.
pub const DEFAULT_THRESHOLD: u8 = 90;

/// Token-order-insensitive similarity in [0, 100].
///
/// Both inputs are expected pre-normalized. Tokens are sorted before
/// scoring so "NAGAR KANPUR" and "KANPUR NAGAR" score 100; Jaro-Winkler
/// handles the dropped-letter and transposition typos that dominate
/// hand-keyed district names.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    let sort = |s: &str| {
        let mut tokens: Vec<&str> = s.split_whitespace().collect();
        tokens.sort_unstable();
        tokens.join(" ")
    };
    // Truncate rather than round: a raw similarity of 0.895 must not
    // creep over a threshold of 90.
    (strsim::jaro_winkler(&sort(a), &sort(b)) * 100.0) as u8
}

/// State-scoped match engine. Holds read-only references to the registry
/// index and alias table; safe to share across per-state workers.
pub struct MatchEngine<'a> {
    index: &'a RegistryIndex,
    aliases: &'a AliasTable,
    threshold: u8,
}

impl<'a> MatchEngine<'a> {
    pub fn new(index: &'a RegistryIndex, aliases: &'a AliasTable, threshold: u8) -> Self {
        Self { index, aliases, threshold }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Resolve one (state, district) pair. Never fails: every data-quality
    /// problem surfaces as `unmatched` plus a diagnosable score.
    ///
    /// Precedence: exact registry pair, then alias whose target exists in
    /// the resolved state, then best fuzzy candidate from that state only.
    /// Equal fuzzy scores break to the lexicographically smallest
    /// candidate, so resolution is deterministic regardless of registry
    /// load order.
    pub fn resolve(&self, state: &str, district: &str) -> Resolution {
        let state_in = normalize(state);
        let district_norm = normalize(district);
        let state_norm = self.aliases.remap_state(&state_in).to_string();

        // Tier 1: exact pair.
        if self.index.contains_pair(&state_norm, &district_norm) {
            return Resolution {
                state_norm,
                district_final: district_norm,
                match_type: MatchType::Exact,
                match_score: None,
            };
        }

        let candidates = self.index.candidates(&state_norm);

        // Tier 2: known rename, accepted only inside the resolved state.
        if let Some(target) = self.aliases.district_target(&district_norm) {
            if candidates.is_some_and(|c| c.contains(target)) {
                return Resolution {
                    state_norm,
                    district_final: target.to_string(),
                    match_type: MatchType::Renamed,
                    match_score: Some(100),
                };
            }
        }

        // Tier 3: fuzzy against this state's candidates only.
        let Some(candidates) = candidates else {
            return Resolution {
                state_norm,
                district_final: district_norm,
                match_type: MatchType::Unmatched,
                match_score: None,
            };
        };

        let mut best: Option<(&str, u8)> = None;
        for name in &candidates.names {
            let score = token_sort_ratio(&district_norm, name);
            let better = match best {
                None => true,
                Some((best_name, best_score)) => {
                    score > best_score || (score == best_score && name.as_str() < best_name)
                }
            };
            if better {
                best = Some((name, score));
            }
        }

        match best {
            Some((name, score)) if score >= self.threshold => Resolution {
                state_norm,
                district_final: name.to_string(),
                match_type: MatchType::Fuzzy,
                match_score: Some(score),
            },
            Some((_, score)) => Resolution {
                state_norm,
                district_final: district_norm,
                match_type: MatchType::Unmatched,
                match_score: Some(score),
            },
            // Unreachable for indexed states (a state with zero candidates
            // is never stored), kept as the no-candidates outcome.
            None => Resolution {
                state_norm,
                district_final: district_norm,
                match_type: MatchType::Unmatched,
                match_score: None,
            },
        }
    }
}
