//! Post-match corruption filter.
//!
//! Runs on `district_final`, after matching, so a record whose raw input
//! looked garbled but fuzzy-rescued to a valid name is never discarded.
//! Only irrecoverable output is dropped, and dropped means gone: garbage
//! records do not appear in the output table as `unmatched`.

use regex::Regex;

use crate::error::ReconError;
use crate::normalize::normalize;

/// Placeholder literals seen in real extracts where a district should be.
const PLACEHOLDERS: &[&str] = &[
    "?",
    "-",
    "--",
    "NA",
    "N/A",
    "N A",
    "NIL",
    "NULL",
    "NONE",
    "UNKNOWN",
    "NOT AVAILABLE",
    "NOT KNOWN",
    "OTHER",
    "OTHERS",
    "XXX",
    "TEST",
];

/// Decides whether a resolved district value is irrecoverable corruption.
///
/// Defaults cover blank, purely numeric tokens, one/two-letter tokens, and
/// known placeholder literals. Extra literals and regex patterns can be
/// layered from the run config.
#[derive(Debug, Default, Clone)]
pub struct GarbagePolicy {
    extra_literals: Vec<String>,
    extra_patterns: Vec<Regex>,
}

impl GarbagePolicy {
    /// Add placeholder literals from config. Compared post-normalization.
    pub fn extend_literals<I, S>(&mut self, literals: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for lit in literals {
            let lit = normalize(lit.as_ref());
            if !lit.is_empty() {
                self.extra_literals.push(lit);
            }
        }
    }

    /// Compile and add regex patterns from config. A bad pattern is a
    /// configuration error, reported before any data is touched.
    pub fn extend_patterns<I, S>(&mut self, patterns: I) -> Result<(), ReconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pat in patterns {
            let re = Regex::new(pat.as_ref()).map_err(|e| {
                ReconError::ConfigValidation(format!(
                    "bad garbage pattern '{}': {e}",
                    pat.as_ref()
                ))
            })?;
            self.extra_patterns.push(re);
        }
        Ok(())
    }

    pub fn is_garbage(&self, resolved: &str) -> bool {
        let value = normalize(resolved);

        if value.is_empty() {
            return true;
        }
        if value.chars().all(|c| c.is_ascii_digit()) {
            return true;
        }
        // One/two-letter tokens: "X", "AB". Three letters is already a
        // real name (GOA).
        if value.len() <= 2 && value.chars().all(|c| c.is_ascii_alphabetic()) {
            return true;
        }
        if PLACEHOLDERS.contains(&value.as_str()) {
            return true;
        }
        if self.extra_literals.iter().any(|l| l == &value) {
            return true;
        }
        self.extra_patterns.iter().any(|re| re.is_match(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace() {
        let p = GarbagePolicy::default();
        assert!(p.is_garbage(""));
        assert!(p.is_garbage("   "));
    }

    #[test]
    fn numeric_tokens() {
        let p = GarbagePolicy::default();
        assert!(p.is_garbage("100000"));
        assert!(p.is_garbage("0"));
        assert!(p.is_garbage(" 42 "));
    }

    #[test]
    fn short_letter_tokens() {
        let p = GarbagePolicy::default();
        assert!(p.is_garbage("X"));
        assert!(p.is_garbage("ab"));
        assert!(!p.is_garbage("GOA")); // three letters is a real name
    }

    #[test]
    fn placeholders() {
        let p = GarbagePolicy::default();
        assert!(p.is_garbage("?"));
        assert!(p.is_garbage("n/a"));
        assert!(p.is_garbage("Not Available"));
        assert!(p.is_garbage("others"));
    }

    #[test]
    fn real_names_survive() {
        let p = GarbagePolicy::default();
        assert!(!p.is_garbage("PUNE"));
        assert!(!p.is_garbage("NORTH 24 PARGANAS"));
        // Names containing digits are fine as long as not all-digit.
        assert!(!p.is_garbage("24 PARGANAS"));
    }

    #[test]
    fn config_extras() {
        let mut p = GarbagePolicy::default();
        p.extend_literals(vec!["pending"]);
        p.extend_patterns(vec![r"^DIST \d+$"]).unwrap();

        assert!(p.is_garbage("PENDING"));
        assert!(p.is_garbage("DIST 404"));
        assert!(!p.is_garbage("DISTRICT 9 TOWN"));
    }

    #[test]
    fn bad_pattern_is_config_error() {
        let mut p = GarbagePolicy::default();
        let err = p.extend_patterns(vec!["["]).unwrap_err();
        assert!(err.to_string().contains("bad garbage pattern"));
    }
}
