//! Shared text canonicalization.
//!
//! One function, applied identically to registry entries and incoming
//! records. Asymmetric normalization is the classic root cause of false
//! "unmatched" results, so every membership check in this crate goes
//! through `normalize` first and never compares raw text.

/// Uppercase, trim, and collapse internal whitespace runs to a single space.
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        for ch in word.chars() {
            out.extend(ch.to_uppercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_and_trims() {
        assert_eq!(normalize("  Pune  "), "PUNE");
        assert_eq!(normalize("PUNE"), "PUNE");
        assert_eq!(normalize("pune"), "PUNE");
    }

    #[test]
    fn collapses_internal_whitespace() {
        assert_eq!(normalize("uttar   pradesh"), "UTTAR PRADESH");
        assert_eq!(normalize("north\t24  parganas"), "NORTH 24 PARGANAS");
        assert_eq!(normalize("a\n b"), "A B");
    }

    #[test]
    fn idempotent() {
        for s in ["  Pune  ", "uttar   pradesh", "", "  ", "x"] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
