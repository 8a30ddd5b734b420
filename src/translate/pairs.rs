//! Language-pair capability table.

/// Pairs served by a dedicated bilingual opus-mt model, listed per direction.
/// Lookup is exact-match on the (src, tgt) tuple as stored.
const DIRECT_PAIRS: [(&str, &str); 8] = [
    ("en", "fr"),
    ("fr", "en"),
    ("en", "es"),
    ("es", "en"),
    ("en", "vi"),
    ("vi", "en"),
    ("en", "zh"),
    ("zh", "en"),
];

/// Whether a dedicated bilingual model exists for this exact direction.
pub fn supports_direct(src: &str, tgt: &str) -> bool {
    DIRECT_PAIRS.iter().any(|&(s, t)| s == src && t == tgt)
}

/// Languages covered only by the multilingual model. No opus-mt pair model
/// exists for these, so they must never be routed to a bilingual backend.
const MULTILINGUAL_ONLY: [&str; 1] = ["pa"];

pub fn multilingual_only(lang: &str) -> bool {
    MULTILINGUAL_ONLY.contains(&lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_pairs_in_both_directions() {
        for lang in ["fr", "es", "vi", "zh"] {
            assert!(supports_direct("en", lang));
            assert!(supports_direct(lang, "en"));
        }
    }

    #[test]
    fn test_unsupported_pairs() {
        assert!(!supports_direct("fr", "zh"));
        assert!(!supports_direct("en", "ja"));
        assert!(!supports_direct("en", "en"));
        assert!(!supports_direct("pa", "en"));
    }

    #[test]
    fn test_multilingual_only_languages() {
        assert!(multilingual_only("pa"));
        assert!(!multilingual_only("en"));
        assert!(!multilingual_only("fr"));
    }
}
