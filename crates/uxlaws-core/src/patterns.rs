//! Pattern resolution and substring matching.
//!
//! Matching is textual co-occurrence only: a hit means the pattern text shows
//! up in the supplied material, not that the practice is actually present.

use tracing::debug;

use crate::catalog::Knowledge;
use crate::error::UnknownLaw;
use crate::model::{Law, FALLBACK_PLATFORM};

/// Where a resolved pattern set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSource {
    /// Override for the exact (law, platform) pair.
    Exact,
    /// Override for the law on the fallback web platform.
    WebFallback,
    /// The law's own generic patterns.
    LawDefault,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPatterns<'k> {
    pub good: &'k [String],
    pub bad: &'k [String],
    /// Override guidelines, or the law's (Spanish) key points for `LawDefault`.
    pub guidelines: &'k [String],
    pub source: PatternSource,
}

impl ResolvedPatterns<'_> {
    pub fn is_platform_specific(&self) -> bool {
        self.source != PatternSource::LawDefault
    }
}

impl Knowledge {
    /// Patterns for a law on a platform: exact override, then the fallback
    /// platform's override, then the law's generic set.
    pub fn patterns_for<'k>(&'k self, law: &'k Law, platform_id: &str) -> ResolvedPatterns<'k> {
        let (found, source) = match self.override_for(&law.id, platform_id) {
            Some(o) => (Some(o), PatternSource::Exact),
            None => (
                self.override_for(&law.id, FALLBACK_PLATFORM),
                PatternSource::WebFallback,
            ),
        };
        let resolved = match found {
            Some(o) => ResolvedPatterns {
                good: &o.good,
                bad: &o.bad,
                guidelines: &o.guidelines,
                source,
            },
            None => ResolvedPatterns {
                good: &law.patterns.good,
                bad: &law.patterns.bad,
                guidelines: &law.key_points_es,
                source: PatternSource::LawDefault,
            },
        };
        debug!(law = %law.id, platform = platform_id, source = ?resolved.source, "patterns resolved");
        resolved
    }

    /// Like [`Knowledge::patterns_for`], keyed by law identifier.
    pub fn resolve_patterns(
        &self,
        law_id: &str,
        platform_id: &str,
    ) -> Result<ResolvedPatterns<'_>, UnknownLaw> {
        let law = self.require_law(law_id)?;
        Ok(self.patterns_for(law, platform_id))
    }
}

// --- Matching ---

/// Lowercased text that patterns are searched in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Haystack(String);

impl Haystack {
    /// Join the parts with single spaces (missing parts count as empty) and lowercase.
    pub fn new(parts: &[Option<&str>]) -> Self {
        let joined = parts
            .iter()
            .map(|p| p.unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ");
        Self(joined.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when either the punctuation-stripped or the plain lowercase form
    /// of `pattern` occurs in the haystack. Empty forms never match.
    pub fn contains_pattern(&self, pattern: &str) -> bool {
        let stripped: String = pattern
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        (!stripped.is_empty() && self.0.contains(&stripped)) || self.contains_literal(pattern)
    }

    /// True when the plain lowercase form of `pattern` occurs in the haystack.
    pub fn contains_literal(&self, pattern: &str) -> bool {
        let lowered = pattern.to_lowercase();
        !lowered.is_empty() && self.0.contains(&lowered)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome<'k> {
    pub matched_good: Vec<&'k str>,
    pub matched_bad: Vec<&'k str>,
}

impl MatchOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.matched_good.is_empty() && self.matched_bad.is_empty()
    }
}

fn matching<'k>(haystack: &Haystack, patterns: &'k [String]) -> Vec<&'k str> {
    patterns
        .iter()
        .filter(|p| haystack.contains_pattern(p))
        .map(String::as_str)
        .collect()
}

/// Good and bad patterns found in `haystack`, each in pattern order.
pub fn match_patterns<'k>(haystack: &Haystack, patterns: &ResolvedPatterns<'k>) -> MatchOutcome<'k> {
    MatchOutcome {
        matched_good: matching(haystack, patterns.good),
        matched_bad: matching(haystack, patterns.bad),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haystack_joins_parts_with_spaces() {
        let h = Haystack::new(&[Some("A"), None, Some("B")]);
        assert_eq!(h.as_str(), "a  b");
    }

    #[test]
    fn matches_plain_lowercase_form() {
        let h = Haystack::new(&[Some("button { MIN-WIDTH: 44px; min-height: 44px; }")]);
        assert!(h.contains_pattern("min-width: 44px; min-height: 44px;"));
        assert!(!h.contains_pattern("width: 20px; height: 20px;"));
    }

    #[test]
    fn matches_stripped_form_in_prose() {
        let h = Haystack::new(&[None, Some("the button uses minwidth44px everywhere")]);
        assert!(h.contains_pattern("min-width: 44px"));
    }

    #[test]
    fn literal_check_ignores_stripped_form() {
        let h = Haystack::new(&[Some("minwidth44px")]);
        assert!(h.contains_pattern("min-width: 44px"));
        assert!(!h.contains_literal("min-width: 44px"));
        assert!(!h.contains_literal(""));
    }

    #[test]
    fn punctuation_only_pattern_needs_literal_hit() {
        let h = Haystack::new(&[Some("plain words")]);
        assert!(!h.contains_pattern("{ }"));
        assert!(!h.contains_pattern(""));
        let h = Haystack::new(&[Some("Button { } .buttonStyle")]);
        assert!(h.contains_pattern("{ }"));
    }

    #[test]
    fn outcome_preserves_pattern_order() {
        let good = vec!["gap: 16px;".to_string(), "padding: 12px 24px;".to_string()];
        let bad = vec!["font-size: 10px;".to_string()];
        let patterns = ResolvedPatterns {
            good: &good,
            bad: &bad,
            guidelines: &[],
            source: PatternSource::LawDefault,
        };
        let h = Haystack::new(&[Some("padding: 12px 24px; gap: 16px;")]);
        let outcome = match_patterns(&h, &patterns);
        assert_eq!(outcome.matched_good, vec!["gap: 16px;", "padding: 12px 24px;"]);
        assert!(outcome.matched_bad.is_empty());
    }
}
