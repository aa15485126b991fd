//! Multi-law audit: every selected law is marked as a warning when the plain
//! lowercase form of at least one of its bad patterns occurs in the haystack,
//! otherwise as passed. Unlike single-law analysis there is no
//! punctuation-stripped match.

use crate::catalog::Knowledge;
use crate::model::{Law, LawCategory, Platform};
use crate::patterns::Haystack;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub warnings: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.passed + self.warnings
    }

    /// Percentage of passed laws, rounded; `None` when nothing was evaluated.
    pub fn score(&self) -> Option<u8> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let pct = (self.passed as f64 / total as f64 * 100.0).round();
        Some(pct as u8)
    }

    fn record(&mut self, status: LawStatus) {
        match status {
            LawStatus::Passed => self.passed += 1,
            LawStatus::Warning => self.warnings += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LawStatus {
    Passed,
    Warning,
}

#[derive(Debug, Clone)]
pub struct LawVerdict<'k> {
    pub law: &'k Law,
    pub status: LawStatus,
    pub matched_bad: Vec<&'k str>,
}

#[derive(Debug, Clone)]
pub struct CategoryAudit<'k> {
    pub category: LawCategory,
    pub tally: Tally,
    pub laws: Vec<LawVerdict<'k>>,
}

/// Overall assessment derived from the global score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Excellent,
    Good,
    NeedsAttention,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Verdict::Excellent,
            60..=79 => Verdict::Good,
            _ => Verdict::NeedsAttention,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuditReport<'k> {
    pub platform: &'k Platform,
    /// Categories with at least one evaluated law, in catalog order.
    pub categories: Vec<CategoryAudit<'k>>,
    pub global: Tally,
}

impl AuditReport<'_> {
    pub fn evaluated(&self) -> usize {
        self.global.total()
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.global.score().map(Verdict::from_score)
    }
}

/// Audit `haystack` (see [`AnalysisRequest::audit_haystack`](crate::AnalysisRequest::audit_haystack))
/// against every law, or only laws in `focus` when it is non-empty.
pub fn audit<'k>(
    knowledge: &'k Knowledge,
    platform: &'k Platform,
    haystack: &Haystack,
    focus: &[LawCategory],
) -> AuditReport<'k> {
    let mut categories: Vec<CategoryAudit<'k>> = Vec::new();
    let mut global = Tally::default();

    for info in knowledge.categories() {
        if !focus.is_empty() && !focus.contains(&info.id) {
            continue;
        }
        let mut entry = CategoryAudit {
            category: info.id,
            tally: Tally::default(),
            laws: Vec::new(),
        };
        for law in knowledge.laws_in(info.id) {
            let patterns = knowledge.patterns_for(law, &platform.id);
            let matched_bad: Vec<&'k str> = patterns
                .bad
                .iter()
                .filter(|p| haystack.contains_literal(p))
                .map(String::as_str)
                .collect();
            let status = if matched_bad.is_empty() {
                LawStatus::Passed
            } else {
                LawStatus::Warning
            };
            entry.tally.record(status);
            global.record(status);
            entry.laws.push(LawVerdict {
                law,
                status,
                matched_bad,
            });
        }
        if entry.tally.total() > 0 {
            categories.push(entry);
        }
    }

    AuditReport {
        platform,
        categories,
        global,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tally_has_no_score() {
        assert_eq!(Tally::default().score(), None);
    }

    #[test]
    fn score_rounds_to_nearest() {
        assert_eq!(Tally { passed: 2, warnings: 1 }.score(), Some(67));
        assert_eq!(Tally { passed: 1, warnings: 2 }.score(), Some(33));
        assert_eq!(Tally { passed: 1, warnings: 1 }.score(), Some(50));
        assert_eq!(Tally { passed: 5, warnings: 0 }.score(), Some(100));
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::from_score(80), Verdict::Excellent);
        assert_eq!(Verdict::from_score(79), Verdict::Good);
        assert_eq!(Verdict::from_score(60), Verdict::Good);
        assert_eq!(Verdict::from_score(59), Verdict::NeedsAttention);
    }

    #[test]
    fn clean_text_passes_everything() {
        let k = Knowledge::builtin().unwrap();
        let platform = k.fallback_platform();
        let report = audit(&k, platform, &Haystack::new(&[Some("")]), &[]);
        assert_eq!(report.evaluated(), k.laws().len());
        assert_eq!(report.global.warnings, 0);
        assert_eq!(report.global.score(), Some(100));
        assert_eq!(report.verdict(), Some(Verdict::Excellent));
    }

    #[test]
    fn focus_limits_categories() {
        let k = Knowledge::builtin().unwrap();
        let platform = k.fallback_platform();
        let report = audit(&k, platform, &Haystack::new(&[None]), &[LawCategory::Performance]);
        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.categories[0].category, LawCategory::Performance);
        assert_eq!(report.evaluated(), k.laws_in(LawCategory::Performance).count());
    }

    #[test]
    fn only_literal_bad_patterns_count() {
        let k = Knowledge::from_sources(crate::catalog::KnowledgeSources {
            laws: r#"[{"id": "small_text", "name": "Small", "nameEs": "Pequeño", "category": "design",
                       "definition": "d", "definitionEs": "d",
                       "patterns": {"bad": ["font-size: 8px"]}}]"#,
            overrides: "[]",
            checklists: "[]",
            ..crate::catalog::KnowledgeSources::BUILTIN
        })
        .unwrap();
        let platform = k.fallback_platform();

        let report = audit(&k, platform, &Haystack::new(&[Some("fontsize8px")]), &[]);
        assert_eq!(report.global.warnings, 0);

        let report = audit(&k, platform, &Haystack::new(&[Some("P { FONT-SIZE: 8PX }")]), &[]);
        assert_eq!(report.global.warnings, 1);
        assert_eq!(report.categories[0].laws[0].matched_bad, vec!["font-size: 8px"]);
    }
}
