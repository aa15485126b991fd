use crate::catalog::Knowledge;
use crate::error::UnknownLaw;
use crate::model::{Law, Platform};
use crate::patterns::{match_patterns, Haystack, MatchOutcome, ResolvedPatterns};

/// Material submitted for analysis. Every field is optional; an absent
/// platform means auto-detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisRequest<'a> {
    pub code: Option<&'a str>,
    pub description: Option<&'a str>,
    pub context: Option<&'a str>,
    pub platform: Option<&'a str>,
}

impl<'a> AnalysisRequest<'a> {
    pub fn haystack(&self) -> Haystack {
        Haystack::new(&[self.code, self.description, self.context])
    }

    /// Text an audit scans: code and description only.
    pub fn audit_haystack(&self) -> Haystack {
        Haystack::new(&[self.code, self.description])
    }

    /// Whether there is code or a description to report findings on.
    pub fn has_subject(&self) -> bool {
        self.code.is_some() || self.description.is_some()
    }
}

/// Result of checking one law against a request.
#[derive(Debug, Clone)]
pub struct Analysis<'k> {
    pub law: &'k Law,
    pub platform: &'k Platform,
    pub patterns: ResolvedPatterns<'k>,
    /// `None` when the request carried neither code nor a description.
    pub matches: Option<MatchOutcome<'k>>,
}

impl Knowledge {
    pub fn analyze(&self, law_id: &str, request: &AnalysisRequest<'_>) -> Result<Analysis<'_>, UnknownLaw> {
        let law = self.require_law(law_id)?;
        let platform = self.resolve_platform(request.platform, request.code);
        let patterns = self.patterns_for(law, &platform.id);
        let matches = request
            .has_subject()
            .then(|| match_patterns(&request.haystack(), &patterns));
        Ok(Analysis {
            law,
            platform,
            patterns,
            matches,
        })
    }
}
