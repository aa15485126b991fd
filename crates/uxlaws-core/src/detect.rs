//! Platform detection.
//!
//! Every concrete platform is scored against the input: +5 when the file
//! extension is one of its extensions, +3 for each detection signature that
//! matches. The first platform in table order with the strictly highest score
//! wins; with no positive score the fallback platform is returned.

use tracing::{debug, warn};

use crate::catalog::Knowledge;
use crate::model::{Platform, AUTO_PLATFORM};

pub const EXTENSION_SCORE: u32 = 5;
pub const SIGNATURE_SCORE: u32 = 3;

fn score(platform: &Platform, text: &str, file_extension: Option<&str>) -> u32 {
    let extension_hit = file_extension
        .is_some_and(|ext| platform.file_extensions.iter().any(|e| e == ext));
    let mut score = if extension_hit { EXTENSION_SCORE } else { 0 };
    for signature in &platform.signatures {
        if signature.is_match(text) {
            score += SIGNATURE_SCORE;
        }
    }
    score
}

impl Knowledge {
    /// Best-scoring concrete platform for `text`. Never returns the `auto` sentinel.
    pub fn detect(&self, text: &str, file_extension: Option<&str>) -> &Platform {
        let mut best = self.fallback_platform();
        let mut best_score = 0;
        for platform in self.platforms() {
            let s = score(platform, text, file_extension);
            if s > best_score {
                best_score = s;
                best = platform;
            }
        }
        debug!(platform = %best.id, score = best_score, "platform detected");
        best
    }

    /// Signature sources of `platform` that match `text`, in table order.
    pub fn matched_signatures<'p>(&self, platform: &'p Platform, text: &str) -> Vec<&'p str> {
        platform
            .signatures
            .iter()
            .filter(|s| s.is_match(text))
            .map(|s| s.source.as_str())
            .collect()
    }

    /// Turn a requested platform identifier into a concrete platform.
    ///
    /// `None` and `"auto"` detect from `code` (fallback when there is no code);
    /// unknown identifiers resolve to the fallback platform.
    pub fn resolve_platform(&self, requested: Option<&str>, code: Option<&str>) -> &Platform {
        let requested = requested.map(str::trim).filter(|r| !r.is_empty());
        match requested {
            None | Some(AUTO_PLATFORM) => match code {
                Some(code) => self.detect(code, None),
                None => self.fallback_platform(),
            },
            Some(id) => match self.platform(id) {
                Some(platform) => platform,
                None => {
                    warn!(platform = id, "unknown platform requested, using fallback");
                    self.fallback_platform()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Knowledge, KnowledgeSources};

    const PLATFORMS: &str = r#"[
        {"id": "auto", "name": "Auto", "description": "sentinel"},
        {"id": "web-html", "name": "HTML", "category": "web",
         "fileExtensions": [".html", ".js"], "detectPatterns": ["<div"], "description": "web"},
        {"id": "first", "name": "First", "category": "mobile",
         "fileExtensions": [".kt"], "detectPatterns": ["alpha"], "description": "first"},
        {"id": "second", "name": "Second", "category": "mobile",
         "fileExtensions": [".kt"], "detectPatterns": ["alpha", "beta"], "description": "second"}
    ]"#;

    fn knowledge() -> Knowledge {
        Knowledge::from_sources(KnowledgeSources {
            laws: "[]",
            categories: "[]",
            platforms: PLATFORMS,
            overrides: "[]",
            checklists: "[]",
        })
        .unwrap()
    }

    #[test]
    fn empty_input_falls_back() {
        let k = knowledge();
        assert_eq!(k.detect("", None).id, "web-html");
    }

    #[test]
    fn equal_scores_keep_first_platform() {
        let k = knowledge();
        assert_eq!(k.detect("", Some(".kt")).id, "first");
        assert_eq!(k.detect("ALPHA", None).id, "first");
    }

    #[test]
    fn higher_score_overrides_order() {
        let k = knowledge();
        assert_eq!(k.detect("alpha beta", Some(".kt")).id, "second");
    }

    #[test]
    fn signatures_are_case_insensitive() {
        let k = knowledge();
        let platform = k.platform("web-html").unwrap();
        assert_eq!(k.matched_signatures(platform, "<DIV class='x'>"), vec!["<div"]);
    }

    #[test]
    fn resolve_platform_handles_auto_unknown_and_explicit() {
        let k = knowledge();
        assert_eq!(k.resolve_platform(None, None).id, "web-html");
        assert_eq!(k.resolve_platform(Some("auto"), Some("beta")).id, "second");
        assert_eq!(k.resolve_platform(Some("first"), Some("beta")).id, "first");
        assert_eq!(k.resolve_platform(Some("nope"), None).id, "web-html");
        assert_eq!(k.resolve_platform(Some("  "), None).id, "web-html");
    }
}
