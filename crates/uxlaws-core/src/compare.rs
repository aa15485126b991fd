use crate::catalog::Knowledge;
use crate::error::UnknownLaw;
use crate::model::{Law, Platform};
use crate::patterns::ResolvedPatterns;

/// Platforms compared when the caller does not name any.
pub const DEFAULT_COMPARISON: [&str; 4] = ["web-react", "ios-swiftui", "android-compose", "flutter"];

#[derive(Debug, Clone)]
pub struct ComparisonEntry<'k> {
    pub platform: &'k Platform,
    pub patterns: ResolvedPatterns<'k>,
}

/// How one law is expressed across several platforms.
#[derive(Debug, Clone)]
pub struct Comparison<'k> {
    pub law: &'k Law,
    pub entries: Vec<ComparisonEntry<'k>>,
    /// Requested identifiers that are not concrete platforms.
    pub skipped: Vec<String>,
}

impl Knowledge {
    pub fn compare<S: AsRef<str>>(
        &self,
        law_id: &str,
        platforms: Option<&[S]>,
    ) -> Result<Comparison<'_>, UnknownLaw> {
        let law = self.require_law(law_id)?;
        let requested: Vec<&str> = match platforms {
            Some(ids) if !ids.is_empty() => ids.iter().map(|s| s.as_ref()).collect(),
            _ => DEFAULT_COMPARISON.to_vec(),
        };

        let mut entries = Vec::with_capacity(requested.len());
        let mut skipped = Vec::new();
        for id in requested {
            match self.platform(id).filter(|p| !p.is_auto()) {
                Some(platform) => entries.push(ComparisonEntry {
                    platform,
                    patterns: self.patterns_for(law, &platform.id),
                }),
                None => skipped.push(id.to_string()),
            }
        }

        Ok(Comparison {
            law,
            entries,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternSource;

    #[test]
    fn defaults_to_four_platforms() {
        let k = Knowledge::builtin().unwrap();
        let cmp = k.compare::<&str>("fitts_law", None).unwrap();
        let ids: Vec<&str> = cmp.entries.iter().map(|e| e.platform.id.as_str()).collect();
        assert_eq!(ids, DEFAULT_COMPARISON.to_vec());
        assert!(cmp.skipped.is_empty());
    }

    #[test]
    fn unknown_and_auto_platforms_are_skipped() {
        let k = Knowledge::builtin().unwrap();
        let cmp = k.compare("hicks_law", Some(&["cli", "auto", "palm-os"][..])).unwrap();
        assert_eq!(cmp.entries.len(), 1);
        assert_eq!(cmp.entries[0].patterns.source, PatternSource::Exact);
        assert_eq!(cmp.skipped, vec!["auto".to_string(), "palm-os".to_string()]);
    }
}
