use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Identifier of the platform sentinel that asks for auto-detection.
pub const AUTO_PLATFORM: &str = "auto";

/// Platform used whenever detection finds nothing or an identifier is unknown.
pub const FALLBACK_PLATFORM: &str = "web-html";

// --- Locale ---

/// Language used for report headings and bilingual law fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" | "spanish" | "español" => Ok(Locale::Es),
            "en" | "english" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{}' (expected 'es' or 'en')", other)),
        }
    }
}

// --- Categories ---

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum LawCategory {
    Heuristic,
    Gestalt,
    Cognitive,
    Performance,
    Design,
    Mental,
}

impl LawCategory {
    pub const ALL: [LawCategory; 6] = [
        LawCategory::Heuristic,
        LawCategory::Gestalt,
        LawCategory::Cognitive,
        LawCategory::Performance,
        LawCategory::Design,
        LawCategory::Mental,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LawCategory::Heuristic => "heuristic",
            LawCategory::Gestalt => "gestalt",
            LawCategory::Cognitive => "cognitive",
            LawCategory::Performance => "performance",
            LawCategory::Design => "design",
            LawCategory::Mental => "mental",
        }
    }
}

impl fmt::Display for LawCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LawCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LawCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown law category '{}'", s))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum PlatformCategory {
    Web,
    Mobile,
    Desktop,
    Voice,
    Cli,
    Game,
    Xr,
}

impl PlatformCategory {
    pub const ALL: [PlatformCategory; 7] = [
        PlatformCategory::Web,
        PlatformCategory::Mobile,
        PlatformCategory::Desktop,
        PlatformCategory::Voice,
        PlatformCategory::Cli,
        PlatformCategory::Game,
        PlatformCategory::Xr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformCategory::Web => "web",
            PlatformCategory::Mobile => "mobile",
            PlatformCategory::Desktop => "desktop",
            PlatformCategory::Voice => "voice",
            PlatformCategory::Cli => "cli",
            PlatformCategory::Game => "game",
            PlatformCategory::Xr => "xr",
        }
    }
}

impl fmt::Display for PlatformCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a law category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: LawCategory,
    pub name: String,
    pub name_es: String,
    pub description: String,
}

impl CategoryInfo {
    pub fn name_for(&self, locale: Locale) -> &str {
        match locale {
            Locale::Es => &self.name_es,
            Locale::En => &self.name,
        }
    }
}

// --- Laws ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternSet {
    #[serde(default)]
    pub good: Vec<String>,
    #[serde(default)]
    pub bad: Vec<String>,
}

/// A UX heuristic with bilingual definitions and generic code patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Law {
    pub id: String,
    pub name: String,
    pub name_es: String,
    pub category: LawCategory,
    pub definition: String,
    pub definition_es: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub key_points_es: Vec<String>,
    #[serde(default)]
    pub checklist: Vec<String>,
    #[serde(default)]
    pub patterns: PatternSet,
    #[serde(default)]
    pub related_laws: Vec<String>,
}

impl Law {
    pub fn name_for(&self, locale: Locale) -> &str {
        match locale {
            Locale::Es => &self.name_es,
            Locale::En => &self.name,
        }
    }

    pub fn definition_for(&self, locale: Locale) -> &str {
        match locale {
            Locale::Es => &self.definition_es,
            Locale::En => &self.definition,
        }
    }

    pub fn key_points_for(&self, locale: Locale) -> &[String] {
        match locale {
            Locale::Es => &self.key_points_es,
            Locale::En => &self.key_points,
        }
    }
}

// --- Platforms ---

/// Platform entry as stored in the table, before signatures are compiled.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlatformRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<PlatformCategory>,
    #[serde(default)]
    pub file_extensions: Vec<String>,
    #[serde(default)]
    pub detect_patterns: Vec<String>,
    pub description: String,
}

/// A detection signature: the source text and its case-insensitive compiled form.
#[derive(Debug, Clone)]
pub struct Signature {
    pub source: String,
    pub(crate) regex: Regex,
}

impl Signature {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// A target UI technology. Only the `auto` sentinel has no category.
#[derive(Debug, Clone)]
pub struct Platform {
    pub id: String,
    pub name: String,
    pub category: Option<PlatformCategory>,
    pub file_extensions: Vec<String>,
    pub signatures: Vec<Signature>,
    pub description: String,
}

impl Platform {
    pub fn is_auto(&self) -> bool {
        self.id == AUTO_PLATFORM
    }

    /// Category label for reports; the sentinel renders as "auto".
    pub fn category_label(&self) -> &'static str {
        self.category.map(|c| c.as_str()).unwrap_or(AUTO_PLATFORM)
    }
}

// --- Overrides & checklists ---

/// Platform-specific replacement for a law's generic patterns.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternOverride {
    pub law: String,
    pub platform: String,
    #[serde(default)]
    pub good: Vec<String>,
    #[serde(default)]
    pub bad: Vec<String>,
    #[serde(default)]
    pub guidelines: Vec<String>,
}

/// Verification checklist for a kind of UI component.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentChecklist {
    pub component: String,
    #[serde(default)]
    pub laws: Vec<String>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub platform_items: HashMap<String, Vec<String>>,
}

impl ComponentChecklist {
    pub fn items_for(&self, platform_id: &str) -> Option<&[String]> {
        self.platform_items.get(platform_id).map(|v| v.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_parses_common_spellings() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" es ".parse::<Locale>().unwrap(), Locale::Es);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn law_category_round_trips_through_str() {
        for category in LawCategory::ALL {
            assert_eq!(category.as_str().parse::<LawCategory>().unwrap(), category);
        }
        assert!("visual".parse::<LawCategory>().is_err());
    }

    #[test]
    fn category_deserializes_lowercase() {
        let c: PlatformCategory = serde_json::from_str("\"xr\"").unwrap();
        assert_eq!(c, PlatformCategory::Xr);
    }
}
