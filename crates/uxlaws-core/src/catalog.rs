use regex::RegexBuilder;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use tracing::info;

use crate::error::{KnowledgeError, UnknownComponent, UnknownLaw};
use crate::model::{
    CategoryInfo, ComponentChecklist, Law, LawCategory, PatternOverride, Platform, PlatformCategory,
    PlatformRecord, Signature, AUTO_PLATFORM, FALLBACK_PLATFORM,
};

/// JSON documents a [`Knowledge`] is built from.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeSources<'a> {
    pub laws: &'a str,
    pub categories: &'a str,
    pub platforms: &'a str,
    pub overrides: &'a str,
    pub checklists: &'a str,
}

impl KnowledgeSources<'static> {
    /// Tables compiled into the crate.
    pub const BUILTIN: Self = Self {
        laws: include_str!("../data/laws.json"),
        categories: include_str!("../data/categories.json"),
        platforms: include_str!("../data/platforms.json"),
        overrides: include_str!("../data/overrides.json"),
        checklists: include_str!("../data/checklists.json"),
    };
}

/// Read-only catalog of laws, platforms, overrides and checklists.
///
/// Built once at startup and shared by reference. Table order is preserved:
/// the platform order doubles as the detection priority.
#[derive(Debug, Clone)]
pub struct Knowledge {
    laws: Vec<Law>,
    law_index: HashMap<String, usize>,
    categories: Vec<CategoryInfo>,
    platforms: Vec<Platform>,
    platform_index: HashMap<String, usize>,
    overrides: Vec<PatternOverride>,
    override_index: HashMap<(String, String), usize>,
    checklists: Vec<ComponentChecklist>,
}

fn parse<T: DeserializeOwned>(table: &'static str, raw: &str) -> Result<T, KnowledgeError> {
    serde_json::from_str(raw).map_err(|source| KnowledgeError::Parse { table, source })
}

fn index_by<T>(
    kind: &'static str,
    items: &[T],
    id: impl Fn(&T) -> &str,
) -> Result<HashMap<String, usize>, KnowledgeError> {
    let mut index = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        if index.insert(id(item).to_string(), i).is_some() {
            return Err(KnowledgeError::DuplicateId {
                kind,
                id: id(item).to_string(),
            });
        }
    }
    Ok(index)
}

fn compile_platform(record: PlatformRecord) -> Result<Platform, KnowledgeError> {
    if record.category.is_none() && record.id != AUTO_PLATFORM {
        return Err(KnowledgeError::UncategorizedPlatform(record.id));
    }
    let mut signatures = Vec::with_capacity(record.detect_patterns.len());
    for source in record.detect_patterns {
        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|e| KnowledgeError::InvalidSignature {
                platform: record.id.clone(),
                signature: source.clone(),
                source: e,
            })?;
        signatures.push(Signature { source, regex });
    }
    Ok(Platform {
        id: record.id,
        name: record.name,
        category: record.category,
        file_extensions: record.file_extensions,
        signatures,
        description: record.description,
    })
}

impl Knowledge {
    /// Load the tables compiled into the crate.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        Self::from_sources(KnowledgeSources::BUILTIN)
    }

    /// Parse and cross-check a full set of tables.
    pub fn from_sources(sources: KnowledgeSources<'_>) -> Result<Self, KnowledgeError> {
        let laws: Vec<Law> = parse("laws", sources.laws)?;
        let categories: Vec<CategoryInfo> = parse("categories", sources.categories)?;
        let records: Vec<PlatformRecord> = parse("platforms", sources.platforms)?;
        let overrides: Vec<PatternOverride> = parse("overrides", sources.overrides)?;
        let checklists: Vec<ComponentChecklist> = parse("checklists", sources.checklists)?;

        let platforms = records
            .into_iter()
            .map(compile_platform)
            .collect::<Result<Vec<_>, _>>()?;

        let law_index = index_by("law", &laws, |l| &l.id)?;
        let platform_index = index_by("platform", &platforms, |p| &p.id)?;
        index_by("category", &categories, |c| c.id.as_str())?;
        index_by("checklist", &checklists, |c| &c.component)?;

        for required in [AUTO_PLATFORM, FALLBACK_PLATFORM] {
            if !platform_index.contains_key(required) {
                return Err(KnowledgeError::MissingPlatform(required));
            }
        }

        let known_categories: HashSet<LawCategory> = categories.iter().map(|c| c.id).collect();
        for law in &laws {
            if !known_categories.contains(&law.category) {
                return Err(KnowledgeError::MissingCategory {
                    law: law.id.clone(),
                    category: law.category.to_string(),
                });
            }
            if let Some(related) = law.related_laws.iter().find(|r| !law_index.contains_key(*r)) {
                return Err(KnowledgeError::DanglingRelatedLaw {
                    law: law.id.clone(),
                    related: related.clone(),
                });
            }
        }

        let mut override_index = HashMap::with_capacity(overrides.len());
        for (i, o) in overrides.iter().enumerate() {
            let kind = if !law_index.contains_key(&o.law) {
                Some("law")
            } else if !platform_index.contains_key(&o.platform) || o.platform == AUTO_PLATFORM {
                Some("platform")
            } else {
                None
            };
            if let Some(kind) = kind {
                return Err(KnowledgeError::DanglingOverride {
                    law: o.law.clone(),
                    platform: o.platform.clone(),
                    kind,
                });
            }
            if override_index
                .insert((o.law.clone(), o.platform.clone()), i)
                .is_some()
            {
                return Err(KnowledgeError::DuplicateId {
                    kind: "override",
                    id: format!("{}/{}", o.law, o.platform),
                });
            }
        }

        for checklist in &checklists {
            let dangling_law = checklist.laws.iter().find(|l| !law_index.contains_key(*l));
            if let Some(id) = dangling_law {
                return Err(KnowledgeError::DanglingChecklistRef {
                    component: checklist.component.clone(),
                    kind: "law",
                    id: id.clone(),
                });
            }
            let dangling_platform = checklist
                .platform_items
                .keys()
                .find(|p| !platform_index.contains_key(*p));
            if let Some(id) = dangling_platform {
                return Err(KnowledgeError::DanglingChecklistRef {
                    component: checklist.component.clone(),
                    kind: "platform",
                    id: id.clone(),
                });
            }
        }

        info!(
            laws = laws.len(),
            platforms = platforms.len() - 1,
            overrides = overrides.len(),
            checklists = checklists.len(),
            "knowledge tables loaded"
        );

        Ok(Self {
            laws,
            law_index,
            categories,
            platforms,
            platform_index,
            overrides,
            override_index,
            checklists,
        })
    }

    // --- Laws ---

    /// All laws in table order.
    pub fn laws(&self) -> &[Law] {
        &self.laws
    }

    pub fn law(&self, id: &str) -> Option<&Law> {
        self.law_index.get(id).map(|&i| &self.laws[i])
    }

    /// Look up a law, or describe the miss with every valid identifier.
    pub fn require_law(&self, id: &str) -> Result<&Law, UnknownLaw> {
        self.law(id).ok_or_else(|| UnknownLaw {
            requested: id.to_string(),
            available: self.law_ids(),
        })
    }

    pub fn law_ids(&self) -> Vec<String> {
        self.laws.iter().map(|l| l.id.clone()).collect()
    }

    pub fn laws_in(&self, category: LawCategory) -> impl Iterator<Item = &Law> {
        self.laws.iter().filter(move |l| l.category == category)
    }

    /// Category metadata in table order.
    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    pub fn category(&self, id: LawCategory) -> Option<&CategoryInfo> {
        self.categories.iter().find(|c| c.id == id)
    }

    // --- Platforms ---

    /// Concrete platforms in detection priority order (the sentinel excluded).
    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().filter(|p| !p.is_auto())
    }

    pub fn platforms_in(&self, category: PlatformCategory) -> impl Iterator<Item = &Platform> {
        self.platforms()
            .filter(move |p| p.category == Some(category))
    }

    /// Any platform by identifier, including the `auto` sentinel.
    pub fn platform(&self, id: &str) -> Option<&Platform> {
        self.platform_index.get(id).map(|&i| &self.platforms[i])
    }

    pub fn fallback_platform(&self) -> &Platform {
        // Presence is checked in `from_sources`.
        &self.platforms[self.platform_index[FALLBACK_PLATFORM]]
    }

    // --- Overrides ---

    pub fn override_for(&self, law_id: &str, platform_id: &str) -> Option<&PatternOverride> {
        self.override_index
            .get(&(law_id.to_string(), platform_id.to_string()))
            .map(|&i| &self.overrides[i])
    }

    /// Platforms carrying an override for `law_id`, in table order.
    pub fn overrides_for<'k>(&'k self, law_id: &'k str) -> impl Iterator<Item = &'k Platform> + 'k {
        self.overrides
            .iter()
            .filter(move |o| o.law == law_id)
            .filter_map(move |o| self.platform(&o.platform))
    }

    // --- Checklists ---

    pub fn checklists(&self) -> &[ComponentChecklist] {
        &self.checklists
    }

    /// Case-insensitive checklist lookup by component type.
    pub fn checklist(&self, component: &str) -> Result<&ComponentChecklist, UnknownComponent> {
        let wanted = component.trim().to_lowercase();
        self.checklists
            .iter()
            .find(|c| c.component == wanted)
            .ok_or_else(|| UnknownComponent {
                requested: component.to_string(),
                available: self.checklists.iter().map(|c| c.component.clone()).collect(),
            })
    }
}
