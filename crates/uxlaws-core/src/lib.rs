pub mod analysis;
pub mod audit;
pub mod catalog;
pub mod compare;
pub mod detect;
pub mod error;
pub mod model;
pub mod patterns;
pub mod report;
pub mod resources;

pub use analysis::{Analysis, AnalysisRequest};
pub use audit::{audit, AuditReport, CategoryAudit, LawStatus, LawVerdict, Tally, Verdict};
pub use catalog::{Knowledge, KnowledgeSources};
pub use compare::{Comparison, ComparisonEntry, DEFAULT_COMPARISON};
pub use detect::{EXTENSION_SCORE, SIGNATURE_SCORE};
pub use error::{KnowledgeError, UnknownComponent, UnknownLaw, UnknownResource};
pub use model::{
    CategoryInfo, ComponentChecklist, Law, LawCategory, Locale, PatternOverride, PatternSet, Platform,
    PlatformCategory, Signature, AUTO_PLATFORM, FALLBACK_PLATFORM,
};
pub use patterns::{match_patterns, Haystack, MatchOutcome, PatternSource, ResolvedPatterns};
pub use report::Reporter;
pub use resources::{Resource, RESOURCE_SCHEME};
