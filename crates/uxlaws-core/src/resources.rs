use crate::error::UnknownResource;
use crate::model::LawCategory;

pub const RESOURCE_SCHEME: &str = "ux-laws://";

/// Addressable markdown documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    AllLaws,
    Category(LawCategory),
    Platforms,
}

impl Resource {
    /// Every resource: all laws, one per category, then the platform list.
    pub fn all() -> Vec<Resource> {
        let mut all = vec![Resource::AllLaws];
        all.extend(LawCategory::ALL.into_iter().map(Resource::Category));
        all.push(Resource::Platforms);
        all
    }

    pub fn parse(uri: &str) -> Result<Self, UnknownResource> {
        let not_found = || UnknownResource {
            uri: uri.to_string(),
        };
        let path = uri.trim().strip_prefix(RESOURCE_SCHEME).ok_or_else(not_found)?;
        match path {
            "all" => Ok(Resource::AllLaws),
            "platforms" => Ok(Resource::Platforms),
            _ => path
                .strip_prefix("category/")
                .and_then(|c| c.parse::<LawCategory>().ok())
                .map(Resource::Category)
                .ok_or_else(not_found),
        }
    }

    pub fn uri(&self) -> String {
        match self {
            Resource::AllLaws => format!("{}all", RESOURCE_SCHEME),
            Resource::Category(c) => format!("{}category/{}", RESOURCE_SCHEME, c),
            Resource::Platforms => format!("{}platforms", RESOURCE_SCHEME),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        "text/markdown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_uri_parses_back() {
        for resource in Resource::all() {
            assert_eq!(Resource::parse(&resource.uri()).unwrap(), resource);
        }
        assert_eq!(Resource::all().len(), 8);
    }

    #[test]
    fn rejects_unknown_uris() {
        assert!(Resource::parse("ux-laws://category/visual").is_err());
        assert!(Resource::parse("ux-laws://everything").is_err());
        assert!(Resource::parse("https://lawsofux.com").is_err());
    }
}
