use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        AnnotateAble, CallToolResult, Content, ListResourcesResult, PaginatedRequestParams, RawResource,
        ReadResourceRequestParams, ReadResourceResult, ResourceContents, ServerCapabilities, ServerInfo,
    },
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;
use uxlaws_core::{
    audit, AnalysisRequest, Knowledge, LawCategory, Locale, Platform, PlatformCategory, Reporter, Resource,
    AUTO_PLATFORM,
};

// --- Requests ---

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct AnalyzeLawRequest {
    /// Law identifier, e.g. "fitts_law" or "hicks_law" (see ux_list_laws)
    law_id: String,
    /// UI source code to check
    code: Option<String>,
    /// Plain-language description of the component
    component_description: Option<String>,
    /// Platform identifier, or "auto" (default) to detect it from the code
    platform: Option<String>,
    /// Extra context about users or product, searched alongside the code
    context: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct FullAuditRequest {
    /// UI source code to audit
    code: Option<String>,
    /// Plain-language description of the interface
    component_description: Option<String>,
    /// Platform identifier, or "auto" (default) to detect it from the code
    platform: Option<String>,
    /// Restrict the audit to these law categories
    focus_areas: Option<Vec<LawCategory>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct LawInfoRequest {
    /// Law identifier
    law_id: String,
    /// Show the patterns and guidelines for this platform
    platform: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct ListLawsRequest {
    /// Only list laws in this category
    category: Option<LawCategory>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct ListPlatformsRequest {
    /// Only list platforms in this category
    category: Option<PlatformCategory>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct ChecklistRequest {
    /// Component type: form, navigation, button, modal, list or card
    component_type: String,
    /// Add platform-specific items for this platform
    platform: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct DetectPlatformRequest {
    /// Source code to inspect
    code: String,
    /// File extension including the dot, e.g. ".kt"
    file_extension: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct ComparePlatformsRequest {
    /// Law identifier
    law_id: String,
    /// Platform identifiers to compare. Defaults to web-react, ios-swiftui, android-compose and flutter.
    platforms: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct ReadResourceRequest {
    /// Resource URI, e.g. "ux-laws://all" or "ux-laws://category/gestalt"
    uri: String,
}

fn text(output: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(output)]))
}

// --- Server ---

#[derive(Clone)]
pub struct UxLawsServer {
    knowledge: Arc<Knowledge>,
    locale: Locale,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl UxLawsServer {
    pub fn new(knowledge: Arc<Knowledge>, locale: Locale) -> Self {
        Self {
            knowledge,
            locale,
            tool_router: Self::tool_router(),
        }
    }

    fn reporter(&self) -> Reporter<'_> {
        Reporter::new(&self.knowledge, self.locale)
    }

    /// Optional platform for reference views: absent or "auto" means none.
    fn reference_platform(&self, requested: Option<&str>) -> Option<&Platform> {
        requested
            .map(str::trim)
            .filter(|p| !p.is_empty() && *p != AUTO_PLATFORM)
            .map(|p| self.knowledge.resolve_platform(Some(p), None))
    }

    #[tool(
        description = "Analyze UI code or a component description against one UX law. Detects the platform when none is given, reports good practices and possible issues found in the text, and returns the law's checklist and platform patterns. Matching is substring based: a hit means the pattern text appears, not that the practice is verified."
    )]
    fn ux_analyze_law(
        &self,
        Parameters(req): Parameters<AnalyzeLawRequest>,
    ) -> Result<CallToolResult, McpError> {
        debug!(law = %req.law_id, "ux_analyze_law");
        let request = AnalysisRequest {
            code: req.code.as_deref(),
            description: req.component_description.as_deref(),
            context: req.context.as_deref(),
            platform: req.platform.as_deref(),
        };
        match self.knowledge.analyze(&req.law_id, &request) {
            Ok(analysis) => text(self.reporter().analysis(&analysis)),
            Err(miss) => text(self.reporter().unknown_law(&miss)),
        }
    }

    #[tool(
        description = "Audit UI code and its description against every UX law (or only the given focus_areas categories). Each law passes unless one of its bad patterns appears verbatim (case-insensitive); returns per-category and global scores."
    )]
    fn ux_full_audit(
        &self,
        Parameters(req): Parameters<FullAuditRequest>,
    ) -> Result<CallToolResult, McpError> {
        let request = AnalysisRequest {
            code: req.code.as_deref(),
            description: req.component_description.as_deref(),
            context: None,
            platform: req.platform.as_deref(),
        };
        let platform = self.knowledge.resolve_platform(request.platform, request.code);
        let focus = req.focus_areas.unwrap_or_default();
        let report = audit(&self.knowledge, platform, &request.audit_haystack(), &focus);
        debug!(platform = %platform.id, evaluated = report.evaluated(), "ux_full_audit");
        text(self.reporter().audit(&report))
    }

    #[tool(
        description = "Get the definition, key points, checklist, patterns and related laws of a UX law. With a platform, shows that platform's patterns and guidelines."
    )]
    fn ux_get_law_info(
        &self,
        Parameters(req): Parameters<LawInfoRequest>,
    ) -> Result<CallToolResult, McpError> {
        match self.knowledge.require_law(&req.law_id) {
            Ok(law) => {
                let platform = self.reference_platform(req.platform.as_deref());
                text(self.reporter().law_info(law, platform))
            }
            Err(miss) => text(self.reporter().unknown_law(&miss)),
        }
    }

    #[tool(description = "List the available UX laws, grouped by category or filtered to one category")]
    fn ux_list_laws(
        &self,
        Parameters(req): Parameters<ListLawsRequest>,
    ) -> Result<CallToolResult, McpError> {
        text(self.reporter().law_list(req.category))
    }

    #[tool(description = "List the supported platforms, optionally filtered by platform category")]
    fn ux_list_platforms(
        &self,
        Parameters(req): Parameters<ListPlatformsRequest>,
    ) -> Result<CallToolResult, McpError> {
        text(self.reporter().platform_list(req.category))
    }

    #[tool(
        description = "Get a UX verification checklist for a component type (form, navigation, button, modal, list, card), with platform-specific items when available"
    )]
    fn ux_checklist(
        &self,
        Parameters(req): Parameters<ChecklistRequest>,
    ) -> Result<CallToolResult, McpError> {
        match self.knowledge.checklist(&req.component_type) {
            Ok(checklist) => {
                let platform = self.reference_platform(req.platform.as_deref());
                text(self.reporter().checklist(checklist, platform))
            }
            Err(miss) => text(self.reporter().unknown_component(&miss)),
        }
    }

    #[tool(
        description = "Detect the UI platform of a code snippet from its file extension and framework signatures. Falls back to web-html when nothing matches."
    )]
    fn ux_detect_platform(
        &self,
        Parameters(req): Parameters<DetectPlatformRequest>,
    ) -> Result<CallToolResult, McpError> {
        let ext = req.file_extension.as_deref().map(str::trim).filter(|e| !e.is_empty());
        let platform = self.knowledge.detect(&req.code, ext);
        text(self.reporter().detection(&req.code, platform))
    }

    #[tool(description = "Compare how one UX law applies across several platforms")]
    fn ux_compare_platforms(
        &self,
        Parameters(req): Parameters<ComparePlatformsRequest>,
    ) -> Result<CallToolResult, McpError> {
        match self.knowledge.compare(&req.law_id, req.platforms.as_deref()) {
            Ok(cmp) => text(self.reporter().comparison(&cmp)),
            Err(miss) => text(self.reporter().unknown_law(&miss)),
        }
    }

    #[tool(description = "List the readable markdown resources and their URIs")]
    fn ux_list_resources(&self) -> Result<CallToolResult, McpError> {
        text(self.reporter().resource_list())
    }

    #[tool(description = "Read a markdown resource by URI (see ux_list_resources)")]
    fn ux_read_resource(
        &self,
        Parameters(req): Parameters<ReadResourceRequest>,
    ) -> Result<CallToolResult, McpError> {
        match Resource::parse(&req.uri) {
            Ok(resource) => text(self.reporter().resource(resource)),
            Err(miss) => text(self.reporter().unknown_resource(&miss)),
        }
    }
}

// --- Resources ---

impl UxLawsServer {
    fn resource_listing(&self) -> ListResourcesResult {
        let reporter = self.reporter();
        let resources = Resource::all()
            .into_iter()
            .map(|resource| {
                let mut raw = RawResource::new(resource.uri(), reporter.resource_name(resource));
                raw.mime_type = Some(resource.mime_type().to_string());
                raw.no_annotation()
            })
            .collect();
        ListResourcesResult::with_all_items(resources)
    }

    fn resource_contents(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        let resource = Resource::parse(uri).map_err(|miss| {
            McpError::resource_not_found(miss.to_string(), Some(serde_json::json!({ "uri": miss.uri })))
        })?;
        debug!(uri = %resource.uri(), "resource read");
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: resource.uri(),
                mime_type: Some(resource.mime_type().to_string()),
                text: self.reporter().resource(resource),
                meta: None,
            }],
        })
    }
}

const INSTRUCTIONS: &str = r#"Checks user interfaces against well-known UX laws (Fitts, Hick, Miller, Gestalt principles and more).

- `ux_analyze_law`: one law against code or a description. Pass `platform` or let it be detected.
- `ux_full_audit`: every law at once, with category and global scores. Narrow it with `focus_areas`.
- `ux_get_law_info`, `ux_list_laws`, `ux_list_platforms`: reference material.
- `ux_checklist`: verification items for forms, navigation, buttons, modals, lists and cards.
- `ux_detect_platform`, `ux_compare_platforms`: platform detection and cross-platform patterns.
- `ux_list_resources`, `ux_read_resource`: the `ux-laws://` markdown documents, also served as MCP resources.

Findings come from substring matching. Treat them as prompts for review, not verified results."#;

#[tool_handler]
impl ServerHandler for UxLawsServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = format!(
            "{}\n\nCatalog: {} laws, {} platforms.",
            INSTRUCTIONS,
            self.knowledge.laws().len(),
            self.knowledge.platforms().count()
        );
        ServerInfo {
            instructions: Some(instructions.into()),
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(self.resource_listing())
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.resource_contents(&request.uri)
    }
}
