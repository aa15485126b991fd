//! Markdown rendering for every server response.

use crate::analysis::Analysis;
use crate::audit::{AuditReport, LawStatus, Verdict};
use crate::catalog::Knowledge;
use crate::compare::Comparison;
use crate::error::{UnknownComponent, UnknownLaw, UnknownResource};
use crate::model::{
    ComponentChecklist, Law, LawCategory, Locale, Platform, PlatformCategory,
};
use crate::patterns::ResolvedPatterns;
use crate::resources::Resource;

// --- Labels ---

struct Labels {
    analysis: &'static str,
    detected_platform: &'static str,
    platform: &'static str,
    category: &'static str,
    definition: &'static str,
    other_definition: &'static str,
    key_points: &'static str,
    guidelines_for: &'static str,
    results: &'static str,
    good_detected: &'static str,
    issues: &'static str,
    possible_issue: &'static str,
    good_practice: &'static str,
    no_patterns: &'static str,
    match_caveat: &'static str,
    verification_checklist: &'static str,
    checklist: &'static str,
    recommended_for: &'static str,
    avoid_in: &'static str,
    good_patterns: &'static str,
    avoid_patterns: &'static str,
    platforms_with_patterns: &'static str,
    related: &'static str,
    audit_title: &'static str,
    analyzing_against: &'static str,
    ux_laws: &'static str,
    by_category: &'static str,
    score: &'static str,
    laws_word: &'static str,
    global_score: &'static str,
    nothing_evaluated: &'static str,
    excellent: &'static str,
    good: &'static str,
    needs_attention: &'static str,
    law_not_found: &'static str,
    available_laws: &'static str,
    laws_title: &'static str,
    multiplatform_note: &'static str,
    platforms_title: &'static str,
    supports_prefix: &'static str,
    platforms_word: &'static str,
    extensions: &'static str,
    auto_tip: &'static str,
    checklist_title: &'static str,
    applicable_laws: &'static str,
    general_checklist: &'static str,
    checklist_for: &'static str,
    component_not_found: &'static str,
    available_types: &'static str,
    detected_title: &'static str,
    description: &'static str,
    matched_signatures: &'static str,
    no_signature: &'static str,
    use_platform: &'static str,
    comparison: &'static str,
    guidelines: &'static str,
    no_specific: &'static str,
    skipped_platforms: &'static str,
    resources_title: &'static str,
    resource_not_found: &'static str,
    available_resources: &'static str,
    all_laws: &'static str,
    platforms_resource: &'static str,
}

static ES: Labels = Labels {
    analysis: "Análisis",
    detected_platform: "Plataforma detectada",
    platform: "Plataforma",
    category: "Categoría",
    definition: "📖 Definición",
    other_definition: "🇬🇧 Definition (English)",
    key_points: "🎯 Puntos Clave",
    guidelines_for: "📱 Guidelines para",
    results: "🔍 Resultados del Análisis",
    good_detected: "✅ Buenas Prácticas Detectadas",
    issues: "⚠️ Posibles Problemas",
    possible_issue: "Posible problema: patrón encontrado",
    good_practice: "Buena práctica",
    no_patterns: "ℹ️ No se detectaron patrones específicos. Revisa manualmente el checklist.",
    match_caveat: "_Las coincidencias indican que el texto del patrón aparece en el material enviado, no que la práctica esté verificada._",
    verification_checklist: "✅ Checklist de Verificación",
    checklist: "✅ Checklist",
    recommended_for: "💻 Patrones Recomendados para",
    avoid_in: "❌ Patrones a Evitar en",
    good_patterns: "💻 Buenos Patrones",
    avoid_patterns: "❌ Patrones a Evitar",
    platforms_with_patterns: "🌐 Plataformas con patrones específicos",
    related: "🔗 Leyes Relacionadas",
    audit_title: "🎯 Auditoría UX Completa",
    analyzing_against: "Analizando contra",
    ux_laws: "leyes de UX",
    by_category: "📋 Resumen por Categoría",
    score: "Puntuación",
    laws_word: "leyes",
    global_score: "🏆 Puntuación Global",
    nothing_evaluated: "ℹ️ Ninguna ley coincide con las áreas de enfoque indicadas; no hay puntuación.",
    excellent: "🎉 **Excelente!** La interfaz sigue la mayoría de las mejores prácticas de UX.",
    good: "👍 **Bien!** Hay margen de mejora en algunas áreas.",
    needs_attention: "⚠️ **Necesita atención.** Se recomienda revisar las leyes marcadas con advertencias.",
    law_not_found: "❌ Ley no encontrada",
    available_laws: "Leyes disponibles",
    laws_title: "📚 Leyes de UX",
    multiplatform_note: "*Todas las leyes soportan análisis multi-plataforma*",
    platforms_title: "🖥️ Plataformas Soportadas",
    supports_prefix: "El servidor puede analizar interfaces para",
    platforms_word: "plataformas",
    extensions: "Extensiones",
    auto_tip: "💡 **Tip:** Usa `platform: \"auto\"` para detección automática.",
    checklist_title: "✅ Checklist UX",
    applicable_laws: "📚 Leyes Aplicables",
    general_checklist: "✅ Checklist General",
    checklist_for: "📱 Checklist Específico para",
    component_not_found: "❌ Tipo de componente no reconocido",
    available_types: "Tipos disponibles",
    detected_title: "🔎 Plataforma Detectada",
    description: "Descripción",
    matched_signatures: "🎯 Patrones detectados",
    no_signature: "Ninguna firma coincidió; se usa la plataforma por defecto.",
    use_platform: "💡 Usa esta plataforma en tus análisis",
    comparison: "⚖️ Comparación",
    guidelines: "📋 Guidelines",
    no_specific: "*No hay patrones específicos para esta plataforma. Usa los patrones genéricos.*",
    skipped_platforms: "Plataformas desconocidas omitidas",
    resources_title: "📂 Recursos",
    resource_not_found: "❌ Recurso no encontrado",
    available_resources: "Recursos disponibles",
    all_laws: "Todas las Leyes de UX",
    platforms_resource: "Plataformas Soportadas",
};

static EN: Labels = Labels {
    analysis: "Analysis",
    detected_platform: "Detected platform",
    platform: "Platform",
    category: "Category",
    definition: "📖 Definition",
    other_definition: "🇪🇸 Definición (Español)",
    key_points: "🎯 Key Points",
    guidelines_for: "📱 Guidelines for",
    results: "🔍 Analysis Results",
    good_detected: "✅ Good Practices Detected",
    issues: "⚠️ Possible Issues",
    possible_issue: "Possible issue: pattern found",
    good_practice: "Good practice",
    no_patterns: "ℹ️ No specific patterns detected. Review the checklist manually.",
    match_caveat: "_A match means the pattern text appears in the submitted material, not that the practice is verified._",
    verification_checklist: "✅ Verification Checklist",
    checklist: "✅ Checklist",
    recommended_for: "💻 Recommended Patterns for",
    avoid_in: "❌ Patterns to Avoid in",
    good_patterns: "💻 Good Patterns",
    avoid_patterns: "❌ Patterns to Avoid",
    platforms_with_patterns: "🌐 Platforms with specific patterns",
    related: "🔗 Related Laws",
    audit_title: "🎯 Full UX Audit",
    analyzing_against: "Analyzing against",
    ux_laws: "UX laws",
    by_category: "📋 Summary by Category",
    score: "Score",
    laws_word: "laws",
    global_score: "🏆 Global Score",
    nothing_evaluated: "ℹ️ No law matches the requested focus areas; there is no score.",
    excellent: "🎉 **Excellent!** The interface follows most UX best practices.",
    good: "👍 **Good!** There is room for improvement in some areas.",
    needs_attention: "⚠️ **Needs attention.** Review the laws flagged with warnings.",
    law_not_found: "❌ Law not found",
    available_laws: "Available laws",
    laws_title: "📚 UX Laws",
    multiplatform_note: "*Every law supports multi-platform analysis*",
    platforms_title: "🖥️ Supported Platforms",
    supports_prefix: "The server can analyze interfaces for",
    platforms_word: "platforms",
    extensions: "Extensions",
    auto_tip: "💡 **Tip:** Use `platform: \"auto\"` for automatic detection.",
    checklist_title: "✅ UX Checklist",
    applicable_laws: "📚 Applicable Laws",
    general_checklist: "✅ General Checklist",
    checklist_for: "📱 Checklist for",
    component_not_found: "❌ Unknown component type",
    available_types: "Available types",
    detected_title: "🔎 Detected Platform",
    description: "Description",
    matched_signatures: "🎯 Matched signatures",
    no_signature: "No signature matched; the default platform applies.",
    use_platform: "💡 Use this platform in your analyses",
    comparison: "⚖️ Comparison",
    guidelines: "📋 Guidelines",
    no_specific: "*No platform-specific patterns. The generic patterns apply.*",
    skipped_platforms: "Unknown platforms skipped",
    resources_title: "📂 Resources",
    resource_not_found: "❌ Resource not found",
    available_resources: "Available resources",
    all_laws: "All UX Laws",
    platforms_resource: "Supported Platforms",
};

// --- Helpers ---

fn numbered(output: &mut String, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, item));
    }
    output.push('\n');
}

fn unchecked(output: &mut String, items: &[String]) {
    for item in items {
        output.push_str(&format!("- [ ] {}\n", item));
    }
    output.push('\n');
}

fn code_block(output: &mut String, lines: &[String]) {
    output.push_str("```\n");
    for line in lines {
        output.push_str(&format!("{}\n", line));
    }
    output.push_str("```\n\n");
}

/// Renders domain results as markdown in one locale.
#[derive(Clone, Copy)]
pub struct Reporter<'k> {
    knowledge: &'k Knowledge,
    locale: Locale,
    labels: &'static Labels,
}

impl<'k> Reporter<'k> {
    pub fn new(knowledge: &'k Knowledge, locale: Locale) -> Self {
        let labels = match locale {
            Locale::Es => &ES,
            Locale::En => &EN,
        };
        Self {
            knowledge,
            locale,
            labels,
        }
    }

    fn category_name(&self, category: LawCategory) -> &'k str {
        self.knowledge
            .category(category)
            .map(|c| c.name_for(self.locale))
            .unwrap_or(category.as_str())
    }

    fn other_definition<'l>(&self, law: &'l Law) -> &'l str {
        match self.locale {
            Locale::Es => &law.definition,
            Locale::En => &law.definition_es,
        }
    }

    fn guidelines(&self, output: &mut String, patterns: &ResolvedPatterns<'_>, platform: &Platform) {
        if patterns.is_platform_specific() && !patterns.guidelines.is_empty() {
            output.push_str(&format!("## {} {}\n", self.labels.guidelines_for, platform.name));
            numbered(output, patterns.guidelines);
        }
    }

    // --- Single law ---

    pub fn analysis(&self, analysis: &Analysis<'_>) -> String {
        let l = self.labels;
        let law = analysis.law;
        let platform = analysis.platform;
        let mut output = format!("# 📊 {}: {}\n\n", l.analysis, law.name_for(self.locale));
        output.push_str(&format!(
            "**{}:** {} ({})\n\n",
            l.detected_platform,
            platform.name,
            platform.category_label()
        ));
        output.push_str(&format!("## {}\n{}\n\n", l.definition, law.definition_for(self.locale)));

        output.push_str(&format!("## {}\n", l.key_points));
        numbered(&mut output, law.key_points_for(self.locale));

        self.guidelines(&mut output, &analysis.patterns, platform);

        if let Some(matches) = &analysis.matches {
            output.push_str(&format!("## {}\n\n", l.results));
            if !matches.matched_good.is_empty() {
                output.push_str(&format!("### {}\n", l.good_detected));
                for pattern in &matches.matched_good {
                    output.push_str(&format!("✅ {}: \"{}\"\n", l.good_practice, pattern));
                }
                output.push('\n');
            }
            if !matches.matched_bad.is_empty() {
                output.push_str(&format!("### {}\n", l.issues));
                for pattern in &matches.matched_bad {
                    output.push_str(&format!("⚠️ {} \"{}\"\n", l.possible_issue, pattern));
                }
                output.push('\n');
            }
            if matches.is_empty() {
                output.push_str(&format!("{}\n\n", l.no_patterns));
            } else {
                output.push_str(&format!("{}\n\n", l.match_caveat));
            }
        }

        output.push_str(&format!("## {}\n", l.verification_checklist));
        unchecked(&mut output, &law.checklist);

        output.push_str(&format!("## {} {}\n", l.recommended_for, platform.name));
        code_block(&mut output, analysis.patterns.good);
        output.push_str(&format!("## {} {}\n", l.avoid_in, platform.name));
        code_block(&mut output, analysis.patterns.bad);

        output.push_str(&format!("## {}\n", l.related));
        for related in law.related_laws.iter().filter_map(|id| self.knowledge.law(id)) {
            output.push_str(&format!("- {} (`{}`)\n", related.name_for(self.locale), related.id));
        }
        output
    }

    /// Reference sheet for a law; with a platform, its specific patterns.
    pub fn law_info(&self, law: &Law, platform: Option<&Platform>) -> String {
        let l = self.labels;
        let mut output = format!("# {}\n", law.name_for(self.locale));
        let subtitle = match self.locale {
            Locale::Es => &law.name,
            Locale::En => &law.name_es,
        };
        output.push_str(&format!("## {}\n\n", subtitle));
        output.push_str(&format!("**{}:** {}\n", l.category, self.category_name(law.category)));
        if let Some(p) = platform {
            output.push_str(&format!("**{}:** {}\n", l.platform, p.name));
        }
        output.push('\n');

        output.push_str(&format!("## {}\n{}\n\n", l.definition, law.definition_for(self.locale)));
        output.push_str(&format!("## {}\n{}\n\n", l.other_definition, self.other_definition(law)));

        output.push_str(&format!("## {}\n", l.key_points));
        numbered(&mut output, law.key_points_for(self.locale));

        let patterns = platform.map(|p| (p, self.knowledge.patterns_for(law, &p.id)));
        if let Some((p, resolved)) = &patterns {
            self.guidelines(&mut output, resolved, p);
        }

        output.push_str(&format!("## {}\n", l.checklist));
        unchecked(&mut output, &law.checklist);

        let (good, bad, suffix) = match &patterns {
            Some((p, resolved)) => (resolved.good, resolved.bad, format!(" ({})", p.name)),
            None => (
                law.patterns.good.as_slice(),
                law.patterns.bad.as_slice(),
                String::new(),
            ),
        };
        output.push_str(&format!("## {}{}\n", l.good_patterns, suffix));
        code_block(&mut output, good);
        output.push_str(&format!("## {}{}\n", l.avoid_patterns, suffix));
        code_block(&mut output, bad);

        if platform.is_none() {
            let specific: Vec<&Platform> = self.knowledge.overrides_for(&law.id).collect();
            if !specific.is_empty() {
                output.push_str(&format!("## {}\n", l.platforms_with_patterns));
                for p in specific {
                    output.push_str(&format!("- {} (`{}`)\n", p.name, p.id));
                }
                output.push('\n');
            }
        }

        output.push_str(&format!("## {}\n", l.related));
        for related in law.related_laws.iter().filter_map(|id| self.knowledge.law(id)) {
            output.push_str(&format!(
                "- **{}**: {}\n",
                related.name_for(self.locale),
                related.definition_for(self.locale)
            ));
        }
        output
    }

    pub fn comparison(&self, cmp: &Comparison<'_>) -> String {
        let l = self.labels;
        let mut output = format!("# {}: {}\n\n", l.comparison, cmp.law.name_for(self.locale));
        output.push_str(&format!("{}\n\n", cmp.law.definition_for(self.locale)));

        for entry in &cmp.entries {
            output.push_str(&format!("## {}\n", entry.platform.name));
            if entry.patterns.is_platform_specific() {
                output.push_str(&format!("### {}\n", l.good_patterns));
                code_block(&mut output, entry.patterns.good);
                if !entry.patterns.guidelines.is_empty() {
                    output.push_str(&format!("### {}\n", l.guidelines));
                    numbered(&mut output, entry.patterns.guidelines);
                }
            } else {
                output.push_str(&format!("{}\n\n", l.no_specific));
            }
        }

        if !cmp.skipped.is_empty() {
            output.push_str(&format!("{}: {}\n", l.skipped_platforms, cmp.skipped.join(", ")));
        }
        output
    }

    // --- Audit ---

    pub fn audit(&self, report: &AuditReport<'_>) -> String {
        let l = self.labels;
        let mut output = format!("# {}\n\n", l.audit_title);
        output.push_str(&format!(
            "**{}:** {} ({})\n",
            l.platform,
            report.platform.name,
            report.platform.category_label()
        ));
        output.push_str(&format!(
            "📊 **{} {} {}**\n\n",
            l.analyzing_against,
            report.evaluated(),
            l.ux_laws
        ));

        output.push_str(&format!("## {}\n\n", l.by_category));
        for category in &report.categories {
            output.push_str(&format!("### {}\n", self.category_name(category.category)));
            if let Some(score) = category.tally.score() {
                output.push_str(&format!(
                    "**{}: {}%** ({}/{} {})\n\n",
                    l.score,
                    score,
                    category.tally.passed,
                    category.tally.total(),
                    l.laws_word
                ));
            }
            for verdict in &category.laws {
                let name = verdict.law.name_for(self.locale);
                match verdict.status {
                    LawStatus::Passed => output.push_str(&format!("- ✅ {}\n", name)),
                    LawStatus::Warning => output.push_str(&format!(
                        "- ⚠️ {} (`{}`)\n",
                        name,
                        verdict.matched_bad.join("`, `")
                    )),
                }
            }
            output.push('\n');
        }

        match report.global.score() {
            Some(score) => {
                output.push_str(&format!("## {}: {}%\n\n", l.global_score, score));
                let verdict = match Verdict::from_score(score) {
                    Verdict::Excellent => l.excellent,
                    Verdict::Good => l.good,
                    Verdict::NeedsAttention => l.needs_attention,
                };
                output.push_str(&format!("{}\n", verdict));
            }
            None => output.push_str(&format!("{}\n", l.nothing_evaluated)),
        }
        output
    }

    // --- Listings ---

    pub fn law_list(&self, category: Option<LawCategory>) -> String {
        let l = self.labels;
        let mut output = format!("# {}", l.laws_title);
        if let Some(c) = category {
            output.push_str(&format!(" - {}", self.category_name(c)));
        }
        output.push_str(&format!("\n\n{}\n\n", l.multiplatform_note));

        match category {
            Some(c) => {
                for law in self.knowledge.laws_in(c) {
                    output.push_str(&format!("## {}\n", law.name_for(self.locale)));
                    output.push_str(&format!("**ID:** `{}`\n", law.id));
                    output.push_str(&format!("{}\n\n", law.definition_for(self.locale)));
                }
            }
            None => {
                for info in self.knowledge.categories() {
                    output.push_str(&format!("## {}\n", info.name_for(self.locale)));
                    for law in self.knowledge.laws_in(info.id) {
                        output.push_str(&format!("- **{}** (`{}`)\n", law.name_for(self.locale), law.id));
                    }
                    output.push('\n');
                }
            }
        }
        output
    }

    pub fn platform_list(&self, category: Option<PlatformCategory>) -> String {
        let l = self.labels;
        let mut output = format!("# {}\n\n", l.platforms_title);
        output.push_str(&format!(
            "{} **{} {}**.\n\n",
            l.supports_prefix,
            self.knowledge.platforms().count(),
            l.platforms_word
        ));

        match category {
            Some(c) => {
                output.push_str(&format!("## {}\n\n", c.as_str().to_uppercase()));
                for p in self.knowledge.platforms_in(c) {
                    output.push_str(&format!("### {}\n", p.name));
                    output.push_str(&format!("- **ID:** `{}`\n", p.id));
                    output.push_str(&format!("- **{}:** {}\n", l.extensions, p.file_extensions.join(", ")));
                    output.push_str(&format!("- {}\n\n", p.description));
                }
            }
            None => {
                for c in PlatformCategory::ALL {
                    let platforms: Vec<&Platform> = self.knowledge.platforms_in(c).collect();
                    if platforms.is_empty() {
                        continue;
                    }
                    output.push_str(&format!("## {}\n", c.as_str().to_uppercase()));
                    for p in platforms {
                        output.push_str(&format!("- **{}** (`{}`): {}\n", p.name, p.id, p.description));
                    }
                    output.push('\n');
                }
            }
        }

        output.push_str("---\n");
        output.push_str(&format!("{}\n", l.auto_tip));
        output
    }

    pub fn checklist(&self, checklist: &ComponentChecklist, platform: Option<&Platform>) -> String {
        let l = self.labels;
        let mut output = format!(
            "# {}: {}\n\n",
            l.checklist_title,
            checklist.component.to_uppercase()
        );
        if let Some(p) = platform {
            output.push_str(&format!("**{}:** {}\n\n", l.platform, p.name));
        }

        output.push_str(&format!("## {}\n", l.applicable_laws));
        for law in checklist.laws.iter().filter_map(|id| self.knowledge.law(id)) {
            output.push_str(&format!(
                "- **{}**: {}\n",
                law.name_for(self.locale),
                law.definition_for(self.locale)
            ));
        }
        output.push('\n');

        output.push_str(&format!("## {}\n", l.general_checklist));
        for (i, item) in checklist.items.iter().enumerate() {
            output.push_str(&format!("- [ ] {}. {}\n", i + 1, item));
        }
        output.push('\n');

        if let Some((p, items)) = platform.and_then(|p| checklist.items_for(&p.id).map(|items| (p, items))) {
            output.push_str(&format!("## {} {}\n", l.checklist_for, p.name));
            for (i, item) in items.iter().enumerate() {
                output.push_str(&format!("- [ ] {}. {}\n", i + 1, item));
            }
            output.push('\n');
        }
        output
    }

    /// Detection summary for `code` that resolved to `platform`.
    pub fn detection(&self, code: &str, platform: &Platform) -> String {
        let l = self.labels;
        let mut output = format!("# {}\n\n", l.detected_title);
        output.push_str(&format!("## {}\n", platform.name));
        output.push_str(&format!("- **ID:** `{}`\n", platform.id));
        output.push_str(&format!("- **{}:** {}\n", l.category, platform.category_label()));
        output.push_str(&format!("- **{}:** {}\n\n", l.description, platform.description));

        output.push_str(&format!("## {}\n", l.matched_signatures));
        let matched = self.knowledge.matched_signatures(platform, code);
        if matched.is_empty() {
            output.push_str(&format!("{}\n", l.no_signature));
        }
        for signature in matched {
            output.push_str(&format!("- ✅ `{}`\n", signature));
        }
        output.push('\n');

        output.push_str(&format!("## {}\n", l.use_platform));
        output.push_str(&format!("```\nplatform: \"{}\"\n```\n", platform.id));
        output
    }

    // --- Resources ---

    pub fn resource_name(&self, resource: Resource) -> String {
        match resource {
            Resource::AllLaws => self.labels.all_laws.to_string(),
            Resource::Category(c) => self.category_name(c).to_string(),
            Resource::Platforms => self.labels.platforms_resource.to_string(),
        }
    }

    pub fn resource(&self, resource: Resource) -> String {
        match resource {
            Resource::AllLaws => self.law_list(None),
            Resource::Category(c) => self.law_list(Some(c)),
            Resource::Platforms => self.platform_list(None),
        }
    }

    pub fn resource_list(&self) -> String {
        let mut output = format!("# {}\n\n", self.labels.resources_title);
        for resource in Resource::all() {
            output.push_str(&format!(
                "- `{}`: {} ({})\n",
                resource.uri(),
                self.resource_name(resource),
                resource.mime_type()
            ));
        }
        output
    }

    // --- Misses ---

    pub fn unknown_law(&self, miss: &UnknownLaw) -> String {
        let l = self.labels;
        let mut output = format!("{}: \"{}\"\n\n**{}:**\n", l.law_not_found, miss.requested, l.available_laws);
        let lines: Vec<String> = miss
            .available
            .iter()
            .map(|id| match self.knowledge.law(id) {
                Some(law) => format!("- {}: {}", id, law.name_for(self.locale)),
                None => format!("- {}", id),
            })
            .collect();
        output.push_str(&lines.join("\n"));
        output
    }

    pub fn unknown_component(&self, miss: &UnknownComponent) -> String {
        let l = self.labels;
        format!(
            "{}: \"{}\"\n\n**{}:** {}",
            l.component_not_found,
            miss.requested,
            l.available_types,
            miss.available.join(", ")
        )
    }

    pub fn unknown_resource(&self, miss: &UnknownResource) -> String {
        let l = self.labels;
        let uris: Vec<String> = Resource::all().iter().map(|r| format!("- `{}`", r.uri())).collect();
        format!(
            "{}: {}\n\n**{}:**\n{}",
            l.resource_not_found,
            miss.uri,
            l.available_resources,
            uris.join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisRequest;

    #[test]
    fn analysis_lists_issue_and_caveat() {
        let k = Knowledge::builtin().unwrap();
        let request = AnalysisRequest {
            code: Some(".icon { width: 20px; height: 20px; }"),
            platform: Some("web-html"),
            ..Default::default()
        };
        let analysis = k.analyze("fitts_law", &request).unwrap();
        let text = Reporter::new(&k, Locale::En).analysis(&analysis);
        assert!(text.starts_with("# 📊 Analysis: Fitts's Law"));
        assert!(text.contains("⚠️ Possible issue: pattern found \"width: 20px; height: 20px;\""));
        assert!(text.contains("A match means the pattern text appears"));
        assert!(text.contains("## 📱 Guidelines for HTML/CSS/JS"));
    }

    #[test]
    fn analysis_without_subject_skips_results() {
        let k = Knowledge::builtin().unwrap();
        let analysis = k.analyze("hicks_law", &AnalysisRequest::default()).unwrap();
        let text = Reporter::new(&k, Locale::Es).analysis(&analysis);
        assert!(text.contains("# 📊 Análisis: Ley de Hick"));
        assert!(!text.contains("Resultados del Análisis"));
    }

    #[test]
    fn unknown_law_message_lists_every_law() {
        let k = Knowledge::builtin().unwrap();
        let miss = k.require_law("nonexistent_law").unwrap_err();
        let text = Reporter::new(&k, Locale::Es).unknown_law(&miss);
        assert!(text.starts_with("❌ Ley no encontrada: \"nonexistent_law\""));
        for law in k.laws() {
            assert!(text.contains(&format!("- {}:", law.id)));
        }
    }

    #[test]
    fn platform_list_counts_concrete_platforms() {
        let k = Knowledge::builtin().unwrap();
        let text = Reporter::new(&k, Locale::En).platform_list(None);
        assert!(text.contains("**20 platforms**"));
        assert!(!text.contains("`auto`"));
        assert!(text.contains("## XR"));
    }

    #[test]
    fn audit_without_laws_omits_score() {
        let k = Knowledge::from_sources(crate::catalog::KnowledgeSources {
            laws: "[]",
            overrides: "[]",
            checklists: "[]",
            ..crate::catalog::KnowledgeSources::BUILTIN
        })
        .unwrap();
        let report = crate::audit::audit(&k, k.fallback_platform(), &crate::patterns::Haystack::new(&[]), &[]);
        let text = Reporter::new(&k, Locale::En).audit(&report);
        assert!(text.contains("there is no score"));
        assert!(!text.contains("Global Score"));
    }
}
