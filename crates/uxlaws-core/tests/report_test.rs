//! Rendered markdown for the main responses.

use uxlaws_core::{
    audit, AnalysisRequest, Haystack, Knowledge, LawCategory, Locale, PlatformCategory, Reporter, Resource,
};

fn knowledge() -> Knowledge {
    Knowledge::builtin().unwrap()
}

#[test]
fn law_info_without_platform_lists_specific_platforms() {
    let k = knowledge();
    let law = k.law("hicks_law").unwrap();
    let text = Reporter::new(&k, Locale::En).law_info(law, None);
    assert!(text.starts_with("# Hick's Law\n## Ley de Hick"));
    assert!(text.contains("## 🇪🇸 Definición (Español)"));
    assert!(text.contains("## 🌐 Platforms with specific patterns"));
    assert!(text.contains("- CLI/Terminal (`cli`)"));
    assert!(!text.contains("Guidelines for"));
}

#[test]
fn law_info_with_platform_shows_guidelines() {
    let k = knowledge();
    let law = k.law("fitts_law").unwrap();
    let swiftui = k.platform("ios-swiftui").unwrap();
    let text = Reporter::new(&k, Locale::Es).law_info(law, Some(swiftui));
    assert!(text.contains("**Plataforma:** SwiftUI"));
    assert!(text.contains("## 📱 Guidelines para SwiftUI"));
    assert!(text.contains("## 💻 Buenos Patrones (SwiftUI)"));
    assert!(!text.contains("Plataformas con patrones específicos"));
}

#[test]
fn law_info_for_generic_law_hides_guidelines() {
    let k = knowledge();
    let law = k.law("flow").unwrap();
    let cli = k.platform("cli").unwrap();
    let text = Reporter::new(&k, Locale::En).law_info(law, Some(cli));
    assert!(!text.contains("Guidelines for"));
}

#[test]
fn audit_report_lists_warnings_and_verdict() {
    let k = knowledge();
    let request = AnalysisRequest {
        code: Some(".icon { width: 20px; height: 20px; }"),
        ..Default::default()
    };
    let platform = k.resolve_platform(Some("web-html"), request.code);
    let report = audit(&k, platform, &request.audit_haystack(), &[]);
    let text = Reporter::new(&k, Locale::En).audit(&report);
    assert!(text.contains("📊 **Analyzing against 30 UX laws**"));
    assert!(text.contains("- ⚠️ Fitts's Law (`width: 20px; height: 20px;`)"));
    assert!(text.contains("## 🏆 Global Score: 97%"));
    assert!(text.contains("**Excellent!**"));
}

#[test]
fn focused_audit_mentions_only_focus() {
    let k = knowledge();
    let report = audit(&k, k.fallback_platform(), &Haystack::new(&[None]), &[LawCategory::Gestalt]);
    let text = Reporter::new(&k, Locale::Es).audit(&report);
    let gestalt = k.category(LawCategory::Gestalt).unwrap();
    assert!(text.contains(&format!("### {}", gestalt.name_es)));
    let cognitive = k.category(LawCategory::Cognitive).unwrap();
    assert!(!text.contains(&format!("### {}", cognitive.name_es)));
}

#[test]
fn checklist_includes_platform_section_when_available() {
    let k = knowledge();
    let form = k.checklist("form").unwrap();
    let reporter = Reporter::new(&k, Locale::Es);

    let flutter = k.platform("flutter").unwrap();
    let text = reporter.checklist(form, Some(flutter));
    assert!(text.starts_with("# ✅ Checklist UX: FORM"));
    assert!(text.contains("## 📱 Checklist Específico para Flutter"));

    let qt = k.platform("desktop-qt").unwrap();
    let text = reporter.checklist(form, Some(qt));
    assert!(!text.contains("Checklist Específico"));
}

#[test]
fn detection_report_names_platform_and_signatures() {
    let k = knowledge();
    let code = "import SwiftUI\nstruct Card: View { @State var on = false }";
    let platform = k.detect(code, Some(".swift"));
    let text = Reporter::new(&k, Locale::En).detection(code, platform);
    assert!(text.contains("## SwiftUI"));
    assert!(text.contains("- ✅ `import SwiftUI`"));
    assert!(text.contains("platform: \"ios-swiftui\""));
}

#[test]
fn platform_listing_filters_by_category() {
    let k = knowledge();
    let text = Reporter::new(&k, Locale::En).platform_list(Some(PlatformCategory::Voice));
    assert!(text.contains("## VOICE"));
    assert!(text.contains("### Alexa Skills"));
    assert!(text.contains("- Amazon Alexa Skills\n"));
    assert!(!text.contains("SwiftUI"));
}

#[test]
fn comparison_falls_back_to_web_patterns() {
    let k = knowledge();
    let cmp = k.compare("fitts_law", Some(&["flutter", "desktop-qt", "nope"][..])).unwrap();
    let text = Reporter::new(&k, Locale::En).comparison(&cmp);
    assert!(text.contains("## Flutter\n### 💻 Good Patterns"));
    assert!(text.contains("## Qt (C++/QML)\n### 💻 Good Patterns"));
    assert!(text.contains("Unknown platforms skipped: nope"));
}

#[test]
fn resource_listing_covers_every_uri() {
    let k = knowledge();
    let reporter = Reporter::new(&k, Locale::En);
    let text = reporter.resource_list();
    for resource in Resource::all() {
        assert!(text.contains(&resource.uri()));
    }
    let miss = Resource::parse("ux-laws://nope").unwrap_err();
    assert!(reporter.unknown_resource(&miss).contains("ux-laws://platforms"));
}

#[test]
fn spanish_detection_report_stays_spanish() {
    let k = knowledge();
    let code = "import React, { useState } from 'react';";
    let platform = k.detect(code, Some(".tsx"));
    let text = Reporter::new(&k, Locale::Es).detection(code, platform);
    assert!(text.contains("- **Descripción:** React, Next.js y ecosistema"));
}
