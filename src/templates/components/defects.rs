use crate::mot::{DefectStatus, DefectSummary};
use maud::{html, Markup};

/// Failures and advisories for one test. Unclassified items are not shown.
pub fn defect_section(summary: &DefectSummary) -> Markup {
    html! {
        @match summary.status() {
            DefectStatus::NoneRecorded => {}
            DefectStatus::NoIssues => {
                div class="no-issues" { "✅ No advisories or failures recorded" }
            }
            DefectStatus::Issues => {
                div class="rfr-section" {
                    @if !summary.failures.is_empty() {
                        h3 { "Failures" }
                        ul class="rfr-list failures" {
                            @for item in &summary.failures {
                                li class=[item.dangerous.then_some("dangerous")] {
                                    (if item.dangerous { "🚨" } else { "❌" }) " " (item.text)
                                }
                            }
                        }
                    }
                    @if !summary.advisories.is_empty() {
                        h3 { "Advisories" }
                        ul class="rfr-list advisories" {
                            @for item in &summary.advisories {
                                li { "⚠️ " (item.text) }
                            }
                        }
                    }
                }
            }
        }
    }
}
