use crate::domain::Severity;
use maud::{html, Markup};

pub fn factor_list(title: &str, factors: &[String], severity: Severity) -> Markup {
    html! {
        @if !factors.is_empty() {
            div class=(format!("factors-section {}", severity.css_class())) {
                h3 { (title) }
                ul class="factors-list" {
                    @for factor in factors {
                        li { (factor) }
                    }
                }
            }
        }
    }
}
