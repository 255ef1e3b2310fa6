use maud::{html, Markup};

/// Inline error notice, swapped into the results area in place of a report.
pub fn error_card(message: &str) -> Markup {
    html! {
        div class="error-card" role="alert" {
            svg
                xmlns="http://www.w3.org/2000/svg"
                width="48"
                height="48"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            {
                circle cx="12" cy="12" r="10" {}
                line x1="12" y1="8" x2="12" y2="12" {}
                line x1="12" y1="16" x2="12.01" y2="16" {}
            }
            h3 { "Error" }
            p { (message) }
        }
    }
}
