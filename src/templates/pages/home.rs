// templates/pages/home.rs

use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "MOT Report",
        html! {
            main class="container" {
                h1 { "Vehicle MOT Report" }
                p { "Paste a response from the MOT API to render its report." }

                (card("MOT History", payload_form("/report/mot", "mot-payload", "Render history")))
                (card("Valuation", payload_form("/report/valuation", "valuation-payload", "Render valuation")))

                section id="results" aria-live="polite" {}
            }
        },
    )
}

fn payload_form(action: &str, field_id: &str, submit_label: &str) -> Markup {
    html! {
        form
            method="post"
            action=(action)
            hx-post=(action)
            hx-target="#results"
            hx-swap="innerHTML"
            hx-disabled-elt="button"
        {
            label class="sr-only" for=(field_id) { "JSON payload" }
            textarea id=(field_id) name="payload" placeholder="{ \"registration\": \"AB12CDE\", ... }" required {}
            button type="submit" class="primary" { (submit_label) }
        }
    }
}
