use maud::{html, Markup};

pub mod defects;
pub mod error;
pub mod factors;
pub mod scores;
pub mod timeline;
pub mod vehicle;

pub use defects::defect_section;
pub use error::error_card;
pub use factors::factor_list;
pub use scores::score_breakdown;
pub use timeline::timeline;
pub use vehicle::vehicle_header;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Label/value tile used by the summary and finance grids.
pub fn info_item(label: &str, value: &str) -> Markup {
    html! {
        div class="info-item" {
            span class="info-label" { (label) }
            span class="info-value" { (value) }
        }
    }
}
