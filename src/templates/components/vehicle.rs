use crate::domain::{Severity, VehicleDescriptor};
use maud::{html, Markup};

pub fn vehicle_header(
    registration: &str,
    vehicle: &VehicleDescriptor,
    badge_label: &str,
    badge: Severity,
) -> Markup {
    html! {
        div class="result-header" {
            div {
                h2 class="result-registration" { (registration) }
                @if let Some(name) = vehicle.display_name() {
                    p class="vehicle-info" {
                        (name)
                        @if let Some(colour) = &vehicle.colour {
                            span class="vehicle-color" { " • " (colour) }
                        }
                    }
                }
            }
            span class=(format!("result-badge {}", badge.css_class())) { (badge_label) }
        }
    }
}
