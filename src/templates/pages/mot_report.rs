// templates/pages/mot_report.rs

use crate::domain::format::format_date;
use crate::domain::result_severity;
use crate::mot::MotHistoryReport;
use crate::templates::components::info_item;
use crate::templates::components::timeline::odometer_label;
use crate::templates::components::{defect_section, timeline, vehicle_header};
use maud::{html, Markup};

/// Result fragment for a history lookup. Swapped into `#results`.
pub fn mot_report_page(report: &MotHistoryReport) -> Markup {
    let latest = &report.latest_test;

    html! {
        div class="result-card" {
            (vehicle_header(
                &report.registration,
                &report.vehicle,
                &latest.test_result,
                result_severity(&latest.test_result),
            ))

            div class="mot-summary" {
                h3 { "Latest MOT Test" }
                div class="info-grid" {
                    (info_item("Test Date", &format_date(&latest.completed_date)))
                    @if let Some(expiry) = latest.expiry_date.as_deref().filter(|d| !d.is_empty()) {
                        (info_item("Expiry Date", &format_date(expiry)))
                    }
                    @if let Some(miles) = odometer_label(latest.odometer_value, latest.odometer_unit.as_deref()) {
                        (info_item("Mileage", &miles))
                    }
                    (info_item("Total Tests", &report.total_test_count.to_string()))
                }
            }

            (defect_section(&report.latest_defects))
            (timeline(&report.timeline))
        }
    }
}
