use crate::domain::format::{format_date, format_thousands};
use crate::mot::TestSummary;
use crate::templates::components::defect_section;
use maud::{html, Markup};

/// Full test history, newest first. Tests with recorded defects collapse
/// their detail into a `<details>` block, so no page script is needed.
pub fn timeline(tests: &[TestSummary]) -> Markup {
    html! {
        div class="test-history" {
            h3 { "MOT History" }
            div class="history-timeline" {
                @for test in tests {
                    div class="timeline-item" {
                        div class=(marker_class(test)) {}
                        div class="timeline-content" {
                            @if test.has_recorded_defects() {
                                details id=(test.detail_id()) class="timeline-details" {
                                    summary class="timeline-header" { (timeline_header(test)) }
                                    (defect_section(&test.defects))
                                }
                            } @else {
                                div class="timeline-header" { (timeline_header(test)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn timeline_header(test: &TestSummary) -> Markup {
    html! {
        div {
            span class="timeline-date" { (format_date(&test.record.completed_date)) }
            @if let Some(miles) = mileage(test) {
                span class="timeline-mileage" { " • " (miles) }
            }
        }
        div {
            span class=(format!("timeline-result {}", pass_class(test))) { (test.record.test_result) }
            @if test.has_recorded_defects() {
                span class="expand-icon" { "▼" }
            }
        }
    }
}

/// A test with a dangerous failure gets a highlighted marker.
fn marker_class(test: &TestSummary) -> String {
    if test.defects.has_dangerous() {
        format!("timeline-marker {} dangerous", pass_class(test))
    } else {
        format!("timeline-marker {}", pass_class(test))
    }
}

fn pass_class(test: &TestSummary) -> &'static str {
    if test.passed() {
        "pass"
    } else {
        "fail"
    }
}

/// "45,210 mi"; zero or missing readings are not shown.
pub fn mileage(test: &TestSummary) -> Option<String> {
    odometer_label(test.record.odometer_value, test.record.odometer_unit.as_deref())
}

pub fn odometer_label(value: Option<u64>, unit: Option<&str>) -> Option<String> {
    let value = value.filter(|v| *v > 0)?;
    let unit = unit.filter(|u| !u.is_empty()).unwrap_or("miles");
    Some(format!("{} {unit}", format_thousands(value)))
}
