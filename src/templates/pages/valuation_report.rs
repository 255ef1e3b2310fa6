// templates/pages/valuation_report.rs

use crate::domain::format::{format_gbp, format_gbp_whole, format_score};
use crate::domain::Severity;
use crate::templates::components::{factor_list, score_breakdown, vehicle_header};
use crate::valuation::{FinancialBreakdown, ValuationReport};
use maud::{html, Markup};

/// Circumference of the score ring (2 * pi * 90), rounded like the stroke
/// dash pattern expects.
const RING_CIRCUMFERENCE: f64 = 565.0;

pub fn valuation_report_page(report: &ValuationReport) -> Markup {
    let rec = report.recommendation;

    html! {
        div class="result-card" {
            (vehicle_header(&report.registration, &report.vehicle, rec.label(), rec.severity()))

            div class="valuation-summary" {
                (score_ring(report.overall_score))

                div class="valuation-message" {
                    h3 { (rec.label()) }
                    p { (report.message) }
                }
            }

            (financial_breakdown(&report.financial))

            (factor_list("Risk Factors", &report.risk_factors, Severity::Warning))
            (factor_list("Positive Factors", &report.positive_factors, Severity::Success))
            (score_breakdown(&report.sub_scores))

            div class="disclaimer-box" {
                strong { "⚠️ Important:" }
                " This is an automated assessment based on MOT history. Always get a professional \
                 inspection before purchasing. Repair costs are estimates and may vary. Last updated: "
                (report.last_updated)
            }
        }
    }
}

fn score_ring(score: f64) -> Markup {
    let dash = format!("{} {}", score * RING_CIRCUMFERENCE / 100.0, RING_CIRCUMFERENCE);

    html! {
        div class="score-circle" {
            svg viewBox="0 0 200 200" {
                circle cx="100" cy="100" r="90" fill="none" stroke="rgba(0,0,0,0.08)" stroke-width="12" {}
                circle
                    cx="100"
                    cy="100"
                    r="90"
                    fill="none"
                    stroke="url(#gradient)"
                    stroke-width="12"
                    stroke-dasharray=(dash)
                    stroke-linecap="round"
                    transform="rotate(-90 100 100)"
                {}
                defs {
                    linearGradient id="gradient" x1="0%" y1="0%" x2="100%" y2="0%" {
                        stop offset="0%" style="stop-color:#db01f9;stop-opacity:1" {}
                        stop offset="100%" style="stop-color:#0071f8;stop-opacity:1" {}
                    }
                }
            }
            div class="score-value" {
                span class="score-number" { (format_score(score)) }
                span class="score-label" { "/100" }
            }
        }
    }
}

fn financial_breakdown(fin: &FinancialBreakdown) -> Markup {
    html! {
        div class="financial-breakdown" {
            h3 { "Financial Analysis" }
            div class="finance-grid" {
                div class="finance-item" {
                    span class="finance-label" { "Asking Price" }
                    span class="finance-value" { (format_gbp(fin.asking_price)) }
                }
                div class="finance-item" {
                    span class="finance-label" { "Est. Repairs" }
                    span class="finance-value" { (format_gbp(fin.estimated_repairs)) }
                }
                div class="finance-item" {
                    span class="finance-label" { "Total Cost" }
                    span class="finance-value highlight" { (format_gbp(fin.total_estimated_cost)) }
                }
            }
            p class="finance-note" {
                "Repair estimates: "
                (format_gbp_whole(fin.estimated_repairs_min))
                " - "
                (format_gbp_whole(fin.estimated_repairs_max))
            }
        }
    }
}
