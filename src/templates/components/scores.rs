use crate::domain::format::format_score;
use crate::valuation::SubScore;
use maud::{html, Markup};

pub fn score_breakdown(scores: &[SubScore]) -> Markup {
    html! {
        @if !scores.is_empty() {
            div class="score-breakdown" {
                h3 { "Score Breakdown" }
                div class="scores-grid" {
                    @for score in scores {
                        div class="score-item" {
                            span class="score-label" { (score.label) }
                            div class="score-bar" {
                                div class="score-fill" style=(format!("width: {}%", score.value.clamp(0.0, 100.0))) {}
                            }
                            span class="score-value" { (format_score(score.value)) }
                        }
                    }
                }
            }
        }
    }
}
