// src/valuation/report.rs

use crate::domain::format::humanize_key;
use crate::domain::{Recommendation, VehicleDescriptor};
use crate::errors::ReportError;
use crate::valuation::models::{as_number, RawFinancialAnalysis, RawValuationPayload};
use serde_json::Value;

/// Money figures as computed upstream. Nothing is re-derived here, only
/// defaulted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialBreakdown {
    pub asking_price: f64,
    pub estimated_repairs: f64,
    pub estimated_repairs_min: f64,
    pub estimated_repairs_max: f64,
    /// Falls back to the asking price alone, not asking price + repairs.
    pub total_estimated_cost: f64,
}

impl FinancialBreakdown {
    pub fn from_raw(raw: Option<&RawFinancialAnalysis>) -> Self {
        let Some(raw) = raw else {
            return FinancialBreakdown::default();
        };

        // Zero counts as missing, same as a falsy check upstream.
        let figure = |v: &Option<Value>| as_number(v.as_ref()).filter(|f| *f != 0.0);

        let asking_price = figure(&raw.asking_price).unwrap_or(0.0);

        FinancialBreakdown {
            asking_price,
            estimated_repairs: figure(&raw.estimated_repairs).unwrap_or(0.0),
            estimated_repairs_min: figure(&raw.estimated_repairs_min).unwrap_or(0.0),
            estimated_repairs_max: figure(&raw.estimated_repairs_max).unwrap_or(0.0),
            total_estimated_cost: figure(&raw.total_estimated_cost).unwrap_or(asking_price),
        }
    }
}

/// One row of the score breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct SubScore {
    pub key: String,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValuationReport {
    pub registration: String,
    pub vehicle: VehicleDescriptor,
    pub overall_score: f64,
    pub recommendation: Recommendation,
    pub message: String,
    pub financial: FinancialBreakdown,
    pub risk_factors: Vec<String>,
    pub positive_factors: Vec<String>,
    /// Input order, unknown keys included.
    pub sub_scores: Vec<SubScore>,
    /// Opaque, shown as received.
    pub last_updated: String,
}

/// Never fails: every optional field gets a default instead.
pub fn build_valuation_report(payload: &RawValuationPayload) -> ValuationReport {
    let valuation = &payload.valuation;

    let recommendation =
        Recommendation::from_tag(valuation.recommendation.as_ref().and_then(Value::as_str));

    let sub_scores = valuation
        .scores
        .iter()
        .flatten()
        .map(|(key, value)| SubScore {
            key: key.clone(),
            label: humanize_key(key),
            value: as_number(Some(value)).unwrap_or(0.0),
        })
        .collect();

    let vehicle = payload
        .data
        .as_ref()
        .map(|d| {
            VehicleDescriptor::new(
                d.make.as_deref(),
                d.model.as_deref(),
                d.primary_colour.as_deref(),
            )
        })
        .unwrap_or_default();

    tracing::debug!(
        registration = %payload.registration,
        recommendation = recommendation.tag(),
        "building valuation report"
    );

    ValuationReport {
        registration: payload.registration.clone(),
        vehicle,
        overall_score: as_number(valuation.overall_score.as_ref()).unwrap_or(0.0),
        recommendation,
        message: valuation.message.clone().unwrap_or_default(),
        financial: FinancialBreakdown::from_raw(valuation.financial_analysis.as_ref()),
        risk_factors: valuation.risk_factors.clone().unwrap_or_default(),
        positive_factors: valuation.positive_factors.clone().unwrap_or_default(),
        sub_scores,
        last_updated: payload.last_updated.clone().unwrap_or_default(),
    }
}

/// Parses a raw JSON body and builds the report. Only structural problems
/// (no `valuation` object, wrong JSON types) fail.
pub fn valuation_report_from_json(body: &[u8]) -> Result<ValuationReport, ReportError> {
    let payload: RawValuationPayload = serde_json::from_slice(body)?;
    Ok(build_valuation_report(&payload))
}
