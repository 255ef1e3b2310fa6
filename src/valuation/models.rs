use serde::Deserialize;
use serde_json::{Map, Value};

// payload
//  ├── registration
//  ├── data?                  make / model / primaryColour
//  ├── valuation
//  │    ├── overall_score
//  │    ├── recommendation    tag, see domain::Recommendation
//  │    ├── message
//  │    ├── financial_analysis?
//  │    ├── risk_factors? / positive_factors?
//  │    └── scores?           { key: number }
//  └── last_updated
//
// Scalar fields are kept as raw `Value`s: the builder decides how to
// default them instead of failing the whole payload.

#[derive(Debug, Clone, Deserialize)]
pub struct RawValuationPayload {
    pub registration: String,
    #[serde(default)]
    pub data: Option<ValuationVehicleData>,
    pub valuation: RawValuation,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationVehicleData {
    pub make: Option<String>,
    pub model: Option<String>,
    pub primary_colour: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawValuation {
    #[serde(default)]
    pub overall_score: Option<Value>,
    #[serde(default)]
    pub recommendation: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub financial_analysis: Option<RawFinancialAnalysis>,
    #[serde(default)]
    pub risk_factors: Option<Vec<String>>,
    #[serde(default)]
    pub positive_factors: Option<Vec<String>>,
    /// Insertion order matters for display (`preserve_order`).
    #[serde(default)]
    pub scores: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFinancialAnalysis {
    #[serde(default)]
    pub asking_price: Option<Value>,
    #[serde(default)]
    pub estimated_repairs: Option<Value>,
    #[serde(default)]
    pub estimated_repairs_min: Option<Value>,
    #[serde(default)]
    pub estimated_repairs_max: Option<Value>,
    #[serde(default)]
    pub total_estimated_cost: Option<Value>,
}

/// A JSON number as f64; anything else (null, strings, objects) is `None`.
pub fn as_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|f| f.is_finite())
}
