use serde::{Deserialize, Deserializer};
use serde_json::Value;

// payload
//  ├── registration
//  └── data
//       ├── make / model / primaryColour
//       └── motTests[]                    most recent first
//            ├── completedDate
//            ├── expiryDate
//            ├── testResult
//            ├── odometerValue / odometerUnit
//            └── rfrAndComments[]
//                 ├── type
//                 ├── text
//                 └── dangerous

#[derive(Debug, Clone, Deserialize)]
pub struct RawMotPayload {
    pub registration: String,
    pub data: MotVehicleData,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotVehicleData {
    pub make: Option<String>,
    pub model: Option<String>,
    pub primary_colour: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mot_tests: Vec<MotTestRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotTestRecord {
    #[serde(default)]
    pub completed_date: String,
    pub expiry_date: Option<String>,
    /// Usually "PASSED" or "FAILED"; anything else is kept verbatim.
    #[serde(default)]
    pub test_result: String,
    #[serde(default, deserialize_with = "lenient_odometer")]
    pub odometer_value: Option<u64>,
    pub odometer_unit: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rfr_and_comments: Vec<DefectItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DefectItem {
    #[serde(rename = "type", default)]
    pub defect_type: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub dangerous: bool,
}

/// Lists come back as `null` as often as they are left out.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The DVSA feed has sent the odometer both as a number and as a string.
/// Negative or unreadable readings are treated as missing.
fn lenient_odometer<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.round() as u64)
        }),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    })
}
