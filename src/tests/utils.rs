use crate::config::Config;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::{json, Value};
use std::io::Read;

/// History payload in the upstream shape, newest test first.
pub fn mot_payload() -> Value {
    json!({
        "registration": "AB12CDE",
        "data": {
            "make": "FORD",
            "model": "FOCUS",
            "primaryColour": "Blue",
            "motTests": [
                {
                    "completedDate": "2024.03.05",
                    "expiryDate": "2025-03-04",
                    "testResult": "PASSED",
                    "odometerValue": "45210",
                    "odometerUnit": "mi",
                    "rfrAndComments": [
                        { "type": "ADVISORY", "text": "Nearside front tyre worn close to legal limit", "dangerous": false },
                        { "type": "MINOR", "text": "Windscreen washer provides insufficient liquid", "dangerous": false }
                    ]
                },
                {
                    "completedDate": "2024.02.28",
                    "testResult": "FAILED",
                    "odometerValue": 45190,
                    "odometerUnit": "mi",
                    "rfrAndComments": [
                        { "type": "DANGEROUS", "text": "Brake pipe excessively corroded", "dangerous": true },
                        { "type": "MAJOR", "text": "Headlamp aim too high", "dangerous": false },
                        { "type": "SYSTEM GENERATED", "text": "Retest required", "dangerous": false }
                    ]
                },
                {
                    "completedDate": "2023-02-20",
                    "testResult": "PASSED",
                    "odometerValue": 38000,
                    "odometerUnit": "mi",
                    "rfrAndComments": []
                }
            ]
        }
    })
}

pub fn valuation_payload() -> Value {
    json!({
        "registration": "AB12CDE",
        "asking_price": 5000.0,
        "data": { "make": "FORD", "model": "FOCUS", "primaryColour": "Blue" },
        "valuation": {
            "overall_score": 72.5,
            "recommendation": "acceptable_with_caution",
            "message": "Reasonable buy, budget for brakes.",
            "financial_analysis": {
                "asking_price": 5000.0,
                "estimated_repairs": 800.0,
                "estimated_repairs_min": 450.0,
                "estimated_repairs_max": 1200.0,
                "total_estimated_cost": 5800.0
            },
            "risk_factors": ["Failed MOT in the last 12 months"],
            "positive_factors": ["Consistent mileage"],
            "scores": {
                "mot_history": 80.0,
                "recent_failures": 40.0,
                "mileage_consistency": 100.0
            }
        },
        "last_updated": "2025-12-16"
    })
}

pub fn test_config() -> Config {
    Config {
        max_body_bytes: 64 * 1024,
        ..Config::default()
    }
}

pub fn post(path: &str, content_type: &str, body: impl Into<String>) -> Request {
    let body: String = body.into();
    let mut req = Request::new(Body::from(body));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = path.parse().unwrap();
    req.headers_mut()
        .insert("Content-Type", content_type.parse().unwrap());
    req
}

pub fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Marks a request the way htmx does.
pub fn from_htmx(mut req: Request) -> Request {
    req.headers_mut().insert("HX-Request", "true".parse().unwrap());
    req
}
