// errors.rs
use thiserror::Error;

/// Errors raised while turning an upstream payload into a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The payload parsed fine but carried no MOT tests.
    /// User-facing: render a notice, don't fail the request.
    #[error("No MOT history found for this vehicle")]
    EmptyHistory,

    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Errors originating from either the server logic
/// (routing, request bodies, config) or the report builders.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Payload Too Large: limit is {0} bytes")]
    PayloadTooLarge(usize),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::PayloadTooLarge(_) => 413,
            ServerError::Report(ReportError::Payload(_)) => 400,
            // Only reaches here if a handler forgot to render it as a notice.
            ServerError::Report(ReportError::EmptyHistory) => 404,
            ServerError::Config(_) | ServerError::InternalError => 500,
        }
    }
}
