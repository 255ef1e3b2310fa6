pub mod errors;
pub mod html;

// Error pages and htmx error fragments
pub use errors::{error_fragment_response, error_to_response, html_error_response, ResultResp};

// Normal HTML / text responses
pub use html::{html_response, text_response};
