use crate::errors::ServerError;
use crate::templates::{desktop_layout, error_card};
use astra::{Body, Response, ResponseBuilder};
use maud::html;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    let status = log_error(&err);
    html_error_response(status, &err.to_string())
}

/// Error card for an htmx swap. Answered with 200: htmx leaves the target
/// untouched on 4xx/5xx, and the card has to land in `#results`.
pub fn error_fragment_response(err: ServerError) -> Response {
    log_error(&err);

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_card(&err.to_string()).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

fn log_error(err: &ServerError) -> u16 {
    let status = err.status();
    if status >= 500 {
        tracing::error!(%err, status, "request failed");
    } else {
        tracing::warn!(%err, status, "request rejected");
    }
    status
}

/// Build an HTML error page
pub fn html_error_response(status: u16, message: &str) -> Response {
    let page = desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container" {
                h1 { "Error " (status) }
                (error_card(message))
                p { a href="/" { "← Back to home" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
