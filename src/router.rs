use crate::config::Config;
use crate::errors::{ReportError, ServerError};
use crate::mot::mot_history_report_from_json;
use crate::responses::{
    error_fragment_response, error_to_response, html_response, text_response, ResultResp,
};
use crate::templates;
use crate::valuation::valuation_report_from_json;
use astra::{Request, Response};
use maud::{html, Markup};
use std::io::Read;
use std::time::Instant;

/// Form field carrying the JSON payload when the body is urlencoded.
const PAYLOAD_FIELD: &str = "payload";

/// Set by htmx on every request it issues.
const HX_REQUEST: &str = "HX-Request";

/// Entry point for the server loop: routes, renders errors, logs the outcome.
pub fn respond(req: Request, cfg: &Config) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let htmx = is_htmx(&req);

    let resp = match handle(req, cfg) {
        Ok(resp) => resp,
        Err(err) if htmx => error_fragment_response(err),
        Err(err) => error_to_response(err),
    };

    tracing::info!(
        %method,
        path = %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );

    resp
}

pub fn handle(req: Request, cfg: &Config) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let htmx = is_htmx(&req);

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page()),
        ("GET", "/health") => text_response("ok"),

        ("POST", "/report/mot") => {
            let body = read_payload(req, cfg.max_body_bytes)?;
            match mot_history_report_from_json(&body) {
                Ok(report) => report_response(templates::pages::mot_report_page(&report), htmx),
                // Not a failure of the request: show the notice in place of a report.
                Err(ReportError::EmptyHistory) => report_response(
                    templates::error_card(&ReportError::EmptyHistory.to_string()),
                    htmx,
                ),
                Err(err) => Err(err.into()),
            }
        }

        ("POST", "/report/valuation") => {
            let body = read_payload(req, cfg.max_body_bytes)?;
            let report = valuation_report_from_json(&body)?;
            report_response(templates::pages::valuation_report_page(&report), htmx)
        }

        _ => Err(ServerError::NotFound),
    }
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get(HX_REQUEST)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// htmx swaps the bare fragment into `#results`; a plain form post gets it
/// wrapped in the full layout.
fn report_response(fragment: Markup, htmx: bool) -> ResultResp {
    if htmx {
        return html_response(fragment);
    }

    html_response(templates::desktop_layout(
        "MOT Report",
        html! {
            main class="container" {
                (fragment)
                p { a href="/" { "← Check another vehicle" } }
            }
        },
    ))
}

/// Reads the request body, capped at `limit` bytes. A urlencoded form
/// submits the JSON in its `payload` field; anything else is taken as raw JSON.
fn read_payload(req: Request, limit: usize) -> Result<Vec<u8>, ServerError> {
    let is_form = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with(mime::APPLICATION_WWW_FORM_URLENCODED.as_ref()))
        .unwrap_or(false);

    let mut body = Vec::new();
    req.into_body()
        .reader()
        .take(limit as u64 + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read body: {e}")))?;

    if body.len() > limit {
        return Err(ServerError::PayloadTooLarge(limit));
    }

    if !is_form {
        return Ok(body);
    }

    url::form_urlencoded::parse(&body)
        .find(|(key, _)| key == PAYLOAD_FIELD)
        .map(|(_, value)| value.into_owned().into_bytes())
        .ok_or_else(|| ServerError::BadRequest(format!("missing `{PAYLOAD_FIELD}` field")))
}
