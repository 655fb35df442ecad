//! tiny_http transport adapter
//!
//! Translates wire requests into the neutral shape, drives the router, and
//! serializes neutral responses back out. Also owns the liveness probe, the
//! request log line, and the 500 fallback for controller failures.

use std::collections::HashMap;
use std::io::Cursor;
use std::time::Instant;

use serde_json::{Value, json};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};
use tokio::runtime::Runtime;
use tracing::{error, info};

use projectboard_core::http::{HttpRequest, HttpResponse, HttpStatus};

use crate::router::{Router, decode_component};

/// Body sent when a controller fails for any non-domain reason
const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error has occurred.";

/// Serve requests until the listener shuts down
///
/// Requests are handled strictly one at a time: each is translated,
/// dispatched on `runtime`, logged, and answered before the next is read.
pub fn serve(server: Server, router: Router, runtime: Runtime) {
    for mut request in server.incoming_requests() {
        let started = Instant::now();
        let method = request.method().to_string();
        let url = request.url().to_string();

        let (response, status, bytes) = route_request(&router, &runtime, &mut request);

        info!(
            method = %method,
            path = %url,
            status,
            bytes,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Request handled"
        );

        if let Err(err) = request.respond(response) {
            error!(error = %err, "Failed to write response");
        }
    }
}

/// Dispatch one wire request
///
/// Returns the response together with its status and body size for the
/// request log.
fn route_request(
    router: &Router,
    runtime: &Runtime,
    request: &mut Request,
) -> (Response<Cursor<Vec<u8>>>, u16, usize) {
    let url = request.url().to_string();
    let (path, raw_query) = match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url.as_str(), ""),
    };

    // Liveness probe, outside the JSON API surface.
    if request.method() == &Method::Get && path == "/health" {
        return text_wire("Healthy!");
    }

    let method = request.method().to_string();
    let api_path = strip_base_prefix(path).to_string();

    // The body is parsed before routing, so a busted payload is a 400 even
    // on an unknown route.
    let body = match read_json_body(request) {
        Ok(body) => body,
        Err(message) => return message_wire(HttpStatus::BadRequest, &message),
    };

    let Some((controller, params)) = router.resolve(&method, &api_path) else {
        return message_wire(
            HttpStatus::NotFound,
            &format!("API endpoint not found: {method} {api_path}"),
        );
    };

    let mut neutral = HttpRequest::new(method, api_path).with_body(body);
    neutral.params = params;
    neutral.query = parse_query(raw_query);
    for name in ["Content-Type", "User-Agent", "Referer"] {
        if let Some(header) = request.headers().iter().find(|h| h.field.equiv(name)) {
            neutral
                .headers
                .insert(name.to_string(), header.value.to_string());
        }
    }

    match runtime.block_on(controller.handle(neutral)) {
        Ok(response) => to_wire(&response),
        Err(err) => {
            error!(error = %err, "Controller failed");
            message_wire(HttpStatus::ServerError, INTERNAL_ERROR_MESSAGE)
        }
    }
}

/// Strip the `/api/v1` or `/api` base prefix
///
/// A path without either prefix passes through untouched.
fn strip_base_prefix(path: &str) -> &str {
    ["/api/v1", "/api"]
        .iter()
        .find_map(|prefix| {
            path.strip_prefix(prefix)
                .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        })
        .unwrap_or(path)
}

/// Parse a raw query string into a map, last value per key winning
///
/// Names and values are percent-decoded, with `+` read as a space.
fn parse_query(raw: &str) -> HashMap<String, String> {
    let decode = |part: &str| decode_component(&part.replace('+', " "));

    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => (decode(name), decode(value)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

/// Read the request body as JSON
///
/// An empty body reads as an empty object, which is what controllers expect
/// from bodyless requests. Anything unparseable is rejected here, before any
/// controller runs.
fn read_json_body(request: &mut Request) -> Result<Value, String> {
    let mut raw = String::new();
    if let Err(err) = request.as_reader().read_to_string(&mut raw) {
        return Err(format!("Failed to read request body: {err}"));
    }
    if raw.trim().is_empty() {
        return Ok(json!({}));
    }
    serde_json::from_str(&raw).map_err(|err| format!("Invalid JSON body: {err}"))
}

/// Convert a neutral response into a wire response
fn to_wire(response: &HttpResponse) -> (Response<Cursor<Vec<u8>>>, u16, usize) {
    let status = response.status.code();
    let payload = response.body.to_string().into_bytes();
    let bytes = payload.len();

    let mut wire = Response::from_data(payload).with_status_code(StatusCode(status));
    for (name, value) in &response.headers {
        if let Ok(header) = Header::from_bytes(name.as_str(), value.as_str()) {
            wire = wire.with_header(header);
        }
    }

    (wire, status, bytes)
}

/// JSON `{"message": ...}` response for adapter-level failures
fn message_wire(status: HttpStatus, message: &str) -> (Response<Cursor<Vec<u8>>>, u16, usize) {
    to_wire(&HttpResponse::json(status, json!({ "message": message })))
}

/// Plain-text 200 response
fn text_wire(body: &str) -> (Response<Cursor<Vec<u8>>>, u16, usize) {
    let payload = body.as_bytes().to_vec();
    let bytes = payload.len();

    let mut wire = Response::from_data(payload);
    if let Ok(header) = Header::from_bytes("Content-Type", "text/plain; charset=utf-8") {
        wire = wire.with_header(header);
    }

    (wire, 200, bytes)
}
