//! Endpoint registry — logical endpoint keys resolved to concrete URLs.
//!
//! DESIGN
//! ======
//! An endpoint is either a static path (query params are appended as a
//! URL-encoded query string) or a path builder (params feed the path
//! itself and are never also appended as a query string — the two
//! parameter-passing modes are mutually exclusive). Unknown keys degrade
//! to the bare base URL with a diagnostic rather than failing, so callers
//! must tolerate degraded URLs.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Borrowed key/value pairs for query strings or path parameters.
pub type QueryParams<'a> = &'a [(&'a str, &'a str)];

enum EndpointSpec {
    Static(&'static str),
    Path(fn(QueryParams<'_>) -> String),
}

fn spec_for(key: &str) -> Option<EndpointSpec> {
    match key {
        "session" => Some(EndpointSpec::Static("auth/session")),
        "login" => Some(EndpointSpec::Static("auth/login")),
        "logout" => Some(EndpointSpec::Static("auth/logout")),
        "records" => Some(EndpointSpec::Static("records")),
        "record_by_id" => Some(EndpointSpec::Path(record_path)),
        "orders" => Some(EndpointSpec::Static("orders")),
        "order_by_id" => Some(EndpointSpec::Path(order_path)),
        "shipping_orders" => Some(EndpointSpec::Static("shipping/orders")),
        "price_compare" => Some(EndpointSpec::Static("pricing/compare")),
        "sql_query" => Some(EndpointSpec::Static("admin/sql")),
        _ => None,
    }
}

fn record_path(params: QueryParams<'_>) -> String {
    format!("records/{}", param(params, "id"))
}

fn order_path(params: QueryParams<'_>) -> String {
    format!("orders/{}", param(params, "id"))
}

/// First value for `key`, or empty — a missing path parameter yields a
/// degraded URL, mirroring the unknown-key behavior.
fn param<'a>(params: QueryParams<'a>, key: &str) -> &'a str {
    params
        .iter()
        .find(|(k, _)| *k == key)
        .map_or("", |(_, v)| *v)
}

/// Resolve an endpoint key against a base URL.
///
/// Unknown keys return the bare base URL and log a diagnostic; this never
/// fails.
#[must_use]
pub fn url_for(base_url: &str, key: &str, params: QueryParams<'_>) -> String {
    let base = base_url.trim_end_matches('/');

    match spec_for(key) {
        Some(EndpointSpec::Static(path)) => {
            if params.is_empty() {
                format!("{base}/{path}")
            } else {
                format!("{base}/{path}?{}", encode_query(params))
            }
        }
        Some(EndpointSpec::Path(build)) => format!("{base}/{}", build(params)),
        None => {
            tracing::warn!(endpoint = key, "unknown endpoint key, returning bare base URL");
            base.to_owned()
        }
    }
}

/// Render `params` as an `application/x-www-form-urlencoded` query string.
fn encode_query(params: QueryParams<'_>) -> String {
    let mut out = String::new();
    for (index, (key, value)) in params.iter().enumerate() {
        if index > 0 {
            out.push('&');
        }
        encode_component(&mut out, key);
        out.push('=');
        encode_component(&mut out, value);
    }
    out
}

fn encode_component(out: &mut String, raw: &str) {
    use std::fmt::Write;

    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
}
