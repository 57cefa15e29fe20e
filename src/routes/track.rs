use axum::{
    Router,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    routing::any,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::AppState;
use crate::models::Pageview;

pub fn router() -> Router<AppState> {
    // Every response from this endpoint must be unconditionally
    // uncacheable at the browser, CDN, and proxy level.
    Router::new().route("/track", any(track)).layer(
        ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::overriding(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-cache, no-store, must-revalidate"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::PRAGMA,
                HeaderValue::from_static("no-cache"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::EXPIRES,
                HeaderValue::from_static("0"),
            )),
    )
}

fn header_string(headers: &HeaderMap, name: impl header::AsHeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}

/// First address in `x-forwarded-for`, for deployments behind a
/// reverse proxy that does not inject `client-ip`.
fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
}

/// Record a pageview and acknowledge with an empty 204.
///
/// Missing or malformed headers never fail the request; they show up
/// as absent fields in the logged record.
async fn track(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    let referrer = header_string(&headers, header::REFERER);
    let user_agent = header_string(&headers, header::USER_AGENT);
    let client_ip = header_string(&headers, "client-ip").or_else(|| forwarded_ip(&headers));

    let pageview = Pageview::capture(
        referrer,
        user_agent,
        client_ip,
        &state.config.production_host,
    );

    tracing::info!(
        id = %pageview.id,
        date = %pageview.date,
        timestamp = %pageview.timestamp,
        url = pageview.url.as_deref(),
        hostname = pageview.hostname.as_deref(),
        pathname = pageview.pathname.as_deref(),
        production = pageview.production,
        user_agent = pageview.user_agent.as_deref(),
        client_ip = pageview.client_ip.as_deref(),
        "pageview"
    );

    StatusCode::NO_CONTENT
}
