use axum::extract::Request;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Permissive cross-origin policy: every response, including errors and
/// unmatched routes, advertises any origin, the three supported methods,
/// and the Content-Type/Authorization request headers. A preflight OPTIONS
/// request is answered directly with an empty 200, whatever its path.
///
/// Not `tower_http::cors::CorsLayer`: the contract requires all three
/// headers on simple responses too, which CorsLayer only emits on preflight.
pub async fn cross_origin(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        apply_cors_headers(&mut response);
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors_headers(&mut response);
    response
}

fn apply_cors_headers(response: &mut Response) {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
}
