use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::Instrument;

fn allow_cors(resp: &mut Response) {
    let headers = resp.headers_mut();
    headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("GET,POST,DELETE,OPTIONS"),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("content-type"),
    );
}

/// Any origin may call the API; preflights are answered here.
pub(crate) async fn cors_middleware(req: Request<Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        allow_cors(&mut resp);
        return resp;
    }
    let mut resp = next.run(req).await;
    allow_cors(&mut resp);
    resp
}

pub(crate) async fn request_tracing_middleware(req: Request<Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let route = req.uri().path().to_string();
    let span = tracing::info_span!("http.request", method = %method, route = %route);

    let resp = next.run(req).instrument(span.clone()).await;
    span.in_scope(|| tracing::debug!(status = resp.status().as_u16(), "response"));
    resp
}
