use http_body_util::Full;
use hyper::{
    body::Bytes,
    header::{
        HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
        ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW, CONTENT_TYPE,
    },
    Response, StatusCode,
};
use model::response::Failure;
use serde::Serialize;

pub type Reply = Response<Full<Bytes>>;

/// Serializes `value` as the body of a response with the given status.
pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Result<Reply, StatusCode> {
    let bytes = serde_json::to_vec(value).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let mut res = Response::new(Full::new(Bytes::from(bytes)));
    *res.status_mut() = status;
    assert!(res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json")).is_none());
    Ok(res)
}

/// Builds the JSON body shared by all error responses.
pub fn failure(status: StatusCode) -> Reply {
    let message = status.canonical_reason().unwrap_or("unknown error");
    let body = Failure { success: false, error: status.as_u16(), message };
    json(status, &body).unwrap_or_else(|fallback| {
        let mut res = Response::new(Full::default());
        *res.status_mut() = fallback;
        res
    })
}

/// Error response for a known path requested with the wrong method.
pub fn method_not_allowed(allow: &'static str) -> Reply {
    let mut res = failure(StatusCode::METHOD_NOT_ALLOWED);
    res.headers_mut().insert(ALLOW, HeaderValue::from_static(allow));
    res
}

pub fn preflight() -> Reply {
    Response::new(Full::default())
}

/// Opens every route to any origin.
pub fn allow_cross_origin(headers: &mut HeaderMap) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET, POST, PATCH, DELETE, OPTIONS"));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type, Authorization"));
}
