//! HTTP request description and body-encoding policy.
//!
//! # Design
//! Requests are plain data: the client builds an `HttpRequest` and the
//! transport executes it, so the request shape can be asserted on directly
//! in tests. The body encoding is decided in exactly one place,
//! `encode_body`, keyed strictly by HTTP method — the POST-multipart vs
//! PUT-urlencoded split is a quirk of the server's wire contract and must
//! stay visible rather than scattered across call sites.

/// HTTP method for a request. Only the three verbs the comments API uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// Request body in the encoding the wire contract demands for its method.
///
/// `Multipart` holds the raw field pairs; framing the multipart body
/// (boundaries, part headers) is the transport's job. `UrlEncoded` is the
/// finished `key=value&key=value` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    None,
    Multipart(Vec<(String, String)>),
    UrlEncoded(String),
}

/// An HTTP request described as plain data.
///
/// Built by `CommentClient` and executed by a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: RequestBody,
}

/// The body-encoding policy table, keyed strictly by HTTP method.
///
/// GET carries no body. POST carries the field pairs for multipart framing.
/// PUT carries a URL-encoded string. The asymmetry between POST and PUT is
/// intentional and mirrors the server's contract; do not unify.
pub fn encode_body(method: &HttpMethod, params: &[(&str, &str)]) -> RequestBody {
    match method {
        HttpMethod::Get => RequestBody::None,
        HttpMethod::Post => RequestBody::Multipart(
            params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ),
        HttpMethod::Put => RequestBody::UrlEncoded(
            params
                .iter()
                .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&"),
        ),
    }
}
