//! Stateless client for the comments API.
//!
//! # Design
//! `CommentClient` holds only an immutable `base_url` and the injected
//! transport; it carries no mutable state between calls. Every operation
//! goes through `send_request`: build the URL by simple concatenation,
//! encode the body by method via the policy table, execute through the
//! transport, then decode the raw body as JSON and require an object.
//! The decoded object is returned verbatim — the `{status, data}` envelope
//! is a server convention the client does not interpret. Trailing-slash
//! handling of `base_url` is the caller's responsibility; no normalization
//! is performed.

use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::http::{encode_body, HttpMethod, HttpRequest};
use crate::transport::Transport;

/// Synchronous, blocking client for the comments API.
#[derive(Debug, Clone)]
pub struct CommentClient<T: Transport> {
    base_url: String,
    transport: T,
}

impl<T: Transport> CommentClient<T> {
    /// Bind a client to `base_url`. Performs no network activity.
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.to_string(),
            transport,
        }
    }

    /// Fetch all comments: GET `{base_url}/comments`.
    pub fn list(&self) -> Result<Map<String, Value>, ApiError> {
        self.send_request("comments", HttpMethod::Get, &[])
    }

    /// Create a comment: POST `{base_url}/comment` with multipart fields.
    ///
    /// `name` and `text` are passed through unvalidated; empty strings are
    /// sent as-is.
    pub fn create(&self, name: &str, text: &str) -> Result<Map<String, Value>, ApiError> {
        self.send_request("comment", HttpMethod::Post, &[("name", name), ("text", text)])
    }

    /// Update comment `id`: PUT `{base_url}/comment/{id}` with a
    /// URL-encoded body.
    pub fn update(&self, id: u64, name: &str, text: &str) -> Result<Map<String, Value>, ApiError> {
        self.send_request(
            &format!("comment/{id}"),
            HttpMethod::Put,
            &[("name", name), ("text", text)],
        )
    }

    /// Shared request path: build, execute, decode.
    fn send_request(
        &self,
        endpoint: &str,
        method: HttpMethod,
        params: &[(&str, &str)],
    ) -> Result<Map<String, Value>, ApiError> {
        let body = encode_body(&method, params);
        let request = HttpRequest {
            url: format!("{}/{endpoint}", self.base_url),
            method,
            body,
        };

        let raw = self
            .transport
            .send(&request)
            .map_err(|e| ApiError::Transport {
                base_url: self.base_url.clone(),
                message: e.message,
            })?;

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(ApiError::Shape),
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::json;

    use super::*;
    use crate::http::RequestBody;
    use crate::transport::TransportFailure;

    const BASE_URL: &str = "http://example.com";

    /// Test double: records every request and replays a canned response.
    struct MockTransport {
        response: Result<String, TransportFailure>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl MockTransport {
        fn ok(body: &str) -> Self {
            Self {
                response: Ok(body.to_string()),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(TransportFailure {
                    message: message.to_string(),
                }),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn last_request(&self) -> HttpRequest {
            self.seen.borrow().last().cloned().expect("no request sent")
        }
    }

    impl Transport for MockTransport {
        fn send(&self, request: &HttpRequest) -> Result<String, TransportFailure> {
            self.seen.borrow_mut().push(request.clone());
            self.response.clone()
        }
    }

    fn envelope(data: Value) -> String {
        json!({ "status": "Success", "data": data }).to_string()
    }

    #[test]
    fn list_issues_get_with_no_body() {
        let mock = MockTransport::ok(&envelope(json!([])));
        let client = CommentClient::new(BASE_URL, &mock);
        client.list().unwrap();

        let req = mock.last_request();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://example.com/comments");
        assert_eq!(req.body, RequestBody::None);
    }

    #[test]
    fn create_issues_post_with_multipart_fields() {
        let mock = MockTransport::ok(&envelope(json!({"name": "Alice", "text": "Hi"})));
        let client = CommentClient::new(BASE_URL, &mock);
        client.create("Alice", "Hi").unwrap();

        let req = mock.last_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://example.com/comment");
        assert_eq!(
            req.body,
            RequestBody::Multipart(vec![
                ("name".to_string(), "Alice".to_string()),
                ("text".to_string(), "Hi".to_string()),
            ])
        );
    }

    #[test]
    fn create_passes_empty_strings_through() {
        let mock = MockTransport::ok(&envelope(json!({})));
        let client = CommentClient::new(BASE_URL, &mock);
        client.create("", "").unwrap();

        let req = mock.last_request();
        assert_eq!(
            req.body,
            RequestBody::Multipart(vec![
                ("name".to_string(), String::new()),
                ("text".to_string(), String::new()),
            ])
        );
    }

    #[test]
    fn update_issues_put_with_urlencoded_body() {
        let mock = MockTransport::ok(&envelope(json!({"id": 7, "name": "Bob", "text": "Edited"})));
        let client = CommentClient::new(BASE_URL, &mock);
        client.update(7, "Bob", "Edited").unwrap();

        let req = mock.last_request();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://example.com/comment/7");
        assert_eq!(req.body, RequestBody::UrlEncoded("name=Bob&text=Edited".to_string()));
    }

    #[test]
    fn update_targets_id_zero() {
        let mock = MockTransport::ok(&envelope(json!({})));
        let client = CommentClient::new(BASE_URL, &mock);
        client.update(0, "Bob", "Edited").unwrap();

        assert_eq!(mock.last_request().url, "http://example.com/comment/0");
    }

    #[test]
    fn update_percent_encodes_body_values() {
        let mock = MockTransport::ok(&envelope(json!({})));
        let client = CommentClient::new(BASE_URL, &mock);
        client.update(1, "a b", "x&y").unwrap();

        assert_eq!(
            mock.last_request().body,
            RequestBody::UrlEncoded("name=a%20b&text=x%26y".to_string())
        );
    }

    #[test]
    fn envelope_passes_through_unchanged() {
        let data = json!([{"id": 0, "name": "0. Name", "text": "0. Text"}]);
        let mock = MockTransport::ok(&envelope(data.clone()));
        let client = CommentClient::new(BASE_URL, &mock);

        let response = client.list().unwrap();
        assert_eq!(
            Value::Object(response),
            json!({ "status": "Success", "data": data })
        );
    }

    #[test]
    fn non_json_body_is_decode_error() {
        for run in 0..3 {
            let mock = MockTransport::ok("not json");
            let client = CommentClient::new(BASE_URL, &mock);
            let err = match run {
                0 => client.list(),
                1 => client.create("n", "t"),
                _ => client.update(1, "n", "t"),
            }
            .unwrap_err();
            assert!(matches!(err, ApiError::Decode(_)), "run {run}: {err}");
        }
    }

    #[test]
    fn array_body_is_shape_error() {
        for run in 0..3 {
            let mock = MockTransport::ok("[1,2,3]");
            let client = CommentClient::new(BASE_URL, &mock);
            let err = match run {
                0 => client.list(),
                1 => client.create("n", "t"),
                _ => client.update(1, "n", "t"),
            }
            .unwrap_err();
            assert!(matches!(err, ApiError::Shape), "run {run}: {err}");
        }
    }

    #[test]
    fn null_body_is_shape_error() {
        let mock = MockTransport::ok("null");
        let client = CommentClient::new(BASE_URL, &mock);
        let err = client.list().unwrap_err();
        assert!(matches!(err, ApiError::Shape));
    }

    #[test]
    fn scalar_body_is_shape_error() {
        let mock = MockTransport::ok("42");
        let client = CommentClient::new(BASE_URL, &mock);
        let err = client.list().unwrap_err();
        assert!(matches!(err, ApiError::Shape));
    }

    #[test]
    fn transport_failure_names_base_url() {
        for run in 0..3 {
            let mock = MockTransport::failing("connection refused");
            let client = CommentClient::new(BASE_URL, &mock);
            let err = match run {
                0 => client.list(),
                1 => client.create("n", "t"),
                _ => client.update(1, "n", "t"),
            }
            .unwrap_err();
            match err {
                ApiError::Transport { base_url, message } => {
                    assert_eq!(base_url, BASE_URL, "run {run}");
                    assert_eq!(message, "connection refused", "run {run}");
                }
                other => panic!("run {run}: expected transport error, got {other}"),
            }
        }
    }

    #[test]
    fn base_url_is_not_normalized() {
        // Trailing-slash handling is the caller's responsibility.
        let mock = MockTransport::ok(&envelope(json!([])));
        let client = CommentClient::new("http://example.com/", &mock);
        client.list().unwrap();

        assert_eq!(mock.last_request().url, "http://example.com//comments");
    }
}
