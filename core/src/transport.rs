//! The pluggable transport boundary and its ureq implementation.
//!
//! # Design
//! `Transport` is the narrow contract the core depends on: execute one
//! `HttpRequest`, return the raw response body as a string, or signal that
//! no response was obtained. The client takes a transport at construction,
//! so tests inject a capturing double and never touch the network.
//!
//! `UreqTransport` is the real blocking implementation. It frames multipart
//! bodies itself with a random boundary and sends URL-encoded bodies with
//! the matching content-type. Status-code-as-error is disabled so 4xx/5xx
//! bodies are returned as data; interpreting status is the caller's concern.

use std::fmt;

use uuid::Uuid;

use crate::http::{HttpMethod, HttpRequest, RequestBody};

/// Executes one HTTP round-trip for the client.
pub trait Transport {
    /// Perform `request` and return the raw response body.
    ///
    /// `Err` means no response was obtained at all (connection refused, DNS
    /// failure, timeout). A response with a non-2xx status is still `Ok`.
    fn send(&self, request: &HttpRequest) -> Result<String, TransportFailure>;
}

// Lets tests keep hold of a capturing transport while the client borrows it.
impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<String, TransportFailure> {
        (**self).send(request)
    }
}

/// Failure signal from a transport: the round-trip produced no response.
#[derive(Debug, Clone)]
pub struct TransportFailure {
    pub message: String,
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no response obtained: {}", self.message)
    }
}

impl std::error::Error for TransportFailure {}

/// Blocking `Transport` implementation on top of ureq.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<String, TransportFailure> {
        let url = &request.url;
        let result = match (&request.method, &request.body) {
            (HttpMethod::Get, _) => self.agent.get(url).call(),
            (HttpMethod::Post, RequestBody::Multipart(fields)) => {
                let boundary = format!("----comments-{}", Uuid::new_v4().simple());
                let content_type = format!("multipart/form-data; boundary={boundary}");
                let body = encode_multipart(&boundary, fields);
                self.agent
                    .post(url)
                    .content_type(content_type.as_str())
                    .send(&body[..])
            }
            (HttpMethod::Post, _) => self.agent.post(url).send_empty(),
            (HttpMethod::Put, RequestBody::UrlEncoded(query)) => self
                .agent
                .put(url)
                .content_type("application/x-www-form-urlencoded")
                .send(query.as_bytes()),
            (HttpMethod::Put, _) => self.agent.put(url).send_empty(),
        };

        let mut response = result.map_err(|e| TransportFailure { message: e.to_string() })?;
        response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportFailure { message: e.to_string() })
    }
}

/// Frame `fields` as a multipart/form-data body with the given boundary.
fn encode_multipart(boundary: &str, fields: &[(String, String)]) -> Vec<u8> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));
    body.into_bytes()
}
