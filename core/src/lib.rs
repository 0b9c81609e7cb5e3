//! Synchronous API client core for the comments service.
//!
//! # Overview
//! `CommentClient` exposes the three operations of the remote comments
//! resource — list, create, update — over plain HTTP with JSON responses.
//! The interesting part is the request/response translation layer: each call
//! builds an `HttpRequest`, hands it to an injected `Transport`, and decodes
//! the raw body into a JSON object that is returned to the caller verbatim.
//!
//! # Design
//! - `CommentClient` is stateless — it holds only `base_url` and the
//!   transport; concurrent calls on one instance are safe by construction.
//! - The transport is an explicit injected dependency (the `Transport`
//!   trait), so tests substitute a capturing double without touching the
//!   request path. `UreqTransport` is the real blocking implementation.
//! - Body encoding is selected strictly by HTTP method in one policy table
//!   (`http::encode_body`): GET carries no body, POST multipart form fields,
//!   PUT a URL-encoded string. The POST/PUT asymmetry matches the server's
//!   wire contract and is kept deliberately.
//! - Responses are not interpreted: the decoded object (conventionally a
//!   `{status, data}` envelope) is passed through unchanged.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;

pub use client::CommentClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, RequestBody};
pub use transport::{Transport, TransportFailure, UreqTransport};
