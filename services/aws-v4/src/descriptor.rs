use crate::constants::CONTENT_TYPE;
use bytes::Bytes;
use http::header;
use http::request::Parts;
use http::Method;
use std::sync::Arc;
use zonesign_core::time::DateTime;
use zonesign_core::{replay_body, Error, ReplayableBody, Result};

/// RequestDescriptor describes one outgoing request to the zone API.
///
/// The body stays with the descriptor so the transport can read it again
/// after the signer has hashed it.
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: Method,
    /// Host the request is sent to, including a non-default port.
    pub host: String,
    /// URI path, percent encoded at most once.
    pub path: String,
    /// Raw query string without the leading `?`, empty if none.
    pub query: String,
    /// Value of the `content-type` header, signed when present.
    pub content_type: Option<String>,
    /// Request body.
    pub body: Arc<dyn ReplayableBody>,
}

impl RequestDescriptor {
    /// Create a descriptor with an empty body and no query.
    pub fn new(method: Method, host: &str, path: &str) -> Self {
        Self {
            method,
            host: host.to_string(),
            path: path.to_string(),
            query: String::new(),
            content_type: None,
            body: Arc::new(Bytes::new()),
        }
    }

    /// Set the raw query string.
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.trim_start_matches('?').to_string();
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl ReplayableBody + 'static) -> Self {
        self.body = Arc::new(body);
        self
    }

    /// Build a descriptor from `http` request parts.
    ///
    /// The host is taken from the `Host` header and falls back to the URI
    /// authority.
    pub fn from_parts(parts: &Parts, body: impl ReplayableBody + 'static) -> Result<Self> {
        let host = match parts.headers.get(header::HOST) {
            Some(v) => v.to_str()?.to_string(),
            None => parts
                .uri
                .authority()
                .ok_or_else(|| {
                    Error::encoding_invalid("request without authority is invalid for signing")
                })?
                .as_str()
                .to_string(),
        };

        let content_type = parts
            .headers
            .get(CONTENT_TYPE)
            .map(|v| v.to_str().map(str::to_string))
            .transpose()?;

        Ok(Self {
            method: parts.method.clone(),
            host,
            path: parts.uri.path().to_string(),
            query: parts.uri.query().unwrap_or_default().to_string(),
            content_type,
            body: Arc::new(body),
        })
    }
}

/// SigningContext fully describes one signable request.
///
/// It is immutable once built: the body has been replayed exactly once and
/// the timestamp is fixed for every later step.
#[derive(Clone, Debug)]
pub struct SigningContext {
    method: Method,
    host: String,
    path: String,
    query: String,
    body: Bytes,
    content_type: Option<String>,
    region: String,
    service: String,
    timestamp: DateTime,
}

impl SigningContext {
    /// Build the context for `req`, reading its body once for hashing.
    pub fn new(
        req: &RequestDescriptor,
        region: &str,
        service: &str,
        timestamp: DateTime,
    ) -> Result<Self> {
        if region.is_empty() {
            return Err(Error::config_invalid("region is missing"));
        }
        if service.is_empty() {
            return Err(Error::config_invalid("service is missing"));
        }

        Ok(Self {
            method: req.method.clone(),
            host: req.host.clone(),
            path: req.path.clone(),
            query: req.query.clone(),
            body: replay_body(req.body.as_ref())?,
            content_type: req.content_type.clone(),
            region: region.to_string(),
            service: service.to_string(),
            timestamp,
        })
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Host header value.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// URI path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Body bytes that will be transmitted.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Content type, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Signing region.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Signing service.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The instant the signature is computed for.
    pub fn timestamp(&self) -> DateTime {
        self.timestamp
    }
}
