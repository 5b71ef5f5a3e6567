use crate::constants::{AWS_QUERY_ENCODE_SET, HOST};
use http::header::HeaderName;
use http::Method;
use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode};
use std::fmt::Write;
use zonesign_core::hash::{hex_sha256, EMPTY_PAYLOAD_SHA256};
use zonesign_core::{Error, Result};

/// CanonicalRequest is the normalized form of one request.
///
/// ```text
/// METHOD
/// URI_PATH
/// CANONICAL_QUERY_STRING
/// CANONICAL_HEADERS
///
/// SIGNED_HEADERS
/// HEX(SHA256(BODY))
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalRequest {
    request: String,
    signed_headers: String,
    payload_hash: String,
}

impl CanonicalRequest {
    /// The canonical request string.
    pub fn as_str(&self) -> &str {
        &self.request
    }

    /// Semicolon joined lowercase names of the signed headers, sorted.
    pub fn signed_headers(&self) -> &str {
        &self.signed_headers
    }

    /// Hex encoded SHA256 of the body.
    pub fn payload_hash(&self) -> &str {
        &self.payload_hash
    }

    /// Hex encoded SHA256 of the canonical request string.
    pub fn hash(&self) -> String {
        hex_sha256(self.request.as_bytes())
    }
}

/// CanonicalRequestBuilder assembles a [`CanonicalRequest`].
///
/// Headers given here are exactly the headers that get signed, the builder
/// never adds or drops one on its own.
#[derive(Debug)]
pub struct CanonicalRequestBuilder<'a> {
    method: &'a Method,
    path: &'a str,
    query: &'a str,
    headers: Vec<(String, String)>,
    payload_hash: String,
}

impl<'a> CanonicalRequestBuilder<'a> {
    /// Start a canonical request for an empty body.
    pub fn new(method: &'a Method, path: &'a str, query: &'a str) -> Self {
        Self {
            method,
            path,
            query,
            headers: Vec::with_capacity(5),
            payload_hash: EMPTY_PAYLOAD_SHA256.to_string(),
        }
    }

    /// Hash the body bytes that will be transmitted.
    pub fn payload(mut self, body: &[u8]) -> Self {
        self.payload_hash = hex_sha256(body);
        self
    }

    /// Hex encoded SHA256 of the body set so far.
    pub fn payload_hash(&self) -> &str {
        &self.payload_hash
    }

    /// Add a header to sign.
    ///
    /// Repeated names are merged into one comma separated value.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = canonical_header_value(value)?;

        match self.headers.iter_mut().find(|(k, _)| k == name.as_str()) {
            Some((_, v)) => {
                v.push(',');
                v.push_str(&value);
            }
            None => self.headers.push((name.as_str().to_string(), value)),
        }
        Ok(self)
    }

    /// Build the canonical request.
    pub fn build(mut self) -> Result<CanonicalRequest> {
        if !self.headers.iter().any(|(k, _)| k == HOST) {
            return Err(Error::encoding_invalid(
                "canonical request must sign the host header",
            ));
        }
        // Sort via header name.
        self.headers.sort();

        let signed_headers = self
            .headers
            .iter()
            .map(|(k, _)| k.as_str())
            .collect::<Vec<_>>()
            .join(";");

        // 256 is specially chosen to avoid reallocation for most requests.
        let mut f = String::with_capacity(256);
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", canonical_uri(self.path)?)?;
        writeln!(f, "{}", canonical_query(self.query)?)?;
        for (k, v) in &self.headers {
            writeln!(f, "{k}:{v}")?;
        }
        writeln!(f)?;
        writeln!(f, "{signed_headers}")?;
        write!(f, "{}", self.payload_hash)?;
        debug!("calculated canonical request: {f}");

        Ok(CanonicalRequest {
            request: f,
            signed_headers,
            payload_hash: self.payload_hash,
        })
    }
}

/// Encode every path segment once with the AWS query set.
///
/// Segments are decoded first so input that is already percent encoded is
/// never encoded twice. An encoded `/` stays inside its segment.
pub fn canonical_uri(path: &str) -> Result<String> {
    if path.is_empty() {
        return Ok("/".to_string());
    }

    let segments = path
        .split('/')
        .map(|segment| -> Result<String> {
            let decoded = percent_decode_str(segment).decode_utf8().map_err(|e| {
                Error::encoding_invalid(format!("path {path} is not valid utf-8 once decoded"))
                    .with_source(e)
            })?;
            Ok(utf8_percent_encode(&decoded, &AWS_QUERY_ENCODE_SET).to_string())
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(segments.join("/"))
}

/// Build the canonical query string.
///
/// The query is parsed as `application/x-www-form-urlencoded`, so `+` means a
/// space. Parameters are encoded with the AWS query set and sorted by encoded
/// name, then by encoded value. A parameter without value keeps its `=`.
pub fn canonical_query(query: &str) -> Result<String> {
    // form_urlencoded decodes lossily, reject invalid utf-8 before parsing.
    percent_decode_str(query).decode_utf8().map_err(|e| {
        Error::encoding_invalid(format!("query {query} is not valid utf-8 once decoded"))
            .with_source(e)
    })?;

    let mut pairs = form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| {
            (
                utf8_percent_encode(&k, &AWS_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(&v, &AWS_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect::<Vec<_>>();

    // Sort by param name
    pairs.sort();

    Ok(pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&"))
}

/// Normalize header value.
///
/// Leading and trailing whitespace is removed and every internal run of
/// whitespace becomes a single space. Control characters cannot be
/// canonicalized and are rejected.
pub fn canonical_header_value(value: &str) -> Result<String> {
    if value.chars().any(|c| c.is_control() && c != '\t') {
        return Err(Error::encoding_invalid(
            "header value contains control characters",
        ));
    }

    Ok(value.split_whitespace().collect::<Vec<_>>().join(" "))
}
