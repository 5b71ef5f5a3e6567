//! Reqwest backed [`HttpSend`] for zonesign.
//!
//! ```no_run
//! use zonesign_http_send_reqwest::ReqwestHttpSend;
//!
//! let transport = ReqwestHttpSend::new(reqwest::Client::new());
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use reqwest::{Client, Request};
use zonesign_core::{Error, HttpSend, Result};

/// ReqwestHttpSend sends requests with a [`reqwest::Client`].
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = into_reqwest_request(req)?;
        debug!("sending request: {} {}", req.method(), req.url());

        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::unexpected("failed to send request").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::unexpected("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

/// Convert an `http` request into a reqwest one, keeping every header as is.
fn into_reqwest_request(req: http::Request<Bytes>) -> Result<Request> {
    Request::try_from(req)
        .map_err(|e| Error::unexpected("failed to convert request").with_source(e))
}
