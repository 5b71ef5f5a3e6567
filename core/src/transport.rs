use crate::{Result, Signer, SigningCredential};
use bytes::Bytes;
use log::debug;
use std::fmt::Debug;

/// HttpSend is the transport seam used to send requests to the zone API.
///
/// Implementations only move bytes; authentication is layered on top with
/// [`SigningHttpSend`].
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// SigningHttpSend decorates a transport so every outgoing request is signed.
///
/// The body is held as [`Bytes`], which replays the exact transmitted bytes
/// for the payload hash. If signing fails nothing is sent.
///
/// ```no_run
/// # async fn example(
/// #     signer: zonesign_core::Signer<impl zonesign_core::SigningCredential>,
/// #     transport: impl zonesign_core::HttpSend,
/// # ) -> zonesign_core::Result<()> {
/// use bytes::Bytes;
/// use zonesign_core::{HttpSend, SigningHttpSend};
///
/// let client = SigningHttpSend::new(signer, transport);
/// let req = http::Request::get("https://api.zones.example.com/v1/zones")
///     .header("content-type", "application/json")
///     .body(Bytes::new())?;
/// let resp = client.http_send(req).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SigningHttpSend<K: SigningCredential, S: HttpSend> {
    signer: Signer<K>,
    inner: S,
}

impl<K: SigningCredential, S: HttpSend> SigningHttpSend<K, S> {
    /// Wrap `inner` so that requests are signed by `signer` before sending.
    pub fn new(signer: Signer<K>, inner: S) -> Self {
        Self { signer, inner }
    }

    /// Get the wrapped transport.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait::async_trait]
impl<K: SigningCredential, S: HttpSend> HttpSend for SigningHttpSend<K, S> {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (mut parts, body) = req.into_parts();
        self.signer.sign(&mut parts, &body).await?;
        debug!("sending signed request: {} {}", parts.method, parts.uri);

        self.inner
            .http_send(http::Request::from_parts(parts, body))
            .await
    }
}
