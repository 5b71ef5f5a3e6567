use crate::{Error, Result};
use bytes::Bytes;
use std::fmt::{Debug, Formatter};
use std::io;

/// ReplayableBody is a request body that can be read more than once.
///
/// Signers read the body once to compute the payload hash, the transport
/// reads it again to send it. Both reads must observe the same bytes, so a
/// body that can only be consumed once must report an error instead of
/// returning partial or empty content.
pub trait ReplayableBody: Debug + Send + Sync {
    /// Return the complete body.
    fn replay(&self) -> io::Result<Bytes>;
}

impl ReplayableBody for Bytes {
    fn replay(&self) -> io::Result<Bytes> {
        Ok(self.clone())
    }
}

impl ReplayableBody for Vec<u8> {
    fn replay(&self) -> io::Result<Bytes> {
        Ok(Bytes::copy_from_slice(self))
    }
}

impl ReplayableBody for String {
    fn replay(&self) -> io::Result<Bytes> {
        Ok(Bytes::copy_from_slice(self.as_bytes()))
    }
}

impl ReplayableBody for &'static str {
    fn replay(&self) -> io::Result<Bytes> {
        Ok(Bytes::from_static(self.as_bytes()))
    }
}

impl ReplayableBody for () {
    fn replay(&self) -> io::Result<Bytes> {
        Ok(Bytes::new())
    }
}

/// GetBody builds the body on demand from a closure.
///
/// ```
/// use bytes::Bytes;
/// use zonesign_core::{GetBody, ReplayableBody};
///
/// let body = GetBody::new(|| Ok(Bytes::from_static(b"{}")));
/// assert_eq!(body.replay().unwrap(), Bytes::from_static(b"{}"));
/// ```
pub struct GetBody<F>(F);

impl<F> GetBody<F>
where
    F: Fn() -> io::Result<Bytes> + Send + Sync,
{
    /// Create a new GetBody from the closure.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Debug for GetBody<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("GetBody")
    }
}

impl<F> ReplayableBody for GetBody<F>
where
    F: Fn() -> io::Result<Bytes> + Send + Sync,
{
    fn replay(&self) -> io::Result<Bytes> {
        (self.0)()
    }
}

/// Read the body for hashing.
pub fn replay_body(body: &dyn ReplayableBody) -> Result<Bytes> {
    body.replay().map_err(|e| {
        Error::body_unreadable("request body cannot be replayed for hashing").with_source(e)
    })
}
