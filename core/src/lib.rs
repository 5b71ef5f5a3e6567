//! Core components for signing zone management API requests.
//!
//! This crate provides the foundational types and traits for the zonesign workspace.
//! Service crates such as `zonesign-aws-v4` implement the actual signing algorithm
//! on top of these abstractions.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds the environment used while loading credentials
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Signer**: The orchestrator that loads a credential, samples the clock once and signs
//! - **SigningHttpSend**: A transport decorator that signs every request before it is sent
//!
//! ## Example
//!
//! ```no_run
//! use zonesign_core::time::DateTime;
//! use zonesign_core::{Context, ProvideCredential, ReplayableBody, Result, SignRequest, Signer, SigningCredential};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential { key: "my-key".to_string() }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(
//!         &self,
//!         _req: &mut http::request::Parts,
//!         _body: &dyn ReplayableBody,
//!         _cred: &Self::Credential,
//!         _now: DateTime,
//!     ) -> Result<()> {
//!         todo!()
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MyBuilder);
//!
//! let mut parts = http::Request::get("https://api.zones.example.com/v1/zones")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts, &()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: SHA-256 and HMAC-SHA256 primitives
//! - [`time`]: Timestamp formatting
//! - [`utils`]: Secret redaction for `Debug` output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
mod body;
pub use body::{replay_body, GetBody, ReplayableBody};
mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};
mod transport;
pub use transport::{HttpSend, SigningHttpSend};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod signer;
pub use signer::Signer;
