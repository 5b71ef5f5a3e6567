//! AWS SigV4 signing for zone management API requests.
//!
//! This crate computes the `Authorization`, `X-Amz-Date`,
//! `X-Amz-Content-Sha256` and `X-Amz-Security-Token` headers for requests
//! sent to a zone API behind an AWS SigV4 gateway.
//!
//! ## Quick Start
//!
//! ```no_run
//! use http::Method;
//! use zonesign_aws_v4::{Credential, RequestDescriptor, RequestSigner};
//! use zonesign_core::time::now;
//!
//! # fn example() -> zonesign_core::Result<()> {
//! let signer = RequestSigner::new("execute-api", "eu-central-1");
//! let cred = Credential::new("AKIDEXAMPLE", "secret").with_session_token("token");
//!
//! let req = RequestDescriptor::new(Method::POST, "api.zones.example.com", "/v1/zones")
//!     .with_content_type("application/json")
//!     .with_body(r#"{"name":"example.org"}"#);
//!
//! let result = signer.sign(&cred, &req, now())?;
//! println!("x-amz-date: {}", result.x_amz_date);
//! # Ok(())
//! # }
//! ```
//!
//! ## Signing through a transport
//!
//! [`RequestSigner`] implements [`zonesign_core::SignRequest`], so it can be
//! combined with a credential provider into a [`zonesign_core::Signer`] and
//! wrapped around any [`zonesign_core::HttpSend`] with
//! [`zonesign_core::SigningHttpSend`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use zonesign_aws_v4::{Config, ConfigCredentialProvider, RequestSigner};
//! use zonesign_core::{Context, OsEnv, Signer};
//!
//! # fn example() -> zonesign_core::Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let cfg = Config::default().with_service("execute-api").from_env(&ctx);
//!
//! let signer = Signer::new(
//!     ctx,
//!     ConfigCredentialProvider::new(Arc::new(cfg.clone())),
//!     RequestSigner::from_config(&cfg)?,
//! );
//! # let _ = signer;
//! # Ok(())
//! # }
//! ```

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod descriptor;
pub use descriptor::{RequestDescriptor, SigningContext};

mod canonical_request;
pub use canonical_request::{
    canonical_header_value, canonical_query, canonical_uri, CanonicalRequest,
    CanonicalRequestBuilder,
};

mod string_to_sign;
pub use string_to_sign::{string_to_sign, CredentialScope};

mod signing_key;
pub use signing_key::SigningKey;

mod authorization;
pub use authorization::{authorization_header, AuthorizationResult};

mod sign;
pub use sign::sign_request;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
