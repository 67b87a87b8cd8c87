//! Core components for signing API gateway requests.
//!
//! This crate carries everything a signing scheme needs that is not the
//! scheme itself: the capability [`Context`], the credential and signing
//! traits, the [`Signer`] orchestrator and the shared hash, time and
//! redaction helpers. Scheme crates (such as `gwsign-aliyun-apigw`)
//! implement the traits; applications wire the pieces together.
//!
//! ## Overview
//!
//! Three abstractions make up the signing pipeline:
//!
//! - [`ProvideCredential`] resolves key material (from the environment, a
//!   file, a metadata service) through the [`Context`], never through
//!   ambient process state.
//! - [`SignRequest`] turns a credential plus `http::request::Parts` into
//!   a signed request, in place.
//! - [`Signer`] ties the two together and caches the credential while it
//!   stays valid.
//!
//! ## Example
//!
//! ```
//! use async_trait::async_trait;
//! use bytes::Bytes;
//! use gwsign_core::{
//!     hash, Context, OsEnv, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
//! };
//! use http::request::Parts;
//!
//! // The key material your gateway hands out.
//! #[derive(Clone, Debug)]
//! struct DemoCredential {
//!     app_key: String,
//!     app_secret: String,
//! }
//!
//! impl SigningCredential for DemoCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.app_key.is_empty() && !self.app_secret.is_empty()
//!     }
//! }
//!
//! // Resolve the pair from the environment, through the context.
//! #[derive(Debug)]
//! struct DemoLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for DemoLoader {
//!     type Credential = DemoCredential;
//!
//!     async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
//!         let (Some(app_key), Some(app_secret)) =
//!             (ctx.env_var("DEMO_APP_KEY"), ctx.env_var("DEMO_APP_SECRET"))
//!         else {
//!             return Ok(None);
//!         };
//!
//!         Ok(Some(DemoCredential {
//!             app_key,
//!             app_secret,
//!         }))
//!     }
//! }
//!
//! // A toy scheme: HMAC the path, attach key and tag.
//! #[derive(Debug)]
//! struct DemoBuilder;
//!
//! #[async_trait]
//! impl SignRequest for DemoBuilder {
//!     type Credential = DemoCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut Parts,
//!         _body: Option<&Bytes>,
//!         credential: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         let cred = credential
//!             .ok_or_else(|| gwsign_core::Error::credential_invalid("no credential loaded"))?;
//!
//!         let tag =
//!             hash::base64_hmac_sha256(cred.app_secret.as_bytes(), req.uri.path().as_bytes());
//!         req.headers.insert("x-demo-key", cred.app_key.parse()?);
//!         req.headers.insert("x-demo-signature", tag.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new().with_env(OsEnv), DemoLoader, DemoBuilder);
//!
//! let mut parts = http::Request::get("https://gateway.example.com/v1/echo")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts, None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Capabilities
//!
//! IO happens behind three seams on the [`Context`]: [`FileRead`],
//! [`HttpSend`] and [`Env`]. The companion crates
//! `gwsign-file-read-tokio` and `gwsign-http-send-reqwest` provide the
//! production implementations; [`StaticEnv`] and the no-op defaults keep
//! tests hermetic.
//!
//! ## Helper modules
//!
//! - [`hash`]: base64, HMAC-SHA256 and Content-MD5 digests
//! - [`time`]: the timestamp type and epoch-millisecond formatting
//! - [`utils`]: `Redact` for keeping secrets out of Debug output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, FileRead, HttpSend, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod error;
pub use error::{Error, ErrorKind, Result};
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
