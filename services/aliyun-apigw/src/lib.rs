//! Aliyun API Gateway signing implementation for gwsign.
//!
//! This crate signs requests for APIs published behind Alibaba Cloud API
//! Gateway using the app key pair ("simple authentication") scheme.
//!
//! ## Overview
//!
//! The gateway authenticates callers by an HMAC-SHA256 signature over a
//! canonical description of the request: the method, a fixed set of
//! headers, every `X-Ca-` header, and the merged query and form
//! parameters. This crate assembles that canonical string, computes the
//! signature and attaches the `X-Ca-Signature` header family, with
//! credential loading from environment variables or explicit
//! configuration.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gwsign_aliyun_apigw::{RequestSigner, StaticCredentialProvider};
//! use gwsign_core::{Context, Signer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let signer = Signer::new(
//!         Context::new(),
//!         StaticCredentialProvider::new("app_key", "app_secret"),
//!         RequestSigner::new(),
//!     );
//!
//!     let (mut parts, _) = http::Request::get("https://abcdef.gateway.example.com/v1/echo?q=1")
//!         .body(())
//!         .unwrap()
//!         .into_parts();
//!
//!     signer.sign(&mut parts, None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! ### Environment Variables
//!
//! ```bash
//! export ALIBABA_CLOUD_GATEWAY_APP_KEY=your-app-key
//! export ALIBABA_CLOUD_GATEWAY_APP_SECRET=your-app-secret
//! ```
//!
//! [`DefaultCredentialProvider`] reads them through the context, so tests
//! can inject a fake environment instead of touching the process.
//!
//! ### Explicit Configuration
//!
//! ```no_run
//! use gwsign_aliyun_apigw::{Config, EnvCredentialProvider};
//!
//! let config = Config::new()
//!     .with_app_key("your-app-key")
//!     .with_app_secret("your-app-secret");
//!
//! let loader = EnvCredentialProvider::new().with_config(config);
//! ```
//!
//! ## Signing Options
//!
//! ```no_run
//! use gwsign_aliyun_apigw::RequestSigner;
//!
//! // Route to the TEST stage, ask the gateway to echo signing details,
//! // and opt tracing headers into the signature.
//! let builder = RequestSigner::new()
//!     .with_stage("TEST")
//!     .with_debug_mode(true)
//!     .with_sign_headers(vec!["x-trace-".to_string()]);
//! ```
//!
//! ## Request Bodies
//!
//! Pass the body bytes alongside the request parts when signing. A body
//! declared as `application/x-www-form-urlencoded; charset=utf-8` is
//! parsed into key/value pairs that join the signature through the
//! resource block; any other body is hashed and transmitted with a
//! `Content-MD5` header.
//!
//! ```no_run
//! # use gwsign_aliyun_apigw::{RequestSigner, StaticCredentialProvider};
//! # use gwsign_core::{Context, Signer};
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! # let signer = Signer::new(
//! #     Context::new(),
//! #     StaticCredentialProvider::new("app_key", "app_secret"),
//! #     RequestSigner::new(),
//! # );
//! let body = bytes::Bytes::from_static(b"{\"page\":1}");
//! let (mut parts, _) = http::Request::post("https://abcdef.gateway.example.com/v1/search")
//!     .body(())
//!     .unwrap()
//!     .into_parts();
//!
//! signer.sign(&mut parts, Some(&body)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Examples
//!
//! Check out the examples directory:
//! - [Basic gateway operations](examples/gateway_operations.rs)
//! - [Custom credential chains](examples/custom_chain.rs)

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{string_to_sign, RequestSigner, StringToSign};

mod provide_credential;
pub use provide_credential::*;
