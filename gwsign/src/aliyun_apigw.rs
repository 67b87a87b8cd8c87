// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Aliyun API Gateway signing.
//!
//! Everything from `gwsign_aliyun_apigw` is re-exported here, plus a
//! ready-to-use signer for the common setup.

pub use gwsign_aliyun_apigw::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Signer};

/// Signer for the app-key credential scheme.
#[cfg(feature = "default-context")]
pub type DefaultSigner = Signer<Credential>;

/// Build a signer wired with the stock components: the default context
/// (Tokio files, reqwest HTTP, OS environment), the default credential
/// provider reading `ALIBABA_CLOUD_GATEWAY_APP_KEY` /
/// `ALIBABA_CLOUD_GATEWAY_APP_SECRET`, and a request signer with the
/// standard signed header selection.
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> gwsign_core::Result<()> {
/// let signer = gwsign::aliyun_apigw::default_signer();
///
/// let (mut parts, _) = http::Request::get("https://abcdef.gateway.example.com/v1/echo")
///     .body(())
///     .unwrap()
///     .into_parts();
///
/// signer.sign(&mut parts, None).await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer() -> DefaultSigner {
    let ctx = default_context();
    let provider = DefaultCredentialProvider::new();
    let signer = RequestSigner::new();
    Signer::new(ctx, provider, signer)
}
