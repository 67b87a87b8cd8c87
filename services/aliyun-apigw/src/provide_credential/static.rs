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

use crate::Credential;
use async_trait::async_trait;
use gwsign_core::{Context, ProvideCredential, Result};

/// Hands out one fixed app key pair.
///
/// Useful when the pair arrives through a channel of your own and nothing
/// should be looked up at signing time.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Wrap an app key pair given directly.
    pub fn new(app_key: &str, app_secret: &str) -> Self {
        Self {
            credential: Credential::new(app_key.to_string(), app_secret.to_string()),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hands_out_fixed_pair() -> anyhow::Result<()> {
        let ctx = Context::new();

        let provider = StaticCredentialProvider::new("test_app_key", "test_app_secret");
        let cred = provider.provide_credential(&ctx).await?.unwrap();
        assert_eq!(cred.app_key, "test_app_key");
        assert_eq!(cred.app_secret, "test_app_secret");

        Ok(())
    }
}
