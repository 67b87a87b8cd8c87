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

use std::fmt::{Debug, Formatter};

use gwsign_core::{utils::Redact, SigningCredential};

/// Credential for the api gateway.
///
/// The gateway identifies a client application by its app key and verifies
/// signatures with the matching app secret.
#[derive(Clone)]
pub struct Credential {
    /// App key issued by the gateway console.
    pub app_key: String,
    /// App secret paired with the app key, used as the HMAC key.
    pub app_secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(app_key: String, app_secret: String) -> Self {
        Self {
            app_key,
            app_secret,
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("app_key", &Redact::from(&self.app_key))
            .field("app_secret", &Redact::from(&self.app_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.app_key.is_empty() && !self.app_secret.is_empty()
    }
}
