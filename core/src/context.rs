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

use crate::{Error, Result};
use bytes::Bytes;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// FileRead reads a file into a `Vec<u8>`.
///
/// Credential providers use this to load key material from disk, a
/// gateway key file for instance.
#[async_trait::async_trait]
pub trait FileRead: Debug + Send + Sync + 'static {
    /// Read the file at `path` into memory.
    async fn file_read(&self, path: &str) -> Result<Vec<u8>>;
}

/// HttpSend sends an HTTP request during credential loading.
///
/// This seam exists for providers that fetch credentials over the
/// network. It is sized for that job; don't treat it as a general
/// purpose HTTP client.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send the request and collect the full response body.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// Env abstracts environment variable access.
///
/// Going through the context instead of `std::env` keeps credential
/// lookup testable: tests hand in a [`StaticEnv`] and never touch the
/// process environment.
pub trait Env: Debug + Send + Sync + 'static {
    /// Look up a single variable.
    ///
    /// Returns `None` when the variable is unset or not valid utf-8.
    fn var(&self, key: &str) -> Option<String>;
}

/// Context carries the capabilities signing may need.
///
/// A fresh context has no capabilities: every component starts as a
/// no-op that errors (or finds nothing) when used. Configure the ones
/// your credential sources actually exercise.
///
/// ## Example
///
/// ```
/// use gwsign_core::{Context, OsEnv};
///
/// // Credentials from env vars only: no file or network access needed.
/// let ctx = Context::new().with_env(OsEnv);
/// ```
#[derive(Clone)]
pub struct Context {
    file_read: Arc<dyn FileRead>,
    http_send: Arc<dyn HttpSend>,
    env: Arc<dyn Env>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("file_read", &self.file_read)
            .field("http_send", &self.http_send)
            .field("env", &self.env)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a context where every component is a no-op.
    pub fn new() -> Self {
        Self {
            file_read: Arc::new(NoopFileRead),
            http_send: Arc::new(NoopHttpSend),
            env: Arc::new(NoopEnv),
        }
    }

    /// Configure how files are read.
    pub fn with_file_read(mut self, file_read: impl FileRead) -> Self {
        self.file_read = Arc::new(file_read);
        self
    }

    /// Configure how HTTP requests go out.
    pub fn with_http_send(mut self, http_send: impl HttpSend) -> Self {
        self.http_send = Arc::new(http_send);
        self
    }

    /// Configure where environment variables come from.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Read a file through the configured reader.
    #[inline]
    pub async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        self.file_read.file_read(path).await
    }

    /// Send a request through the configured client.
    #[inline]
    pub async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http_send.http_send(req).await
    }

    /// Look up an environment variable.
    ///
    /// Returns `None` when the variable is unset or not valid utf-8.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }
}

/// Env backed by the process environment, Unix and Windows alike.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }
}

/// Env backed by a fixed map, for tests and pinned-down deployments.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// Variables visible to lookups.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct NoopFileRead;

#[async_trait::async_trait]
impl FileRead for NoopFileRead {
    async fn file_read(&self, _path: &str) -> Result<Vec<u8>> {
        Err(Error::unexpected("no file reader configured in this context"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::unexpected("no HTTP client configured in this context"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }
}
