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

//! Tokio file reading for gwsign.
//!
//! `TokioFileRead` backs the `FileRead` capability of `gwsign_core` with
//! `tokio::fs`, so credential providers that load key material from disk
//! stay fully async.
//!
//! ## Example
//!
//! ```no_run
//! use gwsign_core::Context;
//! use gwsign_file_read_tokio::TokioFileRead;
//!
//! #[tokio::main]
//! async fn main() -> gwsign_core::Result<()> {
//!     let ctx = Context::new().with_file_read(TokioFileRead);
//!
//!     // Providers reach files through the context rather than std::fs.
//!     let content = ctx.file_read("/etc/gateway/app_key").await?;
//!     println!("loaded {} bytes of key material", content.len());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use gwsign_core::{Error, FileRead, Result};

/// Reads files through `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileRead;

#[async_trait]
impl FileRead for TokioFileRead {
    async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| Error::unexpected("failed to read file").with_source(e))
    }
}
