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

// Env values used in aliyun api gateway services.
pub const ALIBABA_CLOUD_GATEWAY_APP_KEY: &str = "ALIBABA_CLOUD_GATEWAY_APP_KEY";
pub const ALIBABA_CLOUD_GATEWAY_APP_SECRET: &str = "ALIBABA_CLOUD_GATEWAY_APP_SECRET";

// Every header stored with this prefix participates in the signature.
pub const GATEWAY_HEADER_PREFIX: &str = "X-Ca-";

// Gateway headers, in the casing the gateway canonicalizes with.
pub const X_CA_KEY: &str = "X-Ca-Key";
pub const X_CA_NONCE: &str = "X-Ca-Nonce";
pub const X_CA_REQUEST_MODE: &str = "X-Ca-Request-Mode";
pub const X_CA_SIGNATURE: &str = "X-Ca-Signature";
pub const X_CA_SIGNATURE_HEADERS: &str = "X-Ca-Signature-Headers";
pub const X_CA_STAGE: &str = "X-Ca-Stage";
pub const X_CA_TIMESTAMP: &str = "X-Ca-Timestamp";

// Fixed header names the string to sign always carries a line for.
pub const ACCEPT: &str = "Accept";
pub const CONTENT_MD5: &str = "Content-MD5";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const DATE: &str = "Date";

// Content types the gateway recognizes.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded; charset=utf-8";

pub const REQUEST_MODE_DEBUG: &str = "debug";
