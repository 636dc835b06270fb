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

//! Verifying the HMAC signature Shopify attaches to webhooks.
//!
//! ```no_run
//! use opsign_core::{Context, OsEnv};
//! use opsign_shopify_webhook::WebhookVerifier;
//!
//! # fn example(parts: &http::request::Parts, body: &[u8]) -> opsign_core::Result<()> {
//! let verifier = WebhookVerifier::from_env(&Context::new().with_env(OsEnv))?;
//! if !verifier.verify_request(parts, body)? {
//!     // Reply 401 and drop the payload.
//! }
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{SHOPIFY_WEBHOOK_SECRET, X_SHOPIFY_HMAC_SHA256};

mod config;
pub use config::Config;

mod verifier;
pub use verifier::WebhookVerifier;
