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

//! Shopify webhook verification.

pub use opsign_shopify_webhook::*;

use opsign_core::{Context, OsEnv, Result};

/// Create a verifier from `SHOPIFY_WEBHOOK_SECRET` in the OS environment.
///
/// Fails with `ConfigInvalid` when the secret is not set.
pub fn default_verifier() -> Result<WebhookVerifier> {
    WebhookVerifier::from_env(&Context::new().with_env(OsEnv))
}
