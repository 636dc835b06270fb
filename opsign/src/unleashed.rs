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

//! Unleashed inventory API signing.

pub use opsign_unleashed::*;

use opsign_core::{Context, OsEnv, Signer};
use std::sync::Arc;

/// Default Unleashed Signer type.
pub type DefaultSigner = Signer<Credential>;

/// Create a default Unleashed signer.
///
/// This function creates a signer with:
/// - A context reading the OS environment
/// - Default credential provider (reads from env vars)
/// - Request signer setting `api-auth-id` and `api-auth-signature`
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> opsign_core::Result<()> {
/// let signer = opsign::unleashed::default_signer();
///
/// let mut req = http::Request::builder()
///     .method("POST")
///     .uri("https://api.unleashedsoftware.com/SalesOrders")
///     .body(())?
///     .into_parts()
///     .0;
///
/// signer.sign(&mut req, None).await?;
/// # Ok(())
/// # }
/// ```
pub fn default_signer() -> DefaultSigner {
    let ctx = Context::new().with_env(OsEnv);
    let provider = DefaultCredentialProvider::new();
    let signer = RequestSigner::new();
    Signer::new(ctx, provider, signer)
}

/// Create a signer for one store.
///
/// Credentials come from `config` first, then from the store's env
/// variables, then from `UNLEASHED_API_ID` / `UNLEASHED_API_KEY`.
///
/// ```no_run
/// use opsign::unleashed::{signer_with_config, Config};
///
/// let signer = signer_with_config(Config::new().with_store("teelixir"));
/// ```
pub fn signer_with_config(config: Config) -> DefaultSigner {
    let ctx = Context::new().with_env(OsEnv);
    let provider = DefaultCredentialProvider::with_config(Arc::new(config));
    Signer::new(ctx, provider, RequestSigner::new())
}
