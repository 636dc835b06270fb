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

//! Signing requests for the [Unleashed](https://apidocs.unleashedsoftware.com/) inventory API.
//!
//! ```no_run
//! use opsign_core::{Context, OsEnv, Signer};
//! use opsign_unleashed::{DefaultCredentialProvider, RequestSigner};
//!
//! # async fn example() -> opsign_core::Result<()> {
//! let signer = Signer::new(
//!     Context::new().with_env(OsEnv),
//!     DefaultCredentialProvider::new(),
//!     RequestSigner::new(),
//! );
//!
//! let (mut parts, body) = http::Request::get("https://api.unleashedsoftware.com/Products?pageSize=200")
//!     .body(())?
//!     .into_parts();
//! signer.sign(&mut parts, None).await?;
//! let req = http::Request::from_parts(parts, body);
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{
    store_env_keys, API_AUTH_ID, API_AUTH_SIGNATURE, DEFAULT_BASE_URL, UNLEASHED_API_ID,
    UNLEASHED_API_KEY, UNLEASHED_API_URL, UNLEASHED_BASE_URL, UNLEASHED_STORE,
};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod query;
pub use query::build_query;

mod sign_request;
pub use sign_request::{auth_headers, canonical_string, sign, AuthHeaders, RequestSigner};

mod provide_credential;
pub use provide_credential::*;
