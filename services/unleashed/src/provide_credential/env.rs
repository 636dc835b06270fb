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

use async_trait::async_trait;
use log::debug;
use opsign_core::{Context, ProvideCredential, Result};

use crate::{Config, Credential};

/// EnvCredentialProvider loads the credential from env.
///
/// When a store is given here or in `UNLEASHED_STORE`, the store scoped
/// variables are read before `UNLEASHED_API_ID` and `UNLEASHED_API_KEY`.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider {
    store: Option<String>,
}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the variables of this store first.
    pub fn with_store(mut self, store: impl Into<String>) -> Self {
        self.store = Some(store.into());
        self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let mut config = Config::new();
        config.store = self.store.clone();
        let config = config.from_env(ctx);

        match (config.api_id, config.api_key) {
            (Some(id), Some(key)) if !id.is_empty() && !key.is_empty() => {
                debug!("loaded unleashed credential from env for store {:?}", config.store);
                Ok(Some(Credential::new(id, key)))
            }
            _ => Ok(None),
        }
    }
}
