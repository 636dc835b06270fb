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

use std::sync::Arc;

use async_trait::async_trait;
use opsign_core::{Context, ProvideCredential, Result};

use crate::config::Config;
use crate::credential::Credential;

/// ConfigCredentialProvider loads the credential from a [`Config`],
/// filling unset fields from env.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new loader via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.as_ref().clone().from_env(ctx);

        match (config.api_id, config.api_key) {
            (Some(id), Some(key)) if !id.is_empty() && !key.is_empty() => {
                Ok(Some(Credential::new(id, key)))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use opsign_core::OsEnv;

    #[test]
    fn test_config_credential_provider_with_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        temp_env::with_vars(
            vec![
                (UNLEASHED_API_ID, Some("env-id")),
                (UNLEASHED_API_KEY, Some("env-key")),
            ],
            || {
                tokio::runtime::Runtime::new().unwrap().block_on(async {
                    let ctx = Context::new().with_env(OsEnv);
                    let config = Arc::new(Config::new().with_api_id("config-id"));
                    let loader = ConfigCredentialProvider::new(config);

                    let x = loader
                        .provide_credential(&ctx)
                        .await
                        .expect("load must succeed")
                        .expect("credential must be loaded");
                    assert_eq!("config-id", x.api_id);
                    assert_eq!("env-key", x.api_key);
                })
            },
        );
    }

    #[tokio::test]
    async fn test_config_credential_provider_incomplete() {
        let config = Arc::new(Config::new().with_api_id("config-id"));
        let loader = ConfigCredentialProvider::new(config);

        let x = loader.provide_credential(&Context::new()).await.unwrap();
        assert!(x.is_none());
    }

    #[tokio::test]
    async fn test_config_credential_provider_empty_key() {
        let config = Arc::new(Config::new().with_api_id("config-id").with_api_key(""));
        let loader = ConfigCredentialProvider::new(config);

        let x = loader.provide_credential(&Context::new()).await.unwrap();
        assert!(x.is_none());
    }
}
