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

use opsign_core::utils::Redact;
use opsign_core::Context;

use crate::constants::*;

/// Config carries all the configuration for webhook verification.
#[derive(Clone, Default)]
pub struct Config {
    /// `secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SHOPIFY_WEBHOOK_SECRET`]
    pub secret: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set secret
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var_any(&[SHOPIFY_WEBHOOK_SECRET]) {
            self.secret.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("secret", &self.secret.as_ref().map(Redact::from))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsign_core::OsEnv;

    #[test]
    fn test_from_env() {
        temp_env::with_var(SHOPIFY_WEBHOOK_SECRET, Some("from-env"), || {
            let config = Config::new().from_env(&Context::new().with_env(OsEnv));
            assert_eq!(config.secret.as_deref(), Some("from-env"));
        });
    }

    #[test]
    fn test_explicit_secret_wins() {
        temp_env::with_var(SHOPIFY_WEBHOOK_SECRET, Some("from-env"), || {
            let config = Config::new()
                .with_secret("explicit")
                .from_env(&Context::new().with_env(OsEnv));
            assert_eq!(config.secret.as_deref(), Some("explicit"));
        });
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = Config::new().with_secret("shpss_not_a_real_webhook_secret");
        assert_eq!(
            format!("{config:?}"),
            "Config { secret: Some(shp***ret) }"
        );
    }
}
