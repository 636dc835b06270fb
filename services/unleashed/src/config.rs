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

/// Config carries all the configuration for Unleashed.
#[derive(Clone, Default)]
pub struct Config {
    /// `api_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `UNLEASHED_<STORE>_API_ID` or `<STORE>_UNLEASHED_API_ID` if a store is set
    /// - env value: [`UNLEASHED_API_ID`]
    pub api_id: Option<String>,
    /// `api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `UNLEASHED_<STORE>_API_KEY` or `<STORE>_UNLEASHED_API_KEY` if a store is set
    /// - env value: [`UNLEASHED_API_KEY`]
    pub api_key: Option<String>,
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`UNLEASHED_API_URL`], then [`UNLEASHED_BASE_URL`]
    /// - [`DEFAULT_BASE_URL`] when none of the above is set
    pub base_url: Option<String>,
    /// `store` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`UNLEASHED_STORE`]
    pub store: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set api_id
    pub fn with_api_id(mut self, api_id: impl Into<String>) -> Self {
        self.api_id = Some(api_id.into());
        self
    }

    /// Set api_key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set base_url
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set store
    pub fn with_store(mut self, store: impl Into<String>) -> Self {
        self.store = Some(store.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var_any(&[UNLEASHED_STORE]) {
            self.store.get_or_insert(v);
        }

        let store = self.store.clone().filter(|s| !s.trim().is_empty());
        if let Some(v) = lookup(ctx, store.as_deref(), "API_ID", UNLEASHED_API_ID) {
            self.api_id.get_or_insert(v);
        }
        if let Some(v) = lookup(ctx, store.as_deref(), "API_KEY", UNLEASHED_API_KEY) {
            self.api_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var_any(&[UNLEASHED_API_URL, UNLEASHED_BASE_URL]) {
            self.base_url.get_or_insert(v);
        }

        self
    }

    /// Base url without trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// Full url for an API resource, e.g. `endpoint("Products", "pageSize=200")`.
    ///
    /// An empty `query` adds no `?`.
    pub fn endpoint(&self, resource: &str, query: &str) -> String {
        let mut url = format!("{}/{}", self.base_url(), resource.trim_start_matches('/'));
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        url
    }
}

fn lookup(ctx: &Context, store: Option<&str>, suffix: &str, global: &str) -> Option<String> {
    if let Some(store) = store {
        let [a, b] = store_env_keys(store, suffix);
        if let Some(v) = ctx.env_var_any(&[a.as_str(), b.as_str()]) {
            return Some(v);
        }
    }

    ctx.env_var_any(&[global])
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_id", &self.api_id)
            .field("api_key", &self.api_key.as_ref().map(Redact::from))
            .field("base_url", &self.base_url)
            .field("store", &self.store)
            .finish()
    }
}
