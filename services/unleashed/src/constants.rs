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

// Env values used in unleashed services.
pub const UNLEASHED_API_ID: &str = "UNLEASHED_API_ID";
pub const UNLEASHED_API_KEY: &str = "UNLEASHED_API_KEY";
pub const UNLEASHED_API_URL: &str = "UNLEASHED_API_URL";
pub const UNLEASHED_BASE_URL: &str = "UNLEASHED_BASE_URL";
pub const UNLEASHED_STORE: &str = "UNLEASHED_STORE";

/// Base url used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.unleashedsoftware.com";

// Headers used in unleashed services.
pub const API_AUTH_ID: &str = "api-auth-id";
pub const API_AUTH_SIGNATURE: &str = "api-auth-signature";
pub const APPLICATION_JSON: &str = "application/json";

/// Env keys that scope `suffix` (`API_ID` or `API_KEY`) to a store.
///
/// Both `UNLEASHED_<STORE>_<SUFFIX>` and `<STORE>_UNLEASHED_<SUFFIX>` are
/// in use, in that order of precedence.
pub fn store_env_keys(store: &str, suffix: &str) -> [String; 2] {
    let store = store.trim().to_ascii_uppercase().replace(['-', ' '], "_");
    [
        format!("UNLEASHED_{store}_{suffix}"),
        format!("{store}_UNLEASHED_{suffix}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_env_keys() {
        assert_eq!(
            store_env_keys("teelixir", "API_ID"),
            [
                "UNLEASHED_TEELIXIR_API_ID".to_string(),
                "TEELIXIR_UNLEASHED_API_ID".to_string()
            ]
        );
        assert_eq!(
            store_env_keys(" elevate-wholesale ", "API_KEY"),
            [
                "UNLEASHED_ELEVATE_WHOLESALE_API_KEY".to_string(),
                "ELEVATE_WHOLESALE_UNLEASHED_API_KEY".to_string()
            ]
        );
    }
}
