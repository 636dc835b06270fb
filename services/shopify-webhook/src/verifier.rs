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

use http::HeaderName;
use log::{debug, warn};
use opsign_core::hash::base64_hmac_sha256;
use opsign_core::utils::{constant_time_eq, Redact};
use opsign_core::{Context, Error, Result};

use crate::constants::*;
use crate::Config;

/// WebhookVerifier checks the `X-Shopify-Hmac-Sha256` header of incoming
/// webhooks against `base64(hmac_sha256(secret, body))`.
///
/// The body must be the raw bytes as received, before any JSON parsing.
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: String,
}

impl Debug for WebhookVerifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}

impl WebhookVerifier {
    /// Create a verifier from a shared secret.
    ///
    /// Returns `ConfigInvalid` if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(Error::config_invalid("shopify webhook secret is empty"));
        }

        Ok(Self { secret })
    }

    /// Create a verifier from config, filling unset fields from env.
    ///
    /// A missing secret is an error: webhooks are never accepted unverified.
    pub fn from_config(config: Config, ctx: &Context) -> Result<Self> {
        let config = config.from_env(ctx);
        let secret = config.secret.ok_or_else(|| {
            Error::config_invalid(format!(
                "shopify webhook secret is not configured, set {SHOPIFY_WEBHOOK_SECRET}"
            ))
        })?;

        Self::new(secret)
    }

    /// Create a verifier from env.
    pub fn from_env(ctx: &Context) -> Result<Self> {
        Self::from_config(Config::new(), ctx)
    }

    /// Base64 HMAC of `body`, the value Shopify sends in the header.
    pub fn sign(&self, body: &[u8]) -> String {
        base64_hmac_sha256(self.secret.as_bytes(), body)
    }

    /// Verify `body` against the received header value.
    ///
    /// - `Ok(true)` if the signature matches
    /// - `Ok(false)` if it doesn't
    /// - `Err` with `RequestInvalid` if the header is missing
    pub fn verify(&self, body: &[u8], header: Option<&str>) -> Result<bool> {
        let header = header.ok_or_else(|| {
            Error::request_invalid(format!("webhook without {X_SHOPIFY_HMAC_SHA256} header"))
        })?;

        let expected = self.sign(body);
        let matched = constant_time_eq(expected.as_bytes(), header.trim().as_bytes());
        if matched {
            debug!("shopify webhook signature verified");
        } else {
            warn!("shopify webhook signature mismatch");
        }

        Ok(matched)
    }

    /// Verify a request whose body has already been read.
    pub fn verify_request(&self, parts: &http::request::Parts, body: &[u8]) -> Result<bool> {
        let header = parts
            .headers
            .get(HeaderName::from_static(X_SHOPIFY_HMAC_SHA256))
            .map(|v| v.to_str())
            .transpose()?;

        self.verify(body, header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsign_core::{ErrorKind, StaticEnv};
    use pretty_assertions::assert_eq;

    const SECRET: &str = "shpss_not_a_real_webhook_secret";
    const BODY: &[u8] = br#"{"id":820982911946154508,"email":"jon@example.com"}"#;
    const SIGNATURE: &str = "nsFtodXae2u2aCdda3z8avjpIKUtd8xv3BfGrz/xf5s=";

    fn verifier() -> WebhookVerifier {
        WebhookVerifier::new(SECRET).unwrap()
    }

    #[test]
    fn test_sign() {
        assert_eq!(verifier().sign(BODY), SIGNATURE);
        assert_eq!(
            verifier().sign(b""),
            "0yPeweu1BkV4KkYENj3nbOQv52seKPPZ8iaiWCNMXII="
        );
    }

    #[test]
    fn test_verify() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        assert!(verifier().verify(BODY, Some(SIGNATURE))?);
        assert!(verifier().verify(BODY, Some(format!(" {SIGNATURE}\n").as_str()))?);
        Ok(())
    }

    #[test]
    fn test_verify_mismatch() -> Result<()> {
        let mut tampered = BODY.to_vec();
        tampered[7] ^= 1;

        assert!(!verifier().verify(&tampered, Some(SIGNATURE))?);
        assert!(!verifier().verify(BODY, Some(""))?);
        assert!(!WebhookVerifier::new("other-secret")?.verify(BODY, Some(SIGNATURE))?);
        Ok(())
    }

    #[test]
    fn test_verify_missing_header() {
        let err = verifier().verify(BODY, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let err = WebhookVerifier::from_env(&Context::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

        let err = WebhookVerifier::new("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_from_env() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv::from_pairs([(SHOPIFY_WEBHOOK_SECRET, SECRET)]));

        assert!(WebhookVerifier::from_env(&ctx)?.verify(BODY, Some(SIGNATURE))?);
        Ok(())
    }

    #[test]
    fn test_verify_request() -> Result<()> {
        let (parts, _) = http::Request::post("https://hooks.example.com/orders/create")
            .header("X-Shopify-Hmac-Sha256", SIGNATURE)
            .header("X-Shopify-Topic", "orders/create")
            .body(())?
            .into_parts();

        assert!(verifier().verify_request(&parts, BODY)?);
        Ok(())
    }

    #[test]
    fn test_verify_request_without_header() -> Result<()> {
        let (parts, _) = http::Request::post("https://hooks.example.com/orders/create")
            .body(())?
            .into_parts();

        let err = verifier().verify_request(&parts, BODY).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        Ok(())
    }

    #[test]
    fn test_debug_redacts_secret() {
        assert_eq!(
            format!("{:?}", verifier()),
            "WebhookVerifier { secret: shp***ret }"
        );
    }
}
