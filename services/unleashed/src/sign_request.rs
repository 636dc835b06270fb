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

use std::time::Duration;

use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderName, HeaderValue, Method};
use log::debug;
use opsign_core::hash::base64_hmac_sha256_latin1;
use opsign_core::{Context, Error, Result, SignRequest, SigningCredential, SigningRequest};

use crate::constants::*;
use crate::Credential;

/// RequestSigner that implements Unleashed API authentication.
///
/// Every request carries `api-auth-id` with the public id and
/// `api-auth-signature` with `base64(hmac_sha256(api_key, canonical))`,
/// where the canonical string is built by [`canonical_string`].
#[derive(Debug, Default)]
pub struct RequestSigner {}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        let k = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        if !k.is_valid() {
            return Err(Error::credential_invalid(
                "unleashed credential has an empty api id or api key",
            ));
        }
        if expires_in.is_some() {
            return Err(Error::request_invalid(
                "unleashed doesn't support presigned requests",
            ));
        }

        let mut req = SigningRequest::build(parts)?;

        let headers = match auth_headers(k, req.method.as_str(), &req.url(), req.query_str()) {
            Ok(v) => v,
            Err(err) => {
                // Put the request back untouched before bailing out.
                req.apply(parts)?;
                return Err(err);
            }
        };

        req.headers
            .insert(HeaderName::from_static(API_AUTH_ID), headers.api_auth_id);
        req.headers.insert(
            HeaderName::from_static(API_AUTH_SIGNATURE),
            headers.api_auth_signature,
        );
        req.headers
            .entry(ACCEPT)
            .or_insert(HeaderValue::from_static(APPLICATION_JSON));
        req.headers
            .entry(CONTENT_TYPE)
            .or_insert(HeaderValue::from_static(APPLICATION_JSON));

        req.apply(parts)
    }
}

/// Header values produced for one request.
#[derive(Debug, Clone)]
pub struct AuthHeaders {
    /// Value of `api-auth-id`.
    pub api_auth_id: HeaderValue,
    /// Value of `api-auth-signature`, marked sensitive.
    pub api_auth_signature: HeaderValue,
}

/// Compute the auth header values for a request without touching it.
///
/// `url` must not contain the query, which is passed on its own.
pub fn auth_headers(cred: &Credential, method: &str, url: &str, query: &str) -> Result<AuthHeaders> {
    let signature = sign(&cred.api_key, method, url, query)?;

    let api_auth_id = HeaderValue::from_str(&cred.api_id)?;
    let mut api_auth_signature = HeaderValue::from_str(&signature)?;
    api_auth_signature.set_sensitive(true);

    Ok(AuthHeaders {
        api_auth_id,
        api_auth_signature,
    })
}

/// Construct the string to sign.
///
/// ## Format
///
/// ```text
/// METHOD + URL + QUERY
/// ```
///
/// No separator goes between the parts and `QUERY` has no leading `?`.
/// `QUERY` is always empty for `POST`.
///
/// ```
/// use opsign_unleashed::canonical_string;
///
/// assert_eq!(
///     canonical_string("POST", "https://api.example.com/Orders", "ignored=1"),
///     "POSThttps://api.example.com/Orders"
/// );
/// ```
pub fn canonical_string(method: &str, url: &str, query: &str) -> String {
    let query = if method.eq_ignore_ascii_case(Method::POST.as_str()) {
        ""
    } else {
        query
    };

    let mut s = String::with_capacity(method.len() + url.len() + query.len());
    s.push_str(method);
    s.push_str(url);
    s.push_str(query);
    s
}

/// Base64 encoded signature of a request, the `api-auth-signature` value.
///
/// Fails with `EncodingInvalid` if the key or the canonical string holds
/// a character above U+00FF.
pub fn sign(api_key: &str, method: &str, url: &str, query: &str) -> Result<String> {
    let string_to_sign = canonical_string(method, url, query);
    debug!("calculated string to sign: {string_to_sign}");

    base64_hmac_sha256_latin1(api_key, &string_to_sign)
}
