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

//! Hash related utils.
//!
//! SHA-256 and HMAC-SHA256 are implemented here from scratch, including
//! the derivation of their constant tables. Everything is synchronous,
//! allocation-light and reentrant.
//!
//! Data flows one way:
//!
//! ```text
//! key, message -> hmac_sha256 -> hex -> bytes -> base64 -> header value
//! ```

pub mod constants;
pub use constants::{first_primes, initial_state, round_constants};

mod sha256;
pub use sha256::{pad_message, sha256, Sha256, BLOCK_LEN, DIGEST_LEN};

mod hmac;
pub use self::hmac::{hmac_sha256, normalize_key};

mod encode;
pub use encode::{base64_decode, base64_encode, hex_to_base64, hex_to_bytes};

mod latin1;
pub use latin1::latin1_bytes;

use crate::Result;

/// Hex encoded SHA256 hash.
pub fn hex_sha256(content: &[u8]) -> String {
    hex::encode(sha256(content))
}

/// Hex encoded HMAC with SHA256 hash.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    hex::encode(hmac_sha256(key, content))
}

/// Base64 encoded HMAC with SHA256 hash.
///
/// Same bytes as `hex_to_base64(&hex_hmac_sha256(key, content))`
/// without the detour through hex.
pub fn base64_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    base64_encode(&hmac_sha256(key, content))
}

/// SHA-256 over text restricted to one byte per character.
///
/// Fails with [`crate::ErrorKind::EncodingInvalid`] on any character
/// above U+00FF.
pub fn sha256_latin1(text: &str) -> Result<[u8; DIGEST_LEN]> {
    Ok(sha256(&latin1_bytes(text)?))
}

/// HMAC-SHA256 over a text key and message restricted to one byte per
/// character.
pub fn hmac_sha256_latin1(key: &str, message: &str) -> Result<[u8; DIGEST_LEN]> {
    let key = latin1_bytes(key)?;
    let message = latin1_bytes(message)?;
    Ok(hmac_sha256(&key, &message))
}

/// Base64 encoded HMAC-SHA256 over text restricted to one byte per
/// character. This is the value signature headers carry.
pub fn base64_hmac_sha256_latin1(key: &str, message: &str) -> Result<String> {
    Ok(base64_encode(&hmac_sha256_latin1(key, message)?))
}
