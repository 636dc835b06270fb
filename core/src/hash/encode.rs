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

use base64::prelude::BASE64_STANDARD;
use base64::Engine;

use crate::Result;

/// Base64 encode with the standard alphabet and `=` padding.
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

/// Base64 decode with the standard alphabet and `=` padding.
pub fn base64_decode(content: &str) -> Result<Vec<u8>> {
    Ok(BASE64_STANDARD.decode(content)?)
}

/// Parse a hex string, two characters per byte.
pub fn hex_to_bytes(hex_digest: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(hex_digest)?)
}

/// Re-encode a hex digest as base64, the form signature headers carry.
///
/// Odd lengths and non-hex characters are errors.
pub fn hex_to_base64(hex_digest: &str) -> Result<String> {
    let bytes = hex_to_bytes(hex_digest)?;
    Ok(base64_encode(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{hmac_sha256, sha256};
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hex_to_base64() -> Result<()> {
        // sha256("")
        assert_eq!(
            hex_to_base64("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")?,
            "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
        // Standard alphabet uses '+' and '/', never '-' or '_'.
        assert_eq!(hex_to_base64("fbff")?, "+/8=");
        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<()> {
        let messages: [&[u8]; 3] = [b"", b"abc", b"what do ya want for nothing?"];
        for message in messages {
            for digest in [sha256(message), hmac_sha256(b"Jefe", message)] {
                let hex_digest = hex::encode(digest);
                let encoded = hex_to_base64(&hex_digest)?;

                assert_eq!(encoded.len(), 44);
                assert!(encoded.ends_with('='));
                assert_eq!(base64_decode(&encoded)?, hex_to_bytes(&hex_digest)?);
            }
        }
        Ok(())
    }

    #[test]
    fn test_uppercase_hex() -> Result<()> {
        assert_eq!(hex_to_base64("FBFF")?, hex_to_base64("fbff")?);
        Ok(())
    }

    #[test]
    fn test_malformed_hex() {
        for input in ["abc", "zz", "e3b0 c4"] {
            let err = hex_to_base64(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::EncodingInvalid, "{input}");
        }
    }

    #[test]
    fn test_base64_decode_rejects_url_safe() {
        assert!(base64_decode("-_8=").is_err());
    }
}
