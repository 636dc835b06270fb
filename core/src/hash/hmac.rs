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

//! HMAC-SHA256 (RFC 2104).

use super::sha256::{sha256, Sha256, BLOCK_LEN, DIGEST_LEN};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Bring `key` to exactly one block.
///
/// Keys longer than a block are hashed first. Either way the result is
/// right-padded with zeros to 64 bytes.
pub fn normalize_key(key: &[u8]) -> [u8; BLOCK_LEN] {
    let mut block = [0u8; BLOCK_LEN];
    if key.len() > BLOCK_LEN {
        block[..DIGEST_LEN].copy_from_slice(&sha256(key));
    } else {
        block[..key.len()].copy_from_slice(key);
    }
    block
}

/// HMAC-SHA256 of `message` under `key`.
///
/// `sha256(opad || sha256(ipad || message))`, where each of the two
/// hashes runs on its own [`Sha256`].
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; DIGEST_LEN] {
    let key = normalize_key(key);
    let ipad = key.map(|b| b ^ IPAD);
    let opad = key.map(|b| b ^ OPAD);

    let inner = Sha256::new().chain(&ipad).chain(message).finalize();
    Sha256::new().chain(&opad).chain(&inner).finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::hmac::Mac;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    type Oracle = ::hmac::Hmac<sha2::Sha256>;

    fn oracle(key: &[u8], message: &[u8]) -> Vec<u8> {
        let mut mac = Oracle::new_from_slice(key).unwrap();
        mac.update(message);
        mac.finalize().into_bytes().to_vec()
    }

    // RFC 4231, section 4.
    #[test_case(
        &[0x0b; 20],
        b"Hi There",
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7" ;
        "rfc4231 case 1"
    )]
    #[test_case(
        b"Jefe",
        b"what do ya want for nothing?",
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843" ;
        "rfc4231 case 2"
    )]
    #[test_case(
        &[0xaa; 20],
        &[0xdd; 50],
        "773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe" ;
        "rfc4231 case 3"
    )]
    #[test_case(
        &[
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
            0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19,
        ],
        &[0xcd; 50],
        "82558a389a443c0ea4cc819899f2083a85f0faa3e578f8077a2e3ff46729665b" ;
        "rfc4231 case 4"
    )]
    #[test_case(
        &[0xaa; 131],
        b"Test Using Larger Than Block-Size Key - Hash Key First",
        "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54" ;
        "rfc4231 case 6"
    )]
    #[test_case(
        &[0xaa; 131],
        b"This is a test using a larger than block-size key and a larger than block-size data. The key needs to be hashed before being used by the HMAC algorithm.",
        "9b09ffa71b942fcb27635fbcd5b0e944bfdc63644f0713938a7f51535c3a35e2" ;
        "rfc4231 case 7"
    )]
    #[test_case(
        b"key",
        b"The quick brown fox jumps over the lazy dog",
        "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8" ;
        "quick brown fox"
    )]
    fn test_hmac_sha256_vectors(key: &[u8], message: &[u8], expected: &str) {
        assert_eq!(hex::encode(hmac_sha256(key, message)), expected);
    }

    #[test]
    fn test_hmac_sha256_matches_hmac_crate() {
        let message = b"GEThttps://api.unleashedsoftware.com/ProductspageSize=200";
        for key_len in 0..=200 {
            let key: Vec<u8> = (0..key_len).map(|i| (i * 7 + 3) as u8).collect();
            assert_eq!(
                hmac_sha256(&key, message).to_vec(),
                oracle(&key, message),
                "key length {key_len}"
            );
        }
    }

    #[test]
    fn test_normalize_key() {
        let short = normalize_key(b"Jefe");
        assert_eq!(&short[..4], b"Jefe");
        assert!(short[4..].iter().all(|b| *b == 0));

        let exact = [0x42u8; 64];
        assert_eq!(normalize_key(&exact), exact);

        let long = [0x42u8; 65];
        let normalized = normalize_key(&long);
        assert_eq!(normalized[..32], sha256(&long)[..]);
        assert!(normalized[32..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_long_key_is_stable() {
        let key = [0x5cu8; 100];
        let message = b"POSThttps://api.example.com/Orders";
        assert_eq!(hmac_sha256(&key, message), hmac_sha256(&key, message));
    }

    #[test]
    fn test_long_key_every_byte_matters() {
        let key: Vec<u8> = (0..100u8).collect();
        let message = b"GEThttps://api.example.com/Customers";
        let baseline = hmac_sha256(&key, message);

        for i in 0..key.len() {
            let mut changed = key.clone();
            changed[i] ^= 0x01;
            assert_ne!(hmac_sha256(&changed, message), baseline, "byte {i}");
        }
    }

    #[test]
    fn test_trailing_zero_key_bytes_are_equivalent() {
        // A consequence of zero padding, kept as a guard on key handling.
        assert_eq!(hmac_sha256(b"key", b"m"), hmac_sha256(b"key\0\0", b"m"));
    }
}
