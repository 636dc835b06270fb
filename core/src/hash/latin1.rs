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

//! One byte per character.
//!
//! Text is hashed as the sequence of its code points, each of which must
//! fit in a byte (U+0000..=U+00FF). `"é"` becomes the single byte `0xe9`,
//! not its two-byte UTF-8 form, and anything above U+00FF is rejected
//! instead of being truncated or re-encoded.

use std::borrow::Cow;

use crate::{Error, Result};

/// Convert `text` to one byte per character.
///
/// ASCII input is borrowed as-is. The error never includes the offending
/// character, because `text` may be a secret.
pub fn latin1_bytes(text: &str) -> Result<Cow<'_, [u8]>> {
    if text.is_ascii() {
        return Ok(Cow::Borrowed(text.as_bytes()));
    }

    text.chars()
        .enumerate()
        .map(|(idx, c)| {
            u8::try_from(c).map_err(|_| {
                Error::encoding_invalid(format!(
                    "character at index {idx} is outside the single-byte range 0-255"
                ))
            })
        })
        .collect::<Result<Vec<u8>>>()
        .map(Cow::Owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_ascii_is_borrowed() {
        let bytes = latin1_bytes("GEThttps://api.example.com/Orders").unwrap();
        assert!(matches!(bytes, Cow::Borrowed(_)));
        assert_eq!(&*bytes, b"GEThttps://api.example.com/Orders");
    }

    #[test]
    fn test_latin1_is_one_byte_per_char() {
        let bytes = latin1_bytes("café ÿ").unwrap();
        assert_eq!(&*bytes, &[b'c', b'a', b'f', 0xe9, b' ', 0xff]);
    }

    #[test]
    fn test_above_latin1_is_rejected() {
        let err = latin1_bytes("price: 10€").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EncodingInvalid);
        assert!(err.to_string().contains("index 9"), "{err}");
        assert!(!err.to_string().contains('€'));
    }

    #[test]
    fn test_empty() {
        assert!(latin1_bytes("").unwrap().is_empty());
    }
}
