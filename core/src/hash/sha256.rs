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

//! SHA-256 (FIPS 180-4) without any platform cryptography.

use std::fmt::{self, Debug};

use super::constants::{initial_state, round_constants, ROUNDS, STATE_WORDS};

/// Size of one compression block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Size of a digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Offset inside the last block where the 8-byte length field starts.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Incremental SHA-256 hasher.
///
/// Every hasher owns its state, block buffer and length counter, so any
/// number of them can run concurrently. Only the constant tables are
/// shared.
///
/// ```
/// use opsign_core::hash::Sha256;
///
/// let mut h = Sha256::new();
/// h.update(b"a");
/// h.update(b"bc");
/// assert_eq!(h.finalize(), opsign_core::hash::sha256(b"abc"));
/// ```
#[derive(Clone)]
pub struct Sha256 {
    state: [u32; STATE_WORDS],
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    len: u64,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

// The buffer can hold key material when used inside HMAC.
impl Debug for Sha256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha256").field("len", &self.len).finish()
    }
}

impl Sha256 {
    /// Create a hasher seeded with the initial hash words.
    pub fn new() -> Self {
        Self {
            state: *initial_state(),
            buffer: [0; BLOCK_LEN],
            buffered: 0,
            len: 0,
        }
    }

    /// Feed `data` into the hasher.
    pub fn update(&mut self, mut data: &[u8]) {
        self.len = self.len.wrapping_add(data.len() as u64);

        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_LEN {
                return;
            }
            compress(&mut self.state, &self.buffer);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            compress(&mut self.state, block);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Builder style [`Sha256::update`].
    pub fn chain(mut self, data: &[u8]) -> Self {
        self.update(data);
        self
    }

    /// Pad the message, process the last block(s) and return the digest.
    pub fn finalize(mut self) -> [u8; DIGEST_LEN] {
        let (tail, n) = padding(self.len);
        self.update(&tail[..n]);
        debug_assert_eq!(self.buffered, 0, "padding must end on a block boundary");

        let mut out = [0u8; DIGEST_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

/// SHA-256 digest of `message`.
///
/// Total over byte input: every slice, including the empty one, yields
/// exactly 32 bytes.
pub fn sha256(message: &[u8]) -> [u8; DIGEST_LEN] {
    Sha256::new().chain(message).finalize()
}

/// Return `message` followed by its SHA-256 padding.
///
/// The result is always a whole number of 64-byte blocks and ends with
/// the message length in bits as a big-endian `u64`.
pub fn pad_message(message: &[u8]) -> Vec<u8> {
    let (tail, n) = padding(message.len() as u64);

    let mut padded = Vec::with_capacity(message.len() + n);
    padded.extend_from_slice(message);
    padded.extend_from_slice(&tail[..n]);
    padded
}

/// Padding for a message of `len` bytes: `0x80`, zeros until the length
/// is 56 mod 64, then the bit length. Returns the buffer and how many of
/// its bytes are used (between 9 and 72).
fn padding(len: u64) -> ([u8; BLOCK_LEN + 8], usize) {
    let mut tail = [0u8; BLOCK_LEN + 8];
    tail[0] = 0x80;

    let used = (len % BLOCK_LEN as u64) as usize;
    let zeros = (LENGTH_OFFSET + BLOCK_LEN - used - 1) % BLOCK_LEN;
    let n = 1 + zeros + 8;

    tail[n - 8..n].copy_from_slice(&len.wrapping_mul(8).to_be_bytes());
    (tail, n)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Fold one 64-byte block into `state`.
fn compress(state: &mut [u32; STATE_WORDS], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);
    let k = round_constants();

    // Message schedule.
    let mut w = [0u32; ROUNDS];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for i in 16..ROUNDS {
        w[i] = small_sigma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for i in 0..ROUNDS {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k[i])
            .wrapping_add(w[i]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(v);
    }
}
