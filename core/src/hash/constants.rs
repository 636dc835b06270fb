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

//! SHA-256 constant tables.
//!
//! Instead of carrying 72 magic numbers, both tables are derived from the
//! first 64 primes:
//!
//! - initial hash word `i` is the first 32 fractional bits of `sqrt(p_i)`
//!   for the first 8 primes;
//! - round constant `i` is the first 32 fractional bits of `cbrt(p_i)`
//!   for all 64 primes.
//!
//! Roots are taken on scaled integers, `floor(root(p * 2^(32 * d)))`, so
//! the result is exact and never depends on floating point rounding.
//! The tables are built once per process and are read-only afterwards.

use once_cell::sync::Lazy;

/// Number of round constants, one per compression round.
pub const ROUNDS: usize = 64;

/// Number of 32-bit words in the hash state.
pub const STATE_WORDS: usize = 8;

struct Tables {
    k: [u32; ROUNDS],
    h: [u32; STATE_WORDS],
}

static TABLES: Lazy<Tables> = Lazy::new(|| {
    let primes = first_primes::<ROUNDS>();

    let mut k = [0u32; ROUNDS];
    for (slot, p) in k.iter_mut().zip(primes) {
        *slot = fractional_bits(p, 3);
    }

    let mut h = [0u32; STATE_WORDS];
    for (slot, p) in h.iter_mut().zip(primes) {
        *slot = fractional_bits(p, 2);
    }

    Tables { k, h }
});

/// The 64 round constants `K`.
#[inline]
pub fn round_constants() -> &'static [u32; ROUNDS] {
    &TABLES.k
}

/// The 8 initial hash words `H0..H7`.
#[inline]
pub fn initial_state() -> &'static [u32; STATE_WORDS] {
    &TABLES.h
}

/// The first `N` primes, found by trial division against the primes
/// collected so far.
pub fn first_primes<const N: usize>() -> [u64; N] {
    let mut primes = [0u64; N];
    let mut found = 0;
    let mut candidate = 2u64;

    while found < N {
        let is_prime = primes[..found]
            .iter()
            .take_while(|&&p| p * p <= candidate)
            .all(|&p| candidate % p != 0);
        if is_prime {
            primes[found] = candidate;
            found += 1;
        }
        candidate += 1;
    }

    primes
}

/// First 32 fractional bits of the `degree`-th root of `p`.
///
/// `floor(root(p) * 2^32)` equals `floor(root(p * 2^(32 * degree)))`, and
/// truncating that to `u32` drops the integer part.
fn fractional_bits(p: u64, degree: u32) -> u32 {
    integer_root(u128::from(p) << (32 * degree), degree) as u32
}

/// Largest `r` with `r^degree <= n`.
fn integer_root(n: u128, degree: u32) -> u128 {
    let bits = 128 - n.leading_zeros();

    // lo^degree <= n < hi^degree holds throughout.
    let mut lo = 0u128;
    let mut hi = 1u128 << bits.div_ceil(degree);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if mid.pow(degree) <= n {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}
