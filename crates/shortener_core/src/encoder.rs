//! Short-code generation.
//!
//! A code is six symbols from [`ALPHABET`], derived from a 32-bit rolling hash
//! of the input mixed with a millisecond timestamp. The timestamp makes codes
//! differ between calls on the same input; nothing prevents two inputs from
//! producing the same code.

use std::fmt;

/// Symbols used for code digits, indexed by digit value.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Number of digits in every generated code.
pub const CODE_LEN: usize = 6;

const BASE: u64 = ALPHABET.len() as u64;

/// Source of the millisecond timestamp mixed into each code.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rolling `acc * 31 + unit` hash over UTF-16 code units, wrapping at 32 bits.
pub fn hash_url(url: &str) -> i32 {
    url.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Encodes the magnitude of `seed` as exactly [`CODE_LEN`] base-62 digits.
///
/// Digits above the sixth are dropped; small seeds are padded with `A` (zero).
pub fn encode_seed(seed: i64) -> ShortCode {
    let mut num = seed.unsigned_abs();
    let mut digits = [0u8; CODE_LEN];
    for slot in digits.iter_mut().rev() {
        *slot = ALPHABET[(num % BASE) as usize];
        num /= BASE;
    }
    // Every byte comes from the ASCII alphabet.
    ShortCode(digits.iter().map(|&b| char::from(b)).collect())
}

/// Deterministic code for `url` at the given instant.
pub fn generate_at(url: &str, now_millis: i64) -> ShortCode {
    encode_seed(i64::from(hash_url(url)).wrapping_add(now_millis))
}

pub fn generate(url: &str, clock: &dyn Clock) -> ShortCode {
    generate_at(url, clock.now_millis())
}
