//! Token digesting and comparison.
//!
//! Raw refresh and invite tokens are never persisted; only their SHA-256
//! digests are. Stored digests are compared with a non-short-circuiting
//! byte comparison so the match reveals nothing through timing.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of a token, hex-encoded.
pub fn sha256_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    hex_encode(&digest)
}

/// Compare two digest strings without short-circuiting on the first
/// differing byte. Lengths are public (both sides are fixed-width hex),
/// so a length mismatch may return early.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Encode bytes to a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_is_stable_and_hex() {
        let d = sha256_hex("abc");
        assert_eq!(
            d,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(d.len(), 64);
    }

    #[test]
    fn equal_inputs_compare_equal() {
        let a = sha256_hex("token");
        let b = sha256_hex("token");
        assert!(constant_time_eq(&a, &b));
    }

    #[test]
    fn different_inputs_compare_unequal() {
        assert!(!constant_time_eq(&sha256_hex("token"), &sha256_hex("token2")));
        assert!(!constant_time_eq("short", "longer-string"));
    }
}
