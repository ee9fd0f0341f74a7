//! Domain-separated, tagged hashing utilities for Schnorr (BIP-340).
//! Implements the IETF "tagged hash" construction:
//! Hash(tag||tag||msg) with a SHA-256-based domain separator.

use sha2::{Digest, Sha256};

/// Compute a plain SHA-256 digest of `msg`.
pub fn sha256(msg: &[u8]) -> [u8; 32] {
    Sha256::digest(msg).into()
}

/// Compute a 32-byte tagged hash: H = SHA256(SHA256(tag)||SHA256(tag)||msg).
/// This provides domain separation per BIP-340 and RFC 9380 style.
pub fn tagged_hash(tag: &str, msg: &[u8]) -> [u8; 32] {
    // 1. Hash the tag itself
    let tag_hash = Sha256::digest(tag.as_bytes());
    // 2. Initialize and feed tag_hash twice, then the message
    let mut hasher = Sha256::new();
    hasher.update(tag_hash);
    hasher.update(tag_hash);
    hasher.update(msg);
    // 3. Finalize
    hasher.finalize().into()
}
