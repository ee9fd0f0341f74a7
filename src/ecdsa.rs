//! Deterministic ECDSA over 32-byte digests.
//!
//! Nonces come from the engine's RFC 6979 implementation, so a given
//! (digest, key) pair always yields the same signature, and signatures are
//! low-s normalized per BIP 62.

use std::fmt;

use secp256k1::Message;

use crate::error::{Error, Result};
use crate::keyring::Keyring;
use crate::keys::{PrivateKey, PublicKey};

/// A 64-byte (r, s) ECDSA signature.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EcdsaSignature {
    inner: secp256k1::ecdsa::Signature,
}

impl EcdsaSignature {
    /// Fixed-width r || s encoding, 64 bytes.
    pub fn serialize_compact(&self) -> [u8; 64] {
        self.inner.serialize_compact()
    }

    /// Parse a 64-byte compact encoding.
    pub fn from_compact(bytes: &[u8; 64]) -> Result<Self> {
        let inner = secp256k1::ecdsa::Signature::from_compact(bytes)
            .map_err(|_| Error::MalformedEncoding)?;
        Ok(Self { inner })
    }

    /// Variable-length DER encoding.
    pub fn serialize_der(&self) -> Vec<u8> {
        self.inner.serialize_der().to_vec()
    }

    /// Parse a DER encoding.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let inner =
            secp256k1::ecdsa::Signature::from_der(bytes).map_err(|_| Error::MalformedEncoding)?;
        Ok(Self { inner })
    }
}

impl fmt::Display for EcdsaSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.serialize_compact()))
    }
}

impl Keyring {
    /// Sign a 32-byte digest. Deterministic: identical (digest, key) inputs
    /// produce byte-identical signatures.
    pub fn sign_ecdsa(&self, digest: &[u8; 32], key: &PrivateKey) -> Result<EcdsaSignature> {
        let sk = key.engine_key()?;
        let msg = Message::from_digest(*digest);
        let inner = self.ctx().sign_ecdsa(&msg, &sk);
        Ok(EcdsaSignature { inner })
    }

    /// True iff `sig` proves knowledge of the private scalar behind `key`
    /// over `digest`. Any mismatch is `false`, never an error.
    pub fn verify_ecdsa(&self, sig: &EcdsaSignature, digest: &[u8; 32], key: &PublicKey) -> bool {
        let msg = Message::from_digest(*digest);
        self.ctx().verify_ecdsa(&msg, &sig.inner, key.engine()).is_ok()
    }
}
