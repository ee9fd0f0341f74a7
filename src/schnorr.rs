//! Schnorr signatures per BIP-340: x-only public keys with an even-y
//! convention, 64-byte signatures, and fresh auxiliary randomness per call.

use std::fmt;

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::{Error, Result};
use crate::keyring::Keyring;
use crate::keys::{KeyPair, XOnlyPublicKey};

/// A 64-byte BIP-340 signature: x(R) || s.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SchnorrSignature {
    inner: secp256k1::schnorr::Signature,
}

impl SchnorrSignature {
    /// Fixed-width x(R) || s encoding, 64 bytes.
    pub fn serialize(&self) -> [u8; 64] {
        self.inner.serialize()
    }

    /// Parse a 64-byte encoding. Out-of-range scalars are caught at
    /// verification time, not here, per BIP-340.
    pub fn from_bytes(bytes: &[u8; 64]) -> Result<Self> {
        let inner = secp256k1::schnorr::Signature::from_slice(bytes)
            .map_err(|_| Error::MalformedEncoding)?;
        Ok(Self { inner })
    }
}

impl fmt::Display for SchnorrSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.serialize()))
    }
}

impl Keyring {
    /// Sign a 32-byte digest, masking the nonce with fresh auxiliary
    /// randomness drawn per call.
    pub fn sign_schnorr(&self, digest: &[u8; 32], pair: &KeyPair) -> Result<SchnorrSignature> {
        // Resolve the key first: a destroyed pair must fail before any
        // randomness is drawn.
        let sk = pair.private_key().engine_key()?;
        let mut aux = [0u8; 32];
        OsRng.try_fill_bytes(&mut aux).map_err(|_| Error::Entropy)?;
        Ok(self.schnorr_sign_with(digest, &sk, &aux))
    }

    /// Sign with caller-supplied auxiliary randomness. Deterministic for
    /// fixed (digest, key, aux); used for test vectors.
    pub fn sign_schnorr_with_aux_rand(
        &self,
        digest: &[u8; 32],
        pair: &KeyPair,
        aux_rand: &[u8; 32],
    ) -> Result<SchnorrSignature> {
        let sk = pair.private_key().engine_key()?;
        Ok(self.schnorr_sign_with(digest, &sk, aux_rand))
    }

    fn schnorr_sign_with(
        &self,
        digest: &[u8; 32],
        sk: &secp256k1::SecretKey,
        aux_rand: &[u8; 32],
    ) -> SchnorrSignature {
        let keypair = secp256k1::Keypair::from_secret_key(self.ctx(), sk);
        let inner = self
            .ctx()
            .sign_schnorr_with_aux_rand(digest, &keypair, aux_rand);
        SchnorrSignature { inner }
    }

    /// True iff `sig` is valid over `digest` for the even-y point behind
    /// `key`. Any mismatch is `false`, never an error.
    pub fn verify_schnorr(
        &self,
        sig: &SchnorrSignature,
        digest: &[u8; 32],
        key: &XOnlyPublicKey,
    ) -> bool {
        self.ctx()
            .verify_schnorr(&sig.inner, digest, key.engine())
            .is_ok()
    }
}
