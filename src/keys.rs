//! Key material: private scalars with an explicit destroy lifecycle, and the
//! public points derived from them.
//!
//! A [`PrivateKey`] is always non-zero and below the curve order while live.
//! `destroy` overwrites the backing bytes with zeros exactly once; any
//! cryptographic use afterwards fails with [`Error::UseAfterDestroy`].
//! Dropping a live key zeroizes it as a backstop.

use std::fmt;

use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// A 32-byte secp256k1 secret scalar.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    bytes: [u8; 32],
    destroyed: bool,
}

impl PrivateKey {
    /// Generate a uniformly random, in-range, non-zero key from the OS RNG.
    ///
    /// Out-of-range draws are rejected and redrawn; an RNG failure is fatal
    /// and surfaces as [`Error::Entropy`].
    pub fn generate() -> Result<Self> {
        loop {
            let mut bytes = [0u8; 32];
            OsRng
                .try_fill_bytes(&mut bytes)
                .map_err(|_| Error::Entropy)?;

            if secp256k1::SecretKey::from_slice(&bytes).is_ok() {
                return Ok(Self {
                    bytes,
                    destroyed: false,
                });
            }
            bytes.zeroize();
        }
    }

    /// Adopt an existing 32-byte scalar, validating the range invariant.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self> {
        secp256k1::SecretKey::from_slice(&bytes).map_err(|_| Error::InvalidKey)?;
        Ok(Self {
            bytes,
            destroyed: false,
        })
    }

    /// Big-endian scalar bytes, while the key is live.
    pub fn to_bytes(&self) -> Result<[u8; 32]> {
        if self.destroyed {
            return Err(Error::UseAfterDestroy);
        }
        Ok(self.bytes)
    }

    /// Overwrite the backing bytes with zeros. Idempotent; every later
    /// cryptographic use of this key reports `UseAfterDestroy`.
    pub fn destroy(&mut self) {
        self.bytes.zeroize();
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Rebuild the engine-side secret key for a signing operation.
    pub(crate) fn engine_key(&self) -> Result<secp256k1::SecretKey> {
        if self.destroyed {
            return Err(Error::UseAfterDestroy);
        }
        // A live key already passed range validation, so rejection here
        // means the invariant was broken.
        secp256k1::SecretKey::from_slice(&self.bytes).map_err(|_| Error::SigningFailure)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.destroyed {
            "PrivateKey([DESTROYED])"
        } else {
            "PrivateKey([REDACTED])"
        })
    }
}

/// How a public key is rendered to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicKeyForm {
    /// 33 bytes: parity byte plus x-coordinate (SEC1).
    Compressed,
    /// 65 bytes: 0x04 plus both coordinates (SEC1).
    Uncompressed,
    /// 32 bytes: x-coordinate only, even-y convention (BIP-340).
    XOnly,
}

/// A point on secp256k1, derived from some private scalar.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PublicKey {
    inner: secp256k1::PublicKey,
}

impl PublicKey {
    /// Parse a SEC1 encoding, compressed (33 bytes) or uncompressed (65 bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let inner =
            secp256k1::PublicKey::from_slice(bytes).map_err(|_| Error::MalformedEncoding)?;
        Ok(Self { inner })
    }

    /// Serialize in the requested form. Round-trips through [`PublicKey::from_bytes`]
    /// (or [`XOnlyPublicKey::from_bytes`] for the x-only form).
    pub fn serialize(&self, form: PublicKeyForm) -> Vec<u8> {
        match form {
            PublicKeyForm::Compressed => self.serialize_compressed().to_vec(),
            PublicKeyForm::Uncompressed => self.serialize_uncompressed().to_vec(),
            PublicKeyForm::XOnly => self.x_only().serialize().to_vec(),
        }
    }

    /// 33-byte SEC1 compressed encoding: y-parity byte, then x.
    pub fn serialize_compressed(&self) -> [u8; 33] {
        self.inner.serialize()
    }

    /// 65-byte SEC1 uncompressed encoding: 0x04, then x, then y.
    pub fn serialize_uncompressed(&self) -> [u8; 65] {
        self.inner.serialize_uncompressed()
    }

    /// Drop the parity byte for BIP-340 use.
    pub fn x_only(&self) -> XOnlyPublicKey {
        let (inner, _parity) = self.inner.x_only_public_key();
        XOnlyPublicKey { inner }
    }

    pub(crate) fn engine(&self) -> &secp256k1::PublicKey {
        &self.inner
    }

    pub(crate) fn from_engine(inner: secp256k1::PublicKey) -> Self {
        Self { inner }
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.serialize_compressed()))
    }
}

/// A 32-byte x-only public key (BIP-340, implicit even y).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct XOnlyPublicKey {
    inner: secp256k1::XOnlyPublicKey,
}

impl XOnlyPublicKey {
    /// Parse a 32-byte x coordinate; fails if it does not lift to a curve point.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let inner =
            secp256k1::XOnlyPublicKey::from_slice(bytes).map_err(|_| Error::MalformedEncoding)?;
        Ok(Self { inner })
    }

    /// Big-endian x-coordinate, 32 bytes.
    pub fn serialize(&self) -> [u8; 32] {
        self.inner.serialize()
    }

    pub(crate) fn engine(&self) -> &secp256k1::XOnlyPublicKey {
        &self.inner
    }
}

impl fmt::Display for XOnlyPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.serialize()))
    }
}

/// A private key bound to its derived public key.
///
/// Destroying the pair destroys the private half; the public half stays
/// usable for verification.
#[derive(Debug)]
pub struct KeyPair {
    secret: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    pub(crate) fn new(secret: PrivateKey, public: PublicKey) -> Self {
        Self { secret, public }
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.secret
    }

    pub fn public_key(&self) -> PublicKey {
        self.public
    }

    pub fn x_only_public_key(&self) -> XOnlyPublicKey {
        self.public.x_only()
    }

    /// Zeroize the private half. Idempotent, same rule as [`PrivateKey::destroy`].
    pub fn destroy(&mut self) {
        self.secret.destroy();
    }

    pub fn is_destroyed(&self) -> bool {
        self.secret.is_destroyed()
    }
}
