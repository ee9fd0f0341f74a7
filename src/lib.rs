//! A key-and-signature facade over the secp256k1 engine.
//!
//! Generates private keys, derives and serializes public keys, signs and
//! verifies with deterministic ECDSA (RFC 6979) and Schnorr (BIP-340), and
//! enforces secret zeroization on destroy. Curve arithmetic, nonce
//! derivation, and constant-time scalar handling all live in the engine;
//! this crate owns the call contract and the secret lifecycle.
//!
//! ```no_run
//! use secp_keys::{sha256, Keyring};
//!
//! # fn main() -> secp_keys::Result<()> {
//! let keyring = Keyring::new();
//! let mut key = keyring.generate_private_key()?;
//! let pubkey = keyring.derive_public_key(&key)?;
//!
//! let digest = sha256(b"Hello, world!");
//! let sig = keyring.sign_ecdsa(&digest, &key)?;
//! assert!(keyring.verify_ecdsa(&sig, &digest, &pubkey));
//!
//! // Wipe the secret once it is no longer needed.
//! key.destroy();
//! # Ok(())
//! # }
//! ```

pub mod ecdsa;
pub mod error;
pub mod keyring;
pub mod keys;
pub mod schnorr;
pub mod tagged_hash;

pub use ecdsa::EcdsaSignature;
pub use error::{Error, Result};
pub use keyring::Keyring;
pub use keys::{KeyPair, PrivateKey, PublicKey, PublicKeyForm, XOnlyPublicKey};
pub use schnorr::SchnorrSignature;
pub use tagged_hash::{sha256, tagged_hash};
