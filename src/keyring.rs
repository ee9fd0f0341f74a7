//! The facade over the secp256k1 engine: one [`Keyring`] owns the engine
//! context and exposes every key-management operation through it. Signing
//! lives in the per-scheme modules ([`crate::ecdsa`], [`crate::schnorr`]).

use secp256k1::ecdh::SharedSecret;
use secp256k1::{All, Scalar, Secp256k1};

use crate::error::{Error, Result};
use crate::keys::{KeyPair, PrivateKey, PublicKey};

/// Owns a verified engine context. Every operation is stateless given its
/// inputs; the context is only precomputation tables.
pub struct Keyring {
    ctx: Secp256k1<All>,
}

impl Keyring {
    pub fn new() -> Self {
        Self {
            ctx: Secp256k1::new(),
        }
    }

    /// Produce a fresh in-range, non-zero private key.
    pub fn generate_private_key(&self) -> Result<PrivateKey> {
        PrivateKey::generate()
    }

    /// Multiply the generator by the private scalar. Pure function of a live key.
    pub fn derive_public_key(&self, key: &PrivateKey) -> Result<PublicKey> {
        let sk = key.engine_key()?;
        Ok(PublicKey::from_engine(secp256k1::PublicKey::from_secret_key(&self.ctx, &sk)))
    }

    /// Generate a key pair from fresh randomness.
    pub fn generate_keypair(&self) -> Result<KeyPair> {
        self.keypair_from(PrivateKey::generate()?)
    }

    /// Bind an existing private key to its derived public key.
    pub fn keypair_from(&self, secret: PrivateKey) -> Result<KeyPair> {
        let public = self.derive_public_key(&secret)?;
        Ok(KeyPair::new(secret, public))
    }

    /// Diffie-Hellman over the curve: hash of the point `sk * P`.
    /// Symmetric in the two parties, so `ecdh(pk_b, sk_a) == ecdh(pk_a, sk_b)`.
    pub fn ecdh(&self, key: &PublicKey, secret: &PrivateKey) -> Result<[u8; 32]> {
        let sk = secret.engine_key()?;
        Ok(SharedSecret::new(key.engine(), &sk).secret_bytes())
    }

    /// Multiply a public point by a scalar (`P * t`).
    pub fn tweak_mul(&self, key: &PublicKey, tweak: &[u8; 32]) -> Result<PublicKey> {
        let tweak = Scalar::from_be_bytes(*tweak).map_err(|_| Error::InvalidKey)?;
        let tweaked = key
            .engine()
            .mul_tweak(&self.ctx, &tweak)
            .map_err(|_| Error::InvalidKey)?;
        Ok(PublicKey::from_engine(tweaked))
    }

    /// Add two public points. Fails if the sum is the point at infinity.
    pub fn combine(&self, a: &PublicKey, b: &PublicKey) -> Result<PublicKey> {
        let sum = a.engine().combine(b.engine()).map_err(|_| Error::InvalidKey)?;
        Ok(PublicKey::from_engine(sum))
    }

    pub(crate) fn ctx(&self) -> &Secp256k1<All> {
        &self.ctx
    }
}

impl Default for Keyring {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::PublicKeyForm;

    /// Generator coordinates, for derivation spot-checks.
    const G_X: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const G_Y: &str = "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    fn key_from_hex(h: &str) -> PrivateKey {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(h, &mut bytes).unwrap();
        PrivateKey::from_bytes(bytes).unwrap()
    }

    #[test]
    fn derives_generator_for_scalar_one() {
        let keyring = Keyring::new();
        let one = key_from_hex("0000000000000000000000000000000000000000000000000000000000000001");
        let pk = keyring.derive_public_key(&one).unwrap();
        let encoded = pk.serialize_uncompressed();
        assert_eq!(hex::encode(&encoded[1..33]), G_X);
        assert_eq!(hex::encode(&encoded[33..]), G_Y);
    }

    #[test]
    fn derivation_is_deterministic() {
        let keyring = Keyring::new();
        let key = keyring.generate_private_key().unwrap();
        let a = keyring.derive_public_key(&key).unwrap();
        let b = keyring.derive_public_key(&key).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn derive_after_destroy_fails() {
        let keyring = Keyring::new();
        let mut key = keyring.generate_private_key().unwrap();
        key.destroy();
        assert_eq!(
            keyring.derive_public_key(&key).unwrap_err(),
            Error::UseAfterDestroy
        );
    }

    #[test]
    fn keypair_from_binds_matching_halves() {
        let keyring = Keyring::new();
        let key = keyring.generate_private_key().unwrap();
        let expected = keyring.derive_public_key(&key).unwrap();
        let pair = keyring.keypair_from(key).unwrap();
        assert_eq!(pair.public_key(), expected);
    }

    #[test]
    fn tweak_mul_by_one_is_identity() {
        let keyring = Keyring::new();
        let pair = keyring.generate_keypair().unwrap();
        let mut one = [0u8; 32];
        one[31] = 1;
        let tweaked = keyring.tweak_mul(&pair.public_key(), &one).unwrap();
        assert_eq!(tweaked, pair.public_key());
    }

    #[test]
    fn combine_matches_scalar_addition() {
        let keyring = Keyring::new();
        // (2 + 3) * G == 2*G + 3*G
        let two = key_from_hex("0000000000000000000000000000000000000000000000000000000000000002");
        let three = key_from_hex("0000000000000000000000000000000000000000000000000000000000000003");
        let five = key_from_hex("0000000000000000000000000000000000000000000000000000000000000005");

        let sum = keyring
            .combine(
                &keyring.derive_public_key(&two).unwrap(),
                &keyring.derive_public_key(&three).unwrap(),
            )
            .unwrap();
        assert_eq!(sum, keyring.derive_public_key(&five).unwrap());
    }

    #[test]
    fn ecdh_is_symmetric() {
        let keyring = Keyring::new();
        let a = keyring.generate_private_key().unwrap();
        let b = keyring.generate_private_key().unwrap();
        let pk_a = keyring.derive_public_key(&a).unwrap();
        let pk_b = keyring.derive_public_key(&b).unwrap();

        let shared_a = keyring.ecdh(&pk_b, &a).unwrap();
        let shared_b = keyring.ecdh(&pk_a, &b).unwrap();
        assert_eq!(shared_a, shared_b);
        assert_ne!(shared_a, [0u8; 32]);
    }

    #[test]
    fn ecdh_differs_per_peer() {
        let keyring = Keyring::new();
        let a = keyring.generate_private_key().unwrap();
        let b = keyring.generate_private_key().unwrap();
        let c = keyring.generate_private_key().unwrap();
        let pk_b = keyring.derive_public_key(&b).unwrap();
        let pk_c = keyring.derive_public_key(&c).unwrap();

        assert_ne!(
            keyring.ecdh(&pk_b, &a).unwrap(),
            keyring.ecdh(&pk_c, &a).unwrap()
        );
    }

    #[test]
    fn ecdh_after_destroy_fails() {
        let keyring = Keyring::new();
        let mut a = keyring.generate_private_key().unwrap();
        let pk_b = keyring
            .derive_public_key(&keyring.generate_private_key().unwrap())
            .unwrap();
        a.destroy();
        assert_eq!(keyring.ecdh(&pk_b, &a).unwrap_err(), Error::UseAfterDestroy);
    }

    #[test]
    fn serialized_forms_round_trip() {
        let keyring = Keyring::new();
        let pk = keyring
            .derive_public_key(&keyring.generate_private_key().unwrap())
            .unwrap();

        for form in [PublicKeyForm::Compressed, PublicKeyForm::Uncompressed] {
            let bytes = pk.serialize(form);
            assert_eq!(PublicKey::from_bytes(&bytes).unwrap(), pk);
        }

        let x_only = pk.serialize(PublicKeyForm::XOnly);
        assert_eq!(x_only.len(), 32);
        assert_eq!(x_only, pk.serialize_compressed()[1..]);
    }
}
