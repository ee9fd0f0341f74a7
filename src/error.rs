use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the key facade. An invalid signature is not an error:
/// verification returns `false` for any cryptographic mismatch.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The OS random source could not supply key material.
    #[error("random source unavailable or exhausted")]
    Entropy,

    /// A private scalar was zero or not below the curve order.
    #[error("private key out of range for secp256k1")]
    InvalidKey,

    /// Bytes did not decode to a curve point or signature.
    #[error("malformed encoding")]
    MalformedEncoding,

    /// The engine rejected inputs this crate had already validated.
    #[error("signing failed on inputs that should have been accepted")]
    SigningFailure,

    /// A cryptographic operation touched a zeroized secret.
    #[error("secret key was already destroyed")]
    UseAfterDestroy,
}
