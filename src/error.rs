use thiserror::Error;

/// Errors produced by the envelope.
///
/// [`AuthenticationFailed`](EnvelopeError::AuthenticationFailed) is
/// deliberately opaque: distinguishing a wrong key from a tampered
/// ciphertext or a corrupted tag would hand an attacker a decryption
/// oracle, so every verification failure reports identically.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The key or nonce does not match the cipher's fixed length.
    /// Raised before any cryptographic work; always a caller bug.
    #[error("invalid key or nonce length: expected {expected} bytes, got {got}")]
    InvalidKeyOrNonceLength { expected: usize, got: usize },

    /// Tag verification failed: wrong key, tampered ciphertext or AAD,
    /// corrupted nonce or tag, or a malformed tag length.
    #[error("authentication failed")]
    AuthenticationFailed,
}
