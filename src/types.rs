/// AES-256 key length in bytes (256 bits).
pub const KEY_LENGTH: usize = 32;

/// AES-GCM nonce length in bytes (96 bits per NIST recommendation).
pub const NONCE_LENGTH: usize = 12;

/// AES-GCM authentication tag length in bytes (128 bits).
pub const TAG_LENGTH: usize = 16;

/// Output of [`seal`](crate::seal): ciphertext plus its detached
/// authentication tag.
///
/// The nonce is not carried here. The caller chose it and must present the
/// same nonce (and the same AAD) to [`open`](crate::open).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    /// Encrypted bytes, same length as the plaintext.
    pub ciphertext: Vec<u8>,
    /// GCM tag over the ciphertext and the AAD.
    pub tag: [u8; TAG_LENGTH],
}
