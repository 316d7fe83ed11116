//! AES-256-GCM seal and open with a caller-supplied nonce.
//!
//! The nonce MUST be unique per key: reusing a (key, nonce) pair across two
//! `seal` calls breaks both confidentiality and authentication. The envelope
//! keeps no nonce history; generating a fresh nonce per encryption (random
//! via [`generate_nonce`](crate::rand::generate_nonce), or counter-based) is
//! the caller's contract.
//!
//! The tag is detached: `seal` returns `{ciphertext, tag}` and the caller
//! re-supplies key, nonce, tag, and AAD to `open`. Tag verification happens
//! before a single plaintext byte is released.

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce, Tag};

use crate::error::EnvelopeError;
use crate::types::{Sealed, KEY_LENGTH, NONCE_LENGTH, TAG_LENGTH};

fn build_cipher(key: &[u8]) -> Result<Aes256Gcm, EnvelopeError> {
    if key.len() != KEY_LENGTH {
        return Err(EnvelopeError::InvalidKeyOrNonceLength {
            expected: KEY_LENGTH,
            got: key.len(),
        });
    }
    Aes256Gcm::new_from_slice(key).map_err(|_| EnvelopeError::InvalidKeyOrNonceLength {
        expected: KEY_LENGTH,
        got: key.len(),
    })
}

fn check_nonce(nonce: &[u8]) -> Result<(), EnvelopeError> {
    if nonce.len() != NONCE_LENGTH {
        return Err(EnvelopeError::InvalidKeyOrNonceLength {
            expected: NONCE_LENGTH,
            got: nonce.len(),
        });
    }
    Ok(())
}

/// Encrypt `plaintext` under `key` and `nonce` with AES-256-GCM.
///
/// If `aad` is present and non-empty it is bound into the tag but not
/// encrypted and not part of the returned ciphertext. `None` and
/// `Some(b"")` authenticate identically under GCM.
///
/// Deterministic: identical `(plaintext, key, nonce, aad)` always produce
/// the same `(ciphertext, tag)`. Nonce uniqueness is the caller's
/// responsibility (see module docs).
///
/// # Errors
///
/// Returns [`EnvelopeError::InvalidKeyOrNonceLength`] if `key` is not
/// [`KEY_LENGTH`] bytes or `nonce` is not [`NONCE_LENGTH`] bytes.
pub fn seal(
    plaintext: &[u8],
    key: &[u8],
    nonce: &[u8],
    aad: Option<&[u8]>,
) -> Result<Sealed, EnvelopeError> {
    let cipher = build_cipher(key)?;
    check_nonce(nonce)?;

    let mut ciphertext = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(
            Nonce::from_slice(nonce),
            aad.unwrap_or_default(),
            &mut ciphertext,
        )
        // Only reachable for plaintexts beyond GCM's length bound (~64 GiB).
        .map_err(|_| EnvelopeError::AuthenticationFailed)?;

    Ok(Sealed {
        ciphertext,
        tag: tag.into(),
    })
}

/// Decrypt `ciphertext` and verify `tag` over (ciphertext, aad).
///
/// The same key, nonce, and AAD given to [`seal`] must be supplied;
/// verification precedes decryption, so no unauthenticated plaintext is
/// ever exposed.
///
/// # Errors
///
/// Returns [`EnvelopeError::InvalidKeyOrNonceLength`] for a wrong key or
/// nonce length. Every other failure — tag mismatch, wrong key, tampered
/// ciphertext/AAD, malformed tag length — is the single opaque
/// [`EnvelopeError::AuthenticationFailed`].
pub fn open(
    ciphertext: &[u8],
    key: &[u8],
    nonce: &[u8],
    tag: &[u8],
    aad: Option<&[u8]>,
) -> Result<Vec<u8>, EnvelopeError> {
    let cipher = build_cipher(key)?;
    check_nonce(nonce)?;
    if tag.len() != TAG_LENGTH {
        return Err(EnvelopeError::AuthenticationFailed);
    }

    let mut plaintext = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(nonce),
            aad.unwrap_or_default(),
            &mut plaintext,
            Tag::from_slice(tag),
        )
        .map_err(|_| EnvelopeError::AuthenticationFailed)?;

    Ok(plaintext)
}
