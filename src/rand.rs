//! OS-sourced randomness for keys and nonces.
//!
//! The envelope never generates nonces on its own: whether a nonce comes
//! from [`generate_nonce`] or a counter scheme is a caller policy tied to
//! the key's lifetime. These helpers only wrap the OS CSPRNG.

use crate::types::{KEY_LENGTH, NONCE_LENGTH};

/// Return `n` cryptographically secure random bytes from the OS source.
///
/// `random_bytes(0)` returns an empty vec. Panics only if the OS entropy
/// source is unavailable.
pub fn random_bytes(n: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; n];
    getrandom::getrandom(&mut bytes).expect("getrandom failed");
    bytes
}

/// Generate a random 256-bit AES key.
pub fn generate_key() -> [u8; KEY_LENGTH] {
    let mut key = [0u8; KEY_LENGTH];
    getrandom::getrandom(&mut key).expect("getrandom failed");
    key
}

/// Generate a random 96-bit nonce for AES-GCM.
pub fn generate_nonce() -> [u8; NONCE_LENGTH] {
    let mut nonce = [0u8; NONCE_LENGTH];
    getrandom::getrandom(&mut nonce).expect("getrandom failed");
    nonce
}
