//! Authenticated symmetric-encryption envelope over AES-256-GCM.
//!
//! [`seal`] encrypts plaintext under a caller-supplied key and nonce and
//! returns `{ciphertext, tag}`; [`open`] verifies the tag before releasing
//! any plaintext. All operations are pure and stateless: the envelope never
//! stores keys, never tracks nonces, and keeps nothing across calls.
//! Nonce uniqueness per key is the caller's contract — reuse breaks both
//! confidentiality and authentication.

pub mod envelope;
pub mod error;
pub mod rand;
pub mod types;

pub use envelope::{open, seal};
pub use error::EnvelopeError;
pub use rand::{generate_key, generate_nonce, random_bytes};
pub use types::{Sealed, KEY_LENGTH, NONCE_LENGTH, TAG_LENGTH};
