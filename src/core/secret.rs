//! Secret generation.
//!
//! Passwords and the n8n encryption key are drawn from the operating
//! system's CSPRNG.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use zeroize::Zeroizing;

use crate::core::constants;

/// Password alphabet: 52 letters, 10 digits, 8 symbols.
pub const PASSWORD_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

/// Random bytes behind an encryption key. 24 bytes encode to exactly 32
/// URL-safe base64 characters.
const ENCRYPTION_KEY_BYTES: usize = 24;

/// Generate a password of `length` characters from [`PASSWORD_ALPHABET`].
pub fn generate_password(length: usize) -> String {
    let mut rng = OsRng;
    (0..length)
        .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
        .collect()
}

/// Generate a 32-character URL-safe encryption key.
///
/// The output only uses `A-Z a-z 0-9 - _`, so it is safe on the right-hand
/// side of a `KEY=VALUE` line.
pub fn generate_encryption_key() -> String {
    let mut bytes = Zeroizing::new([0u8; ENCRYPTION_KEY_BYTES]);
    OsRng.fill_bytes(&mut bytes[..]);

    let mut key = URL_SAFE_NO_PAD.encode(&bytes[..]);
    key.truncate(constants::ENCRYPTION_KEY_LEN);
    key
}

/// The four secrets written into a fresh `.env`.
///
/// Buffers are wiped on drop.
pub struct Credentials {
    pub postgres_password: Zeroizing<String>,
    pub postgres_non_root_password: Zeroizing<String>,
    pub n8n_password: Zeroizing<String>,
    pub encryption_key: Zeroizing<String>,
}

impl Credentials {
    /// Generate a fresh set.
    pub fn generate() -> Self {
        Self {
            postgres_password: Zeroizing::new(generate_password(
                constants::POSTGRES_PASSWORD_LEN,
            )),
            postgres_non_root_password: Zeroizing::new(generate_password(
                constants::POSTGRES_NON_ROOT_PASSWORD_LEN,
            )),
            n8n_password: Zeroizing::new(generate_password(constants::N8N_PASSWORD_LEN)),
            encryption_key: Zeroizing::new(generate_encryption_key()),
        }
    }

    /// Env template marker → secret pairs.
    pub fn replacements(&self) -> [(&'static str, &str); 4] {
        [
            (
                constants::POSTGRES_PASSWORD_MARKER,
                self.postgres_password.as_str(),
            ),
            (
                constants::POSTGRES_NON_ROOT_PASSWORD_MARKER,
                self.postgres_non_root_password.as_str(),
            ),
            (constants::N8N_PASSWORD_MARKER, self.n8n_password.as_str()),
            (
                constants::ENCRYPTION_KEY_MARKER,
                self.encryption_key.as_str(),
            ),
        ]
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").finish_non_exhaustive()
    }
}
