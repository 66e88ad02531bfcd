//! Salted password hashing.
//!
//! A stored password has the form `<salt>$<hash>`:
//!
//! - `salt` is 16 random bytes, base64 encoded (standard alphabet, padded)
//! - `hash` is HMAC-SHA512 over the plaintext, keyed with the base64 salt
//!   string, base64 encoded
//!
//! The HMAC key is the encoded salt text, not the decoded salt bytes.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use rand::{rngs::OsRng, RngCore};
use sha2::Sha512;

use crate::core::error::{AppError, Result};
use crate::shared::constants::{PASSWORD_SALT_LEN, PASSWORD_SEPARATOR};

type HmacSha512 = Hmac<Sha512>;

/// Salt and hash a plaintext password into its stored form
pub fn hash_password(plain: &str) -> Result<String> {
    let salt = generate_salt();
    let hash = keyed_digest(&salt, plain)?;
    Ok(format!("{}{}{}", salt, PASSWORD_SEPARATOR, hash))
}

/// Fresh base64-encoded salt from the OS RNG
fn generate_salt() -> String {
    let mut bytes = [0u8; PASSWORD_SALT_LEN];
    OsRng.fill_bytes(&mut bytes);
    BASE64.encode(bytes)
}

fn keyed_digest(salt: &str, plain: &str) -> Result<String> {
    let mut mac = HmacSha512::new_from_slice(salt.as_bytes())
        .map_err(|e| AppError::Internal(format!("HMAC key error: {}", e)))?;
    mac.update(plain.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}
