use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

/// Length of every role password generated during provisioning.
pub const PASSWORD_LENGTH: usize = 30;

/// Returns true for bytes that need no encoding in a URL and no escaping in a
/// single-quoted SQL literal: `[0-9A-Za-z!$()*+,-._]`.
#[must_use]
pub const fn is_password_char(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' | b'!' | b'$' | b'('..=b'.' | b'_')
}

/// Generates a password of `length` characters from the OS random source.
pub fn generate_password(length: usize) -> Result<String> {
    generate_password_with(&mut OsRng, length)
}

/// Generates `count` independent passwords of `length` characters each.
pub fn generate_passwords(count: usize, length: usize) -> Result<Vec<String>> {
    (0..count).map(|_| generate_password(length)).collect()
}

/// Generates a password by rejection sampling: random bytes are drawn in
/// chunks of `2 * length` and every byte outside the alphabet is discarded.
/// Mapping bytes onto the alphabet with a modulo would bias the low characters.
pub fn generate_password_with<R>(rng: &mut R, length: usize) -> Result<String>
where
    R: RngCore + CryptoRng,
{
    let mut password = String::with_capacity(length);
    let mut chunk = vec![0u8; length * 2];

    while password.len() < length {
        rng.try_fill_bytes(&mut chunk)
            .map_err(|e| Error::SecretGeneration(e.to_string()))?;

        password.extend(
            chunk
                .iter()
                .copied()
                .filter(|&b| is_password_char(b))
                .map(char::from),
        );
    }

    password.truncate(length);
    Ok(password)
}
