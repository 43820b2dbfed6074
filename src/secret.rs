use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::base32::encode_secret;
use crate::config::{MAX_SECRET_LENGTH, MIN_SECRET_LENGTH};
use crate::error::{AuthError, Result};

/// Generates a new base32 secret of `length` characters from the OS RNG.
pub fn create_secret(length: usize) -> Result<String> {
    create_secret_with_rng(length, &mut OsRng)
}

pub fn create_secret_with_rng<R: RngCore + CryptoRng + ?Sized>(
    length: usize,
    rng: &mut R,
) -> Result<String> {
    if !(MIN_SECRET_LENGTH..=MAX_SECRET_LENGTH).contains(&length) {
        return Err(AuthError::InvalidLength(length));
    }

    let mut buf = vec![0u8; length];
    rng.try_fill_bytes(&mut buf)
        .map_err(AuthError::InsecureRandomUnavailable)?;

    debug!("created secret of {} characters", length);
    Ok(encode_secret(&buf))
}
