//! Base32 text for shared secrets.
//!
//! The two directions are deliberately asymmetric. [`encode_secret`] maps every
//! random byte to one alphabet character using only its low 5 bits, so the text
//! has exactly as many characters as there were input bytes. [`decode_secret`]
//! is regular RFC 4648 bit packing, which is what authenticator apps apply to
//! the text they scan.

use data_encoding::{DecodeError, DecodeKind, Encoding, BASE32_NOPAD};
use std::sync::OnceLock;

use crate::config::BASE32_ALPHABET;
use crate::error::Result;

const BLOCK_CHARS: usize = 8;

pub fn encode_secret(random_bytes: &[u8]) -> String {
    random_bytes
        .iter()
        .map(|b| BASE32_ALPHABET[(b & 0x1F) as usize] as char)
        .collect()
}

/// Decodes secret text into HMAC key bytes.
///
/// Input is uppercased and trailing `=` padding is dropped first. Fails with
/// `InvalidEncoding` on characters outside `A-Z2-7`, on empty input and when
/// the remaining text is not made of whole 8-character blocks.
pub fn decode_secret(secret: &str) -> Result<Vec<u8>> {
    let normalized = secret.to_ascii_uppercase();
    let stripped = normalized.trim_end_matches('=');
    if stripped.is_empty() || stripped.len() % BLOCK_CHARS != 0 {
        return Err(DecodeError {
            position: stripped.len() - stripped.len() % BLOCK_CHARS,
            kind: DecodeKind::Length,
        }
        .into());
    }

    Ok(secret_encoding().decode(stripped.as_bytes())?)
}

// Unpadded RFC 4648 that does not reject leftover bits in the last character.
fn secret_encoding() -> &'static Encoding {
    static ENCODING: OnceLock<Encoding> = OnceLock::new();
    ENCODING.get_or_init(|| {
        let mut spec = BASE32_NOPAD.specification();
        spec.check_trailing_bits = false;
        spec.encoding().expect("relaxed base32 specification is valid")
    })
}
