//! Google Authenticator compatible TOTP: secret provisioning, code generation,
//! windowed verification and `otpauth://` QR codes.
//!
//! ```
//! use gauthenticator::Authenticator;
//!
//! let auth = Authenticator::default();
//! let secret = auth.create_secret(16).unwrap();
//! let code = auth.get_code(&secret, 0).unwrap();
//! assert!(auth.verify_code(&secret, &code, 1, 0));
//! ```
extern crate crypto;

pub mod base32;
pub mod compare;
pub mod config;
pub mod error;
pub mod qr;
pub mod secret;
pub mod totp;
pub mod uri;
pub mod verify;

pub use error::{AuthError, Result};

use config::CODE_DIGITS;

/// Entry point bundling the TOTP operations.
///
/// `code_length` is stored for callers that read it back; codes are always
/// rendered with [`CODE_DIGITS`] digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authenticator {
    code_length: u32,
}

impl Default for Authenticator {
    fn default() -> Self {
        Authenticator {
            code_length: CODE_DIGITS,
        }
    }
}

impl Authenticator {
    pub fn new(code_length: u32) -> Self {
        Authenticator { code_length }
    }

    pub fn code_length(&self) -> u32 {
        self.code_length
    }

    pub fn create_secret(&self, length: usize) -> Result<String> {
        secret::create_secret(length)
    }

    pub fn get_code(&self, secret: &str, time_step: u64) -> Result<String> {
        totp::get_code(secret, time_step)
    }

    pub fn verify_code(&self, secret: &str, code: &str, discrepancy: u32, time_step: u64) -> bool {
        verify::verify_code(secret, code, discrepancy, time_step)
    }

    pub fn provisioning_uri(&self, label: &str, secret: &str) -> String {
        uri::provisioning_uri(label, secret)
    }

    /// Base64 encoded PNG of the provisioning QR code.
    pub fn generate_qr_code(&self, label: &str, secret: &str) -> Result<String> {
        qr::qr_code_base64(label, secret)
    }
}
