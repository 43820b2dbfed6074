// Only SHA-1, 30 second steps and 6 digits are supported. Google Authenticator
// defaults to those values and secrets provisioned here are consumed by it.

pub const TIME_STEP_SECONDS: u64 = 30;
pub const CODE_DIGITS: u32 = 6;

pub const MIN_SECRET_LENGTH: usize = 16;
pub const MAX_SECRET_LENGTH: usize = 128;
pub const DEFAULT_SECRET_LENGTH: usize = 16;

/// Time steps accepted on either side of "now" when verifying.
pub const DEFAULT_DISCREPANCY: u32 = 1;

/// Minimum edge, in pixels, of the rendered provisioning QR code.
pub const QR_CODE_SIZE: u32 = 250;

pub const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
