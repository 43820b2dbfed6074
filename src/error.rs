use thiserror::Error;

use crate::config::{MAX_SECRET_LENGTH, MIN_SECRET_LENGTH};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("bad secret length: {0} (expected {}..={})", MIN_SECRET_LENGTH, MAX_SECRET_LENGTH)]
    InvalidLength(usize),

    #[error("no source of secure random: {0}")]
    InsecureRandomUnavailable(#[source] rand::Error),

    #[error("invalid base32 secret: {0}")]
    InvalidEncoding(#[from] data_encoding::DecodeError),

    #[error("QR code generation failed: {0}")]
    QrGenerationFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, AuthError>;
