use thiserror::Error;

/// Why a stored credential could not be read.
///
/// None of these reach the user: the guard logs them and treats the
/// credential as expired.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("credential is empty")]
    Empty,

    #[error("credential has no payload segment")]
    MissingPayload,

    #[error("payload is not base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("payload is not a JSON claims object: {0}")]
    Claims(#[from] serde_json::Error),

    #[error("payload has no exp claim")]
    MissingExpiry,

    #[error("exp claim out of range: {0}")]
    InvalidExpiry(f64),
}
