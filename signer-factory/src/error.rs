/// Error type definitions
use crate::algorithm::{Algorithm, SecurityLevel};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignerError {
    /// The (algorithm, level) pair has no entry in the parameter table.
    #[error("Unsupported configuration: no parameters defined for {algorithm} at security level {level}")]
    UnsupportedConfiguration {
        algorithm: Algorithm,
        level: SecurityLevel,
    },

    /// The cryptography provider rejected the parameters, lacks the
    /// primitive, or failed during key generation / signer initialisation.
    #[error("Provider error ({provider}): {message}")]
    ProviderError { provider: String, message: String },

    #[error("Signing failed: {0}")]
    SigningError(String),

    #[error("Verification failed: {0}")]
    VerificationError(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid security level: {0}")]
    InvalidSecurityLevel(String),
}

impl SignerError {
    pub(crate) fn provider(provider: &str, message: impl Into<String>) -> Self {
        SignerError::ProviderError {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SignerError>;
