//! Signer factory: (algorithm, security level) to a ready signing context

use crate::algorithm::{Algorithm, SecurityLevel};
use crate::error::{Result, SignerError};
use crate::params::{ParameterSet, ParameterTable};
use crate::providers::DefaultProvider;
use crate::traits::{SignatureProvider, SignerHandle};

/// Builds signers from a parameter table and a provider
///
/// Every call generates a fresh key pair. Nothing is cached between calls,
/// so a factory can be shared across threads.
#[derive(Debug, Clone)]
pub struct SignerFactory<P = DefaultProvider> {
    table: ParameterTable,
    provider: P,
}

impl SignerFactory<DefaultProvider> {
    /// Factory over the standard table and the default provider
    pub fn new() -> Self {
        Self {
            table: ParameterTable::standard(),
            provider: DefaultProvider::new(),
        }
    }
}

impl Default for SignerFactory<DefaultProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SignatureProvider> SignerFactory<P> {
    /// Factory over the standard table and a custom provider
    pub fn with_provider(provider: P) -> Self {
        Self {
            table: ParameterTable::standard(),
            provider,
        }
    }

    /// Replace the parameter table
    pub fn with_table(mut self, table: ParameterTable) -> Self {
        self.table = table;
        self
    }

    pub fn table(&self) -> &ParameterTable {
        &self.table
    }

    /// Look up the parameter set for a pair without generating keys
    ///
    /// # Errors
    /// - `UnsupportedConfiguration` if the table has no entry for the pair
    pub fn resolve(&self, algorithm: Algorithm, level: SecurityLevel) -> Result<ParameterSet> {
        self.table.resolve(algorithm, level)
    }

    /// Create a signing context for the given algorithm and security level
    ///
    /// # Parameters
    /// - `algorithm`: signature algorithm family
    /// - `level`: security tier selecting the parameter set
    ///
    /// # Returns
    /// A signer bound to a freshly generated key pair. No message has been
    /// signed yet.
    ///
    /// # Errors
    /// - `UnsupportedConfiguration` if the pair has no table entry
    /// - `ProviderError` if the provider lacks the primitive or fails during
    ///   key generation or signer initialisation
    pub fn create_signer(
        &self,
        algorithm: Algorithm,
        level: SecurityLevel,
    ) -> Result<Box<dyn SignerHandle>> {
        let params = self.resolve(algorithm, level)?;
        tracing::debug!(
            "Resolved {} at {} to {} (provider '{}')",
            algorithm,
            level,
            params,
            self.provider.name()
        );

        if !self.provider.supports(&params) {
            return Err(SignerError::provider(
                self.provider.name(),
                format!("Provider does not implement {}", params),
            ));
        }

        let key_pair = self.provider.generate_key_pair(&params)?;
        tracing::info!(
            "Generated {} keypair: pk_len={} bytes, fingerprint={}",
            params,
            key_pair.public_key().len(),
            key_pair.fingerprint()
        );

        self.provider.new_signer(key_pair)
    }

    /// `create_signer` at `SecurityLevel::Low`
    pub fn create_default_signer(&self, algorithm: Algorithm) -> Result<Box<dyn SignerHandle>> {
        self.create_signer(algorithm, SecurityLevel::default())
    }
}

/// Create a signer using the standard table and default provider
pub fn create_signer(algorithm: Algorithm, level: SecurityLevel) -> Result<Box<dyn SignerHandle>> {
    SignerFactory::new().create_signer(algorithm, level)
}

/// Create a signer at the lowest security level
pub fn create_default_signer(algorithm: Algorithm) -> Result<Box<dyn SignerHandle>> {
    SignerFactory::new().create_default_signer(algorithm)
}
