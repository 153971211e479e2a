//! Signature providers
//!
//! Each provider owns one family of algorithms. [`DefaultProvider`] composes
//! all three so every entry of the standard parameter table has a backend.

pub mod classical;
pub(crate) mod encoded;
pub mod hash_based;
pub mod lattice;

pub use classical::ClassicalProvider;
pub use encoded::EncodedKeySigner;
pub use hash_based::HashBasedProvider;
pub use lattice::LatticeProvider;

use crate::error::{Result, SignerError};
use crate::keys::KeyPair;
use crate::params::ParameterSet;
use crate::traits::{SignatureProvider, SignerHandle};

const PROVIDER_NAME: &str = "default";

/// Provider covering classical, lattice and hash-based algorithms
///
/// Requests are delegated to the first inner provider that supports the
/// parameter set.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultProvider {
    classical: ClassicalProvider,
    lattice: LatticeProvider,
    hash_based: HashBasedProvider,
}

impl DefaultProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn delegate(&self, params: &ParameterSet) -> Result<&dyn SignatureProvider> {
        let candidates: [&dyn SignatureProvider; 3] =
            [&self.classical, &self.lattice, &self.hash_based];

        candidates
            .into_iter()
            .find(|provider| provider.supports(params))
            .ok_or_else(|| {
                SignerError::provider(
                    PROVIDER_NAME,
                    format!("No provider implements parameter set {}", params),
                )
            })
    }
}

impl SignatureProvider for DefaultProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn supports(&self, params: &ParameterSet) -> bool {
        self.delegate(params).is_ok()
    }

    fn generate_key_pair(&self, params: &ParameterSet) -> Result<KeyPair> {
        let provider = self.delegate(params)?;
        tracing::debug!("Delegating {} key generation to '{}'", params, provider.name());
        provider.generate_key_pair(params)
    }

    fn new_signer(&self, key_pair: KeyPair) -> Result<Box<dyn SignerHandle>> {
        self.delegate(key_pair.params())?.new_signer(key_pair)
    }
}
