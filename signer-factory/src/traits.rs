/// Unified interfaces for signers and the providers that build them
use crate::error::Result;
use crate::keys::KeyPair;
use crate::params::ParameterSet;

/// Signing context bound to one freshly generated key pair
///
/// Returned boxed by the factory; the caller owns it exclusively.
pub trait SignerHandle: Send + Sync {
    /// Sign message
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>>;

    /// Verify signature against this handle's public key
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool>;

    /// Get public key
    fn public_key(&self) -> &[u8];

    /// Algorithm name, e.g. `ECDSA P-384` or `ML-DSA-65`
    fn algorithm_name(&self) -> &str;

    /// Parameter set the key pair was generated under
    fn parameters(&self) -> &ParameterSet;
}

/// Cryptography backend capable of generating keys and building signers
pub trait SignatureProvider: Send + Sync {
    /// Provider name used in error messages and logs
    fn name(&self) -> &str;

    /// Whether this provider implements the given parameter set
    fn supports(&self, params: &ParameterSet) -> bool;

    /// Generate a fresh key pair from the OS random source
    ///
    /// # Errors
    /// - `ProviderError` if the parameters are unsupported or generation fails
    fn generate_key_pair(&self, params: &ParameterSet) -> Result<KeyPair>;

    /// Initialise a signing context bound to the key pair's private key
    ///
    /// # Errors
    /// - `ProviderError` if the key material does not belong to this provider
    ///   or cannot be decoded
    fn new_signer(&self, key_pair: KeyPair) -> Result<Box<dyn SignerHandle>>;
}
