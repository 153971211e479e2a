//! Signers over byte-encoded post-quantum keys
//!
//! The post-quantum crates expose one module per parameter set, each with the
//! same operations over its own key types. A `SchemeTable` flattens one such
//! module into plain functions on byte slices so that a single signer type,
//! `EncodedKeySigner`, can drive every parameter set. Keys are parsed once
//! when the signer is built; the timed sign path never decodes key bytes.
//!
//! `pqclean_scheme!` builds the table for a `pqcrypto-*` (PQClean) module.

use crate::error::{Result, SignerError};
use crate::keys::{KeyPair, PrivateKey};
use crate::params::ParameterSet;
use crate::traits::SignerHandle;
use zeroize::Zeroizing;

/// Signs with keys parsed once at signer construction
pub(crate) type SignFn = Box<dyn Fn(&[u8]) -> std::result::Result<Vec<u8>, String> + Send + Sync>;

/// Verifies (message, signature) against the parsed public key
pub(crate) type VerifyFn =
    Box<dyn Fn(&[u8], &[u8]) -> std::result::Result<bool, String> + Send + Sync>;

/// Parsed key material, captured by the sign and verify closures
pub(crate) struct LoadedKeys {
    pub sign: SignFn,
    pub verify: VerifyFn,
}

/// Function table over one parameter-set module
#[derive(Clone, Copy)]
pub(crate) struct SchemeTable {
    pub name: &'static str,
    pub public_key_bytes: fn() -> usize,
    pub secret_key_bytes: fn() -> usize,
    pub signature_bytes: fn() -> usize,
    pub keypair: fn() -> std::result::Result<(Vec<u8>, Vec<u8>), String>,
    /// Parse (public key, secret key) into the backend's key types
    pub load: fn(&[u8], &[u8]) -> std::result::Result<LoadedKeys, String>,
}

macro_rules! pqclean_scheme {
    ($name:literal, $krate:ident :: $module:ident) => {{
        use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _, SecretKey as _};
        use $krate::$module as scheme;

        $crate::providers::encoded::SchemeTable {
            name: $name,
            public_key_bytes: scheme::public_key_bytes,
            secret_key_bytes: scheme::secret_key_bytes,
            signature_bytes: scheme::signature_bytes,
            keypair: || -> std::result::Result<(Vec<u8>, Vec<u8>), String> {
                let (pk, sk) = scheme::keypair();
                Ok((pk.as_bytes().to_vec(), sk.as_bytes().to_vec()))
            },
            load: |public_key: &[u8],
                   secret_key: &[u8]|
             -> std::result::Result<$crate::providers::encoded::LoadedKeys, String> {
                let pk = scheme::PublicKey::from_bytes(public_key)
                    .map_err(|e| format!("Failed to parse public key: {:?}", e))?;
                let sk = scheme::SecretKey::from_bytes(secret_key)
                    .map_err(|e| format!("Failed to parse secret key: {:?}", e))?;

                Ok($crate::providers::encoded::LoadedKeys {
                    sign: Box::new(move |message: &[u8]| -> std::result::Result<Vec<u8>, String> {
                        Ok(scheme::detached_sign(message, &sk).as_bytes().to_vec())
                    }),
                    verify: Box::new(
                        move |message: &[u8], signature: &[u8]| -> std::result::Result<bool, String> {
                            let sig = scheme::DetachedSignature::from_bytes(signature)
                                .map_err(|e| format!("Failed to parse signature: {:?}", e))?;
                            Ok(scheme::verify_detached_signature(&sig, message, &pk).is_ok())
                        },
                    ),
                })
            },
        }
    }};
}

pub(crate) use pqclean_scheme;

impl SchemeTable {
    /// Generate a key pair and wrap it for the factory
    pub(crate) fn generate(&self, provider: &str, params: ParameterSet) -> Result<KeyPair> {
        let (public_key, secret_key) = (self.keypair)().map_err(|e| {
            SignerError::provider(provider, format!("{} key generation failed: {}", self.name, e))
        })?;

        tracing::debug!(
            "Generated {} keypair: pk_len={} bytes, sk_len={} bytes",
            self.name,
            public_key.len(),
            secret_key.len()
        );

        Ok(KeyPair::new(
            params,
            public_key,
            PrivateKey::Encoded(Zeroizing::new(secret_key)),
        ))
    }

    /// Bind a signer to byte-encoded key material, checking lengths first
    pub(crate) fn signer(
        &self,
        provider: &str,
        key_pair: KeyPair,
    ) -> Result<Box<dyn SignerHandle>> {
        let (params, public_key, private_key) = key_pair.into_parts();

        let secret_key = match private_key {
            PrivateKey::Encoded(bytes) => bytes,
            other => {
                return Err(SignerError::provider(
                    provider,
                    format!("{} expects encoded key material, got '{}'", self.name, other.kind()),
                ))
            }
        };

        if public_key.len() != (self.public_key_bytes)() {
            return Err(SignerError::provider(
                provider,
                format!(
                    "Invalid {} public key length: expected {} bytes, got {}",
                    self.name,
                    (self.public_key_bytes)(),
                    public_key.len()
                ),
            ));
        }

        if secret_key.len() != (self.secret_key_bytes)() {
            return Err(SignerError::provider(
                provider,
                format!(
                    "Invalid {} secret key length: expected {} bytes, got {}",
                    self.name,
                    (self.secret_key_bytes)(),
                    secret_key.len()
                ),
            ));
        }

        // The encoded secret is zeroized on drop once parsed
        let keys = (self.load)(&public_key, secret_key.as_slice()).map_err(|e| {
            SignerError::provider(provider, format!("Failed to load {} keys: {}", self.name, e))
        })?;

        Ok(Box::new(EncodedKeySigner {
            params,
            scheme: *self,
            public_key,
            keys,
        }))
    }
}

/// Detached-signature signer over byte-encoded keys
pub struct EncodedKeySigner {
    params: ParameterSet,
    scheme: SchemeTable,
    public_key: Vec<u8>,
    keys: LoadedKeys,
}

impl SignerHandle for EncodedKeySigner {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let signature = (self.keys.sign)(message)
            .map_err(|e| SignerError::SigningError(format!("{}: {}", self.scheme.name, e)))?;

        tracing::debug!(
            "Signed message: msg_len={} bytes, sig_len={} bytes ({})",
            message.len(),
            signature.len(),
            self.scheme.name
        );

        Ok(signature)
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        if signature.len() != (self.scheme.signature_bytes)() {
            return Err(SignerError::VerificationError(format!(
                "Invalid {} signature length: expected {} bytes, got {}",
                self.scheme.name,
                (self.scheme.signature_bytes)(),
                signature.len()
            )));
        }

        let is_valid = (self.keys.verify)(message, signature)
            .map_err(|e| SignerError::VerificationError(format!("{}: {}", self.scheme.name, e)))?;

        if !is_valid {
            tracing::warn!("{} signature verification failed", self.scheme.name);
        }

        Ok(is_valid)
    }

    fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    fn algorithm_name(&self) -> &str {
        self.scheme.name
    }

    fn parameters(&self) -> &ParameterSet {
        &self.params
    }
}
