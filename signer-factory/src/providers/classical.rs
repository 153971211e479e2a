//! Classical signatures: ECDSA over the NIST prime curves and RSA
//!
//! - ECDSA uses RFC 6979 deterministic nonces with the curve's standard
//!   hash (SHA-256, SHA-384, SHA-512 for P-256, P-384, P-521).
//! - RSA signs with PKCS#1 v1.5 over a SHA3-256 digest.
//!
//! Large RSA moduli are slow to generate: 7680 bits takes tens of seconds and
//! 15360 bits can take minutes on a typical machine.

use crate::error::{Result, SignerError};
use crate::keys::{KeyPair, PrivateKey};
use crate::params::{EcCurve, ParameterSet};
use crate::traits::{SignatureProvider, SignerHandle};
use p256::ecdsa::signature::{Signer as _, Verifier as _};
use rand::rngs::OsRng;
use rsa::pkcs1::EncodeRsaPublicKey;
use rsa::pkcs1v15;
use rsa::signature::{SignatureEncoding as _, Signer as _, Verifier as _};
use rsa::{BigUint, RsaPrivateKey};
use sha3::Sha3_256;

const PROVIDER_NAME: &str = "classical";

/// Smallest RSA modulus accepted for key generation
const MIN_RSA_MODULUS_BITS: usize = 2048;

/// Provider for ECDSA (P-256/P-384/P-521) and RSA
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassicalProvider;

impl ClassicalProvider {
    pub fn new() -> Self {
        Self
    }

    fn generate_ecdsa(curve: EcCurve) -> (Vec<u8>, PrivateKey) {
        match curve {
            EcCurve::P256 => {
                let sk = p256::ecdsa::SigningKey::random(&mut OsRng);
                let pk = sk.verifying_key().to_encoded_point(false).as_bytes().to_vec();
                (pk, PrivateKey::P256(sk))
            }
            EcCurve::P384 => {
                let sk = p384::ecdsa::SigningKey::random(&mut OsRng);
                let pk = sk.verifying_key().to_encoded_point(false).as_bytes().to_vec();
                (pk, PrivateKey::P384(sk))
            }
            EcCurve::P521 => {
                let sk = p521::ecdsa::SigningKey::random(&mut OsRng);
                let pk = p521::ecdsa::VerifyingKey::from(&sk)
                    .to_encoded_point(false)
                    .as_bytes()
                    .to_vec();
                (pk, PrivateKey::P521(sk))
            }
        }
    }

    /// Reject parameters the RSA backend would accept but should not
    ///
    /// An even exponent never becomes coprime to the totient, so key
    /// generation would retry forever.
    fn check_rsa_params(modulus_bits: usize, public_exponent: u32) -> Result<()> {
        if modulus_bits < MIN_RSA_MODULUS_BITS {
            return Err(SignerError::provider(
                PROVIDER_NAME,
                format!(
                    "RSA modulus of {} bits is below the {}-bit minimum",
                    modulus_bits, MIN_RSA_MODULUS_BITS
                ),
            ));
        }
        if public_exponent < 3 || public_exponent % 2 == 0 {
            return Err(SignerError::provider(
                PROVIDER_NAME,
                format!("RSA public exponent {} must be odd and at least 3", public_exponent),
            ));
        }
        Ok(())
    }

    fn generate_rsa(modulus_bits: usize, public_exponent: u32) -> Result<(Vec<u8>, PrivateKey)> {
        Self::check_rsa_params(modulus_bits, public_exponent)?;

        let exponent = BigUint::from(u64::from(public_exponent));
        let private_key = RsaPrivateKey::new_with_exp(&mut OsRng, modulus_bits, &exponent)
            .map_err(|e| {
                SignerError::provider(
                    PROVIDER_NAME,
                    format!("RSA-{} key generation failed: {}", modulus_bits, e),
                )
            })?;

        let public_der = private_key
            .to_public_key()
            .to_pkcs1_der()
            .map_err(|e| {
                SignerError::provider(PROVIDER_NAME, format!("Failed to encode RSA public key: {}", e))
            })?;

        Ok((public_der.as_bytes().to_vec(), PrivateKey::Rsa(Box::new(private_key))))
    }
}

impl SignatureProvider for ClassicalProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn supports(&self, params: &ParameterSet) -> bool {
        matches!(params, ParameterSet::Ecdsa(_) | ParameterSet::Rsa { .. })
    }

    fn generate_key_pair(&self, params: &ParameterSet) -> Result<KeyPair> {
        let (public_key, private_key) = match *params {
            ParameterSet::Ecdsa(curve) => Self::generate_ecdsa(curve),
            ParameterSet::Rsa {
                modulus_bits,
                public_exponent,
            } => Self::generate_rsa(modulus_bits, public_exponent)?,
            other => {
                return Err(SignerError::provider(
                    PROVIDER_NAME,
                    format!("Parameter set {} is not a classical scheme", other),
                ))
            }
        };

        tracing::debug!(
            "Generated {} key pair: pk_len={} bytes",
            params,
            public_key.len()
        );

        Ok(KeyPair::new(*params, public_key, private_key))
    }

    fn new_signer(&self, key_pair: KeyPair) -> Result<Box<dyn SignerHandle>> {
        let (params, public_key, private_key) = key_pair.into_parts();

        match (params, private_key) {
            (ParameterSet::Ecdsa(EcCurve::P256), PrivateKey::P256(sk)) => {
                let vk = sk.verifying_key().clone();
                Ok(Box::new(EcdsaSigner::new(params, public_key, EcdsaKeys::P256(sk, vk))))
            }
            (ParameterSet::Ecdsa(EcCurve::P384), PrivateKey::P384(sk)) => {
                let vk = sk.verifying_key().clone();
                Ok(Box::new(EcdsaSigner::new(params, public_key, EcdsaKeys::P384(sk, vk))))
            }
            (ParameterSet::Ecdsa(EcCurve::P521), PrivateKey::P521(sk)) => {
                let vk = p521::ecdsa::VerifyingKey::from(&sk);
                Ok(Box::new(EcdsaSigner::new(params, public_key, EcdsaKeys::P521(sk, vk))))
            }
            (ParameterSet::Rsa { modulus_bits, .. }, PrivateKey::Rsa(private_key)) => {
                Ok(Box::new(RsaSigner::new(params, modulus_bits, public_key, *private_key)))
            }
            (params, private_key) => Err(SignerError::provider(
                PROVIDER_NAME,
                format!(
                    "Key material of kind '{}' does not match parameter set {}",
                    private_key.kind(),
                    params
                ),
            )),
        }
    }
}

enum EcdsaKeys {
    P256(p256::ecdsa::SigningKey, p256::ecdsa::VerifyingKey),
    P384(p384::ecdsa::SigningKey, p384::ecdsa::VerifyingKey),
    P521(p521::ecdsa::SigningKey, p521::ecdsa::VerifyingKey),
}

/// ECDSA signing context
pub struct EcdsaSigner {
    params: ParameterSet,
    name: String,
    public_key: Vec<u8>,
    keys: EcdsaKeys,
}

impl EcdsaSigner {
    fn new(params: ParameterSet, public_key: Vec<u8>, keys: EcdsaKeys) -> Self {
        Self {
            name: format!("ECDSA {}", params),
            params,
            public_key,
            keys,
        }
    }
}

impl SignerHandle for EcdsaSigner {
    /// Returns the fixed-size `r || s` encoding
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let signature = match &self.keys {
            EcdsaKeys::P256(sk, _) => sk
                .try_sign(message)
                .map(|sig: p256::ecdsa::Signature| sig.to_bytes().to_vec()),
            EcdsaKeys::P384(sk, _) => sk
                .try_sign(message)
                .map(|sig: p384::ecdsa::Signature| sig.to_bytes().to_vec()),
            EcdsaKeys::P521(sk, _) => sk
                .try_sign(message)
                .map(|sig: p521::ecdsa::Signature| sig.to_bytes().to_vec()),
        }
        .map_err(|e| SignerError::SigningError(format!("{} signing failed: {}", self.name, e)))?;

        tracing::debug!(
            "Signed message: msg_len={} bytes, sig_len={} bytes ({})",
            message.len(),
            signature.len(),
            self.name
        );

        Ok(signature)
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        let malformed = |e: p256::ecdsa::Error| {
            SignerError::VerificationError(format!("Malformed {} signature: {}", self.name, e))
        };

        let is_valid = match &self.keys {
            EcdsaKeys::P256(_, vk) => {
                let sig = p256::ecdsa::Signature::from_slice(signature).map_err(malformed)?;
                vk.verify(message, &sig).is_ok()
            }
            EcdsaKeys::P384(_, vk) => {
                let sig = p384::ecdsa::Signature::from_slice(signature).map_err(malformed)?;
                vk.verify(message, &sig).is_ok()
            }
            EcdsaKeys::P521(_, vk) => {
                let sig = p521::ecdsa::Signature::from_slice(signature).map_err(malformed)?;
                vk.verify(message, &sig).is_ok()
            }
        };

        if !is_valid {
            tracing::warn!("{} signature verification failed", self.name);
        }

        Ok(is_valid)
    }

    fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    fn algorithm_name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> &ParameterSet {
        &self.params
    }
}

/// RSA PKCS#1 v1.5 / SHA3-256 signing context
pub struct RsaSigner {
    params: ParameterSet,
    name: String,
    public_key: Vec<u8>,
    signing_key: pkcs1v15::SigningKey<Sha3_256>,
    verifying_key: pkcs1v15::VerifyingKey<Sha3_256>,
}

impl RsaSigner {
    fn new(
        params: ParameterSet,
        modulus_bits: usize,
        public_key: Vec<u8>,
        private_key: RsaPrivateKey,
    ) -> Self {
        let verifying_key = pkcs1v15::VerifyingKey::<Sha3_256>::new(private_key.to_public_key());
        let signing_key = pkcs1v15::SigningKey::<Sha3_256>::new(private_key);

        Self {
            params,
            name: format!("RSA-{} PKCS#1 v1.5 SHA3-256", modulus_bits),
            public_key,
            signing_key,
            verifying_key,
        }
    }
}

impl SignerHandle for RsaSigner {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let signature = self
            .signing_key
            .try_sign(message)
            .map_err(|e| SignerError::SigningError(format!("{} signing failed: {}", self.name, e)))?;

        Ok(signature.to_vec())
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        let signature = pkcs1v15::Signature::try_from(signature).map_err(|e| {
            SignerError::VerificationError(format!("Malformed RSA signature: {}", e))
        })?;

        match self.verifying_key.verify(message, &signature) {
            Ok(()) => Ok(true),
            Err(_) => {
                tracing::warn!("{} signature verification failed", self.name);
                Ok(false)
            }
        }
    }

    fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    fn algorithm_name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> &ParameterSet {
        &self.params
    }
}
