//! Hash-based post-quantum signatures: SLH-DSA and SPHINCS+
//!
//! - **SLH-DSA** (FIPS 205) through the `fips205` crate: pure signing with an
//!   empty context string and hedged randomness.
//! - **SPHINCS+** (round 3, SHA-2, simple tweak) through
//!   `pqcrypto-sphincsplus`. The `f` sets sign faster, the `s` sets produce
//!   smaller signatures.
//!
//! | Set         | Public key | Signature  |
//! |-------------|------------|------------|
//! | 128f / 128s | 32 B       | 17,088 / 7,856 B   |
//! | 192f / 192s | 48 B       | 35,664 / 16,224 B  |
//! | 256f / 256s | 64 B       | 49,856 / 29,792 B  |

use super::encoded::{pqclean_scheme, SchemeTable};
use crate::error::{Result, SignerError};
use crate::keys::KeyPair;
use crate::params::{ParameterSet, SlhDsaParams, SphincsPlusParams};
use crate::traits::{SignatureProvider, SignerHandle};

const PROVIDER_NAME: &str = "hash-based";

/// FIPS 205 context string; the benchmark signs without domain separation
const SLH_DSA_CONTEXT: &[u8] = b"";

macro_rules! fips205_scheme {
    ($name:literal, $module:ident) => {{
        use fips205::traits::{SerDes as _, Signer as _, Verifier as _};
        use fips205::$module as scheme;

        $crate::providers::encoded::SchemeTable {
            name: $name,
            public_key_bytes: || scheme::PK_LEN,
            secret_key_bytes: || scheme::SK_LEN,
            signature_bytes: || scheme::SIG_LEN,
            keypair: || -> std::result::Result<(Vec<u8>, Vec<u8>), String> {
                let (pk, sk) = scheme::try_keygen().map_err(|e| e.to_string())?;
                Ok((pk.into_bytes().to_vec(), sk.into_bytes().to_vec()))
            },
            load: |public_key: &[u8],
                   secret_key: &[u8]|
             -> std::result::Result<$crate::providers::encoded::LoadedKeys, String> {
                let pk_bytes: [u8; scheme::PK_LEN] = public_key
                    .try_into()
                    .map_err(|_| "Invalid public key length".to_string())?;
                let pk = scheme::PublicKey::try_from_bytes(&pk_bytes)
                    .map_err(|e| format!("Failed to parse public key: {}", e))?;
                let sk_bytes: [u8; scheme::SK_LEN] = secret_key
                    .try_into()
                    .map_err(|_| "Invalid secret key length".to_string())?;
                let sk = scheme::PrivateKey::try_from_bytes(&sk_bytes)
                    .map_err(|e| format!("Failed to parse secret key: {}", e))?;

                Ok($crate::providers::encoded::LoadedKeys {
                    sign: Box::new(move |message: &[u8]| -> std::result::Result<Vec<u8>, String> {
                        let signature = sk
                            .try_sign(message, SLH_DSA_CONTEXT, true)
                            .map_err(|e| e.to_string())?;
                        Ok(signature.to_vec())
                    }),
                    verify: Box::new(
                        move |message: &[u8], signature: &[u8]| -> std::result::Result<bool, String> {
                            let sig: [u8; scheme::SIG_LEN] = signature
                                .try_into()
                                .map_err(|_| "Invalid signature length".to_string())?;
                            Ok(pk.verify(message, &sig, SLH_DSA_CONTEXT))
                        },
                    ),
                })
            },
        }
    }};
}

/// Provider for SLH-DSA (`fips205`) and SPHINCS+ (`pqcrypto-sphincsplus`)
#[derive(Debug, Default, Clone, Copy)]
pub struct HashBasedProvider;

impl HashBasedProvider {
    pub fn new() -> Self {
        Self
    }

    fn scheme_for(params: &ParameterSet) -> Option<SchemeTable> {
        let scheme = match params {
            ParameterSet::SlhDsa(SlhDsaParams::Sha2_128f) => {
                fips205_scheme!("SLH-DSA-SHA2-128f", slh_dsa_sha2_128f)
            }
            ParameterSet::SlhDsa(SlhDsaParams::Sha2_192f) => {
                fips205_scheme!("SLH-DSA-SHA2-192f", slh_dsa_sha2_192f)
            }
            ParameterSet::SlhDsa(SlhDsaParams::Sha2_256f) => {
                fips205_scheme!("SLH-DSA-SHA2-256f", slh_dsa_sha2_256f)
            }
            ParameterSet::SphincsPlus(SphincsPlusParams::Sha2_128f) => {
                pqclean_scheme!("SPHINCS+-SHA2-128f-simple", pqcrypto_sphincsplus::sphincssha2128fsimple)
            }
            ParameterSet::SphincsPlus(SphincsPlusParams::Sha2_192f) => {
                pqclean_scheme!("SPHINCS+-SHA2-192f-simple", pqcrypto_sphincsplus::sphincssha2192fsimple)
            }
            ParameterSet::SphincsPlus(SphincsPlusParams::Sha2_256f) => {
                pqclean_scheme!("SPHINCS+-SHA2-256f-simple", pqcrypto_sphincsplus::sphincssha2256fsimple)
            }
            ParameterSet::SphincsPlus(SphincsPlusParams::Sha2_128s) => {
                pqclean_scheme!("SPHINCS+-SHA2-128s-simple", pqcrypto_sphincsplus::sphincssha2128ssimple)
            }
            ParameterSet::SphincsPlus(SphincsPlusParams::Sha2_192s) => {
                pqclean_scheme!("SPHINCS+-SHA2-192s-simple", pqcrypto_sphincsplus::sphincssha2192ssimple)
            }
            ParameterSet::SphincsPlus(SphincsPlusParams::Sha2_256s) => {
                pqclean_scheme!("SPHINCS+-SHA2-256s-simple", pqcrypto_sphincsplus::sphincssha2256ssimple)
            }
            _ => return None,
        };

        Some(scheme)
    }

    fn require_scheme(params: &ParameterSet) -> Result<SchemeTable> {
        Self::scheme_for(params).ok_or_else(|| {
            SignerError::provider(
                PROVIDER_NAME,
                format!("Parameter set {} is not a hash-based scheme", params),
            )
        })
    }
}

impl SignatureProvider for HashBasedProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn supports(&self, params: &ParameterSet) -> bool {
        matches!(params, ParameterSet::SlhDsa(_) | ParameterSet::SphincsPlus(_))
    }

    fn generate_key_pair(&self, params: &ParameterSet) -> Result<KeyPair> {
        Self::require_scheme(params)?.generate(PROVIDER_NAME, *params)
    }

    fn new_signer(&self, key_pair: KeyPair) -> Result<Box<dyn SignerHandle>> {
        Self::require_scheme(key_pair.params())?.signer(PROVIDER_NAME, key_pair)
    }
}
