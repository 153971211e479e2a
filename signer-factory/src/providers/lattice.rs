//! Lattice-based post-quantum signatures: ML-DSA and Dilithium
//!
//! # About the two families
//!
//! ML-DSA (FIPS 204, published 2024) is the standardised form of
//! CRYSTALS-Dilithium. The round-3 Dilithium parameter sets are kept so the
//! benchmark can compare the submission against the standard.
//!
//! | Tier   | ML-DSA    | Dilithium  | Public key | Signature    |
//! |--------|-----------|------------|------------|--------------|
//! | LOW    | ML-DSA-44 | dilithium2 | 1,312 B    | ~2,420 B     |
//! | MEDIUM | ML-DSA-65 | dilithium3 | 1,952 B    | ~3,300 B     |
//! | HIGH   | ML-DSA-87 | dilithium5 | 2,592 B    | ~4,600 B     |
//!
//! Both sign with the scheme's internal SHAKE-based hashing and produce
//! detached signatures.

use super::encoded::{pqclean_scheme, SchemeTable};
use crate::error::{Result, SignerError};
use crate::keys::KeyPair;
use crate::params::{DilithiumParams, MlDsaParams, ParameterSet};
use crate::traits::{SignatureProvider, SignerHandle};

const PROVIDER_NAME: &str = "lattice";

/// Provider for ML-DSA (`pqcrypto-mldsa`) and Dilithium (`pqcrypto-dilithium`)
#[derive(Debug, Default, Clone, Copy)]
pub struct LatticeProvider;

impl LatticeProvider {
    pub fn new() -> Self {
        Self
    }

    fn scheme_for(params: &ParameterSet) -> Option<SchemeTable> {
        let scheme = match params {
            ParameterSet::MlDsa(MlDsaParams::MlDsa44) => {
                pqclean_scheme!("ML-DSA-44", pqcrypto_mldsa::mldsa44)
            }
            ParameterSet::MlDsa(MlDsaParams::MlDsa65) => {
                pqclean_scheme!("ML-DSA-65", pqcrypto_mldsa::mldsa65)
            }
            ParameterSet::MlDsa(MlDsaParams::MlDsa87) => {
                pqclean_scheme!("ML-DSA-87", pqcrypto_mldsa::mldsa87)
            }
            ParameterSet::Dilithium(DilithiumParams::Dilithium2) => {
                pqclean_scheme!("Dilithium2", pqcrypto_dilithium::dilithium2)
            }
            ParameterSet::Dilithium(DilithiumParams::Dilithium3) => {
                pqclean_scheme!("Dilithium3", pqcrypto_dilithium::dilithium3)
            }
            ParameterSet::Dilithium(DilithiumParams::Dilithium5) => {
                pqclean_scheme!("Dilithium5", pqcrypto_dilithium::dilithium5)
            }
            _ => return None,
        };

        Some(scheme)
    }

    fn require_scheme(params: &ParameterSet) -> Result<SchemeTable> {
        Self::scheme_for(params).ok_or_else(|| {
            SignerError::provider(
                PROVIDER_NAME,
                format!("Parameter set {} is not a lattice scheme", params),
            )
        })
    }
}

impl SignatureProvider for LatticeProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn supports(&self, params: &ParameterSet) -> bool {
        matches!(params, ParameterSet::MlDsa(_) | ParameterSet::Dilithium(_))
    }

    fn generate_key_pair(&self, params: &ParameterSet) -> Result<KeyPair> {
        Self::require_scheme(params)?.generate(PROVIDER_NAME, *params)
    }

    fn new_signer(&self, key_pair: KeyPair) -> Result<Box<dyn SignerHandle>> {
        Self::require_scheme(key_pair.params())?.signer(PROVIDER_NAME, key_pair)
    }
}
