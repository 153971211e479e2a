//! Parameter sets and the (algorithm, security level) lookup table
//!
//! The table is the only place that decides which concrete parameters a tier
//! maps to. Adding an algorithm or tier is a table edit:
//!
//! | Algorithm       | LOW               | MEDIUM            | HIGH              |
//! |-----------------|-------------------|-------------------|-------------------|
//! | ECDSA           | P-256             | P-384             | P-521             |
//! | RSA (e = 65537) | 3072 bits         | 7680 bits         | 15360 bits        |
//! | ML-DSA          | ML-DSA-44         | ML-DSA-65         | ML-DSA-87         |
//! | Dilithium       | dilithium2        | dilithium3        | dilithium5        |
//! | SLH-DSA         | SLH-DSA-SHA2-128f | SLH-DSA-SHA2-192f | SLH-DSA-SHA2-256f |
//! | SPHINCS+ fast   | sha2-128f         | sha2-192f         | sha2-256f         |
//! | SPHINCS+ simple | sha2-128s         | sha2-192s         | sha2-256s         |

use crate::algorithm::{Algorithm, SecurityLevel};
use crate::error::{Result, SignerError};
use std::fmt;

/// RSA public exponent F4
pub const RSA_F4: u32 = 65_537;

/// NIST prime curve used for ECDSA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcCurve {
    P256,
    P384,
    P521,
}

impl EcCurve {
    pub const fn name(&self) -> &'static str {
        match self {
            EcCurve::P256 => "P-256",
            EcCurve::P384 => "P-384",
            EcCurve::P521 => "P-521",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MlDsaParams {
    MlDsa44,
    MlDsa65,
    MlDsa87,
}

impl MlDsaParams {
    pub const fn name(&self) -> &'static str {
        match self {
            MlDsaParams::MlDsa44 => "ML-DSA-44",
            MlDsaParams::MlDsa65 => "ML-DSA-65",
            MlDsaParams::MlDsa87 => "ML-DSA-87",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DilithiumParams {
    Dilithium2,
    Dilithium3,
    Dilithium5,
}

impl DilithiumParams {
    pub const fn name(&self) -> &'static str {
        match self {
            DilithiumParams::Dilithium2 => "dilithium2",
            DilithiumParams::Dilithium3 => "dilithium3",
            DilithiumParams::Dilithium5 => "dilithium5",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlhDsaParams {
    Sha2_128f,
    Sha2_192f,
    Sha2_256f,
}

impl SlhDsaParams {
    pub const fn name(&self) -> &'static str {
        match self {
            SlhDsaParams::Sha2_128f => "SLH-DSA-SHA2-128f",
            SlhDsaParams::Sha2_192f => "SLH-DSA-SHA2-192f",
            SlhDsaParams::Sha2_256f => "SLH-DSA-SHA2-256f",
        }
    }
}

/// SPHINCS+ (round 3, "simple" tweakable hash) parameter sets over SHA-2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SphincsPlusParams {
    Sha2_128f,
    Sha2_192f,
    Sha2_256f,
    Sha2_128s,
    Sha2_192s,
    Sha2_256s,
}

impl SphincsPlusParams {
    pub const fn name(&self) -> &'static str {
        match self {
            SphincsPlusParams::Sha2_128f => "sha2-128f",
            SphincsPlusParams::Sha2_192f => "sha2-192f",
            SphincsPlusParams::Sha2_256f => "sha2-256f",
            SphincsPlusParams::Sha2_128s => "sha2-128s",
            SphincsPlusParams::Sha2_192s => "sha2-192s",
            SphincsPlusParams::Sha2_256s => "sha2-256s",
        }
    }

    /// `f` variants trade signature size for signing speed
    pub const fn is_fast(&self) -> bool {
        matches!(
            self,
            SphincsPlusParams::Sha2_128f | SphincsPlusParams::Sha2_192f | SphincsPlusParams::Sha2_256f
        )
    }
}

/// One concrete, fully specified parameter choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterSet {
    Ecdsa(EcCurve),
    Rsa { modulus_bits: usize, public_exponent: u32 },
    MlDsa(MlDsaParams),
    Dilithium(DilithiumParams),
    SlhDsa(SlhDsaParams),
    SphincsPlus(SphincsPlusParams),
}

impl ParameterSet {
    /// Human readable parameter name, e.g. `P-384`, `RSA-3072`, `dilithium3`
    pub fn name(&self) -> String {
        match self {
            ParameterSet::Ecdsa(curve) => curve.name().to_string(),
            ParameterSet::Rsa { modulus_bits, .. } => format!("RSA-{}", modulus_bits),
            ParameterSet::MlDsa(p) => p.name().to_string(),
            ParameterSet::Dilithium(p) => p.name().to_string(),
            ParameterSet::SlhDsa(p) => p.name().to_string(),
            ParameterSet::SphincsPlus(p) => p.name().to_string(),
        }
    }

    /// Algorithm this parameter set instantiates
    pub fn algorithm(&self) -> Algorithm {
        match self {
            ParameterSet::Ecdsa(_) => Algorithm::Ecdsa,
            ParameterSet::Rsa { .. } => Algorithm::Rsa,
            ParameterSet::MlDsa(_) => Algorithm::MlDsa,
            ParameterSet::Dilithium(_) => Algorithm::Dilithium,
            ParameterSet::SlhDsa(_) => Algorithm::SlhDsa,
            ParameterSet::SphincsPlus(p) if p.is_fast() => Algorithm::SphincsPlusFast,
            ParameterSet::SphincsPlus(_) => Algorithm::SphincsPlusSimple,
        }
    }

    const fn rsa(modulus_bits: usize) -> Self {
        ParameterSet::Rsa {
            modulus_bits,
            public_exponent: RSA_F4,
        }
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Canonical mapping, one row per (algorithm, level) pair
const STANDARD_ENTRIES: [(Algorithm, SecurityLevel, ParameterSet); 21] = [
    (Algorithm::Ecdsa, SecurityLevel::Low, ParameterSet::Ecdsa(EcCurve::P256)),
    (Algorithm::Ecdsa, SecurityLevel::Medium, ParameterSet::Ecdsa(EcCurve::P384)),
    (Algorithm::Ecdsa, SecurityLevel::High, ParameterSet::Ecdsa(EcCurve::P521)),
    (Algorithm::Rsa, SecurityLevel::Low, ParameterSet::rsa(3072)),
    (Algorithm::Rsa, SecurityLevel::Medium, ParameterSet::rsa(7680)),
    (Algorithm::Rsa, SecurityLevel::High, ParameterSet::rsa(15360)),
    (Algorithm::MlDsa, SecurityLevel::Low, ParameterSet::MlDsa(MlDsaParams::MlDsa44)),
    (Algorithm::MlDsa, SecurityLevel::Medium, ParameterSet::MlDsa(MlDsaParams::MlDsa65)),
    (Algorithm::MlDsa, SecurityLevel::High, ParameterSet::MlDsa(MlDsaParams::MlDsa87)),
    (Algorithm::Dilithium, SecurityLevel::Low, ParameterSet::Dilithium(DilithiumParams::Dilithium2)),
    (Algorithm::Dilithium, SecurityLevel::Medium, ParameterSet::Dilithium(DilithiumParams::Dilithium3)),
    (Algorithm::Dilithium, SecurityLevel::High, ParameterSet::Dilithium(DilithiumParams::Dilithium5)),
    (Algorithm::SlhDsa, SecurityLevel::Low, ParameterSet::SlhDsa(SlhDsaParams::Sha2_128f)),
    (Algorithm::SlhDsa, SecurityLevel::Medium, ParameterSet::SlhDsa(SlhDsaParams::Sha2_192f)),
    (Algorithm::SlhDsa, SecurityLevel::High, ParameterSet::SlhDsa(SlhDsaParams::Sha2_256f)),
    (Algorithm::SphincsPlusFast, SecurityLevel::Low, ParameterSet::SphincsPlus(SphincsPlusParams::Sha2_128f)),
    (Algorithm::SphincsPlusFast, SecurityLevel::Medium, ParameterSet::SphincsPlus(SphincsPlusParams::Sha2_192f)),
    (Algorithm::SphincsPlusFast, SecurityLevel::High, ParameterSet::SphincsPlus(SphincsPlusParams::Sha2_256f)),
    (Algorithm::SphincsPlusSimple, SecurityLevel::Low, ParameterSet::SphincsPlus(SphincsPlusParams::Sha2_128s)),
    (Algorithm::SphincsPlusSimple, SecurityLevel::Medium, ParameterSet::SphincsPlus(SphincsPlusParams::Sha2_192s)),
    (Algorithm::SphincsPlusSimple, SecurityLevel::High, ParameterSet::SphincsPlus(SphincsPlusParams::Sha2_256s)),
];

/// Lookup table from (algorithm, level) to a parameter set
///
/// `standard()` is total over the cross product. Custom tables built with
/// `from_entries` may be partial; a miss is always an
/// `UnsupportedConfiguration` error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterTable {
    entries: Vec<(Algorithm, SecurityLevel, ParameterSet)>,
}

impl ParameterTable {
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_ENTRIES)
    }

    /// Build a table from explicit rows. A later row for the same pair
    /// replaces the earlier one.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Algorithm, SecurityLevel, ParameterSet)>,
    {
        entries
            .into_iter()
            .fold(Self { entries: Vec::new() }, |table, (algorithm, level, params)| {
                table.with_entry(algorithm, level, params)
            })
    }

    /// Add or override the parameters for one pair
    pub fn with_entry(mut self, algorithm: Algorithm, level: SecurityLevel, params: ParameterSet) -> Self {
        match self
            .entries
            .iter_mut()
            .find(|(a, l, _)| *a == algorithm && *l == level)
        {
            Some(entry) => entry.2 = params,
            None => self.entries.push((algorithm, level, params)),
        }
        self
    }

    /// Resolve a pair to its parameter set
    ///
    /// # Errors
    /// - `UnsupportedConfiguration` if the pair has no entry
    pub fn resolve(&self, algorithm: Algorithm, level: SecurityLevel) -> Result<ParameterSet> {
        self.entries
            .iter()
            .find(|(a, l, _)| *a == algorithm && *l == level)
            .map(|(_, _, params)| *params)
            .ok_or(SignerError::UnsupportedConfiguration { algorithm, level })
    }

    /// True when every (algorithm, level) pair is mapped
    pub fn is_total(&self) -> bool {
        Algorithm::ALL.iter().all(|&algorithm| {
            SecurityLevel::ALL
                .iter()
                .all(|&level| self.resolve(algorithm, level).is_ok())
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = &(Algorithm, SecurityLevel, ParameterSet)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ParameterTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_total() {
        let table = ParameterTable::standard();
        assert!(table.is_total());
        assert_eq!(table.len(), Algorithm::ALL.len() * SecurityLevel::ALL.len());
    }

    #[test]
    fn test_reference_entries() {
        let table = ParameterTable::standard();

        assert_eq!(
            table.resolve(Algorithm::Rsa, SecurityLevel::Low).unwrap(),
            ParameterSet::Rsa {
                modulus_bits: 3072,
                public_exponent: 65537
            }
        );
        assert_eq!(
            table.resolve(Algorithm::Ecdsa, SecurityLevel::Medium).unwrap(),
            ParameterSet::Ecdsa(EcCurve::P384)
        );
        assert_eq!(
            table.resolve(Algorithm::Ecdsa, SecurityLevel::High).unwrap().name(),
            "P-521"
        );
        assert_eq!(
            table.resolve(Algorithm::Dilithium, SecurityLevel::Medium).unwrap().name(),
            "dilithium3"
        );
        assert_eq!(
            table.resolve(Algorithm::SphincsPlusFast, SecurityLevel::High).unwrap().name(),
            "sha2-256f"
        );
        assert_eq!(
            table.resolve(Algorithm::Rsa, SecurityLevel::High).unwrap().name(),
            "RSA-15360"
        );
    }

    #[test]
    fn test_entries_belong_to_their_algorithm() {
        for (algorithm, _, params) in ParameterTable::standard().entries() {
            assert_eq!(params.algorithm(), *algorithm, "{} mapped under {}", params, algorithm);
        }
    }

    #[test]
    fn test_partial_table_miss_is_unsupported() {
        let table = ParameterTable::from_entries([(
            Algorithm::Ecdsa,
            SecurityLevel::Low,
            ParameterSet::Ecdsa(EcCurve::P256),
        )]);

        assert!(!table.is_total());
        match table.resolve(Algorithm::Ecdsa, SecurityLevel::High) {
            Err(SignerError::UnsupportedConfiguration { algorithm, level }) => {
                assert_eq!(algorithm, Algorithm::Ecdsa);
                assert_eq!(level, SecurityLevel::High);
            }
            other => panic!("Expected UnsupportedConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_with_entry_overrides() {
        let table = ParameterTable::standard().with_entry(
            Algorithm::Ecdsa,
            SecurityLevel::Low,
            ParameterSet::Ecdsa(EcCurve::P384),
        );

        assert_eq!(table.len(), 21);
        assert_eq!(
            table.resolve(Algorithm::Ecdsa, SecurityLevel::Low).unwrap(),
            ParameterSet::Ecdsa(EcCurve::P384)
        );
    }
}
