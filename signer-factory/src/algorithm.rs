//! Algorithm and security tier enumerations
//!
//! Both enums are closed sets. They parse from the names used on the command
//! line and in config files, and serialize back to their canonical names.

use crate::error::{Result, SignerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Signature algorithm selectable for benchmarking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    /// ECDSA over the NIST prime curves
    Ecdsa,
    /// RSA PKCS#1 v1.5
    Rsa,
    /// ML-DSA (FIPS 204)
    MlDsa,
    /// CRYSTALS-Dilithium (round 3)
    Dilithium,
    /// SLH-DSA (FIPS 205)
    SlhDsa,
    /// SPHINCS+ "f" (fast signing) parameter sets
    SphincsPlusFast,
    /// SPHINCS+ "s" (small signature) parameter sets
    SphincsPlusSimple,
}

/// Broad family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    Classical,
    Lattice,
    HashBased,
}

impl Algorithm {
    /// Every algorithm, in declaration order
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Ecdsa,
        Algorithm::Rsa,
        Algorithm::MlDsa,
        Algorithm::Dilithium,
        Algorithm::SlhDsa,
        Algorithm::SphincsPlusFast,
        Algorithm::SphincsPlusSimple,
    ];

    /// Canonical display name
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Ecdsa => "ECDSA",
            Algorithm::Rsa => "RSA",
            Algorithm::MlDsa => "ML-DSA",
            Algorithm::Dilithium => "DILITHIUM",
            Algorithm::SlhDsa => "SLH-DSA",
            Algorithm::SphincsPlusFast => "SPHINCSPlus-f",
            Algorithm::SphincsPlusSimple => "SPHINCSPlus-s",
        }
    }

    pub const fn family(&self) -> AlgorithmFamily {
        match self {
            Algorithm::Ecdsa | Algorithm::Rsa => AlgorithmFamily::Classical,
            Algorithm::MlDsa | Algorithm::Dilithium => AlgorithmFamily::Lattice,
            Algorithm::SlhDsa | Algorithm::SphincsPlusFast | Algorithm::SphincsPlusSimple => {
                AlgorithmFamily::HashBased
            }
        }
    }

    /// Whether the algorithm is believed to resist quantum attacks
    pub const fn is_post_quantum(&self) -> bool {
        !matches!(self.family(), AlgorithmFamily::Classical)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SignerError;

    /// Case-insensitive; `-`, `_`, `+` and spaces are ignored so that
    /// `ML-DSA`, `mldsa` and `SPHINCS+-fast` all parse.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | '+' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "ecdsa" => Ok(Algorithm::Ecdsa),
            "rsa" => Ok(Algorithm::Rsa),
            "mldsa" => Ok(Algorithm::MlDsa),
            "dilithium" => Ok(Algorithm::Dilithium),
            "slhdsa" => Ok(Algorithm::SlhDsa),
            "sphincsplusf" | "sphincsplusfast" | "sphincsf" | "sphincsfast" => {
                Ok(Algorithm::SphincsPlusFast)
            }
            "sphincsplus" | "sphincspluss" | "sphincsplussimple" | "sphincs" | "sphincss"
            | "sphincssimple" => Ok(Algorithm::SphincsPlusSimple),
            _ => Err(SignerError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = SignerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.name().to_string()
    }
}

/// Security tier, ordered from weakest to strongest
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum SecurityLevel {
    /// ~128-bit classical security (NIST category 1)
    #[default]
    Low,
    /// ~192-bit classical security (NIST category 3)
    Medium,
    /// ~256-bit classical security (NIST category 5)
    High,
}

impl SecurityLevel {
    pub const ALL: [SecurityLevel; 3] = [SecurityLevel::Low, SecurityLevel::Medium, SecurityLevel::High];

    pub const fn name(&self) -> &'static str {
        match self {
            SecurityLevel::Low => "LOW",
            SecurityLevel::Medium => "MEDIUM",
            SecurityLevel::High => "HIGH",
        }
    }

    /// Ordinal used on the command line (1, 2, 3)
    pub const fn tier(&self) -> u8 {
        match self {
            SecurityLevel::Low => 1,
            SecurityLevel::Medium => 2,
            SecurityLevel::High => 3,
        }
    }

    /// Approximate bit security targeted by the tier
    pub const fn nist_bits(&self) -> u16 {
        match self {
            SecurityLevel::Low => 128,
            SecurityLevel::Medium => 192,
            SecurityLevel::High => 256,
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SecurityLevel {
    type Err = SignerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "1" | "128" => Ok(SecurityLevel::Low),
            "medium" | "2" | "192" => Ok(SecurityLevel::Medium),
            "high" | "3" | "256" => Ok(SecurityLevel::High),
            _ => Err(SignerError::InvalidSecurityLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for SecurityLevel {
    type Error = SignerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SecurityLevel> for String {
    fn from(level: SecurityLevel) -> Self {
        level.name().to_string()
    }
}
