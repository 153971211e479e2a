//! Signer factory for signature benchmarking
//!
//! Maps a signature algorithm and a security tier to a concrete parameter
//! set, generates a fresh key pair and returns a signing context ready to
//! sign. Classical (ECDSA, RSA) and post-quantum (ML-DSA, Dilithium,
//! SLH-DSA, SPHINCS+) schemes share one interface.
//!
//! # Quick Start
//!
//! ```rust
//! use signer_factory::{create_signer, Algorithm, SecurityLevel};
//!
//! // Fresh ML-DSA-65 key pair
//! let signer = create_signer(Algorithm::MlDsa, SecurityLevel::Medium).unwrap();
//!
//! // Sign message
//! let message = b"Benchmark payload";
//! let signature = signer.sign(message).unwrap();
//!
//! // Verify signature
//! assert!(signer.verify(message, &signature).unwrap());
//! ```

pub mod algorithm;
pub mod error;
pub mod factory;
pub mod keys;
pub mod params;
pub mod providers;
pub mod traits;

// Re-export commonly used types
pub use algorithm::{Algorithm, AlgorithmFamily, SecurityLevel};
pub use error::{Result, SignerError};
pub use factory::{create_default_signer, create_signer, SignerFactory};
pub use keys::KeyPair;
pub use params::{ParameterSet, ParameterTable};
pub use providers::DefaultProvider;
pub use traits::{SignatureProvider, SignerHandle};
