//! Key material handed from a provider's key generator to its signer
//! constructor

use crate::params::ParameterSet;
use rsa::RsaPrivateKey;
use sha3::{Digest, Sha3_256};
use std::fmt;
use zeroize::Zeroizing;

/// Private half of a key pair
///
/// Classical keys keep the library's typed key. Post-quantum keys keep the
/// library's byte encoding and are wiped on drop.
pub enum PrivateKey {
    P256(p256::ecdsa::SigningKey),
    P384(p384::ecdsa::SigningKey),
    P521(p521::ecdsa::SigningKey),
    Rsa(Box<RsaPrivateKey>),
    Encoded(Zeroizing<Vec<u8>>),
}

impl PrivateKey {
    pub fn kind(&self) -> &'static str {
        match self {
            PrivateKey::P256(_) => "ecdsa-p256",
            PrivateKey::P384(_) => "ecdsa-p384",
            PrivateKey::P521(_) => "ecdsa-p521",
            PrivateKey::Rsa(_) => "rsa",
            PrivateKey::Encoded(_) => "encoded",
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey({}, <redacted>)", self.kind())
    }
}

/// Freshly generated asymmetric key pair bound to its parameter set
#[derive(Debug)]
pub struct KeyPair {
    params: ParameterSet,
    public_key: Vec<u8>,
    private_key: PrivateKey,
}

impl KeyPair {
    pub fn new(params: ParameterSet, public_key: Vec<u8>, private_key: PrivateKey) -> Self {
        Self {
            params,
            public_key,
            private_key,
        }
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Encoded public key (SEC1 uncompressed point, PKCS#1 DER, or the
    /// post-quantum library's raw encoding)
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Short hex identifier of the public key, for logs
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.public_key)
    }

    pub fn into_parts(self) -> (ParameterSet, Vec<u8>, PrivateKey) {
        (self.params, self.public_key, self.private_key)
    }
}

/// First 8 bytes of SHA3-256 over the public key, hex encoded
pub fn fingerprint(public_key: &[u8]) -> String {
    let digest = Sha3_256::digest(public_key);
    hex::encode(&digest[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DilithiumParams, ParameterSet};

    #[test]
    fn test_fingerprint_is_stable_and_short() {
        let a = fingerprint(b"public key bytes");
        let b = fingerprint(b"public key bytes");
        let c = fingerprint(b"other key bytes");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn test_private_key_debug_is_redacted() {
        let key_pair = KeyPair::new(
            ParameterSet::Dilithium(DilithiumParams::Dilithium2),
            vec![1, 2, 3],
            PrivateKey::Encoded(Zeroizing::new(vec![0xAA; 32])),
        );

        let debug = format!("{:?}", key_pair);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("170"));
    }
}
