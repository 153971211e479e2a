//! 簽名器工廠集成測試

use signer_factory::params::{
    DilithiumParams, EcCurve, MlDsaParams, SlhDsaParams, SphincsPlusParams,
};
use signer_factory::providers::{ClassicalProvider, HashBasedProvider, LatticeProvider};
use signer_factory::{
    create_default_signer, create_signer, Algorithm, ParameterSet, ParameterTable, SecurityLevel,
    SignerError, SignerFactory, SignerHandle,
};
use std::thread;

fn sign_and_verify(signer: &dyn SignerHandle) {
    let message = r#"{"algorithm":"benchmark","iteration":7,"payload":"0a1b2c3d"}"#.as_bytes();

    let signature = signer.sign(message).unwrap();
    assert!(!signature.is_empty());
    assert!(
        signer.verify(message, &signature).unwrap(),
        "{} signature should verify",
        signer.algorithm_name()
    );

    // 篡改檢測
    let tampered = r#"{"algorithm":"benchmark","iteration":8,"payload":"0a1b2c3d"}"#.as_bytes();
    assert!(
        !signer.verify(tampered, &signature).unwrap(),
        "{} should reject tampered message",
        signer.algorithm_name()
    );
    println!(
        "✓ {}: pk={} bytes, sig={} bytes",
        signer.algorithm_name(),
        signer.public_key().len(),
        signature.len()
    );
}

fn check_all_algorithms_except_rsa(level: SecurityLevel) {
    for algorithm in Algorithm::ALL.into_iter().filter(|a| *a != Algorithm::Rsa) {
        let signer = create_signer(algorithm, level).unwrap();
        assert_eq!(signer.parameters().algorithm(), algorithm);
        sign_and_verify(signer.as_ref());
    }
}

#[test]
fn test_every_algorithm_low() {
    check_all_algorithms_except_rsa(SecurityLevel::Low);
    sign_and_verify(create_signer(Algorithm::Rsa, SecurityLevel::Low).unwrap().as_ref());
}

#[test]
fn test_every_algorithm_medium() {
    check_all_algorithms_except_rsa(SecurityLevel::Medium);
}

#[test]
fn test_every_algorithm_high() {
    check_all_algorithms_except_rsa(SecurityLevel::High);
}

// RSA-7680 / RSA-15360 密鑰生成需要數分鐘
#[test]
#[ignore]
fn test_rsa_medium() {
    let signer = create_signer(Algorithm::Rsa, SecurityLevel::Medium).unwrap();
    sign_and_verify(signer.as_ref());
    assert_eq!(signer.sign(b"x").unwrap().len(), 7680 / 8);
}

#[test]
#[ignore]
fn test_rsa_high() {
    let signer = create_signer(Algorithm::Rsa, SecurityLevel::High).unwrap();
    sign_and_verify(signer.as_ref());
    assert_eq!(signer.sign(b"x").unwrap().len(), 15360 / 8);
}

#[test]
fn test_reference_parameters() {
    let factory = SignerFactory::new();
    let cases = [
        (
            Algorithm::Rsa,
            SecurityLevel::Low,
            ParameterSet::Rsa {
                modulus_bits: 3072,
                public_exponent: 65_537,
            },
        ),
        (Algorithm::Ecdsa, SecurityLevel::High, ParameterSet::Ecdsa(EcCurve::P521)),
        (Algorithm::Ecdsa, SecurityLevel::Medium, ParameterSet::Ecdsa(EcCurve::P384)),
        (
            Algorithm::Dilithium,
            SecurityLevel::Medium,
            ParameterSet::Dilithium(DilithiumParams::Dilithium3),
        ),
        (
            Algorithm::SphincsPlusFast,
            SecurityLevel::High,
            ParameterSet::SphincsPlus(SphincsPlusParams::Sha2_256f),
        ),
        (
            Algorithm::SlhDsa,
            SecurityLevel::Low,
            ParameterSet::SlhDsa(SlhDsaParams::Sha2_128f),
        ),
        (Algorithm::MlDsa, SecurityLevel::High, ParameterSet::MlDsa(MlDsaParams::MlDsa87)),
    ];

    for (algorithm, level, expected) in cases {
        assert_eq!(factory.resolve(algorithm, level).unwrap(), expected);
    }
    assert!(factory.table().is_total());
}

#[test]
fn test_created_signer_reports_resolved_parameters() {
    let signer = create_signer(Algorithm::Ecdsa, SecurityLevel::Medium).unwrap();

    assert_eq!(signer.parameters(), &ParameterSet::Ecdsa(EcCurve::P384));
    assert_eq!(signer.algorithm_name(), "ECDSA P-384");
    // SEC1 未壓縮點: 0x04 || X || Y
    assert_eq!(signer.public_key().len(), 97);
}

#[test]
fn test_fresh_keys_per_call() {
    for algorithm in [Algorithm::Ecdsa, Algorithm::MlDsa, Algorithm::SlhDsa] {
        let first = create_signer(algorithm, SecurityLevel::Low).unwrap();
        let second = create_signer(algorithm, SecurityLevel::Low).unwrap();

        assert_ne!(
            first.public_key(),
            second.public_key(),
            "{} reused a key pair",
            algorithm
        );
    }
}

#[test]
fn test_signature_does_not_verify_under_other_key() {
    let first = create_signer(Algorithm::Dilithium, SecurityLevel::Low).unwrap();
    let second = create_signer(Algorithm::Dilithium, SecurityLevel::Low).unwrap();

    let signature = first.sign(b"cross-key check").unwrap();
    assert!(!second.verify(b"cross-key check", &signature).unwrap());
}

#[test]
fn test_undefined_pair_has_no_fallback() {
    let table = ParameterTable::standard()
        .entries()
        .filter(|(algorithm, level, _)| {
            !(*algorithm == Algorithm::Dilithium && *level == SecurityLevel::High)
        })
        .copied()
        .collect::<Vec<_>>();
    let factory = SignerFactory::new().with_table(ParameterTable::from_entries(table));

    assert!(!factory.table().is_total());
    match factory.create_signer(Algorithm::Dilithium, SecurityLevel::High) {
        Err(SignerError::UnsupportedConfiguration { algorithm, level }) => {
            assert_eq!(algorithm, Algorithm::Dilithium);
            assert_eq!(level, SecurityLevel::High);
        }
        Err(e) => panic!("Expected UnsupportedConfiguration, got {:?}", e),
        Ok(_) => panic!("Expected UnsupportedConfiguration, got a signer"),
    }

    // 其他等級不受影響
    assert!(factory
        .create_signer(Algorithm::Dilithium, SecurityLevel::Medium)
        .is_ok());
}

#[test]
fn test_unsupported_configuration_message() {
    let factory = SignerFactory::new().with_table(ParameterTable::from_entries(std::iter::empty()));
    let err = match factory.create_default_signer(Algorithm::SlhDsa) {
        Err(e) => e,
        Ok(_) => panic!("Expected an error from an empty table"),
    };

    let msg = err.to_string();
    assert!(msg.contains("SLH-DSA"));
    assert!(msg.contains("LOW"));
}

#[test]
fn test_provider_error_for_missing_primitive() {
    let classical = SignerFactory::with_provider(ClassicalProvider::new());
    let lattice = SignerFactory::with_provider(LatticeProvider::new());
    let hash_based = SignerFactory::with_provider(HashBasedProvider::new());

    let cases: [(&dyn Fn() -> signer_factory::Result<Box<dyn SignerHandle>>, &str); 3] = [
        (&|| classical.create_signer(Algorithm::MlDsa, SecurityLevel::Low), "classical"),
        (&|| lattice.create_signer(Algorithm::SlhDsa, SecurityLevel::Low), "lattice"),
        (&|| hash_based.create_signer(Algorithm::Ecdsa, SecurityLevel::Low), "hash-based"),
    ];

    for (create, expected) in cases {
        match create() {
            Err(SignerError::ProviderError { provider, message }) => {
                assert_eq!(provider, expected);
                println!("✓ {} rejected: {}", provider, message);
            }
            Err(e) => panic!("Expected ProviderError, got {:?}", e),
            Ok(_) => panic!("Expected ProviderError, got a signer"),
        }
    }
}

#[test]
fn test_single_family_provider_serves_its_own() {
    let factory = SignerFactory::with_provider(LatticeProvider::new());
    let signer = factory.create_signer(Algorithm::MlDsa, SecurityLevel::Medium).unwrap();

    assert_eq!(signer.algorithm_name(), "ML-DSA-65");
    sign_and_verify(signer.as_ref());
}

#[test]
fn test_custom_table_override() {
    // 將 ECDSA LOW 改為 P-384
    let table = ParameterTable::standard().with_entry(
        Algorithm::Ecdsa,
        SecurityLevel::Low,
        ParameterSet::Ecdsa(EcCurve::P384),
    );
    let factory = SignerFactory::new().with_table(table);

    let signer = factory.create_default_signer(Algorithm::Ecdsa).unwrap();
    assert_eq!(signer.parameters(), &ParameterSet::Ecdsa(EcCurve::P384));
}

#[test]
fn test_custom_table_with_unusable_rsa_entry() {
    // 偶數指數與過短模數都不應進入密鑰生成
    for (modulus_bits, public_exponent) in [(1024, 2), (64, 65537)] {
        let table = ParameterTable::standard().with_entry(
            Algorithm::Rsa,
            SecurityLevel::Low,
            ParameterSet::Rsa {
                modulus_bits,
                public_exponent,
            },
        );
        let factory = SignerFactory::new().with_table(table);

        match factory.create_default_signer(Algorithm::Rsa) {
            Err(SignerError::ProviderError { provider, message }) => {
                assert_eq!(provider, "classical");
                println!("✓ RSA-{} e={} rejected: {}", modulus_bits, public_exponent, message);
            }
            Err(e) => panic!("Expected ProviderError, got {:?}", e),
            Ok(_) => panic!("Expected ProviderError, got a signer"),
        }
    }
}

#[test]
fn test_default_signer_is_low_tier() {
    let signer = create_default_signer(Algorithm::SphincsPlusSimple).unwrap();
    assert_eq!(
        signer.parameters(),
        &ParameterSet::SphincsPlus(SphincsPlusParams::Sha2_128s)
    );
}

#[test]
fn test_large_and_binary_messages() {
    let signer = create_signer(Algorithm::MlDsa, SecurityLevel::Low).unwrap();

    let long_message = "Very long message ".repeat(1000);
    let signature = signer.sign(long_message.as_bytes()).unwrap();
    assert!(signer.verify(long_message.as_bytes(), &signature).unwrap());

    let binary: Vec<u8> = (0..=255u8).collect();
    let signature = signer.sign(&binary).unwrap();
    assert!(signer.verify(&binary, &signature).unwrap());
}

#[test]
fn test_parallel_creation() {
    let handles: Vec<_> = [Algorithm::Ecdsa, Algorithm::MlDsa, Algorithm::Dilithium, Algorithm::SphincsPlusFast]
        .into_iter()
        .map(|algorithm| {
            thread::spawn(move || {
                let signer = create_signer(algorithm, SecurityLevel::Low).unwrap();
                let signature = signer.sign(b"parallel").unwrap();
                signer.verify(b"parallel", &signature).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_shared_factory_across_threads() {
    let factory = std::sync::Arc::new(SignerFactory::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let factory = factory.clone();
            thread::spawn(move || {
                factory
                    .create_signer(Algorithm::Ecdsa, SecurityLevel::Low)
                    .unwrap()
                    .public_key()
                    .to_vec()
            })
        })
        .collect();

    let keys: Vec<Vec<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_algorithm_serde_names() {
    let json = serde_json::to_string(&[Algorithm::SphincsPlusFast, Algorithm::MlDsa]).unwrap();
    assert_eq!(json, r#"["SPHINCSPlus-f","ML-DSA"]"#);

    let level: SecurityLevel = serde_json::from_str(r#""high""#).unwrap();
    assert_eq!(level, SecurityLevel::High);

    assert!(serde_json::from_str::<Algorithm>(r#""Ed448""#).is_err());
}
