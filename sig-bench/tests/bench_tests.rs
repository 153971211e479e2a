//! 基準測試端到端測試

use sig_bench::config::load_config;
use sig_bench::{BenchConfig, BenchReport, BenchRunner, Outcome};
use signer_factory::{Algorithm, SecurityLevel};
use std::io::Write;

fn quick_config(algorithms: Vec<Algorithm>, level: SecurityLevel) -> BenchConfig {
    BenchConfig {
        repetitions: 3,
        security_level: level,
        algorithms,
        message_size: 10,
        ..BenchConfig::default()
    }
}

#[test]
fn test_full_run_low_tier() {
    let runner = BenchRunner::new(quick_config(Algorithm::ALL.to_vec(), SecurityLevel::Low));
    let report = runner.run();

    assert_eq!(report.results.len(), Algorithm::ALL.len());
    assert_eq!(report.failed_count(), 0, "{}", report.summary());
    assert_eq!(report.verification_failures(), 0);

    for (result, algorithm) in report.results.iter().zip(Algorithm::ALL) {
        assert_eq!(result.algorithm, algorithm);
        let m = result.measurement().unwrap();
        assert_eq!(m.repetitions, 3);
        assert_eq!(m.verified, 3);
        assert!(m.signature_bytes > 0);
        assert!(m.public_key_bytes > 0);
        println!("✓ {} ({}): {:.3} ms total", algorithm, m.parameter_set, m.total_sign_ms);
    }
}

#[test]
fn test_parameter_sets_follow_security_level() {
    let runner = BenchRunner::new(quick_config(
        vec![Algorithm::Ecdsa, Algorithm::Dilithium, Algorithm::SphincsPlusFast],
        SecurityLevel::High,
    ));
    let report = runner.run();

    let names: Vec<&str> = report
        .results
        .iter()
        .map(|r| r.measurement().unwrap().parameter_set.as_str())
        .collect();
    assert_eq!(names, vec!["P-521", "dilithium5", "sha2-256f"]);
}

#[test]
fn test_report_file_round_trip() {
    let runner = BenchRunner::new(quick_config(vec![Algorithm::MlDsa], SecurityLevel::Medium));
    let report = runner.run();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    report.export_json(&path).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["security_level"], "MEDIUM");
    assert_eq!(raw["results"][0]["algorithm"], "ML-DSA");
    assert_eq!(raw["results"][0]["parameter_set"], "ML-DSA-65");
    assert_eq!(raw["results"][0]["public_key_bytes"], 1952);

    let loaded = BenchReport::load_json(&path).unwrap();
    assert_eq!(loaded.results.len(), 1);
    assert!(matches!(loaded.results[0].outcome, Outcome::Completed(_)));
}

#[test]
fn test_config_file_drives_run() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
repetitions = 2
security_level = "2"
algorithms = ["ecdsa", "slh-dsa"]
message_size = 32
verify_signatures = false
"#
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.security_level, SecurityLevel::Medium);

    let report = BenchRunner::new(config).run();
    let ecdsa = report.results[0].measurement().unwrap();
    let slh_dsa = report.results[1].measurement().unwrap();

    assert_eq!(report.message_size, 32);
    assert_eq!(ecdsa.parameter_set, "P-384");
    assert_eq!(ecdsa.verified, 0);
    assert_eq!(slh_dsa.parameter_set, "SLH-DSA-SHA2-192f");
    assert_eq!(slh_dsa.signature_bytes, 35_664);
}
