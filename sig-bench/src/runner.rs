//! 基準測試執行模塊
//!
//! 對每個選中的算法：
//! 1. 通過簽名器工廠創建簽名器（單獨計時密鑰生成）
//! 2. 對所有隨機消息簽名，只計時 `sign` 調用
//! 3. 計時結束後逐一驗證簽名（可選）
//!
//! 單個算法失敗只記錄為錯誤條目，不中斷整個運行。

use crate::error::Result;
use crate::report::BenchReport;
use crate::types::{
    as_millis_f64, AlgorithmMeasurement, AlgorithmReport, BenchConfig, Outcome, SignTimings,
};
use rand::RngCore;
use signer_factory::{Algorithm, SignerFactory, SignerHandle};
use std::time::Instant;
use tracing::{debug, info, warn};

/// 基準測試執行器
pub struct BenchRunner {
    config: BenchConfig,
    factory: SignerFactory,
}

impl BenchRunner {
    /// 使用標準參數表和默認提供者創建執行器
    pub fn new(config: BenchConfig) -> Self {
        Self::with_factory(config, SignerFactory::new())
    }

    pub fn with_factory(config: BenchConfig, factory: SignerFactory) -> Self {
        Self { config, factory }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// 生成 `repetitions` 條長度為 `message_size` 的隨機消息
    pub fn generate_messages(&self) -> Vec<Vec<u8>> {
        let mut rng = rand::thread_rng();

        (0..self.config.repetitions)
            .map(|_| {
                let mut message = vec![0u8; self.config.message_size];
                rng.fill_bytes(&mut message);
                message
            })
            .collect()
    }

    /// 執行完整的基準測試
    ///
    /// 所有算法使用同一組消息
    pub fn run(&self) -> BenchReport {
        let messages = self.generate_messages();
        let mut report = BenchReport::new(&self.config);

        info!(
            "📊 Benchmarking {} algorithm(s) at {}: {} messages of {} bytes",
            self.config.algorithms.len(),
            self.config.security_level,
            messages.len(),
            self.config.message_size
        );

        for &algorithm in &self.config.algorithms {
            let outcome = match self.bench_algorithm(algorithm, &messages) {
                Ok(measurement) => {
                    info!(
                        "   ✅ {} total time: {:.3} ms ({:.3} ms/sig)",
                        algorithm, measurement.total_sign_ms, measurement.mean_sign_ms
                    );
                    Outcome::Completed(measurement)
                }
                Err(e) => {
                    warn!("   ❌ {} failed: {}", algorithm, e);
                    Outcome::Failed {
                        error: e.to_string(),
                    }
                }
            };

            report.push(AlgorithmReport {
                algorithm,
                security_level: self.config.security_level,
                outcome,
            });
        }

        report
    }

    /// 對單個算法執行測量
    ///
    /// # 錯誤
    /// - `Signer`: 簽名器創建失敗或簽名失敗
    pub fn bench_algorithm(
        &self,
        algorithm: Algorithm,
        messages: &[Vec<u8>],
    ) -> Result<AlgorithmMeasurement> {
        let level = self.config.security_level;

        let started = Instant::now();
        let signer = self.factory.create_signer(algorithm, level)?;
        let keygen = started.elapsed();
        debug!("{} signer ready in {:?}", signer.algorithm_name(), keygen);

        let mut timings = SignTimings::default();
        let mut signatures = Vec::with_capacity(messages.len());
        for message in messages {
            let started = Instant::now();
            let signature = signer.sign(message)?;
            timings.record(started.elapsed());
            signatures.push(signature);
        }

        let (verified, verification_failures) = if self.config.verify_signatures {
            verify_all(signer.as_ref(), messages, &signatures)
        } else {
            (0, 0)
        };

        Ok(AlgorithmMeasurement {
            parameter_set: signer.parameters().name(),
            algorithm_name: signer.algorithm_name().to_string(),
            repetitions: timings.count,
            keygen_ms: as_millis_f64(keygen),
            total_sign_ms: as_millis_f64(timings.total),
            mean_sign_ms: as_millis_f64(timings.mean()),
            min_sign_ms: as_millis_f64(timings.min),
            max_sign_ms: as_millis_f64(timings.max),
            signature_bytes: signatures.last().map_or(0, Vec::len),
            public_key_bytes: signer.public_key().len(),
            verified,
            verification_failures,
        })
    }
}

/// 驗證所有簽名，返回 (驗證數, 失敗數)
fn verify_all(signer: &dyn SignerHandle, messages: &[Vec<u8>], signatures: &[Vec<u8>]) -> (usize, usize) {
    let mut failures = 0;

    for (index, (message, signature)) in messages.iter().zip(signatures).enumerate() {
        match signer.verify(message, signature) {
            Ok(true) => {}
            Ok(false) => {
                warn!("{} signature #{} did not verify", signer.algorithm_name(), index);
                failures += 1;
            }
            Err(e) => {
                warn!("{} signature #{} verification error: {}", signer.algorithm_name(), index, e);
                failures += 1;
            }
        }
    }

    (signatures.len(), failures)
}
