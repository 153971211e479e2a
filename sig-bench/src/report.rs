//! 基準測試報告模塊
//!
//! 提供報告的終端摘要、JSON 導出和加載。
//!
//! # 示例
//! ```no_run
//! use sig_bench::{BenchConfig, BenchRunner};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let report = BenchRunner::new(BenchConfig::default()).run();
//! println!("{}", report.summary());
//! report.export_json("bench_report.json")?;
//! # Ok(())
//! # }
//! ```

use crate::error::{BenchError, Result};
use crate::types::{AlgorithmReport, BenchConfig, Outcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use signer_factory::SecurityLevel;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

/// 一次完整運行的報告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    /// 報告生成時間（UTC）
    pub timestamp: DateTime<Utc>,

    pub security_level: SecurityLevel,

    pub repetitions: usize,

    pub message_size: usize,

    /// 按配置順序排列的每個算法結果
    pub results: Vec<AlgorithmReport>,
}

impl BenchReport {
    pub fn new(config: &BenchConfig) -> Self {
        Self {
            timestamp: Utc::now(),
            security_level: config.security_level,
            repetitions: config.repetitions,
            message_size: config.message_size,
            results: Vec::with_capacity(config.algorithms.len()),
        }
    }

    pub fn push(&mut self, result: AlgorithmReport) {
        self.results.push(result);
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failed()).count()
    }

    /// 驗證失敗的簽名總數
    pub fn verification_failures(&self) -> usize {
        self.results
            .iter()
            .filter_map(AlgorithmReport::measurement)
            .map(|m| m.verification_failures)
            .sum()
    }

    /// 人類可讀的摘要表格（與 `Display` 輸出相同）
    pub fn summary(&self) -> String {
        self.to_string()
    }

    /// 將報告導出為美化的 JSON 文件
    ///
    /// # 錯誤
    /// - 序列化失敗: 返回 `Serialization` 錯誤
    /// - 寫入失敗: 返回 `Io` 錯誤
    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        info!("Exporting report to JSON: {}", path.display());

        let json = serde_json::to_string_pretty(self)?;
        let json_len = json.len();

        fs::write(path, json).map_err(|e| {
            BenchError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write report to {}: {}", path.display(), e),
            ))
        })?;

        info!("Report exported successfully: {} bytes", json_len);

        Ok(())
    }

    /// 從 JSON 文件加載報告
    ///
    /// # 錯誤
    /// - 文件不存在: 返回 `Config` 錯誤
    /// - JSON 格式錯誤: 返回 `Serialization` 錯誤
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BenchError::Config(format!(
                "Report file not found: {}",
                path.display()
            )));
        }

        let json = fs::read_to_string(path)?;
        let report: BenchReport = serde_json::from_str(&json).map_err(|e| {
            BenchError::Serialization(format!("Failed to parse report JSON: {}", e))
        })?;

        Ok(report)
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Signature benchmark @ {} ({} x {} bytes, {})",
            self.security_level,
            self.repetitions,
            self.message_size,
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(
            f,
            "{:<14} {:<28} {:>11} {:>11} {:>11} {:>11} {:>11} {:>9} {:>9}",
            "Algorithm", "Parameters", "Keygen ms", "Total ms", "Mean ms", "Min ms", "Max ms", "Sig B", "PK B"
        )?;

        for result in &self.results {
            match &result.outcome {
                Outcome::Completed(m) => {
                    writeln!(
                        f,
                        "{:<14} {:<28} {:>11.3} {:>11.3} {:>11.3} {:>11.3} {:>11.3} {:>9} {:>9}",
                        result.algorithm.name(),
                        m.algorithm_name,
                        m.keygen_ms,
                        m.total_sign_ms,
                        m.mean_sign_ms,
                        m.min_sign_ms,
                        m.max_sign_ms,
                        m.signature_bytes,
                        m.public_key_bytes
                    )?;
                    if m.verification_failures > 0 {
                        writeln!(
                            f,
                            "{:<14} !! {} of {} signatures failed verification",
                            "", m.verification_failures, m.verified
                        )?;
                    }
                }
                Outcome::Failed { error } => {
                    writeln!(f, "{:<14} FAILED: {}", result.algorithm.name(), error)?;
                }
            }
        }

        Ok(())
    }
}
