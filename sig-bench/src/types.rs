//! 共享數據類型定義
//!
//! 基準測試配置與每個算法的測量結果

use serde::{Deserialize, Serialize};
use signer_factory::{Algorithm, SecurityLevel};
use std::path::PathBuf;
use std::time::Duration;

/// 基準測試運行配置
///
/// 可由 TOML 文件、`SIGBENCH_*` 環境變量和命令行參數逐層覆蓋。
/// 缺少的字段使用默認值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// 每個算法簽名的消息數量
    pub repetitions: usize,

    /// 安全等級（LOW / MEDIUM / HIGH）
    pub security_level: SecurityLevel,

    /// 參與測試的算法
    pub algorithms: Vec<Algorithm>,

    /// 隨機消息長度（字節）
    pub message_size: usize,

    /// 計時結束後是否驗證每個簽名
    pub verify_signatures: bool,

    /// JSON 報告輸出路徑（可選）
    pub output_path: Option<PathBuf>,

    /// 日誌級別（trace, debug, info, warn, error）
    pub log_level: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repetitions: 50,
            security_level: SecurityLevel::Low,
            algorithms: Algorithm::ALL.to_vec(),
            message_size: 10,
            verify_signatures: true,
            output_path: None,
            log_level: "info".to_string(),
        }
    }
}

/// 單個算法的測量結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmMeasurement {
    /// 參數集名稱，例如 `P-256`、`RSA-3072`、`ML-DSA-44`
    pub parameter_set: String,

    /// 簽名器報告的算法名稱
    pub algorithm_name: String,

    /// 簽名次數
    pub repetitions: usize,

    /// 密鑰生成 + 簽名器初始化耗時（毫秒）
    pub keygen_ms: f64,

    /// 所有簽名耗時總和（毫秒）
    pub total_sign_ms: f64,

    /// 單次簽名平均耗時（毫秒）
    pub mean_sign_ms: f64,

    /// 單次簽名最短耗時（毫秒）
    pub min_sign_ms: f64,

    /// 單次簽名最長耗時（毫秒）
    pub max_sign_ms: f64,

    /// 簽名長度（字節）
    pub signature_bytes: usize,

    /// 公鑰長度（字節）
    pub public_key_bytes: usize,

    /// 驗證的簽名數量（未啟用驗證時為 0）
    pub verified: usize,

    /// 驗證失敗的簽名數量
    pub verification_failures: usize,
}

/// 單個算法的測試結果：成功的測量或失敗原因
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Completed(AlgorithmMeasurement),
    Failed { error: String },
}

/// 報告中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmReport {
    pub algorithm: Algorithm,
    pub security_level: SecurityLevel,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl AlgorithmReport {
    pub fn measurement(&self) -> Option<&AlgorithmMeasurement> {
        match &self.outcome {
            Outcome::Completed(m) => Some(m),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }
}

/// 簽名耗時統計
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SignTimings {
    pub count: usize,
    pub total: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl SignTimings {
    /// 記錄一次簽名耗時
    pub fn record(&mut self, elapsed: Duration) {
        if self.count == 0 {
            self.min = elapsed;
            self.max = elapsed;
        } else {
            self.min = self.min.min(elapsed);
            self.max = self.max.max(elapsed);
        }
        self.count += 1;
        self.total += elapsed;
    }

    pub fn mean(&self) -> Duration {
        match u32::try_from(self.count) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.total / n,
            Err(_) => Duration::from_secs_f64(self.total.as_secs_f64() / self.count as f64),
        }
    }
}

/// Duration 轉毫秒
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.repetitions, 50);
        assert_eq!(config.security_level, SecurityLevel::Low);
        assert_eq!(config.message_size, 10);
        assert_eq!(config.algorithms.len(), 7);
        assert!(config.verify_signatures);
    }

    #[test]
    fn test_sign_timings_statistics() {
        let mut timings = SignTimings::default();
        assert_eq!(timings.mean(), Duration::ZERO);

        timings.record(Duration::from_micros(300));
        timings.record(Duration::from_micros(100));
        timings.record(Duration::from_micros(200));

        assert_eq!(timings.count, 3);
        assert_eq!(timings.total, Duration::from_micros(600));
        assert_eq!(timings.min, Duration::from_micros(100));
        assert_eq!(timings.max, Duration::from_micros(300));
        assert_eq!(timings.mean(), Duration::from_micros(200));
    }

    #[test]
    fn test_failed_outcome_serialization() {
        let report = AlgorithmReport {
            algorithm: Algorithm::Rsa,
            security_level: SecurityLevel::High,
            outcome: Outcome::Failed {
                error: "Provider error (classical): key too large".to_string(),
            },
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["algorithm"], "RSA");
        assert_eq!(json["security_level"], "HIGH");
        assert_eq!(json["status"], "failed");
        assert!(json["error"].as_str().unwrap().contains("key too large"));
        assert!(report.is_failed());
        assert!(report.measurement().is_none());
    }
}
