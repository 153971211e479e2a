//! 簽名算法基準測試工具
//!
//! 對傳統（ECDSA、RSA）與後量子（ML-DSA、Dilithium、SLH-DSA、SPHINCS+）
//! 簽名算法在同一安全等級下測量簽名耗時:
//! 1. 生成一組隨機消息
//! 2. 通過 `signer-factory` 為每個算法創建簽名器
//! 3. 逐條簽名並計時
//! 4. 輸出終端摘要與可選的 JSON 報告
//!
//! # 架構
//!
//! ```text
//! ┌──────────────┐
//! │  BenchRunner │  ← 測量邏輯
//! └──────┬───────┘
//!        │
//!   ┌────┴─────────┬──────────────┐
//!   ▼              ▼              ▼
//! SignerFactory  BenchReport    Config
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod types;

// Re-export 常用類型
pub use error::{BenchError, Result};
pub use report::BenchReport;
pub use runner::BenchRunner;
pub use types::{AlgorithmMeasurement, AlgorithmReport, BenchConfig, Outcome};
