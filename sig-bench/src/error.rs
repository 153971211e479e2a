//! 基準測試工具統一錯誤類型定義
//!
//! 使用 thiserror crate 提供錯誤鏈和上下文信息。

use signer_factory::SignerError;
use thiserror::Error;

/// 基準測試錯誤類型
///
/// 涵蓋：
/// - 配置加載與驗證
/// - 簽名器創建與使用
/// - 報告序列化與文件讀寫
#[derive(Error, Debug)]
pub enum BenchError {
    /// 配置錯誤
    ///
    /// 當配置文件格式錯誤、環境變量無法解析或參數無效時返回此錯誤
    #[error("Configuration error: {0}")]
    Config(String),

    /// 簽名器錯誤
    ///
    /// 簽名器工廠或簽名操作失敗
    #[error("Signer error: {0}")]
    Signer(#[from] SignerError),

    /// 序列化/反序列化錯誤
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O 錯誤
    ///
    /// 當報告文件讀寫失敗時返回此錯誤
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result 類型別名
pub type Result<T> = std::result::Result<T, BenchError>;

/// 從 JSON 錯誤轉換
impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::Serialization(err.to_string())
    }
}

/// 從 config crate 錯誤轉換
impl From<config::ConfigError> for BenchError {
    fn from(err: config::ConfigError) -> Self {
        BenchError::Config(err.to_string())
    }
}
