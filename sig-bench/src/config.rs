//! 配置管理模塊
//!
//! 負責加載、合併和驗證基準測試配置。優先級由低到高：
//! 默認值、配置文件、`SIGBENCH_*` 環境變量、命令行參數。

use crate::error::{BenchError, Result};
use crate::types::BenchConfig;
use config::{Config, Environment, File};
use signer_factory::{Algorithm, SecurityLevel};
use std::path::{Path, PathBuf};

/// 環境變量前綴
pub const ENV_PREFIX: &str = "SIGBENCH";

/// 從配置文件加載基準測試配置
///
/// # 參數
/// - `config_path`: 配置文件路徑（支持 TOML、JSON、YAML）
///
/// # 返回
/// - `Ok(BenchConfig)`: 成功加載的配置，缺少的字段使用默認值
/// - `Err(BenchError)`: 配置文件格式錯誤或參數無效
///
/// # 示例
/// ```no_run
/// use sig_bench::config::load_config;
///
/// let config = load_config("bench.toml").expect("Failed to load config");
/// println!("Repetitions: {}", config.repetitions);
/// ```
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<BenchConfig> {
    let config = Config::builder()
        .add_source(File::from(config_path.as_ref()))
        .build()
        .map_err(|e| BenchError::Config(format!("Failed to load config file: {}", e)))?;

    let bench_config: BenchConfig = config
        .try_deserialize()
        .map_err(|e| BenchError::Config(format!("Failed to parse config: {}", e)))?;

    validate_config(&bench_config)?;

    Ok(bench_config)
}

/// 從環境變量加載配置
///
/// 環境變量前綴: `SIGBENCH_`
/// 示例: `SIGBENCH_REPETITIONS=100`, `SIGBENCH_ALGORITHMS=ECDSA,ML-DSA`
pub fn load_config_from_env() -> Result<BenchConfig> {
    load_layered(None)
}

/// 依次疊加配置文件（可選）與環境變量
pub fn load_layered(config_path: Option<&Path>) -> Result<BenchConfig> {
    let mut builder = Config::builder();
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path));
    }

    let config = builder
        .add_source(env_source())
        .build()
        .map_err(|e| BenchError::Config(format!("Failed to load configuration: {}", e)))?;

    let bench_config: BenchConfig = config
        .try_deserialize()
        .map_err(|e| BenchError::Config(format!("Failed to parse configuration: {}", e)))?;

    validate_config(&bench_config)?;

    Ok(bench_config)
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("algorithms")
}

/// 驗證配置的有效性
///
/// 檢查:
/// - 重複次數大於 0
/// - 消息長度大於 0
/// - 至少選擇一個算法
pub fn validate_config(config: &BenchConfig) -> Result<()> {
    if config.repetitions == 0 {
        return Err(BenchError::Config(
            "repetitions must be greater than 0".to_string(),
        ));
    }

    if config.message_size == 0 {
        return Err(BenchError::Config(
            "message_size must be greater than 0".to_string(),
        ));
    }

    if config.algorithms.is_empty() {
        return Err(BenchError::Config(
            "at least one algorithm must be selected".to_string(),
        ));
    }

    Ok(())
}

/// 命令行覆蓋項
///
/// `None` / 空列表表示保留配置文件或環境變量中的值
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub repetitions: Option<usize>,
    pub security_level: Option<SecurityLevel>,
    pub algorithms: Vec<Algorithm>,
    pub message_size: Option<usize>,
    pub output_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub skip_verification: bool,
}

impl Overrides {
    /// 將覆蓋項應用到配置上
    pub fn apply(self, config: &mut BenchConfig) {
        if let Some(repetitions) = self.repetitions {
            config.repetitions = repetitions;
        }
        if let Some(level) = self.security_level {
            config.security_level = level;
        }
        if !self.algorithms.is_empty() {
            // 重複的算法只保留首次出現的位置
            let mut algorithms: Vec<Algorithm> = Vec::with_capacity(self.algorithms.len());
            for algorithm in self.algorithms {
                if !algorithms.contains(&algorithm) {
                    algorithms.push(algorithm);
                }
            }
            config.algorithms = algorithms;
        }
        if let Some(size) = self.message_size {
            config.message_size = size;
        }
        if let Some(path) = self.output_path {
            config.output_path = Some(path);
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if self.skip_verification {
            config.verify_signatures = false;
        }
    }
}
