//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::path::Path;

use crate::observability::ObservabilityConfig;

/// 资格表条目（本地运行时使用）
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AccountEntry {
    pub account_id: String,
    /// 线上状态码：CUSTOMER_ELIGIBLE / CUSTOMER_INELIGIBLE
    pub status: String,
}

/// 资格服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct EligibilityConfig {
    /// 远程资格服务地址，为空时使用 `accounts` 内存表
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub accounts: Vec<AccountEntry>,
}

fn default_timeout_ms() -> u64 {
    2000
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: default_timeout_ms(),
            accounts: Vec::new(),
        }
    }
}

/// 奖励目录条目
///
/// 使用列表而非表结构，避免类别名作为 key 时被配置加载转成小写
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub category: String,
    pub reward: String,
}

/// 奖励目录配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub rewards: Vec<CatalogEntry>,
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub eligibility: EligibilityConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. config/default.toml（默认配置）
    /// 2. config/{environment}.toml（环境特定配置）
    /// 3. config/{service_name}.toml（服务特定配置）
    /// 4. 环境变量（REWARDS_ 前缀，层级用双下划线分隔，
    ///    如 REWARDS_ELIGIBILITY__BASE_URL -> eligibility.base_url）
    pub fn load(service_name: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("REWARDS_ENV").unwrap_or_else(|_| "development".to_string());

        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        Self::load_from(service_name, &env, Path::new(&config_dir))
    }

    /// 指定环境和配置目录加载
    pub fn load_from(service_name: &str, env: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(service_name, env, config_dir, None)
    }

    /// `env_vars` 为 `None` 时读取进程环境变量，否则只使用给定的变量表
    fn load_with_env(
        service_name: &str,
        env: &str,
        config_dir: &Path,
        env_vars: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", env)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join(format!("{}.toml", env))).required(false))
            .add_source(
                File::from(config_dir.join(format!("{}.toml", service_name))).required(false),
            )
            // 环境变量覆盖（REWARDS_ELIGIBILITY__TIMEOUT_MS -> eligibility.timeout_ms）
            .add_source(
                Environment::with_prefix("REWARDS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env_vars),
            );

        builder.build()?.try_deserialize()
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
