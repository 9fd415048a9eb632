//! 资格服务模块
//!
//! 奖励判定的外部协作方。判定层只依赖 `EligibilityService` trait，
//! 具体实现可以是远程服务或内存表。
//!
//! ## 模块结构
//!
//! - `service`: `EligibilityService` trait 与 `EligibilityStatus` 定义
//! - `in_memory`: 固定账号表实现，用于本地运行和测试
//! - `http`: 远程资格服务的 HTTP 客户端

pub mod http;
pub mod in_memory;
pub mod service;

use std::sync::Arc;

use rewards_shared::config::AppConfig;
use tracing::info;

use crate::error::EligibilityError;

pub use http::HttpEligibilityService;
pub use in_memory::InMemoryEligibilityService;
pub use service::{EligibilityService, EligibilityStatus};

#[cfg(test)]
pub use service::MockEligibilityService;

/// 按配置选择资格服务实现
///
/// 配置了 `eligibility.base_url` 时使用 HTTP 客户端，否则使用内存资格表。
/// 生产环境必须配置远程地址。
pub fn from_app_config(config: &AppConfig) -> Result<Arc<dyn EligibilityService>, EligibilityError> {
    if let Some(client) = HttpEligibilityService::from_config(&config.eligibility)? {
        return Ok(Arc::new(client));
    }

    if config.is_production() {
        return Err(EligibilityError::Internal(
            "生产环境必须配置 eligibility.base_url".to_string(),
        ));
    }

    let accounts = InMemoryEligibilityService::from_config(&config.eligibility)?;
    info!(accounts = accounts.len(), "未配置资格服务地址，使用内存资格表");
    Ok(Arc::new(accounts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewards_shared::config::AccountEntry;

    fn app_config(environment: &str, base_url: Option<&str>) -> AppConfig {
        let mut config = AppConfig {
            service_name: "rewards-service".to_string(),
            environment: environment.to_string(),
            ..Default::default()
        };
        config.eligibility.base_url = base_url.map(str::to_string);
        config.eligibility.accounts = vec![AccountEntry {
            account_id: "A12345".to_string(),
            status: "CUSTOMER_ELIGIBLE".to_string(),
        }];
        config
    }

    #[test]
    fn test_base_url_selects_http_client() {
        let service =
            from_app_config(&app_config("production", Some("http://eligibility:8080"))).unwrap();
        assert_eq!(service.description(), "HTTP Eligibility Service");
    }

    #[tokio::test]
    async fn test_without_base_url_uses_account_table() {
        let service = from_app_config(&app_config("development", None)).unwrap();

        assert_eq!(service.description(), "In-Memory Eligibility Service");
        assert_eq!(
            service.check_account_eligibility("A12345").await,
            Ok(EligibilityStatus::Eligible)
        );
    }

    #[test]
    fn test_production_requires_base_url() {
        let err = from_app_config(&app_config("production", None)).err().unwrap();
        assert!(matches!(err, EligibilityError::Internal(_)));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = from_app_config(&app_config("development", Some("not a url")))
            .err()
            .unwrap();
        assert!(matches!(err, EligibilityError::Internal(_)));
    }

    #[test]
    fn test_invalid_account_status_is_rejected() {
        let mut config = app_config("development", None);
        config.eligibility.accounts[0].status = "CUSTOMER_PENDING".to_string();

        let err = from_app_config(&config).err().unwrap();
        assert_eq!(
            err,
            EligibilityError::UnexpectedStatus("CUSTOMER_PENDING".to_string())
        );
    }
}
