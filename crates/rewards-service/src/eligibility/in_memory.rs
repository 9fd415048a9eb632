//! 内存资格服务
//!
//! 账号到资格状态的固定表，用于本地运行和测试环境。
//! 表中不存在的账号按无效账号处理。

use std::collections::HashMap;

use async_trait::async_trait;
use rewards_shared::config::EligibilityConfig;
use tracing::debug;

use super::service::{EligibilityService, EligibilityStatus};
use crate::error::EligibilityError;

#[derive(Debug, Clone, Default)]
pub struct InMemoryEligibilityService {
    accounts: HashMap<String, EligibilityStatus>,
}

impl InMemoryEligibilityService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个账号的资格状态，已存在的账号会被覆盖
    pub fn with_account(mut self, account_id: impl Into<String>, status: EligibilityStatus) -> Self {
        self.accounts.insert(account_id.into(), status);
        self
    }

    /// 从配置的 `eligibility.accounts` 表构建
    ///
    /// `status` 为线上状态码（`CUSTOMER_ELIGIBLE` / `CUSTOMER_INELIGIBLE`），
    /// 同一账号出现多次时以最后一条为准
    pub fn from_config(config: &EligibilityConfig) -> Result<Self, EligibilityError> {
        let accounts = config
            .accounts
            .iter()
            .map(|entry| {
                let status = entry.status.parse::<EligibilityStatus>()?;
                Ok((entry.account_id.clone(), status))
            })
            .collect::<Result<HashMap<_, _>, EligibilityError>>()?;

        Ok(Self { accounts })
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl EligibilityService for InMemoryEligibilityService {
    async fn check_account_eligibility(
        &self,
        account_id: &str,
    ) -> Result<EligibilityStatus, EligibilityError> {
        let status = self
            .accounts
            .get(account_id)
            .copied()
            .ok_or_else(|| EligibilityError::InvalidAccountNumber(account_id.to_string()))?;

        debug!(account_id, status = %status, "内存资格查询");
        Ok(status)
    }

    fn description(&self) -> &'static str {
        "In-Memory Eligibility Service"
    }
}
