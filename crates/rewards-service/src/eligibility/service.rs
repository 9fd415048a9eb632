//! 资格服务 Trait 定义
//!
//! 奖励判定依赖外部资格服务给出账号的资格状态。通过 `EligibilityService`
//! trait 抽象调用，便于替换为远程实现或测试时注入 mock。

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::EligibilityError;

/// 账号资格状态
///
/// 线上协议使用 `CUSTOMER_ELIGIBLE` / `CUSTOMER_INELIGIBLE` 两个状态码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EligibilityStatus {
    #[serde(rename = "CUSTOMER_ELIGIBLE")]
    Eligible,
    #[serde(rename = "CUSTOMER_INELIGIBLE")]
    Ineligible,
}

impl EligibilityStatus {
    pub const ELIGIBLE_CODE: &'static str = "CUSTOMER_ELIGIBLE";
    pub const INELIGIBLE_CODE: &'static str = "CUSTOMER_INELIGIBLE";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eligible => Self::ELIGIBLE_CODE,
            Self::Ineligible => Self::INELIGIBLE_CODE,
        }
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }
}

impl fmt::Display for EligibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EligibilityStatus {
    type Err = EligibilityError;

    /// 约定之外的状态码视为协作方错误，由判定层按"无奖励"处理
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::ELIGIBLE_CODE => Ok(Self::Eligible),
            Self::INELIGIBLE_CODE => Ok(Self::Ineligible),
            other => Err(EligibilityError::UnexpectedStatus(other.to_string())),
        }
    }
}

/// 资格服务接口
///
/// 每次奖励判定只调用一次 `check_account_eligibility`。实现方负责自己的
/// 账号校验规则、超时与重试策略：
/// - 账号无法识别时返回 `EligibilityError::InvalidAccountNumber`
/// - 其他技术性故障返回对应的错误变体
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EligibilityService: Send + Sync {
    async fn check_account_eligibility(
        &self,
        account_id: &str,
    ) -> Result<EligibilityStatus, EligibilityError>;

    /// 实现描述（用于日志）
    fn description(&self) -> &'static str {
        "Generic Eligibility Service"
    }
}
