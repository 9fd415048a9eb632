//! 奖励服务错误类型
//!
//! 分为两层：
//! - `EligibilityError`：资格服务（外部协作方）返回的错误
//! - `RewardError`：奖励判定对调用方暴露的错误
//!
//! 资格服务的错误中只有"无效账号"会原样放进 `RewardError::Eligibility`
//! 传给调用方，其余一律在判定边界处按"无奖励"处理。

use thiserror::Error;

/// 资格服务错误
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EligibilityError {
    /// 账号格式不合法或资格服务不认识该账号，属于调用方输入错误
    #[error("Invalid Account Number : {0}")]
    InvalidAccountNumber(String),

    /// 网络、超时或服务端故障
    #[error("资格服务不可用: {0}")]
    Unavailable(String),

    /// 资格服务返回了约定之外的状态码
    #[error("未知的资格状态: {0}")]
    UnexpectedStatus(String),

    #[error("资格服务内部错误: {0}")]
    Internal(String),
}

impl EligibilityError {
    /// 是否为需要透传给调用方的无效账号错误
    pub fn is_invalid_account(&self) -> bool {
        matches!(self, Self::InvalidAccountNumber(_))
    }

    /// 获取错误码（用于日志和指标标签）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAccountNumber(_) => "INVALID_ACCOUNT_NUMBER",
            Self::Unavailable(_) => "ELIGIBILITY_UNAVAILABLE",
            Self::UnexpectedStatus(_) => "UNEXPECTED_ELIGIBILITY_STATUS",
            Self::Internal(_) => "ELIGIBILITY_INTERNAL_ERROR",
        }
    }
}

/// 奖励服务错误
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RewardError {
    /// 资格服务返回的无效账号错误，原样透传
    #[error(transparent)]
    Eligibility(#[from] EligibilityError),

    /// 构建奖励目录时的配置校验失败
    #[error("参数校验失败: {0}")]
    Validation(String),
}

/// 奖励服务 Result 类型别名
pub type Result<T> = std::result::Result<T, RewardError>;

impl RewardError {
    /// 是否为无效账号错误
    pub fn is_invalid_account(&self) -> bool {
        matches!(self, Self::Eligibility(e) if e.is_invalid_account())
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Eligibility(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_account_message_matches_contract() {
        let err = EligibilityError::InvalidAccountNumber("XXX999".to_string());
        assert_eq!(err.to_string(), "Invalid Account Number : XXX999");

        let err = RewardError::from(err);
        assert_eq!(err.to_string(), "Invalid Account Number : XXX999");
        assert!(err.is_invalid_account());
        assert!(!RewardError::Validation("空类别".into()).is_invalid_account());
    }

    #[test]
    fn test_is_invalid_account() {
        assert!(EligibilityError::InvalidAccountNumber("A1".into()).is_invalid_account());
        assert!(!EligibilityError::Unavailable("timeout".into()).is_invalid_account());
        assert!(!EligibilityError::UnexpectedStatus("MAYBE".into()).is_invalid_account());
        assert!(!EligibilityError::Internal("boom".into()).is_invalid_account());
    }

    #[test]
    fn test_error_code() {
        assert_eq!(
            EligibilityError::Unavailable("down".into()).error_code(),
            "ELIGIBILITY_UNAVAILABLE"
        );
        assert_eq!(
            RewardError::from(EligibilityError::InvalidAccountNumber("A1".into())).error_code(),
            "INVALID_ACCOUNT_NUMBER"
        );
        assert_eq!(
            RewardError::Validation("重复的订阅类别".into()).error_code(),
            "VALIDATION_ERROR"
        );
    }
}
