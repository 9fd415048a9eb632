//! 奖励判定
//!
//! 根据账号资格和订阅组合确定可获得的奖励：
//! 1. 调用资格服务一次
//! 2. 资格通过：逐个查找订阅类别对应的奖励，无对应奖励的类别直接忽略
//! 3. 资格不通过：无奖励
//!
//! 错误处理分两层：无效账号原样透传给调用方；资格服务的其他任何错误都按
//! "无奖励"处理（fail-closed），技术故障不能被当成资格通过。

use std::sync::Arc;

use async_trait::async_trait;
use rewards_shared::observability::metrics::{REWARD_DETERMINATIONS_TOTAL, REWARDS_GRANTED_TOTAL};
use tracing::{info, instrument, warn};

use crate::catalog::{RewardCatalog, StaticRewardCatalog};
use crate::eligibility::EligibilityService;
use crate::error::{EligibilityError, Result, RewardError};

/// 奖励服务接口
#[async_trait]
pub trait RewardsService: Send + Sync {
    /// 确定账号在给定订阅组合下可获得的奖励
    ///
    /// 订阅组合中重复的类别会产生重复的奖励。成功时总是返回列表（可能为空），
    /// 只有账号无效时返回错误，内容为资格服务给出的原始错误。
    async fn determine_rewards(&self, account_id: &str, portfolio: &[String])
    -> Result<Vec<String>>;
}

/// 奖励判定器
///
/// 持有资格服务和奖励目录，两者都以 trait object 注入，目录构建后只读。
pub struct RewardResolver {
    eligibility: Arc<dyn EligibilityService>,
    catalog: Arc<dyn RewardCatalog>,
}

impl RewardResolver {
    pub fn new(eligibility: Arc<dyn EligibilityService>, catalog: Arc<dyn RewardCatalog>) -> Self {
        info!(eligibility = eligibility.description(), "奖励判定器已初始化");
        Self {
            eligibility,
            catalog,
        }
    }

    /// 使用默认奖励目录
    pub fn with_default_catalog(eligibility: Arc<dyn EligibilityService>) -> Self {
        Self::new(eligibility, Arc::new(StaticRewardCatalog::with_defaults()))
    }

    fn collect_rewards(&self, portfolio: &[String]) -> Vec<String> {
        portfolio
            .iter()
            .filter_map(|category| self.catalog.lookup(category))
            .collect()
    }
}

#[async_trait]
impl RewardsService for RewardResolver {
    #[instrument(skip(self, portfolio), fields(portfolio_size = portfolio.len()))]
    async fn determine_rewards(
        &self,
        account_id: &str,
        portfolio: &[String],
    ) -> Result<Vec<String>> {
        let status = match self.eligibility.check_account_eligibility(account_id).await {
            Ok(status) => status,
            Err(e) if e.is_invalid_account() => {
                let err = RewardError::from(e);
                info!(account_id, error_code = err.error_code(), "账号无效，拒绝判定");
                metrics::counter!(REWARD_DETERMINATIONS_TOTAL, "outcome" => err.error_code())
                    .increment(1);
                return Err(err);
            }
            Err(e) => {
                warn!(
                    account_id,
                    error_code = e.error_code(),
                    error = %e,
                    "资格检查失败，按无奖励处理"
                );
                metrics::counter!(REWARD_DETERMINATIONS_TOTAL, "outcome" => "fail_closed")
                    .increment(1);
                return Ok(Vec::new());
            }
        };

        let rewards = if status.is_eligible() {
            self.collect_rewards(portfolio)
        } else {
            Vec::new()
        };

        metrics::counter!(REWARD_DETERMINATIONS_TOTAL, "outcome" => status.as_str())
            .increment(1);
        metrics::counter!(REWARDS_GRANTED_TOTAL).increment(rewards.len() as u64);

        info!(
            account_id,
            status = %status,
            reward_count = rewards.len(),
            "奖励判定完成"
        );

        Ok(rewards)
    }
}
