//! 奖励目录
//!
//! 管理订阅类别到奖励的映射。奖励判定时，对资格通过的账号逐个查找其订阅类别
//! 对应的奖励。
//!
//! 目录在构建时一次性装载，之后只读，可以在多个请求间无锁共享。
//! 判定层依赖 `RewardCatalog` trait，后续可替换为数据库加载的实现。

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use rewards_shared::config::CatalogConfig;
use tracing::{debug, info};

use crate::error::{Result, RewardError};

/// 默认奖励目录：订阅类别 -> 奖励
pub const DEFAULT_REWARDS: [(&str, &str); 3] = [
    ("SPORTS", "CHAMPIONS_LEAGUE_FINAL_TICKET"),
    ("MUSIC", "KARAOKE_PRO_MICROPHONE"),
    ("MOVIES", "PIRATES_OF_THE_CARIBBEAN_COLLECTION"),
];

/// 奖励目录查找接口
///
/// 未知类别返回 None，不是错误
pub trait RewardCatalog: Send + Sync {
    fn lookup(&self, category: &str) -> Option<String>;
}

/// 内存奖励目录
#[derive(Debug, Clone)]
pub struct StaticRewardCatalog {
    rewards: HashMap<String, String>,
}

impl StaticRewardCatalog {
    /// 由 (类别, 奖励) 条目构建目录
    ///
    /// 每个类别只能对应一个奖励，重复类别或空白条目返回校验错误
    pub fn from_entries<I, C, R>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, R)>,
        C: Into<String>,
        R: Into<String>,
    {
        let mut rewards = HashMap::new();

        for (category, reward) in entries {
            let category = category.into();
            let reward = reward.into();

            if category.trim().is_empty() {
                return Err(RewardError::Validation("订阅类别不能为空".to_string()));
            }
            if reward.trim().is_empty() {
                return Err(RewardError::Validation(format!(
                    "订阅类别 {category} 的奖励不能为空"
                )));
            }

            match rewards.entry(category) {
                Entry::Occupied(entry) => {
                    return Err(RewardError::Validation(format!(
                        "重复的订阅类别: {}",
                        entry.key()
                    )));
                }
                Entry::Vacant(entry) => {
                    entry.insert(reward);
                }
            }
        }

        Ok(Self { rewards })
    }

    /// 使用默认目录
    pub fn with_defaults() -> Self {
        Self {
            rewards: DEFAULT_REWARDS
                .iter()
                .map(|(category, reward)| (category.to_string(), reward.to_string()))
                .collect(),
        }
    }

    /// 从 `catalog.rewards` 配置构建，未配置任何条目时使用默认目录
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        if config.rewards.is_empty() {
            info!("未配置奖励目录，使用默认目录");
            return Ok(Self::with_defaults());
        }

        let catalog = Self::from_entries(
            config
                .rewards
                .iter()
                .map(|entry| (entry.category.as_str(), entry.reward.as_str())),
        )?;

        info!(
            count = catalog.len(),
            categories = ?catalog.categories(),
            "奖励目录已从配置加载"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    /// 返回所有已登记的订阅类别
    pub fn categories(&self) -> Vec<&str> {
        self.rewards.keys().map(String::as_str).collect()
    }
}

impl Default for StaticRewardCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl RewardCatalog for StaticRewardCatalog {
    fn lookup(&self, category: &str) -> Option<String> {
        let reward = self.rewards.get(category).cloned();
        if reward.is_none() {
            debug!(category, "订阅类别没有对应奖励");
        }
        reward
    }
}
