//! 订阅奖励服务
//!
//! 根据账号资格和订阅的产品类别确定客户可获得的促销奖励。
//!
//! ## 模块结构
//!
//! - `cli`: 命令行参数
//! - `error`: 错误类型定义
//! - `eligibility`: 资格服务接口及其实现（内存表、HTTP 客户端）
//! - `catalog`: 订阅类别到奖励的目录
//! - `resolver`: 奖励判定

pub mod catalog;
pub mod cli;
pub mod eligibility;
pub mod error;
pub mod resolver;

pub use catalog::{DEFAULT_REWARDS, RewardCatalog, StaticRewardCatalog};
pub use eligibility::{
    EligibilityService, EligibilityStatus, HttpEligibilityService, InMemoryEligibilityService,
};
pub use error::{EligibilityError, Result, RewardError};
pub use resolver::{RewardResolver, RewardsService};
