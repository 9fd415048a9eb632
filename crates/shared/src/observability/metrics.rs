//! 指标定义
//!
//! 基于 metrics facade，未安装 recorder 时记录操作为空操作。

/// 奖励判定次数，`outcome` 标签区分结果
pub const REWARD_DETERMINATIONS_TOTAL: &str = "reward_determinations_total";
/// 发放的奖励条目数
pub const REWARDS_GRANTED_TOTAL: &str = "rewards_granted_total";

/// 注册指标描述，出现在导出端的 HELP 注释中
pub fn describe_metrics() {
    metrics::describe_counter!(
        REWARD_DETERMINATIONS_TOTAL,
        "Total number of reward determinations by outcome"
    );
    metrics::describe_counter!(
        REWARDS_GRANTED_TOTAL,
        "Total number of reward items granted"
    );
}
