//! 订阅奖励查询
//!
//! 用法：`rewards <account_id> [category...]`，结果以 JSON 输出到标准输出。

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use rewards_service::cli::Cli;
use rewards_service::{RewardResolver, RewardsService, StaticRewardCatalog, eligibility};
use rewards_shared::config::AppConfig;
use rewards_shared::observability;

const SERVICE_NAME: &str = "rewards-service";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _ = dotenvy::dotenv();
    let config = AppConfig::load(SERVICE_NAME).context("配置加载失败")?;
    observability::init(&config.observability)?;

    let eligibility = eligibility::from_app_config(&config)?;
    let catalog = StaticRewardCatalog::from_config(&config.catalog)?;

    let resolver = RewardResolver::new(eligibility, Arc::new(catalog));
    let rewards = resolver
        .determine_rewards(&cli.account_id, &cli.categories)
        .await?;

    println!("{}", serde_json::to_string_pretty(&rewards)?);
    Ok(())
}
