//! 命令行参数

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rewards")]
#[command(version, about = "根据账号资格和订阅类别查询可获得的奖励")]
pub struct Cli {
    /// 客户账号
    pub account_id: String,

    /// 订阅的产品类别，如 SPORTS MUSIC MOVIES
    pub categories: Vec<String>,
}
