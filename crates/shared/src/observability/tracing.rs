//! 日志初始化
//!
//! 基于 tracing-subscriber，支持 pretty 与 JSON 两种输出格式。

use anyhow::Result;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use super::ObservabilityConfig;

/// 构建环境过滤器，RUST_LOG 优先于配置中的日志级别
fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok(), &config.log_level)
}

/// 依次尝试 RUST_LOG、配置级别，都不合法时退回 info
fn filter_from(rust_log: Option<String>, log_level: &str) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(log_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// 初始化全局 subscriber，重复初始化返回错误
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    // 日志写到 stderr，stdout 留给命令输出
    let fmt_layer = if config.json_logs {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_level_used_without_rust_log() {
        assert_eq!(filter_from(None, "debug").to_string(), "debug");
    }

    #[test]
    fn test_rust_log_takes_precedence() {
        assert_eq!(
            filter_from(Some("warn".to_string()), "debug").to_string(),
            "warn"
        );
    }

    #[test]
    fn test_blank_or_invalid_rust_log_ignored() {
        assert_eq!(filter_from(Some("  ".to_string()), "debug").to_string(), "debug");
        assert_eq!(
            filter_from(Some("foo=notalevel".to_string()), "debug").to_string(),
            "debug"
        );
    }

    #[test]
    fn test_invalid_log_level_falls_back_to_info() {
        assert_eq!(filter_from(None, "foo=notalevel").to_string(), "info");
    }

    #[test]
    fn test_second_init_fails() {
        let config = ObservabilityConfig::default();
        let _ = init(&config);
        assert!(init(&config).is_err());
    }
}
