//! HTTP 资格服务客户端
//!
//! 调用 `GET {base_url}/accounts/{account_id}/eligibility`，响应体为
//! `{"status": "CUSTOMER_ELIGIBLE"}`。
//!
//! 状态码映射：
//! - 2xx：解析 `status` 字段
//! - 404 / 422：账号无效，透传给调用方
//! - 其他：资格服务不可用

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use rewards_shared::config::EligibilityConfig;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::service::{EligibilityService, EligibilityStatus};
use crate::error::EligibilityError;

#[derive(Debug, Deserialize)]
struct EligibilityResponse {
    status: String,
}

pub struct HttpEligibilityService {
    client: Client,
    base_url: Url,
}

impl HttpEligibilityService {
    /// 创建客户端，`timeout` 覆盖连接与读取的总耗时
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, EligibilityError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| EligibilityError::Internal(format!("无效的资格服务 URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(EligibilityError::Internal(format!(
                "无效的资格服务 URL: {base_url}"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EligibilityError::Internal(format!("HTTP 客户端创建失败: {e}")))?;

        info!(%base_url, timeout_ms = timeout.as_millis() as u64, "资格服务 HTTP 客户端已初始化");

        Ok(Self { client, base_url })
    }

    /// 从配置构建，未配置 `base_url` 时返回 None
    pub fn from_config(config: &EligibilityConfig) -> Result<Option<Self>, EligibilityError> {
        config
            .base_url
            .as_deref()
            .map(|url| Self::new(url, Duration::from_millis(config.timeout_ms)))
            .transpose()
    }

    /// 构造资格查询地址，账号作为独立路径段编码
    pub fn eligibility_url(&self, account_id: &str) -> Url {
        let mut url = self.base_url.clone();
        // new() 已排除 cannot-be-a-base 的 URL
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["accounts", account_id, "eligibility"]);
        }
        url
    }
}

#[async_trait]
impl EligibilityService for HttpEligibilityService {
    async fn check_account_eligibility(
        &self,
        account_id: &str,
    ) -> Result<EligibilityStatus, EligibilityError> {
        let url = self.eligibility_url(account_id);
        debug!(account_id, %url, "调用资格服务");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| EligibilityError::Unavailable(format!("资格服务调用失败: {e}")))?;

        match response.status() {
            StatusCode::NOT_FOUND | StatusCode::UNPROCESSABLE_ENTITY => {
                return Err(EligibilityError::InvalidAccountNumber(
                    account_id.to_string(),
                ));
            }
            status if !status.is_success() => {
                warn!(account_id, %status, "资格服务返回非成功状态");
                return Err(EligibilityError::Unavailable(format!(
                    "资格服务返回 HTTP {status}"
                )));
            }
            _ => {}
        }

        let body: EligibilityResponse = response
            .json()
            .await
            .map_err(|e| EligibilityError::Internal(format!("资格服务响应解析失败: {e}")))?;

        body.status.parse()
    }

    fn description(&self) -> &'static str {
        "HTTP Eligibility Service"
    }
}
