//! 测试辅助模块

use std::sync::Arc;

use async_trait::async_trait;
use dns_insight_core::{DashboardConfig, FetchClient, Fetcher, PanelError, PanelResult};

use crate::model::App;

/// 按路径返回固定响应的 mock 客户端
pub struct MockFetchClient;

#[async_trait]
impl FetchClient for MockFetchClient {
    async fn get(&self, path: &str) -> PanelResult<String> {
        if path.contains("list=1") {
            Ok(r#"[{"_id":"example.com","count":3},{"_id":"other.org","count":1}]"#.to_string())
        } else if path.contains("zone=broken.net") {
            Err(PanelError::NetworkFailure {
                path: path.to_string(),
                detail: "HTTP 503: unavailable".to_string(),
            })
        } else {
            Ok(r#"[{"zone":"example.com","fqdn":"mail.example.com","value":"10 mail.example.com"}]"#.to_string())
        }
    }
}

/// 使用 mock 客户端的应用实例
pub fn test_app() -> App {
    App::new(
        Fetcher::new(Arc::new(MockFetchClient)),
        &DashboardConfig::default(),
    )
}
