//! 无界面快照
//!
//! 加载三个分类的列表，按 `--select` 逐个打开分组，
//! 然后把面板写成一个独立的 HTML 页面。

use std::path::Path;

use anyhow::{Context, Result};
use dns_insight_core::render::html::{render_page, HtmlDetail, HtmlList};
use dns_insight_core::{Dashboard, DashboardConfig, Fetcher, SelectionEvent, StaleResponsePolicy};

/// 页面标题
const PAGE_TITLE: &str = "DNS Zone Metadata";

/// 执行 snapshot 子命令
pub async fn run(
    fetcher: Fetcher,
    config: &DashboardConfig,
    output: &Path,
    selections: &[SelectionEvent],
) -> Result<()> {
    let page = render_snapshot(fetcher, config.stale_responses, selections).await;

    std::fs::write(output, page)
        .with_context(|| format!("cannot write snapshot to {}", output.display()))?;
    log::info!("Snapshot written to {}", output.display());
    println!("{}", output.display());

    Ok(())
}

/// 加载并渲染整个页面
///
/// 每个选择都要经过已渲染的列表激活：列表中没有的分组（或列表加载失败）
/// 只记录日志并跳过，不会发起详情请求。
/// 同一分类选择多个分组时，以最后一个为准。
pub async fn render_snapshot(
    fetcher: Fetcher,
    policy: StaleResponsePolicy,
    selections: &[SelectionEvent],
) -> String {
    let mut dashboard = Dashboard::new(fetcher, policy, |_| {
        (HtmlList::default(), HtmlDetail::default())
    });

    dashboard.start();
    dashboard.settle().await;

    for selection in selections {
        let composite_id = selection.composite_id();
        let activated = dashboard
            .pipeline(selection.category)
            .list_target()
            .activate_id(&composite_id);

        let Some(event) = activated else {
            log::warn!(
                "Skipping selection {composite_id}: not in the rendered {} list",
                selection.category.label()
            );
            continue;
        };
        if let Err(e) = dashboard.select(Some(event)) {
            log::warn!("Skipping selection {composite_id}: {e}");
        }
    }
    dashboard.settle().await;

    render_page(
        PAGE_TITLE,
        dashboard
            .pipelines()
            .map(|p| (p.category(), p.list_target(), p.detail_target())),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use dns_insight_core::{Category, FetchClient, PanelError, PanelResult};

    use super::*;
    use crate::test_support::MockFetchClient;

    fn fetcher() -> Fetcher {
        Fetcher::new(Arc::new(MockFetchClient))
    }

    /// MX 列表失败，其余列表含 broken.net，并记录所有详情请求
    #[derive(Default)]
    struct RecordingClient {
        detail_paths: Mutex<Vec<String>>,
    }

    impl RecordingClient {
        fn detail_paths(&self) -> Vec<String> {
            self.detail_paths.lock().expect("lock").clone()
        }
    }

    #[async_trait]
    impl FetchClient for RecordingClient {
        async fn get(&self, path: &str) -> PanelResult<String> {
            if path.contains("list=1") {
                if path.contains("dnsType=mx") {
                    return Err(PanelError::NetworkFailure {
                        path: path.to_string(),
                        detail: "HTTP 500: internal error".to_string(),
                    });
                }
                return Ok(
                    r#"[{"_id":"example.com","count":3},{"_id":"broken.net","count":1}]"#
                        .to_string(),
                );
            }

            self.detail_paths
                .lock()
                .expect("lock")
                .push(path.to_string());
            if path.contains("zone=broken.net") {
                return Err(PanelError::NetworkFailure {
                    path: path.to_string(),
                    detail: "HTTP 503: unavailable".to_string(),
                });
            }
            Ok(r#"[{"zone":"example.com","fqdn":"mail.example.com","value":"v=spf1 -all"}]"#
                .to_string())
        }
    }

    #[tokio::test]
    async fn snapshot_contains_all_panels() {
        let page = render_snapshot(fetcher(), StaleResponsePolicy::Discard, &[]).await;

        assert!(page.contains("<title>DNS Zone Metadata</title>"));
        for category in Category::ALL {
            assert!(page.contains(&format!(r#"id="{category}Panel""#)));
            assert!(page.contains(&format!(r#"id="{category}Tbl:example.com""#)));
        }
        assert!(!page.contains("detail-table"));
    }

    #[tokio::test]
    async fn snapshot_opens_selected_groups() {
        let selections = [
            SelectionEvent::new(Category::Spf, "example.com"),
            SelectionEvent::new(Category::Dkim, "other.org"),
        ];
        let page = render_snapshot(fetcher(), StaleResponsePolicy::Discard, &selections).await;

        assert!(page.contains(r#"id="spfDetail" data-category="spf" data-group="example.com""#));
        assert!(page.contains(r#"id="dkimDetail" data-category="dkim" data-group="other.org""#));
        assert!(page.contains(r#"<a href="/domain?search=mail.example.com">"#));
        assert_eq!(page.matches("detail-table").count(), 2);
    }

    #[tokio::test]
    async fn failed_detail_stays_in_its_panel() {
        let client = Arc::new(RecordingClient::default());
        let selections = [
            SelectionEvent::new(Category::Spf, "example.com"),
            SelectionEvent::new(Category::Dkim, "broken.net"),
        ];
        let page = render_snapshot(
            Fetcher::new(client.clone()),
            StaleResponsePolicy::Discard,
            &selections,
        )
        .await;

        assert!(page.contains("HTTP 503: unavailable"));
        assert_eq!(page.matches("detail-table").count(), 1);
        assert_eq!(client.detail_paths().len(), 2);
    }

    #[tokio::test]
    async fn unlisted_groups_are_never_fetched() {
        let client = Arc::new(RecordingClient::default());
        let selections = [
            // MX 列表加载失败
            SelectionEvent::new(Category::Mx, "example.com"),
            // 列表中不存在
            SelectionEvent::new(Category::Spf, "never-listed.com"),
        ];
        let page = render_snapshot(
            Fetcher::new(client.clone()),
            StaleResponsePolicy::Discard,
            &selections,
        )
        .await;

        assert!(client.detail_paths().is_empty());
        assert!(page.contains("HTTP 500: internal error"));
        assert!(!page.contains("detail-table"));
        assert!(!page.contains("never-listed.com"));
    }

    #[tokio::test]
    async fn run_writes_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("panel.html");

        run(fetcher(), &DashboardConfig::default(), &output, &[])
            .await
            .expect("snapshot");

        let written = std::fs::read_to_string(&output).expect("read snapshot");
        assert!(written.starts_with("<!DOCTYPE html>"));
    }
}
