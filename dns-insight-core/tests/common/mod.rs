//! 共享测试工具和辅助函数

#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use dns_insight_core::render::html::{HtmlDetail, HtmlList};
use dns_insight_core::{
    Dashboard, FetchClient, Fetcher, PanelError, PanelResult, StaleResponsePolicy,
};
use tokio::sync::{oneshot, Mutex};

pub const MX_LIST: &str = "/api/v1.0/dns?dnsType=mx&list=1";
pub const SPF_LIST: &str = "/api/v1.0/dns?txtSearch=spf&list=1";
pub const DKIM_LIST: &str = "/api/v1.0/dns?txtSearch=dkim&list=1";

/// Scripted reply for one request
pub enum Reply {
    Body(String),
    Fail(PanelError),
    /// Resolves once the test sends through the paired sender
    Gated(oneshot::Receiver<PanelResult<String>>),
}

/// `FetchClient` answering from per-path queues and recording every path it sees
#[derive(Default)]
pub struct ScriptedFetchClient {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    requested: Mutex<Vec<String>>,
}

impl ScriptedFetchClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn reply(&self, path: &str, reply: Reply) {
        self.replies
            .lock()
            .await
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
    }

    pub async fn body(&self, path: &str, body: &str) {
        self.reply(path, Reply::Body(body.to_string())).await;
    }

    /// Queue a reply held back until the returned sender fires
    pub async fn gate(&self, path: &str) -> oneshot::Sender<PanelResult<String>> {
        let (tx, rx) = oneshot::channel();
        self.reply(path, Reply::Gated(rx)).await;
        tx
    }

    pub async fn requested(&self) -> Vec<String> {
        self.requested.lock().await.clone()
    }
}

#[async_trait]
impl FetchClient for ScriptedFetchClient {
    async fn get(&self, path: &str) -> PanelResult<String> {
        self.requested.lock().await.push(path.to_string());
        let reply = self
            .replies
            .lock()
            .await
            .get_mut(path)
            .and_then(VecDeque::pop_front);

        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Fail(error)) => Err(error),
            Some(Reply::Gated(rx)) => rx.await.unwrap_or_else(|_| {
                Err(PanelError::NetworkFailure {
                    path: path.to_string(),
                    detail: "gate dropped".to_string(),
                })
            }),
            None => Err(PanelError::NetworkFailure {
                path: path.to_string(),
                detail: "HTTP 404: no scripted reply".to_string(),
            }),
        }
    }
}

pub type HtmlDashboard = Dashboard<HtmlList, HtmlDetail>;

/// Dashboard rendering into HTML targets, backed by `client`
pub fn html_dashboard(
    client: &Arc<ScriptedFetchClient>,
    policy: StaleResponsePolicy,
) -> HtmlDashboard {
    let client: Arc<dyn FetchClient> = client.clone();
    Dashboard::new(Fetcher::new(client), policy, |_| {
        (HtmlList::default(), HtmlDetail::default())
    })
}

pub fn network_failure(path: &str, detail: &str) -> PanelError {
    PanelError::NetworkFailure {
        path: path.to_string(),
        detail: detail.to_string(),
    }
}

pub fn list_body(entries: &[(&str, u64)]) -> String {
    let entries: Vec<_> = entries
        .iter()
        .map(|(group, count)| serde_json::json!({ "_id": group, "count": count }))
        .collect();
    serde_json::Value::Array(entries).to_string()
}

pub fn detail_body(records: &[(&str, &str, &str)]) -> String {
    let records: Vec<_> = records
        .iter()
        .map(|(zone, fqdn, value)| serde_json::json!({ "zone": zone, "fqdn": fqdn, "value": value }))
        .collect();
    serde_json::Value::Array(records).to_string()
}
