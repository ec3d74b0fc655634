#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `HttpFetchClient` against a loopback HTTP server.

use std::sync::Arc;

use dns_insight_core::render::html::{HtmlDetail, HtmlList};
use dns_insight_core::{
    ApiConfig, Category, Dashboard, FetchClient, Fetcher, HttpFetchClient, ListEntry, PanelError,
    PanelResult, StaleResponsePolicy,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve a single HTTP/1.1 response and report the request line received
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0_u8; 4096];
        let mut request = Vec::new();
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let request = String::from_utf8_lossy(&request);
        let request_line = request.lines().next().unwrap_or_default().to_string();
        let _ = tx.send(request_line);

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    (base, rx)
}

fn client(base: &str) -> HttpFetchClient {
    HttpFetchClient::new(&ApiConfig {
        base_url: base.to_string(),
        connect_timeout_secs: Some(2),
        request_timeout_secs: Some(5),
    })
    .unwrap()
}

#[tokio::test]
async fn get_returns_body_and_sends_path() {
    let (base, request_line) = serve_once("200 OK", r#"[{"_id":"example.com","count":3}]"#).await;
    let client = client(&base);

    let body = client.get("/api/v1.0/dns?dnsType=mx&list=1").await.unwrap();
    assert_eq!(body, r#"[{"_id":"example.com","count":3}]"#);
    assert_eq!(
        request_line.await.unwrap(),
        "GET /api/v1.0/dns?dnsType=mx&list=1 HTTP/1.1"
    );
}

#[tokio::test]
async fn server_error_is_network_failure() {
    let (base, _) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let client = client(&base);

    let result = client.get("/api/v1.0/dns?txtSearch=spf&list=1").await;
    match result {
        Err(PanelError::NetworkFailure { path, detail }) => {
            assert_eq!(path, "/api/v1.0/dns?txtSearch=spf&list=1");
            assert!(detail.starts_with("HTTP 500"), "detail: {detail}");
        }
        other => panic!("expected network failure, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_network_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let result = client(&base).get("/api/v1.0/dns?dnsType=mx&list=1").await;
    assert!(matches!(result, Err(PanelError::NetworkFailure { .. })));
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let (base, _) = serve_once("200 OK", "<html>maintenance</html>").await;
    let fetcher = Fetcher::new(Arc::new(client(&base)));

    let result: PanelResult<Vec<ListEntry>> =
        fetcher.get_json("/api/v1.0/dns?txtSearch=dkim&list=1").await;
    assert!(matches!(result, Err(PanelError::MalformedResponse { .. })));
}

#[tokio::test]
async fn dashboard_over_http() {
    let (base, _) = serve_once("200 OK", r#"[{"_id":"example.com","count":2}]"#).await;
    let fetcher = Fetcher::new(Arc::new(client(&base)));
    let mut dashboard = Dashboard::new(fetcher, StaleResponsePolicy::Discard, |_| {
        (HtmlList::default(), HtmlDetail::default())
    });

    dashboard.reload(Category::Spf);
    dashboard.settle().await;

    let markup = dashboard.pipeline(Category::Spf).list_target().markup();
    assert!(markup.contains("example.com (2)"));
}
