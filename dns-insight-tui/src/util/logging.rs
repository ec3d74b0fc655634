//! 日志初始化
//!
//! 界面占用整个终端，日志只能写入文件。
//! 核心库通过 `log` 门面输出，经 `tracing-log` 桥接到同一个 subscriber。

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志级别环境变量
pub const LOG_ENV: &str = "DNS_INSIGHT_LOG";

/// 默认日志文件名
const DEFAULT_LOG_FILE: &str = "dns-insight.log";

/// 初始化文件日志
///
/// 返回的 guard 在 drop 时刷新缓冲，必须持有到程序退出。
pub fn init_logging(log_file: Option<&Path>) -> Result<WorkerGuard> {
    let (dir, file_name) = split_log_path(log_file);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, &file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(env_filter(std::env::var(LOG_ENV).ok().as_deref()))
        .try_init()
        .context("failed to install log subscriber")?;

    tracing::info!("Logging to {}", dir.join(&file_name).display());
    Ok(guard)
}

/// 解析过滤规则，无效或缺省时使用 `info`
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::from_str(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// 拆分为目录和文件名
fn split_log_path(log_file: Option<&Path>) -> (PathBuf, String) {
    let path = log_file.unwrap_or_else(|| Path::new(DEFAULT_LOG_FILE));
    let file_name = path
        .file_name()
        .map_or_else(|| DEFAULT_LOG_FILE.to_string(), |n| n.to_string_lossy().into_owned());
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    (dir, file_name)
}
