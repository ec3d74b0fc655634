//! DNS Insight TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//!
//! 数据来源是 `dns-insight-core` 的 `Dashboard`：三个分类（MX / SPF / DKIM）
//! 各自一条 列表 → 选择 → 详情 的管道。fetch 在 tokio 任务中完成后，
//! 结果以 `PipelineEvent` 回到主循环，由 Update 层写入对应的面板。
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()            // 解析命令行参数
//!     init_logging()          // 日志写入文件，不干扰终端界面
//!     load_config()           // 配置文件 + 环境变量 + 命令行覆盖
//!
//!     snapshot 子命令：
//!         snapshot::run()     // 无界面，渲染 HTML 面板后退出
//!
//!     否则：
//!         init_terminal()     // 初始化终端
//!         App::new()          // 创建 APP 实例
//!         app::run()          // 运行 app.rs 主循环
//!         restore_terminal()  // 无论成功与否，都恢复终端
//! }

mod app;
mod event;
mod message;
mod model;
mod snapshot;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dns_insight_core::{DashboardConfig, Fetcher, HttpFetchClient, SelectionEvent};

use util::{init_logging, init_terminal, restore_terminal};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "dns-insight", version, about = "MX / SPF / DKIM zone metadata dashboard")]
struct Cli {
    /// Config file (default: <config_dir>/dns-insight/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Search API base URL, overrides the config file and DNS_INSIGHT_API_BASE
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Log file (default: dns-insight.log in the current directory)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load all panels headlessly and write them as an HTML page
    Snapshot {
        /// Output HTML file
        #[arg(short, long)]
        output: PathBuf,

        /// Groups to drill into, e.g. `mx:example.com` or `spfTbl:example.com`
        #[arg(long = "select", value_name = "CATEGORY:GROUP")]
        selections: Vec<SelectionEvent>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 日志文件的 guard 必须存活到程序结束，否则缓冲的日志会丢失
    let _log_guard = init_logging(cli.log_file.as_deref())?;

    let config = load_config(&cli)?;
    let client = HttpFetchClient::new(&config.api).context("failed to create HTTP client")?;
    log::info!("Search API at {}", client.base_url());
    let fetcher = Fetcher::new(Arc::new(client));

    if let Some(Command::Snapshot { output, selections }) = cli.command {
        return snapshot::run(fetcher, &config, &output, &selections).await;
    }

    // 1. 初始化终端
    let mut terminal = init_terminal()?;

    // 2. 创建应用实例，开始加载三个列表
    let mut app = model::App::new(fetcher, &config);
    app.dashboard.start();

    // 3. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 4. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 5. 返回结果
    result
}

/// 加载配置：文件 → 环境变量 → 命令行
fn load_config(cli: &Cli) -> Result<DashboardConfig> {
    let mut config = DashboardConfig::load_or_default(cli.config.as_deref())?;
    config.apply_env_overrides()?;

    if let Some(base_url) = &cli.api_base {
        config.api.base_url.clone_from(base_url);
        config.validate()?;
    }

    Ok(config)
}
