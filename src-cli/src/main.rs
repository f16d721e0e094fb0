//! cloud-endpoints 命令行
//!
//! 加载配置与服务描述，按区域解析 endpoint 并以 JSON 输出

mod cli;
mod commands;
mod config;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    // 初始化日志（输出到 stderr，stdout 只保留结果）
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load_from(&cli.config)?;
    tracing::debug!("配置加载完成: {}", cli.config.display());

    let output = commands::run(cli, config)?;
    println!("{output}");

    Ok(())
}
