//! 命令行参数

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE};

/// 按区域解析云服务 endpoint
#[derive(Debug, Parser)]
#[command(name = "cloud-endpoints", version)]
pub struct Cli {
    /// 配置文件路径
    #[arg(long, global = true, env = CONFIG_PATH_ENV, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// 提供商（覆盖配置）
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// 从数据目录读取服务描述（覆盖配置）
    #[arg(long, global = true)]
    pub data_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 列出提供商下的所有服务
    Services,

    /// 输出服务所有区域的 endpoint
    Endpoints {
        service: String,

        #[command(flatten)]
        options: ServiceArgs,
    },

    /// 解析服务在某个区域的 endpoint
    Resolve {
        service: String,
        region: String,

        /// 使用 http 构造默认 URL
        #[arg(long)]
        insecure: bool,

        /// 强制使用的 endpoint URL
        #[arg(long)]
        endpoint_url: Option<String>,

        /// 传递给 endpoint 的 profile
        #[arg(long)]
        profile: Option<String>,

        #[command(flatten)]
        options: ServiceArgs,
    },
}

/// 服务构造参数（覆盖配置）
#[derive(Debug, Args)]
pub struct ServiceArgs {
    #[arg(long)]
    pub path: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,
}
