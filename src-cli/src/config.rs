//! 配置管理
//!
//! 从 TOML 文件加载，文件不存在时使用默认值

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use cloud_endpoints_core::{MetadataSource, DEFAULT_PROVIDER};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "CLOUD_ENDPOINTS_CONFIG";
/// 默认配置文件
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 元数据来源 (`source = "builtin" | "directory"`)
    pub metadata: MetadataSource,
    pub endpoint: EndpointConfig,
}

/// Endpoint 解析默认参数
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub provider: String,
    pub path: String,
    pub port: Option<u16>,
    pub is_secure: bool,
    pub profile: Option<String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            path: "/".to_string(),
            port: None,
            is_secure: true,
            profile: None,
        }
    }
}

impl AppConfig {
    /// 加载配置文件
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("配置文件不存在，使用默认配置: {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("解析配置文件失败: {}", path.display()))
    }

    fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.endpoint.provider, "aws");
        assert!(config.endpoint.is_secure);
    }

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::parse(
            r#"
            [metadata]
            source = "directory"
            data_path = "/srv/cloud-data"

            [endpoint]
            provider = "aws"
            path = "/v1/"
            port = 8080
            is_secure = false
            profile = "dev"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.metadata,
            MetadataSource::Directory {
                data_path: Some(PathBuf::from("/srv/cloud-data"))
            }
        );
        assert_eq!(config.endpoint.path, "/v1/");
        assert_eq!(config.endpoint.port, Some(8080));
        assert!(!config.endpoint.is_secure);
        assert_eq!(config.endpoint.profile.as_deref(), Some("dev"));
    }

    #[test]
    fn test_partial_endpoint_section() {
        let config = AppConfig::parse("[endpoint]\nport = 4566\n").unwrap();
        assert_eq!(config.metadata, MetadataSource::default());
        assert_eq!(config.endpoint.port, Some(4566));
        assert_eq!(config.endpoint.path, "/");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[endpoint]\nprofile = \"ops\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.endpoint.profile.as_deref(), Some("ops"));
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(AppConfig::parse("[endpoint]\nport = \"not a port\"\n").is_err());
    }
}
