//! 元数据 Provider 错误类型

use crate::providers::DATA_PATH_ENV;

/// 元数据加载错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// 服务/提供商组合不存在
    #[error("[{provider}] Unknown service: {service}")]
    ServiceNotFound { provider: String, service: String },

    /// 读取数据文件失败
    #[error("Failed to read {path}: {detail}")]
    IoError { path: String, detail: String },

    /// 服务描述解析失败
    #[error("[{provider}] Failed to parse service data: {detail}")]
    ParseError { provider: String, detail: String },

    /// 未配置数据目录
    #[error("Metadata data path is not configured (set {})", DATA_PATH_ENV)]
    DataPathNotConfigured,
}

impl ProviderError {
    pub(crate) fn service_not_found(provider: &str, service: &str) -> Self {
        Self::ServiceNotFound {
            provider: provider.to_string(),
            service: service.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
