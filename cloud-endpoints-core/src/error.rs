//! 核心错误类型

use cloud_endpoints_provider::ProviderError;

/// 核心层错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// 服务/提供商组合不存在
    #[error("[{provider}] Unknown service: {service}")]
    NotFound { provider: String, service: String },

    /// 服务不支持该区域
    #[error("Service: {service} not available in region: {region}")]
    InvalidRegion { service: String, region: String },

    /// 默认 URL 需要的协议不在服务支持列表中
    #[error("Unsupported protocol: {0}")]
    UnsupportedProtocol(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpointUrl(String),

    /// 其他元数据加载错误
    #[error("Metadata error: {0}")]
    Metadata(ProviderError),
}

impl From<ProviderError> for CoreError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::ServiceNotFound { provider, service } => {
                Self::NotFound { provider, service }
            }
            other => Self::Metadata(other),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
