//! 元数据 Provider 实现

#[cfg(feature = "builtin")]
mod builtin;
mod directory;
mod memory;

#[cfg(feature = "builtin")]
pub use builtin::BuiltinMetadataProvider;
pub use directory::{DirectoryMetadataProvider, DATA_PATH_ENV};
pub use memory::MemoryMetadataProvider;

use crate::error::{ProviderError, Result};
use crate::types::ServiceDescriptor;

/// 解析 JSON 服务描述
pub(crate) fn parse_descriptor(document: &str, provider_name: &str) -> Result<ServiceDescriptor> {
    serde_json::from_str(document).map_err(|e| {
        log::error!("[{provider_name}] JSON 解析失败: {e}");
        ProviderError::ParseError {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        }
    })
}
