//! 元数据 Provider Trait

use crate::error::Result;
use crate::types::ServiceDescriptor;

/// 服务元数据来源
///
/// 实现:
/// - `BuiltinMetadataProvider` (内置数据)
/// - `DirectoryMetadataProvider` (数据目录)
/// - `MemoryMetadataProvider` (内存)
pub trait ServiceMetadataProvider: Send + Sync {
    /// 获取服务描述
    ///
    /// # Arguments
    /// * `service_name` - 服务名，如 `ec2`
    /// * `provider_name` - 提供商名，如 `aws`
    ///
    /// 未知组合返回 `ProviderError::ServiceNotFound`
    fn get_service_descriptor(
        &self,
        service_name: &str,
        provider_name: &str,
    ) -> Result<ServiceDescriptor>;

    /// 列出提供商下所有已知服务（按名称排序）
    ///
    /// 未知提供商返回空列表
    fn list_services(&self, provider_name: &str) -> Result<Vec<String>>;
}
