//! 服务目录
//!
//! 列出元数据 Provider 已知的服务（无状态服务）

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;

/// 服务目录
pub struct ServiceCatalogService {
    ctx: Arc<ServiceContext>,
}

impl ServiceCatalogService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 列出提供商下的所有服务（按名称排序）
    pub fn list_services(&self, provider_name: &str) -> CoreResult<Vec<String>> {
        Ok(self.ctx.metadata_provider.list_services(provider_name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud_endpoints_provider::{MemoryMetadataProvider, Regions, ServiceDescriptor};

    fn descriptor(short_name: &str) -> ServiceDescriptor {
        ServiceDescriptor {
            name: short_name.to_uppercase(),
            short_name: short_name.to_string(),
            api_version: "2024-01-01".to_string(),
            service_type: None,
            signature_version: None,
            regions: Regions::new(),
            protocols: vec!["https".to_string()],
        }
    }

    #[test]
    fn test_list_services() {
        let metadata = MemoryMetadataProvider::new()
            .with_service("aws", "sqs", descriptor("sqs"))
            .with_service("aws", "ec2", descriptor("ec2"));
        let catalog = ServiceCatalogService::new(Arc::new(ServiceContext::with_metadata_provider(
            Arc::new(metadata),
        )));

        assert_eq!(catalog.list_services("aws").unwrap(), vec!["ec2", "sqs"]);
        assert!(catalog.list_services("other").unwrap().is_empty());
    }
}
