//! 服务层

mod service;
mod service_catalog_service;

use std::fmt;
use std::sync::Arc;

use cloud_endpoints_provider::ServiceMetadataProvider;

use crate::endpoint::{DefaultEndpointFactory, EndpointFactory};

pub use service::{get_service, Service};
pub use service_catalog_service::ServiceCatalogService;

/// 服务上下文：显式注入的外部协作方
pub struct ServiceContext {
    /// 服务描述来源
    pub metadata_provider: Arc<dyn ServiceMetadataProvider>,
    /// URL 解析后的 endpoint 构造方
    pub endpoint_factory: Arc<dyn EndpointFactory>,
}

impl ServiceContext {
    #[must_use]
    pub fn new(
        metadata_provider: Arc<dyn ServiceMetadataProvider>,
        endpoint_factory: Arc<dyn EndpointFactory>,
    ) -> Self {
        Self {
            metadata_provider,
            endpoint_factory,
        }
    }

    /// 使用 [`DefaultEndpointFactory`]
    #[must_use]
    pub fn with_metadata_provider(metadata_provider: Arc<dyn ServiceMetadataProvider>) -> Self {
        Self::new(metadata_provider, Arc::new(DefaultEndpointFactory))
    }
}

impl fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}
