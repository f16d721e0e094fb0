//! 云服务 endpoint 解析核心库
//!
//! 根据服务描述为每个区域解析 endpoint URL：
//! 显式传入的 URL 优先，其次是描述中配置的区域 URL，最后按默认规则构造。

pub mod endpoint;
pub mod error;
pub mod services;
pub mod types;

pub use endpoint::{DefaultEndpointFactory, Endpoint, EndpointFactory};
pub use error::{CoreError, CoreResult};
pub use services::{get_service, Service, ServiceCatalogService, ServiceContext};
pub use types::{EndpointRequest, ServiceOptions};

pub use cloud_endpoints_provider::{
    MetadataSource, ProviderError, Regions, ServiceDescriptor, ServiceMetadataProvider,
    ServiceType, DEFAULT_PROVIDER,
};
