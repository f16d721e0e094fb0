//! 内存元数据 Provider

use std::collections::HashMap;

use crate::error::{ProviderError, Result};
use crate::traits::ServiceMetadataProvider;
use crate::types::ServiceDescriptor;

/// 内存中的服务描述表，键为 (provider, service)
#[derive(Debug, Default, Clone)]
pub struct MemoryMetadataProvider {
    services: HashMap<(String, String), ServiceDescriptor>,
}

impl MemoryMetadataProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册服务描述（链式）
    #[must_use]
    pub fn with_service(
        mut self,
        provider_name: impl Into<String>,
        service_name: impl Into<String>,
        descriptor: ServiceDescriptor,
    ) -> Self {
        self.insert(provider_name, service_name, descriptor);
        self
    }

    /// 注册服务描述，已存在时覆盖
    pub fn insert(
        &mut self,
        provider_name: impl Into<String>,
        service_name: impl Into<String>,
        descriptor: ServiceDescriptor,
    ) {
        self.services
            .insert((provider_name.into(), service_name.into()), descriptor);
    }
}

impl ServiceMetadataProvider for MemoryMetadataProvider {
    fn get_service_descriptor(
        &self,
        service_name: &str,
        provider_name: &str,
    ) -> Result<ServiceDescriptor> {
        self.services
            .get(&(provider_name.to_string(), service_name.to_string()))
            .cloned()
            .ok_or_else(|| ProviderError::service_not_found(provider_name, service_name))
    }

    fn list_services(&self, provider_name: &str) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .services
            .keys()
            .filter(|(provider, _)| provider == provider_name)
            .map(|(_, service)| service.clone())
            .collect();
        names.sort();
        Ok(names)
    }
}
