//! 云服务模型
//!
//! 一个 `Service` 对应一个 (provider, service) 组合，构造时为描述中的每个区域
//! 解析 endpoint，之后不再变化。

use std::fmt;
use std::sync::Arc;

use cloud_endpoints_provider::{Regions, ServiceDescriptor, ServiceType, DEFAULT_PROVIDER};

use crate::endpoint::Endpoint;
use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{EndpointRequest, ServiceOptions};

/// 默认 host 的域名后缀
const DEFAULT_DOMAIN: &str = "amazonaws.com";

/// 云服务（如 EC2）
#[derive(Debug)]
pub struct Service {
    ctx: Arc<ServiceContext>,
    name: String,
    short_name: String,
    cli_name: String,
    api_version: String,
    service_type: Option<ServiceType>,
    signature_version: Option<String>,
    regions: Regions,
    protocols: Vec<String>,
    provider_name: String,
    path: String,
    port: Option<u16>,
    endpoints: Vec<Endpoint>,
}

impl Service {
    /// 加载服务描述并解析所有区域的 endpoint
    ///
    /// 任一区域解析失败则整体失败。
    pub fn new(
        ctx: Arc<ServiceContext>,
        provider_name: &str,
        service_name: &str,
        options: ServiceOptions,
    ) -> CoreResult<Self> {
        let ServiceDescriptor {
            name,
            short_name,
            api_version,
            service_type,
            signature_version,
            regions,
            protocols,
        } = ctx
            .metadata_provider
            .get_service_descriptor(service_name, provider_name)?;

        let mut service = Self {
            ctx,
            name,
            cli_name: short_name.clone(),
            short_name,
            api_version,
            service_type,
            signature_version,
            regions,
            protocols,
            provider_name: provider_name.to_string(),
            path: options.path,
            port: options.port,
            endpoints: Vec::new(),
        };

        let request = EndpointRequest::default();
        let endpoints = service
            .regions
            .names()
            .map(|region| service.resolve_endpoint(region, &request))
            .collect::<CoreResult<Vec<_>>>()?;
        service.endpoints = endpoints;

        log::debug!(
            "[{}] Loaded {} with {} endpoints",
            service.provider_name,
            service,
            service.endpoints.len()
        );
        Ok(service)
    }

    /// 解析区域的 endpoint URL
    ///
    /// 顺序: `request.endpoint_url` > 区域显式 URL > 默认规则
    /// `{scheme}://{short_name}.{region}.amazonaws.com{path}[:{port}]`
    pub fn resolve_url(&self, region_name: &str, request: &EndpointRequest) -> CoreResult<String> {
        if !self.regions.contains(region_name) {
            return Err(CoreError::InvalidRegion {
                service: self.short_name.clone(),
                region: region_name.to_string(),
            });
        }

        if let Some(url) = request.endpoint_url.as_deref().filter(|url| !url.is_empty()) {
            return Ok(url.to_string());
        }

        if let Some(url) = self.regions.explicit_endpoint(region_name) {
            return Ok(url.to_string());
        }

        self.default_url(region_name, request.is_secure)
    }

    fn default_url(&self, region_name: &str, is_secure: bool) -> CoreResult<String> {
        let scheme = if is_secure { "https" } else { "http" };
        if !self.supports_protocol(scheme) {
            return Err(CoreError::UnsupportedProtocol(scheme.to_string()));
        }

        let host = format!("{}.{region_name}.{DEFAULT_DOMAIN}", self.short_name);
        let url = format!("{scheme}://{host}{}", self.path);

        // 端口追加在 path 之后，与既有行为保持一致
        match self.port.filter(|port| *port != 0) {
            Some(port) => Ok(format!("{url}:{port}")),
            None => Ok(url),
        }
    }

    /// 解析区域的 endpoint 并交给 endpoint 构造方
    pub fn resolve_endpoint(
        &self,
        region_name: &str,
        request: &EndpointRequest,
    ) -> CoreResult<Endpoint> {
        let url = self.resolve_url(region_name, request)?;
        log::debug!("[{}] {} {region_name} -> {url}", self.provider_name, self.short_name);

        self.ctx.endpoint_factory.construct_endpoint(
            self,
            region_name,
            &url,
            request.profile.as_deref(),
        )
    }

    /// 构造时解析好的区域 endpoint
    pub fn endpoint(&self, region_name: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.region_name == region_name)
    }

    pub fn supports_protocol(&self, scheme: &str) -> bool {
        self.protocols.iter().any(|p| p == scheme)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn cli_name(&self) -> &str {
        &self.cli_name
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn service_type(&self) -> Option<ServiceType> {
        self.service_type
    }

    pub fn signature_version(&self) -> Option<&str> {
        self.signature_version.as_deref()
    }

    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    pub fn protocols(&self) -> &[String] {
        &self.protocols
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// 每个区域一个 endpoint，顺序与 `regions` 一致
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Service({})", self.name)
    }
}

/// 按服务名获取 `Service`，`provider_name` 缺省为 `aws`
pub fn get_service(
    ctx: &Arc<ServiceContext>,
    service_name: &str,
    provider_name: Option<&str>,
) -> CoreResult<Service> {
    Service::new(
        Arc::clone(ctx),
        provider_name.unwrap_or(DEFAULT_PROVIDER),
        service_name,
        ServiceOptions::default(),
    )
}
