//! Endpoint 句柄与构造

use serde::Serialize;

use cloud_endpoints_provider::ServiceType;

use crate::error::{CoreError, CoreResult};
use crate::services::Service;

/// 已解析的 endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// 服务短名
    pub service_name: String,
    pub region_name: String,
    pub url: String,
    /// URL 的 authority 部分
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
}

/// Endpoint 构造方
///
/// URL 解析完成后由 [`Service`] 调用，`profile` 不做任何解释直接传入。
pub trait EndpointFactory: Send + Sync {
    fn construct_endpoint(
        &self,
        service: &Service,
        region_name: &str,
        url: &str,
        profile: Option<&str>,
    ) -> CoreResult<Endpoint>;
}

/// 默认 Endpoint 构造方（无状态）
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultEndpointFactory;

impl EndpointFactory for DefaultEndpointFactory {
    fn construct_endpoint(
        &self,
        service: &Service,
        region_name: &str,
        url: &str,
        profile: Option<&str>,
    ) -> CoreResult<Endpoint> {
        let host = host_of(url).ok_or_else(|| CoreError::InvalidEndpointUrl(url.to_string()))?;

        Ok(Endpoint {
            service_name: service.short_name().to_string(),
            region_name: region_name.to_string(),
            url: url.to_string(),
            host: host.to_string(),
            profile: profile.map(str::to_string),
            service_type: service.service_type(),
        })
    }
}

/// 取 `scheme://` 之后、path 之前的部分
fn host_of(url: &str) -> Option<&str> {
    let (scheme, rest) = url.split_once("://")?;
    if scheme.is_empty() {
        return None;
    }
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    (!host.is_empty()).then_some(host)
}
