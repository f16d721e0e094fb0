//! 服务描述类型定义

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 默认提供商
pub const DEFAULT_PROVIDER: &str = "aws";

/// 服务的 API 风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    Query,
    Json,
    RestXml,
    RestJson,
}

impl ServiceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Json => "json",
            Self::RestXml => "rest-xml",
            Self::RestJson => "rest-json",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 区域 -> 显式 endpoint 映射
///
/// 保持声明顺序；空字符串与 `null` 都视为未配置显式 endpoint。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Regions(Vec<(String, Option<String>)>);

impl Regions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加区域；已存在时替换其 endpoint 并保留原位置
    pub fn insert(&mut self, region: impl Into<String>, endpoint: Option<String>) {
        let region = region.into();
        let endpoint = endpoint.filter(|url| !url.is_empty());
        match self.0.iter_mut().find(|(name, _)| *name == region) {
            Some(entry) => entry.1 = endpoint,
            None => self.0.push((region, endpoint)),
        }
    }

    pub fn contains(&self, region: &str) -> bool {
        self.0.iter().any(|(name, _)| name == region)
    }

    /// 区域的显式 endpoint（未配置或区域不存在时为 `None`）
    pub fn explicit_endpoint(&self, region: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == region)
            .and_then(|(_, endpoint)| endpoint.as_deref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0
            .iter()
            .map(|(name, endpoint)| (name.as_str(), endpoint.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<R: Into<String>> FromIterator<(R, Option<String>)> for Regions {
    fn from_iter<I: IntoIterator<Item = (R, Option<String>)>>(iter: I) -> Self {
        let mut regions = Self::new();
        for (region, endpoint) in iter {
            regions.insert(region, endpoint);
        }
        regions
    }
}

impl Serialize for Regions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Regions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // serde_json 开启 preserve_order，Map 按文档顺序迭代
        let raw = serde_json::Map::<String, Value>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(region, value)| match value {
                Value::Null => Ok((region, None)),
                Value::String(url) => Ok((region, Some(url))),
                other => Err(de::Error::custom(format!(
                    "region {region}: expected endpoint URL or null, got {other}"
                ))),
            })
            .collect()
    }
}

/// 服务描述（由元数据 Provider 加载，视为不可变配置）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// 服务全称
    pub name: String,
    /// 服务短名，用于构造默认 host
    pub short_name: String,
    pub api_version: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_version: Option<String>,
    #[serde(default)]
    pub regions: Regions,
    /// 支持的传输协议，如 `https`、`http`
    #[serde(default)]
    pub protocols: Vec<String>,
}

impl ServiceDescriptor {
    pub fn supports_protocol(&self, scheme: &str) -> bool {
        self.protocols.iter().any(|p| p == scheme)
    }
}
