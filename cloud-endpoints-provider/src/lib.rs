//! 云服务元数据 Provider 抽象库
//!
//! 为 endpoint 解析提供服务描述（名称、区域、协议、API 版本）。
//!
//! # 数据来源
//! - [`BuiltinMetadataProvider`] - 编译期嵌入的 aws 服务描述
//! - [`DirectoryMetadataProvider`] - 从数据目录读取 `<provider>/<service>.json`
//! - [`MemoryMetadataProvider`] - 内存映射，用于测试与嵌入场景

mod error;
mod factory;
mod providers;
mod traits;
mod types;

pub use error::{ProviderError, Result};
pub use factory::{create_metadata_provider, MetadataSource};
#[cfg(feature = "builtin")]
pub use providers::BuiltinMetadataProvider;
pub use providers::{DirectoryMetadataProvider, MemoryMetadataProvider, DATA_PATH_ENV};
pub use traits::ServiceMetadataProvider;
pub use types::{Regions, ServiceDescriptor, ServiceType, DEFAULT_PROVIDER};
