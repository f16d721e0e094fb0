//! 数据目录元数据 Provider
//!
//! 目录结构: `<root>/<provider>/<service>.json`

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ProviderError, Result};
use crate::traits::ServiceMetadataProvider;
use crate::types::ServiceDescriptor;

use super::parse_descriptor;

/// 数据目录环境变量
pub const DATA_PATH_ENV: &str = "CLOUD_ENDPOINTS_DATA_PATH";

const DESCRIPTOR_EXTENSION: &str = "json";

/// 从数据目录读取服务描述
#[derive(Debug, Clone)]
pub struct DirectoryMetadataProvider {
    root: PathBuf,
}

impl DirectoryMetadataProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 从 `CLOUD_ENDPOINTS_DATA_PATH` 读取数据目录
    pub fn from_env() -> Result<Self> {
        std::env::var_os(DATA_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(Self::new)
            .ok_or(ProviderError::DataPathNotConfigured)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn descriptor_path(&self, service_name: &str, provider_name: &str) -> Option<PathBuf> {
        if !is_plain_name(service_name) || !is_plain_name(provider_name) {
            return None;
        }
        Some(
            self.root
                .join(provider_name)
                .join(format!("{service_name}.{DESCRIPTOR_EXTENSION}")),
        )
    }
}

/// 名称不能为空，也不能跳出数据目录
fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

fn io_error(path: &Path, e: &std::io::Error) -> ProviderError {
    ProviderError::IoError {
        path: path.display().to_string(),
        detail: e.to_string(),
    }
}

impl ServiceMetadataProvider for DirectoryMetadataProvider {
    fn get_service_descriptor(
        &self,
        service_name: &str,
        provider_name: &str,
    ) -> Result<ServiceDescriptor> {
        let path = self
            .descriptor_path(service_name, provider_name)
            .ok_or_else(|| ProviderError::service_not_found(provider_name, service_name))?;

        let document = match fs::read_to_string(&path) {
            Ok(document) => document,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProviderError::service_not_found(provider_name, service_name));
            }
            Err(e) => return Err(io_error(&path, &e)),
        };

        log::debug!("[{provider_name}] Loaded service data from {}", path.display());
        parse_descriptor(&document, provider_name)
    }

    fn list_services(&self, provider_name: &str) -> Result<Vec<String>> {
        if !is_plain_name(provider_name) {
            return Ok(Vec::new());
        }

        let dir = self.root.join(provider_name);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(&dir, &e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| io_error(&dir, &e))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(DESCRIPTOR_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
