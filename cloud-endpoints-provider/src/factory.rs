//! 元数据 Provider 工厂

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
#[cfg(feature = "builtin")]
use crate::providers::BuiltinMetadataProvider;
use crate::providers::DirectoryMetadataProvider;
use crate::traits::ServiceMetadataProvider;

/// 元数据来源配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum MetadataSource {
    /// 内置数据
    #[cfg(feature = "builtin")]
    Builtin,
    /// 数据目录；未指定时读取 `CLOUD_ENDPOINTS_DATA_PATH`
    Directory {
        #[serde(default)]
        data_path: Option<PathBuf>,
    },
}

impl Default for MetadataSource {
    #[cfg(feature = "builtin")]
    fn default() -> Self {
        Self::Builtin
    }

    #[cfg(not(feature = "builtin"))]
    fn default() -> Self {
        Self::Directory { data_path: None }
    }
}

/// 根据配置创建元数据 Provider 实例
pub fn create_metadata_provider(
    source: &MetadataSource,
) -> Result<Arc<dyn ServiceMetadataProvider>> {
    let provider: Arc<dyn ServiceMetadataProvider> = match source {
        #[cfg(feature = "builtin")]
        MetadataSource::Builtin => Arc::new(BuiltinMetadataProvider::new()),
        MetadataSource::Directory {
            data_path: Some(path),
        } => Arc::new(DirectoryMetadataProvider::new(path.clone())),
        MetadataSource::Directory { data_path: None } => {
            Arc::new(DirectoryMetadataProvider::from_env()?)
        }
    };
    log::debug!("Created metadata provider: {source:?}");
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_tagged_json() {
        let source: MetadataSource =
            serde_json::from_str(r#"{"source": "directory", "data_path": "/srv/data"}"#).unwrap();
        assert_eq!(
            source,
            MetadataSource::Directory {
                data_path: Some(PathBuf::from("/srv/data"))
            }
        );
    }

    #[cfg(feature = "builtin")]
    #[test]
    fn test_default_source_is_builtin() {
        let provider = create_metadata_provider(&MetadataSource::default()).unwrap();
        assert!(provider.get_service_descriptor("ec2", "aws").is_ok());
    }

    #[test]
    fn test_directory_source_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let provider = create_metadata_provider(&MetadataSource::Directory {
            data_path: Some(dir.path().to_path_buf()),
        })
        .unwrap();
        assert!(provider.list_services("aws").unwrap().is_empty());
    }
}
