//! 内置服务描述
//!
//! 数据文件位于 crate 根目录的 `data/aws/`，编译期嵌入

use crate::error::{ProviderError, Result};
use crate::traits::ServiceMetadataProvider;
use crate::types::{ServiceDescriptor, DEFAULT_PROVIDER};

use super::parse_descriptor;

const BUILTIN_SERVICES: &[(&str, &str)] = &[
    ("ec2", include_str!("../../data/aws/ec2.json")),
    ("iam", include_str!("../../data/aws/iam.json")),
    ("s3", include_str!("../../data/aws/s3.json")),
    ("sqs", include_str!("../../data/aws/sqs.json")),
    ("sts", include_str!("../../data/aws/sts.json")),
];

/// 内置元数据 Provider（无状态，仅支持 `aws`）
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinMetadataProvider;

impl BuiltinMetadataProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ServiceMetadataProvider for BuiltinMetadataProvider {
    fn get_service_descriptor(
        &self,
        service_name: &str,
        provider_name: &str,
    ) -> Result<ServiceDescriptor> {
        if provider_name != DEFAULT_PROVIDER {
            return Err(ProviderError::service_not_found(provider_name, service_name));
        }

        let (_, document) = BUILTIN_SERVICES
            .iter()
            .find(|(name, _)| *name == service_name)
            .ok_or_else(|| ProviderError::service_not_found(provider_name, service_name))?;

        log::debug!("[{provider_name}] Loading builtin service data: {service_name}");
        parse_descriptor(document, provider_name)
    }

    fn list_services(&self, provider_name: &str) -> Result<Vec<String>> {
        if provider_name != DEFAULT_PROVIDER {
            return Ok(Vec::new());
        }
        let mut names: Vec<String> = BUILTIN_SERVICES
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtin_documents_parse() {
        let provider = BuiltinMetadataProvider::new();
        for (name, _) in BUILTIN_SERVICES {
            let descriptor = provider.get_service_descriptor(name, "aws").unwrap();
            assert_eq!(descriptor.short_name, *name);
            assert!(!descriptor.regions.is_empty());
            assert!(!descriptor.protocols.is_empty());
        }
    }

    #[test]
    fn test_ec2_descriptor() {
        let descriptor = BuiltinMetadataProvider::new()
            .get_service_descriptor("ec2", "aws")
            .unwrap();
        assert_eq!(descriptor.name, "Amazon Elastic Compute Cloud");
        assert_eq!(descriptor.api_version, "2013-02-01");
        assert_eq!(descriptor.regions.names().next(), Some("us-east-1"));
        assert_eq!(descriptor.regions.explicit_endpoint("us-east-1"), None);
    }

    #[test]
    fn test_unknown_service_or_provider() {
        let provider = BuiltinMetadataProvider::new();
        assert_eq!(
            provider.get_service_descriptor("nope", "aws"),
            Err(ProviderError::service_not_found("aws", "nope"))
        );
        assert!(matches!(
            provider.get_service_descriptor("ec2", "gcp"),
            Err(ProviderError::ServiceNotFound { .. })
        ));
    }

    #[test]
    fn test_list_services() {
        let provider = BuiltinMetadataProvider::new();
        assert_eq!(
            provider.list_services("aws").unwrap(),
            vec!["ec2", "iam", "s3", "sqs", "sts"]
        );
        assert!(provider.list_services("gcp").unwrap().is_empty());
    }
}
