//! 命令执行
//!
//! 结果以 JSON 文本返回，由 main 输出到 stdout

use std::sync::Arc;

use cloud_endpoints_core::{
    EndpointRequest, Service, ServiceCatalogService, ServiceContext, ServiceOptions,
};
use cloud_endpoints_provider::{create_metadata_provider, MetadataSource};

use crate::cli::{Cli, Command, ServiceArgs};
use crate::config::{AppConfig, EndpointConfig};

/// 执行命令
pub fn run(cli: Cli, config: AppConfig) -> anyhow::Result<String> {
    let source = match cli.data_path {
        Some(path) => MetadataSource::Directory {
            data_path: Some(path),
        },
        None => config.metadata,
    };
    let endpoint_config = config.endpoint;
    let provider = cli.provider.unwrap_or_else(|| endpoint_config.provider.clone());

    let metadata_provider = create_metadata_provider(&source)?;
    let ctx = Arc::new(ServiceContext::with_metadata_provider(metadata_provider));
    tracing::debug!("元数据来源: {source:?}, 提供商: {provider}");

    match cli.command {
        Command::Services => {
            let services = ServiceCatalogService::new(ctx).list_services(&provider)?;
            Ok(serde_json::to_string_pretty(&services)?)
        }
        Command::Endpoints { service, options } => {
            let service = load_service(ctx, &provider, &service, options, &endpoint_config)?;
            Ok(serde_json::to_string_pretty(service.endpoints())?)
        }
        Command::Resolve {
            service,
            region,
            insecure,
            endpoint_url,
            profile,
            options,
        } => {
            let request = EndpointRequest {
                is_secure: endpoint_config.is_secure && !insecure,
                profile: profile.or_else(|| endpoint_config.profile.clone()),
                endpoint_url,
            };
            let service = load_service(ctx, &provider, &service, options, &endpoint_config)?;
            let endpoint = service.resolve_endpoint(&region, &request)?;
            tracing::info!("{service} {region} -> {}", endpoint.url);
            Ok(serde_json::to_string_pretty(&endpoint)?)
        }
    }
}

fn load_service(
    ctx: Arc<ServiceContext>,
    provider: &str,
    service_name: &str,
    args: ServiceArgs,
    endpoint_config: &EndpointConfig,
) -> anyhow::Result<Service> {
    let options = ServiceOptions {
        path: args.path.unwrap_or_else(|| endpoint_config.path.clone()),
        port: args.port.or(endpoint_config.port),
    };
    Ok(Service::new(ctx, provider, service_name, options)?)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn run_args(args: &[&str]) -> anyhow::Result<serde_json::Value> {
        run_with_config(args, AppConfig::default())
    }

    fn run_with_config(args: &[&str], config: AppConfig) -> anyhow::Result<serde_json::Value> {
        let cli = Cli::try_parse_from(
            std::iter::once("cloud-endpoints").chain(args.iter().copied()),
        )?;
        let output = run(cli, config)?;
        Ok(serde_json::from_str(&output)?)
    }

    #[test]
    fn test_services() {
        let value = run_args(&["services"]).unwrap();
        assert_eq!(value, serde_json::json!(["ec2", "iam", "s3", "sqs", "sts"]));
    }

    #[test]
    fn test_resolve_default_url() {
        let value = run_args(&["resolve", "ec2", "us-east-1"]).unwrap();
        assert_eq!(value["url"], "https://ec2.us-east-1.amazonaws.com/");
        assert_eq!(value["host"], "ec2.us-east-1.amazonaws.com");
    }

    #[test]
    fn test_resolve_with_port_and_profile() {
        let value = run_args(&[
            "resolve",
            "ec2",
            "us-east-1",
            "--port",
            "8080",
            "--profile",
            "dev",
        ])
        .unwrap();
        assert_eq!(value["url"], "https://ec2.us-east-1.amazonaws.com/:8080");
        assert_eq!(value["profile"], "dev");
    }

    #[test]
    fn test_resolve_insecure_unsupported() {
        let err = run_args(&["resolve", "ec2", "us-east-1", "--insecure"]).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported protocol: http");
    }

    #[test]
    fn test_resolve_unknown_region() {
        let err = run_args(&["resolve", "ec2", "mars-1"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Service: ec2 not available in region: mars-1"
        );
    }

    #[test]
    fn test_config_defaults_apply() {
        let mut config = AppConfig::default();
        config.endpoint.path = "/v2/".to_string();
        config.endpoint.is_secure = false;

        let value = run_with_config(&["resolve", "s3", "eu-west-1"], config).unwrap();
        assert_eq!(value["url"], "http://s3.eu-west-1.amazonaws.com/v2/");
    }

    #[test]
    fn test_endpoints_from_data_path() {
        let dir = tempfile::tempdir().unwrap();
        let provider_dir = dir.path().join("acme");
        std::fs::create_dir(&provider_dir).unwrap();
        std::fs::write(
            provider_dir.join("widgets.json"),
            r#"{
                "name": "Acme Widgets",
                "short_name": "widgets",
                "api_version": "1",
                "regions": {"north": null, "south": "https://south.acme.test/"},
                "protocols": ["https"]
            }"#,
        )
        .unwrap();

        let data_path = dir.path().to_string_lossy().to_string();
        let value = run_args(&[
            "endpoints",
            "widgets",
            "--provider",
            "acme",
            "--data-path",
            &data_path,
        ])
        .unwrap();

        assert_eq!(value[0]["regionName"], "north");
        assert_eq!(value[0]["url"], "https://widgets.north.amazonaws.com/");
        assert_eq!(value[1]["url"], "https://south.acme.test/");
    }
}
