//! 解析参数类型

/// 默认 path
pub const DEFAULT_PATH: &str = "/";

/// 服务构造参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOptions {
    /// 追加在默认 host 之后的 path
    pub path: String,
    pub port: Option<u16>,
}

impl ServiceOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            path: DEFAULT_PATH.to_string(),
            port: None,
        }
    }
}

/// 单次 endpoint 解析请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRequest {
    /// 无显式 URL 时使用 https（否则 http）
    pub is_secure: bool,
    /// 原样传递给 endpoint 构造方
    pub profile: Option<String>,
    /// 强制使用的 URL
    pub endpoint_url: Option<String>,
}

impl EndpointRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn insecure(mut self) -> Self {
        self.is_secure = false;
        self
    }

    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }
}

impl Default for EndpointRequest {
    fn default() -> Self {
        Self {
            is_secure: true,
            profile: None,
            endpoint_url: None,
        }
    }
}
