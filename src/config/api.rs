use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const LOCAL_API_BASE_URL: &str = "http://localhost:5000";
pub const PRODUCTION_API_BASE_URL: &str = "https://expresso-backend-production.railway.app";

/// 視為本機開發環境的主機名稱
pub const DEFAULT_LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnvironment {
    Local,
    Production,
}

/// 後端 API 位址，啟動時決定一次後注入 `ApiClient`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn local() -> Self {
        Self::new(LOCAL_API_BASE_URL)
    }

    pub fn production() -> Self {
        Self::new(PRODUCTION_API_BASE_URL)
    }

    pub fn for_environment(environment: ApiEnvironment) -> Self {
        match environment {
            ApiEnvironment::Local => Self::local(),
            ApiEnvironment::Production => Self::production(),
        }
    }

    /// 依頁面所在主機選擇 API 位址
    pub fn for_page_host(host: &str) -> Self {
        Self::for_environment(ApiEnvironment::from_page_host(host, DEFAULT_LOCAL_HOSTS))
    }
}

impl ApiEnvironment {
    pub fn from_page_host<S: AsRef<str>>(host: &str, local_hosts: &[S]) -> Self {
        // 去掉連接埠，例如 "localhost:3000"
        let hostname = match host.trim().rsplit_once(':') {
            Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
            _ => host.trim(),
        };

        if local_hosts
            .iter()
            .any(|local| local.as_ref().eq_ignore_ascii_case(hostname))
        {
            ApiEnvironment::Local
        } else {
            ApiEnvironment::Production
        }
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)
    }
}
