use crate::config::api::{
    ApiConfig, ApiEnvironment, DEFAULT_LOCAL_HOSTS, LOCAL_API_BASE_URL, PRODUCTION_API_BASE_URL,
};
use crate::config::SiteConfig;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_file_name, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub api: Option<ApiSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub static_dir: Option<String>,
    pub index_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    /// 設定後不再依主機名稱判斷
    pub base_url: Option<String>,
    pub local_base_url: Option<String>,
    pub production_base_url: Option<String>,
    pub local_hosts: Option<Vec<String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_BASE_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 檔案中有設定的欄位覆寫命令列的值
    pub fn apply_to(&self, config: &mut SiteConfig) {
        let Some(server) = &self.server else {
            return;
        };

        if let Some(port) = server.port {
            config.port = port;
        }
        if let Some(host) = &server.host {
            config.host = host.clone();
        }
        if let Some(static_dir) = &server.static_dir {
            config.static_dir = static_dir.clone();
        }
        if let Some(index_file) = &server.index_file {
            config.index_file = index_file.clone();
        }
    }

    /// 決定頁面在指定主機上應使用的 API 位址
    pub fn api_config(&self, page_host: &str) -> ApiConfig {
        let Some(api) = &self.api else {
            return ApiConfig::for_page_host(page_host);
        };

        if let Some(base_url) = &api.base_url {
            return ApiConfig::new(base_url.clone());
        }

        let environment = match &api.local_hosts {
            Some(hosts) => ApiEnvironment::from_page_host(page_host, hosts.as_slice()),
            None => ApiEnvironment::from_page_host(page_host, DEFAULT_LOCAL_HOSTS),
        };

        match environment {
            ApiEnvironment::Local => ApiConfig::new(
                api.local_base_url
                    .clone()
                    .unwrap_or_else(|| LOCAL_API_BASE_URL.to_string()),
            ),
            ApiEnvironment::Production => ApiConfig::new(
                api.production_base_url
                    .clone()
                    .unwrap_or_else(|| PRODUCTION_API_BASE_URL.to_string()),
            ),
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(server) = &self.server {
            if let Some(index_file) = &server.index_file {
                validate_file_name("server.index_file", index_file)?;
            }
            if server.port == Some(0) {
                return Err(SiteError::InvalidConfigValueError {
                    field: "server.port".to_string(),
                    value: "0".to_string(),
                    reason: "Port must be at least 1".to_string(),
                });
            }
        }

        if let Some(api) = &self.api {
            let urls = [
                ("api.base_url", &api.base_url),
                ("api.local_base_url", &api.local_base_url),
                ("api.production_base_url", &api.production_base_url),
            ];
            for (field, url) in urls {
                if let Some(url) = url {
                    validate_url(field, url)?;
                }
            }
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
