pub mod api;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_name, validate_non_empty_string, validate_path, validate_range, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use api::{ApiConfig, ApiEnvironment};
pub use toml_config::TomlConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "expresso-web")]
#[command(about = "Static site server for the Expresso Itaporanga website")]
pub struct SiteConfig {
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = ".")]
    pub static_dir: String,

    #[arg(long, default_value = "index.html")]
    pub index_file: String,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: "0.0.0.0".to_string(),
            static_dir: ".".to_string(),
            index_file: "index.html".to_string(),
            config: None,
            log_json: false,
            verbose: false,
        }
    }
}

impl SiteConfig {
    /// 以伺服器主機決定頁面呼叫的 API 位址；有設定檔時套用 `[api]` 區段
    pub fn api_config(&self, file: Option<&TomlConfig>) -> ApiConfig {
        match file {
            Some(file) => file.api_config(&self.host),
            None => ApiConfig::for_page_host(&self.host),
        }
    }

    pub fn server_settings(&self) -> ServerSettings {
        ServerSettings {
            host: self.host.clone(),
            port: self.port,
            static_dir: PathBuf::from(&self.static_dir),
            index_file: self.index_file.clone(),
        }
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_range("port", self.port, 1, u16::MAX)?;
        validate_non_empty_string("host", &self.host)?;
        validate_path("static_dir", &self.static_dir)?;
        validate_file_name("index_file", &self.index_file)?;
        Ok(())
    }
}

/// 靜態伺服器實際使用的設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub index_file: String,
}

impl ServerSettings {
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join(&self.index_file)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
