use clap::Parser;
use expresso_web::utils::{logger, validation::Validate};
use expresso_web::{adapters, SiteConfig, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = SiteConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting expresso-web");

    // TOML 檔案中的設定覆寫命令列
    let file_config = match config.config.clone() {
        Some(path) => {
            let loaded = TomlConfig::from_file(&path).and_then(|c| {
                c.validate()?;
                Ok(c)
            });
            match loaded {
                Ok(c) => {
                    c.apply_to(&mut config);
                    tracing::info!("📄 Loaded configuration from {}", path);
                    Some(c)
                }
                Err(e) => {
                    tracing::error!("❌ Failed to load configuration file {}: {}", path, e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
            }
        }
        None => None,
    };

    if config.verbose {
        tracing::debug!("Site config: {:?}", config);
    }

    // 驗證配置
    let api_config = config.api_config(file_config.as_ref());
    if let Err(e) = config.validate().and_then(|_| api_config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
    tracing::info!("🔗 Pages served from {} use the API at {}", config.host, api_config.base_url);

    adapters::serve(config.server_settings()).await?;
    Ok(())
}
