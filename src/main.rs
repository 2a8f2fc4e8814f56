use anyhow::Context;
use article_loaders::utils::error::{ErrorCategory, LoaderError};
use article_loaders::utils::{logger, validation::Validate};
use article_loaders::{CliConfig, ConfigProvider, HttpBackend, PageEngine, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting article-loaders");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let request = cli.page_request();

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path).and_then(|config| build_engine(&config))
        }
        None => build_engine(&cli),
    };

    let engine = match result {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!(
                "❌ Configuration failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // 失敗的頁面仍然會輸出，error 欄位交給模板層處理
    let page = engine.render(&request).await;
    let output = serde_json::to_string_pretty(&page).context("failed to serialize page data")?;
    println!("{}", output);

    Ok(())
}

/// 驗證設定並建立 engine
fn build_engine<C: ConfigProvider + Validate>(
    config: &C,
) -> article_loaders::Result<PageEngine<HttpBackend>> {
    config.validate()?;
    tracing::info!("✅ Configuration validated, backend: {}", config.backend_url());
    PageEngine::from_config(HttpBackend::new(), config)
}

fn exit_code(error: &LoaderError) -> i32 {
    match error.category() {
        ErrorCategory::Configuration => 1,
        ErrorCategory::Soft | ErrorCategory::Hard => 2,
    }
}
