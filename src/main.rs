use clap::Parser;
use phonomoton::core::ConfigProvider;
use phonomoton::utils::{logger, validation::Validate};
use phonomoton::{CliConfig, HttpFetcher, ScoreEngine, ScoreError, TomlConfig};
use std::io::{self, BufRead, Write};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Scoring failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }
}

async fn run(cli: CliConfig) -> Result<(), ScoreError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };

    // 應用命令列覆蓋設定
    if let Some(timeout) = cli.timeout {
        config.source.timeout_seconds = Some(timeout);
    }
    config.validate()?;

    let url = match cli.url {
        Some(url) => url,
        None => prompt_url()?,
    };

    let fetcher = HttpFetcher::with_settings(config.timeout_seconds(), config.user_agent())?;
    let engine = ScoreEngine::from_config(fetcher, &config)?;

    let report = engine.run(&url).await?;
    println!("{}", phonomoton::core::report::render(&report, cli.format)?);
    Ok(())
}

fn prompt_url() -> Result<String, ScoreError> {
    print!("URL of gsmarena page: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
