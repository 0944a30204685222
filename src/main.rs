use clap::Parser;
use syllabus_dash::app::terminal::TerminalApp;
use syllabus_dash::render::render_dashboard;
use syllabus_dash::utils::{logger, validation::Validate};
use syllabus_dash::{CliConfig, GeminiGenerator, ShellEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting syllabus-dash");

    // 載入並驗證配置
    let config = match cli.resolve().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::debug!(
        "Resolved config: endpoint={}, model={}, timeout={}s",
        config.endpoint,
        config.model,
        config.timeout_seconds
    );

    let auto_generate = config.auto_generate;
    let generator = match GeminiGenerator::new(config) {
        Ok(generator) => generator,
        Err(e) => {
            tracing::error!("❌ Failed to build HTTP client: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    let mut engine = ShellEngine::new(generator);

    if cli.once {
        let shell = engine.generate_once().await;
        println!("{}", render_dashboard(shell));
        if shell.error_message().is_some() {
            std::process::exit(2);
        }
        return Ok(());
    }

    TerminalApp::new(engine).run(auto_generate).await
}
