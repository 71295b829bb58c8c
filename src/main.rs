use clap::Parser;
use game_serial_bridge::adapters::http;
use game_serial_bridge::core::{ConfigProvider, LineSink};
use game_serial_bridge::utils::error::{ErrorSeverity, Result};
use game_serial_bridge::utils::{logger, validation::Validate};
use game_serial_bridge::{
    BridgeSettings, CliConfig, EventBridge, LogSink, SerialPortSink, SerialWriter,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting game-serial-bridge");
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(settings).await {
        tracing::error!(
            "❌ Bridge stopped: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(settings: BridgeSettings) -> Result<()> {
    let sink: Box<dyn LineSink> = if settings.dry_run {
        tracing::info!("🔍 DRY RUN MODE - serial port will not be opened");
        Box::new(LogSink)
    } else {
        Box::new(SerialPortSink::open(
            settings.serial_port(),
            settings.baud_rate(),
        )?)
    };

    let (writer, writer_task) =
        SerialWriter::spawn(sink, settings.queue_capacity(), settings.write_timeout());
    let bridge = EventBridge::new(writer);

    let addr = settings.bind_addr();
    let listener = http::bind(addr).await?;
    tracing::info!("🔥 Bridge running at http://{}", addr);

    http::serve(listener, http::router(bridge), http::shutdown_signal()).await?;

    // 所有 handler 釋放後 writer 才會結束
    if let Err(e) = writer_task.await {
        tracing::warn!("Serial writer task ended abnormally: {}", e);
    }

    tracing::info!("✅ Bridge stopped");
    Ok(())
}
