use clap::Parser;
use small_textkit::utils::logger;
use small_textkit::{CliConfig, Runner, Task, TextKitError, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    // 先載入配置檔，日誌等級可能來自這裡
    let file_config = match config.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(file_config) => file_config,
        Err(e) => {
            let path = config.config.as_deref().unwrap_or_default();
            eprintln!("❌ Failed to load config file '{}': {}", path, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    let settings = match config.settings(file_config.as_ref()) {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(settings.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    }
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Resolved settings: {:?}", settings);

    let runner = Runner::new(settings.format);
    match Task::from_command(&config.command).and_then(|task| runner.run(&task)) {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &TextKitError) -> ! {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code())
}
