use clap::Parser;
use nestable_gen::app::offline::{generate_to_storage, read_input};
use nestable_gen::utils::error::ErrorCategory;
use nestable_gen::utils::{logger, validation::Validate};
use nestable_gen::{ApiServer, CliConfig, Command, FixedClock, GeneratorError, LocalStorage, SystemClock};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 讀取設定檔，失敗時日誌尚未初始化，直接輸出到 stderr
    let service_config = match cli.load_service_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    logger::init_from_config(&service_config.logging);
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = cli.validate().and_then(|_| service_config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    let outcome = match cli.command {
        Command::Serve { .. } => ApiServer::new(service_config.server)
            .start()
            .await
            .map_err(anyhow::Error::from),
        Command::Generate {
            input,
            output_path,
            month,
        } => run_generate(&input, output_path, month).await,
    };

    if let Err(e) = outcome {
        let category = e
            .downcast_ref::<GeneratorError>()
            .map(GeneratorError::category)
            .unwrap_or(ErrorCategory::Internal);
        tracing::error!("❌ {:#} (category: {:?})", e, category);
        eprintln!("❌ {:#}", e);
        if let Some(err) = e.downcast_ref::<GeneratorError>() {
            eprintln!("💡 {}", err.recovery_suggestion());
        }

        let exit_code = match category {
            ErrorCategory::Client => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Internal => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run_generate(input: &str, output_path: String, month: Option<u32>) -> anyhow::Result<()> {
    let data = read_input(input).await?;
    let storage = LocalStorage::new(output_path);

    let (location, summary) = match month {
        Some(month) => generate_to_storage(FixedClock::new(month), &data, &storage).await?,
        None => generate_to_storage(SystemClock, &data, &storage).await?,
    };

    println!("✅ Campaign generated for {} contacts", summary.output_rows);
    println!(
        "🔄 {} input rows, {} duplicates removed",
        summary.input_rows, summary.duplicates_removed
    );
    println!("📁 Output saved to: {}", location);
    Ok(())
}
