use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use adcopy::core::config;
use adcopy::tui;

#[derive(Parser)]
#[command(name = "adcopy", about = "Terminal studio for smartphone marketing copy")]
struct Args {
    /// Gemini model to generate with
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to adcopy.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("adcopy.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("warning: {e}; continuing with defaults");
        config::AdcopyConfig::default()
    });
    let resolved = config::resolve(&file_config, args.model.as_deref());

    log::info!("Adcopy starting up with model: {}", resolved.model_name);

    tui::run(resolved)
}
