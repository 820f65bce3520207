use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;

use clap::Parser;
use courier::config::TransferConfig;
use courier::scheduler;
use courier::task::DailyTransfer;

/// Perpetual scheduling mode: fires the daily transfer once per day at
/// the configured wall-clock time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Environment name, e.g., test, prod
    #[arg(short, long, default_value = "prod")]
    env: String,

    /// Append log lines to this file
    #[arg(short, long, default_value = "file_download.log")]
    log_file: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.log_file)?;
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Pipe(Box::new(log)))
        .init();

    let env_file = format!(".env/{}.env", args.env);
    if Path::new(&env_file).is_file() {
        dotenvy::from_path(Path::new(&env_file))?;
    }

    let task = DailyTransfer::new(TransferConfig::from_env()?);
    task.ensure_destination_root()?;

    scheduler::run_daily(&task)?;
    Ok(())
}
