use std::error::Error;
use std::path::Path;

use clap::Parser;
use courier::config::TransferConfig;
use courier::task::DailyTransfer;
use log::info;

/// One-shot transfer for a single day.  Useful for backfill and testing;
/// run `courierd` for the scheduled daily mode.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Environment name, e.g., test, prod
    #[arg(short, long, default_value = "prod")]
    env: String,

    /// Day to transfer, as DD-MM-YYYY.  Defaults to today.
    #[arg(short, long)]
    date: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let env_file = format!(".env/{}.env", args.env);
    if Path::new(&env_file).is_file() {
        dotenvy::from_path(Path::new(&env_file))?;
    }

    let task = DailyTransfer::new(TransferConfig::from_env()?);
    task.ensure_destination_root()?;

    let day = match &args.date {
        Some(s) => courier::parse_day_marker(s)?,
        None => task.today()?,
    };
    info!("Running daily file download for {}", day);
    task.run_for(day)?;

    Ok(())
}
