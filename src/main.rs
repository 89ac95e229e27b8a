use chrono::{Local, NaiveDate};
use clap::Parser;
use log::error;
use std::process::ExitCode;

use mtg_draft_stats::utils::parse_date;
use mtg_draft_stats::{
    pipeline, DateRange, DraftStatsConfig, ScryfallProvider, SeventeenLandsProvider,
};

/// Fetch card data from Scryfall and win rates from 17Lands, then write the
/// merged dataset
#[derive(Parser, Debug)]
#[command(name = "mtg-draft-stats", version, about)]
struct Cli {
    /// Start date for 17Lands data (YYYY-MM-DD). Defaults to 365 days ago
    #[arg(long, value_parser = parse_date)]
    start_date: Option<NaiveDate>,

    /// End date for 17Lands data (YYYY-MM-DD). Defaults to today
    #[arg(long, value_parser = parse_date)]
    end_date: Option<NaiveDate>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match DraftStatsConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let today = Local::now().date_naive();
    let date_range = match DateRange::resolve(cli.start_date, cli.end_date, today) {
        Ok(range) => range,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let scryfall = ScryfallProvider::new(&config);
    let seventeen_lands = SeventeenLandsProvider::new(&config);

    match pipeline::run(&config, &scryfall, &seventeen_lands, &date_range).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}. Exiting.", e);
            ExitCode::FAILURE
        }
    }
}
