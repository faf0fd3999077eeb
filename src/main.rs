// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;

use apod_lens::application::port::StatusSink;
use apod_lens::application::GalleryLoader;
use apod_lens::config::{self, Config};
use apod_lens::domain::{parse_date, Status};
use apod_lens::error::Error;
use apod_lens::gallery::render::render_card;
use apod_lens::infrastructure::ReqwestTransport;
use chrono::{Local, NaiveDate};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
apod_lens - nine days of Astronomy Picture of the Day

USAGE:
  apod_lens [OPTIONS] [START_DATE]

ARGS:
  START_DATE           First day of the window (YYYY-MM-DD); defaults to 8 days ago

OPTIONS:
  --date YYYY-MM-DD    Same as START_DATE
  --api-key KEY        API key to use instead of the configured one
  --config PATH        Read settings from PATH instead of the default location
  --today YYYY-MM-DD   Pretend today is this date
  -h, --help           Print this help
";

struct Flags {
    start_date: Option<String>,
    api_key: Option<String>,
    config_path: Option<PathBuf>,
    today: Option<NaiveDate>,
}

/// Prints announcements on stderr, keeping stdout for the gallery itself.
struct ConsoleStatus;

impl StatusSink for ConsoleStatus {
    fn announce(&self, status: &Status) {
        eprintln!("{status}");
    }
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let date: Option<String> = args.opt_value_from_str("--date")?;
    let api_key = args.opt_value_from_str("--api-key")?;
    let config_path = args.opt_value_from_str("--config")?;
    let today = args.opt_value_from_fn("--today", parse_date)?;
    let positional = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());
    let flags = Flags {
        start_date: date.or(positional),
        api_key,
        config_path,
        today,
    };
    Ok(Some(flags))
}

fn load_config(flags: &Flags) -> apod_lens::error::Result<Config> {
    let mut config = match &flags.config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    if let Some(key) = &flags.api_key {
        config.api.api_key.clone_from(key);
    }
    Ok(config)
}

async fn run(flags: Flags) -> apod_lens::error::Result<()> {
    let config = load_config(&flags)?;
    let today = flags.today.unwrap_or_else(|| Local::now().date_naive());
    let start = flags.start_date.unwrap_or_else(|| {
        (today - chrono::Days::new(8)).format("%Y-%m-%d").to_string()
    });

    let transport = ReqwestTransport::new(config.network.request_timeout())?;
    let loader = GalleryLoader::from_config(&config, transport)?;

    if let Some(gallery) = loader.load(&start, today, &ConsoleStatus).await? {
        for (index, slot) in gallery.slots.iter().enumerate() {
            println!("{}", render_card(index, slot));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to start async runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(flags)) {
        Ok(()) => ExitCode::SUCCESS,
        // Date and fetch failures were already announced by the loader.
        Err(Error::Date(_) | Error::Fetch(_)) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
