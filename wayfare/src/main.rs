//! `wayfare` command line tool.

mod config;

use anyhow::Result;
use clap::Parser;
use config::CliArgs;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wayfare::travel::{render_intro, render_options, summarize};
use wayfare::{LookupResult, OptionsFetcher, TripRequest};

/// Configure logging based on verbosity level; `RUST_LOG` wins when set
fn setup_logging(verbose: bool) {
    let default = if verbose { "wayfare=debug,info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();
    setup_logging(args.verbose);

    let request = TripRequest::new(&args.from, &args.to, args.date)?;
    let client = args.build_client()?;
    let fetcher = OptionsFetcher::new(Arc::new(client.model));

    let result = fetcher.fetch(&request).await;
    tracing::debug!(found = result.is_found(), "lookup finished");

    if args.show_raw {
        match client.raw_response.latest() {
            Some(raw) => eprintln!("AI Raw Response:\n{}\n", raw),
            None => eprintln!("AI Raw Response: <none>\n"),
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(exit_code(&result));
    }

    match &result {
        LookupResult::Found(options) => {
            println!("{}", render_intro(&request));
            println!("---");
            println!("{}", summarize(options));
            print!("{}", render_options(options));
        }
        LookupResult::Failed { error } => {
            eprintln!("Error: {}", error);
        }
    }

    Ok(exit_code(&result))
}

fn exit_code(result: &LookupResult) -> ExitCode {
    if result.is_found() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
