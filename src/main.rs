use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use page_digest::{Aggregator, FetchConfig, HttpFetcher, input};

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> page_digest::Result<()> {
    let mut config = match &args.config {
        Some(path) => FetchConfig::from_file(path)?,
        None => FetchConfig::default(),
    };
    if let Some(secs) = args.timeout {
        config = config.with_timeout(secs);
    }

    println!("Welcome to the Web Content Scraper!");

    let (urls, output) = {
        let mut stdin = io::stdin().lock();
        let mut stdout = io::stdout();

        let urls = input::read_urls(&mut stdin, &mut stdout)?;
        if urls.is_empty() {
            println!("No valid URLs provided. Exiting...");
            return Ok(());
        }

        let output: PathBuf = match &args.output {
            Some(name) => input::check_output_path(name)?,
            None => input::read_output_path(&mut stdin, &mut stdout)?,
        };
        (urls, output)
    };

    println!("\nStarting to scrape {} URLs...", urls.len());
    ::log::info!("Fetching with User-Agent {:?}", config.user_agent);

    let aggregator = Aggregator::new(HttpFetcher::new(&config)?);
    let summary = aggregator.build_document(&urls, &output).await?;

    println!("\nScraped content has been saved to {}", output.display());
    if !summary.skipped.is_empty() {
        println!(
            "{} of {} URLs were skipped",
            summary.skipped.len(),
            summary.attempted
        );
    }
    println!("\nDone! You can find your scraped content in: {}", output.display());
    Ok(())
}
