use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-digest")]
#[command(about = "Scrape a list of pages into a single HTML report")]
#[command(version)]
pub struct Args {
    /// Output file (must end in .html); prompted for when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// JSON file with fetch settings (user_agent, timeout_secs)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(short, long)]
    pub timeout: Option<u64>,
}
