//! Swordfish CLI - dark web search and scrape front end.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use swordfish::{
    default_filename, engines, export_results, export_scraped, read_links, with_json_extension,
    Scraper, Search, SearchQuery, TaskRunner, TorFetcher, DEFAULT_TOR_PROXY,
};

/// Swordfish - dark web OSINT tool
///
/// Step 1: search dark web engines and export results.
/// Step 2: scrape selected links and export content.
#[derive(Parser)]
#[command(name = "swordfish")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search dark web engines and export deduplicated results
    Search(SearchArgs),

    /// Scrape content from selected links
    Scrape(ScrapeArgs),

    /// List the search engine catalog
    Engines,
}

#[derive(Parser)]
struct SearchArgs {
    /// Dark web search query
    #[arg(short, long)]
    query: String,

    /// Number of parallel workers
    #[arg(short = 't', long, default_value = "5")]
    threads: usize,

    /// Output JSON filename. Default: results_<timestamp>.json
    #[arg(short, long)]
    output: Option<String>,

    /// Tor SOCKS proxy address
    #[arg(long, default_value = DEFAULT_TOR_PROXY)]
    proxy: String,

    /// Per-engine timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
}

#[derive(Parser)]
struct ScrapeArgs {
    /// Input file with links to scrape (one per line)
    #[arg(short, long)]
    input: PathBuf,

    /// Number of parallel workers
    #[arg(short = 't', long, default_value = "5")]
    threads: usize,

    /// Output JSON filename. Default: scraped_<timestamp>.json
    #[arg(short, long)]
    output: Option<String>,

    /// Tor SOCKS proxy address
    #[arg(long, default_value = DEFAULT_TOR_PROXY)]
    proxy: String,

    /// Per-link timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    match cli.command {
        Commands::Search(args) => run_search(args).await,
        Commands::Scrape(args) => run_scrape(args).await,
        Commands::Engines => list_engines(),
    }
}

fn list_engines() -> Result<()> {
    println!("Available search engines:\n");
    for engine in engines::catalog() {
        println!("  {:<12} {}", engine.shortcut(), engine.name());
    }
    println!("\nAll engines are queried on every search.");
    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn output_path(requested: Option<String>, prefix: &str) -> PathBuf {
    match requested {
        Some(name) => with_json_extension(name),
        None => PathBuf::from(default_filename(prefix)),
    }
}

async fn run_search(args: SearchArgs) -> Result<()> {
    let timeout = Duration::from_secs(args.timeout);
    let fetcher = Arc::new(TorFetcher::with_proxy(&args.proxy, timeout)?);
    let runner = TaskRunner::new(args.threads, timeout)?;
    let search = Search::with_catalog(fetcher, runner);

    println!("[*] Searching for: {}", args.query);

    let pb = spinner("Searching dark web engines...");
    let report = search.search(&SearchQuery::new(&args.query)).await?;
    pb.finish_and_clear();

    println!(
        "[*] Found {} unique results ({}/{} engines responded, {}ms)",
        report.results.len(),
        report.engines_total - report.engines_failed,
        report.engines_total,
        report.duration_ms
    );

    let output = output_path(args.output, "results");
    export_results(&report.results, &output)?;
    println!("[+] Results saved to {}", output.display());
    println!("\n[*] Next steps:");
    println!("    1. Review {} and select links to scrape", output.display());
    println!("    2. Create a text file with selected links (one per line)");
    println!("    3. Run: swordfish scrape -i <links_file> -o <output_file>");

    Ok(())
}

async fn run_scrape(args: ScrapeArgs) -> Result<()> {
    let links = read_links(&args.input)?;
    if links.is_empty() {
        println!("[!] No valid links found in input file");
        return Ok(());
    }
    println!("[*] Loaded {} links to scrape", links.len());

    let timeout = Duration::from_secs(args.timeout);
    let fetcher = Arc::new(TorFetcher::with_proxy(&args.proxy, timeout)?);
    let runner = TaskRunner::new(args.threads, timeout)?;
    let scraper = Scraper::new(fetcher, runner);

    let total = links.len();
    let pb = spinner("Scraping content via Tor...");
    let report = scraper.scrape(links).await?;
    pb.finish_and_clear();

    println!(
        "[*] Successfully scraped {}/{} links ({}ms)",
        report.succeeded, total, report.duration_ms
    );

    let output = output_path(args.output, "scraped");
    export_scraped(&report.scraped, &output)?;
    println!("[+] Scraped content saved to {}", output.display());
    println!("\n[*] Next steps:");
    println!("    1. Review {} for intelligence analysis", output.display());
    println!("    2. Feed the content to your analysis tooling of choice");

    Ok(())
}
