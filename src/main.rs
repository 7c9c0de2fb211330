use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::debug;
use webpage_pack::{
    config::{FileConfig, Overrides, Preset, Settings},
    io::{read_input, save_file},
    schedule::Scheduler,
    urls::parse_url_list,
};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let file_config = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let Settings { config, output } = file_config.merge(Overrides {
        preset: args.preset,
        endpoint: args.endpoint,
        api_key: args.api_key,
        delay_ms: args.delay,
        timeout_ms: args.timeout,
        strict: args.strict,
        output: args.output,
    })?;

    let urls = parse_url_list(&read_input(args.urls_file).await?)?;
    let scheduler = Scheduler::new(config)?;
    debug!(
        "Scraping {} URLs through {} with {:?} delay.",
        urls.len(),
        scheduler.config().endpoint,
        scheduler.config().delay
    );
    let result = scheduler.run(&urls).await?;

    let tally = format!(
        "Done (success: {} | errors: {})\nTotal characters: {}",
        result.success_count(),
        result.error_count(),
        result.document.char_count()
    );
    if args.stdout {
        print!("{}", result.document);
        eprintln!("{tally}");
    } else {
        save_file(&output, result.document.as_str()).await?;
        println!("{tally}\nSaved to {}.", output.display());
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[clap(
    author,
    version,
    about = "Packs the main content of multiple web pages into one text file.

Reads newline-separated URLs from URLS_FILE (or stdin), fetches each\n\
through a Firecrawl scrape endpoint and writes the packed result to\n\
`webpagepack-output.txt`, or another path if specified."
)]
struct Args {
    #[clap(help = "File with one URL per line. Reads stdin if omitted or `-`.")]
    urls_file: Option<PathBuf>,
    #[clap(
        short,
        long,
        value_enum,
        help = "Endpoint preset: hosted cloud API or a self-hosted instance."
    )]
    preset: Option<Preset>,
    #[clap(
        short,
        long,
        help = "Scrape endpoint URL, e.g. `http://localhost:3002/v0/scrape`."
    )]
    endpoint: Option<String>,
    #[clap(short = 'k', long, help = "API key sent as a bearer token.")]
    api_key: Option<String>,
    #[clap(
        short,
        long,
        help = "Delay between each request in integer milliseconds."
    )]
    delay: Option<u64>,
    #[clap(
        short,
        long,
        help = "Timeout for each request in integer milliseconds."
    )]
    timeout: Option<u64>,
    #[clap(short, long, action, help = "Fail if any URL fails.")]
    strict: bool,
    #[clap(short, long, help = "File to save the packed content to.")]
    output: Option<PathBuf>,
    #[clap(long, action, help = "Print the packed content instead of saving it.")]
    stdout: bool,
    #[clap(short, long, help = "TOML config file. Flags take precedence.")]
    config: Option<PathBuf>,
}
