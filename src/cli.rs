// src/cli.rs
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::{
    config::{
        consts::{DEFAULT_OUT_DIR, EXTRACT_TIMEOUT_SECS},
        options::{ExportFormat, ExportOptions},
    },
    error::{Error, Result},
    page::PageSource,
    present, runner,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
    Both,
}

impl FormatArg {
    pub fn formats(self) -> &'static [ExportFormat] {
        match self {
            FormatArg::Json => &[ExportFormat::Json],
            FormatArg::Csv => &[ExportFormat::Csv],
            FormatArg::Both => &[ExportFormat::Json, ExportFormat::Csv],
        }
    }
}

/// Scrape order records from an AliExpress order page (URL, saved file, or stdin).
#[derive(Parser, Debug)]
#[command(name = "order_scrape_cli", version, about)]
pub struct Args {
    /// Page to load: http(s) URL, path to a saved page, or `-` for stdin
    #[arg(short, long)]
    pub source: String,

    /// Base URL for resolving relative item links (defaults to the page location)
    #[arg(long)]
    pub base_url: Option<Url>,

    /// Which artifacts to write
    #[arg(short, long, value_enum, default_value_t = FormatArg::Both)]
    pub format: FormatArg,

    /// Output directory for orders.json / orders.csv
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Print the encoded records to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Seconds to wait for the page and the extraction pass
    #[arg(long, default_value_t = EXTRACT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init_stderr(args.verbose);
    run_with(&args)
}

pub fn run_with(args: &Args) -> Result<()> {
    let source = resolve_source(&args.source)?;
    logf!("CLI: source={source} format={:?} out={}", args.format, args.out.display());

    let orders = runner::scrape_once(
        source,
        args.base_url.clone(),
        Duration::from_secs(args.timeout),
    )?;
    eprintln!("Extracted {} order(s)", orders.len());

    if args.stdout {
        for &format in args.format.formats() {
            let text = match format {
                ExportFormat::Json => present::to_json(&orders)?,
                ExportFormat::Csv => present::to_csv(&orders)?,
            };
            println!("{text}");
        }
        return Ok(());
    }

    let opts = ExportOptions::with_dir(&args.out);
    for path in runner::export_all(&opts, args.format.formats(), &orders)? {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn resolve_source(text: &str) -> Result<PageSource> {
    if text.trim() == "-" {
        let mut html = s!();
        std::io::stdin().read_to_string(&mut html)?;
        return Ok(PageSource::Inline(html));
    }
    PageSource::parse(text).ok_or_else(|| Error::InvalidInput(s!("--source is empty")))
}
