use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use profile_url_extractor::{
    collect_urls, export, BatchRunner, ExtractionConfig, YtDlpExtractor,
};

#[derive(Parser)]
#[command(
    name = "profile-url-extractor",
    about = "Bulk Instagram & Facebook profile URL extractor"
)]
struct Cli {
    /// File with one URL per line, or `-` to read stdin.
    #[arg(default_value = "-")]
    input: String,

    /// Where to write the CSV export.
    #[arg(long, default_value = export::DEFAULT_CSV_NAME)]
    output: PathBuf,

    /// Skip the CSV export.
    #[arg(long)]
    no_csv: bool,

    /// Do not pass --force-generic-extractor to yt-dlp.
    #[arg(long)]
    no_force_generic: bool,

    /// yt-dlp binary to invoke; YTDLP_PATH is honored when unset.
    #[arg(long)]
    ytdlp_bin: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let text = if cli.input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read URLs from stdin")?;
        buf
    } else {
        fs::read_to_string(&cli.input)
            .with_context(|| format!("failed to read {}", cli.input))?
    };

    let urls = collect_urls(&text);
    if urls.is_empty() {
        bail!("please enter at least one URL (one per line)");
    }

    let binary = cli
        .ytdlp_bin
        .or_else(|| std::env::var("YTDLP_PATH").ok())
        .unwrap_or_else(|| "yt-dlp".to_string());
    let config = ExtractionConfig {
        binary,
        force_generic: !cli.no_force_generic,
        ..ExtractionConfig::default()
    };

    let runner = BatchRunner::new(Arc::new(YtDlpExtractor::with_config(config)));
    let results = runner
        .run_with_progress(&urls, |done, total| {
            eprintln!("[{}/{}] processed", done, total);
        })
        .await;

    print!("{}", export::render_table(&results));

    if !cli.no_csv {
        let file = fs::File::create(&cli.output)
            .with_context(|| format!("failed to create {}", cli.output.display()))?;
        export::write_csv(&results, file).context("failed to write CSV export")?;
        eprintln!("wrote {} rows to {}", results.len(), cli.output.display());
    }

    Ok(())
}
