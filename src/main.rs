use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use qrpages::Config;
use tracing_subscriber::filter::LevelFilter;

/// Generate a printable QR code page for every checkpoint in the open-days
/// checkpoint list.
///
/// Pages are written to `<output-dir>/<title>.png`; the directory must exist.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// URL or local path of the checkpoint document
    #[arg(long)]
    source_url: Option<String>,

    /// Directory to write pages to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// TrueType font for the label
    #[arg(long)]
    font_path: Option<PathBuf>,

    /// Label size in pixels
    #[arg(long)]
    font_size: Option<f32>,

    /// Fetch timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> qrpages::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(v) = self.source_url {
            config.source_url = v;
        }
        if let Some(v) = self.output_dir {
            config.output_dir = v;
        }
        if let Some(v) = self.font_path {
            config.font_path = v;
        }
        if let Some(v) = self.font_size {
            config.font_size = v;
        }
        if let Some(v) = self.timeout_ms {
            config.timeout_ms = v;
        }
        Ok(config)
    }
}

// Silent unless asked for, so stdout only carries the summary line
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.into_config().and_then(|config| qrpages::run(&config)) {
        Ok(count) => println!("Created {} qr codes", count),
        Err(err) => {
            eprintln!("Error: {}", err);
            print_error_sources(&err);
            std::process::exit(1);
        }
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
