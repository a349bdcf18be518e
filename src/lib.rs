//! Checkpoint page generator
//!
//! Fetches a JSON document listing checkpoints and writes one printable page
//! per checkpoint: a QR code encoding the checkpoint's id, with the id printed
//! underneath, saved as `<title>.png`.
//!
//! # Pipeline
//!
//! - [`source`]: retrieve and parse the document (HTTP or local file)
//! - [`checkpoint`]: pull the `checkpoints` list out of it
//! - [`rendering`]: compose one 595×842 page per checkpoint
//! - [`batch`]: write the pages in order and count them
//!
//! # Example
//!
//! ```no_run
//! use qrpages::Config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     output_dir: "out".into(),
//!     font_size: 64.0,
//!     ..Default::default()
//! };
//!
//! let count = qrpages::run(&config)?;
//! println!("Created {} qr codes", count);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

pub mod batch;
pub mod checkpoint;
pub mod error;
pub mod rendering;
pub mod source;

pub use batch::{run_batch, BatchReport};
pub use checkpoint::{extract_checkpoints, Checkpoint};
pub use error::{Error, Result};
pub use rendering::qr::{CodeEncoder, QrEncoder};
pub use rendering::text::{FontLabel, TextRenderer};
pub use rendering::{Page, PageRenderer};
pub use source::{source_for, DocumentSource, FileSource, HttpSource};

/// Where the open-days checkpoint list is published
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/Antoni-Czaplicki/jedynka_open_days/main/data/data.json";

/// Run configuration
///
/// Every field has a default, so a config file only needs to name what it
/// changes:
///
/// ```
/// let cfg: qrpages::Config = serde_json::from_str(r#"{"output_dir": "pages"}"#).unwrap();
/// assert_eq!(cfg.output_dir, std::path::PathBuf::from("pages"));
/// assert_eq!(cfg.font_size, 80.0);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL (or local path) of the checkpoint document
    pub source_url: String,
    /// Existing directory the pages are written to
    pub output_dir: PathBuf,
    /// TrueType font used for the label
    pub font_path: PathBuf,
    /// Label size in pixels
    pub font_size: f32,
    /// Timeout for the document fetch in milliseconds
    pub timeout_ms: u64,
    /// User agent sent with the fetch
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_dir: PathBuf::from("qr"),
            font_path: PathBuf::from("Roboto-Regular.ttf"),
            font_size: 80.0,
            timeout_ms: 30000,
            user_agent: concat!("qrpages/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Load a JSON config file; missing fields keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&body)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }
}

/// Fetch, extract and write pages with an already-built renderer
pub fn generate<E, T>(
    source: &dyn DocumentSource,
    renderer: &PageRenderer<E, T>,
    output_dir: &Path,
) -> Result<BatchReport>
where
    E: CodeEncoder,
    T: TextRenderer,
{
    let checkpoints = load_checkpoints(source)?;
    run_batch(&checkpoints, renderer, output_dir)
}

fn load_checkpoints(source: &dyn DocumentSource) -> Result<Vec<Checkpoint>> {
    let document = source.fetch()?;
    let checkpoints = extract_checkpoints(&document)?;
    info!("found {} checkpoint(s)", checkpoints.len());
    Ok(checkpoints)
}

/// Run the whole pipeline and return the number of pages written
pub fn run(config: &Config) -> Result<usize> {
    let source = source_for(config)?;
    let checkpoints = load_checkpoints(source.as_ref())?;
    if checkpoints.is_empty() {
        return Ok(0);
    }

    let label = FontLabel::from_file(&config.font_path, config.font_size)?;
    let renderer = PageRenderer::new(QrEncoder::default(), label);
    let report = run_batch(&checkpoints, &renderer, &config.output_dir)?;
    Ok(report.count())
}
