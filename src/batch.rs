//! Batch driver: one page per checkpoint, written in order.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::checkpoint::Checkpoint;
use crate::rendering::qr::CodeEncoder;
use crate::rendering::text::TextRenderer;
use crate::rendering::PageRenderer;
use crate::{Error, Result};

/// Extension of every written page
pub const PAGE_EXTENSION: &str = "png";

/// Outcome of a completed batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Paths written, in processing order (repeated titles appear repeatedly)
    pub written: Vec<PathBuf>,
}

impl BatchReport {
    /// Number of checkpoints processed
    pub fn count(&self) -> usize {
        self.written.len()
    }
}

/// `<output_dir>/<title>.png`. The title is used verbatim.
///
/// The title is appended as text rather than joined, so a title starting with
/// a separator still lands under `output_dir`.
pub fn output_path(output_dir: &Path, title: &str) -> PathBuf {
    let mut path = output_dir.as_os_str().to_owned();
    path.push(std::path::MAIN_SEPARATOR_STR);
    path.push(title);
    path.push(".");
    path.push(PAGE_EXTENSION);
    PathBuf::from(path)
}

/// Render and write every checkpoint, strictly one after the other.
///
/// `output_dir` must already exist. Existing files are overwritten. The first
/// failure aborts the batch; pages written before it stay on disk.
pub fn run_batch<E, T>(
    checkpoints: &[Checkpoint],
    renderer: &PageRenderer<E, T>,
    output_dir: &Path,
) -> Result<BatchReport>
where
    E: CodeEncoder,
    T: TextRenderer,
{
    let mut report = BatchReport::default();

    for checkpoint in checkpoints {
        let page = renderer.render(checkpoint)?;
        let png = page.png_data()?;

        let path = output_path(output_dir, &checkpoint.title);
        std::fs::write(&path, png).map_err(|source| Error::Persist {
            path: path.clone(),
            source,
        })?;
        debug!("wrote {}", path.display());

        report.written.push(path);
    }

    info!(
        "wrote {} page(s) to {}",
        report.count(),
        output_dir.display()
    );
    Ok(report)
}
