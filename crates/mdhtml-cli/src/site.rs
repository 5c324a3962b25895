//! Output directory preparation and page generation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mdhtml::Converter;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Remove `output` if it exists and create it empty
pub fn reset_dir(output: &Path) -> Result<()> {
    if output.exists() {
        debug!(path = %output.display(), "removing output directory");
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to remove {}", output.display()))?;
    }
    fs::create_dir_all(output).with_context(|| format!("failed to create {}", output.display()))
}

/// Recursively copy every file under `source` into `dest`.
///
/// Returns the number of files copied.
pub fn copy_tree(source: &Path, dest: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(source).follow_links(false) {
        let entry = entry.with_context(|| format!("failed to read {}", source.display()))?;
        let from = entry.path();
        let to = dest.join(from.strip_prefix(source)?);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&to).with_context(|| format!("failed to create {}", to.display()))?;
        } else {
            debug!(from = %from.display(), to = %to.display(), "copying file");
            fs::copy(from, &to).with_context(|| format!("failed to copy {}", from.display()))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Convert one Markdown file to `<output>/<stem>.html`
pub fn generate_page(converter: &Converter, input: &Path, output: &Path) -> Result<PathBuf> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let html = converter
        .to_html(&markdown)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    let stem = input
        .file_stem()
        .with_context(|| format!("{} has no file name", input.display()))?;
    let mut file_name = stem.to_os_string();
    file_name.push(".html");
    let target = output.join(file_name);
    fs::write(&target, html).with_context(|| format!("failed to write {}", target.display()))?;

    info!(page = %target.display(), "generated page");
    Ok(target)
}
