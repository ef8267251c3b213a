use crate::error::{BookletError, Result};
use crate::tools::ToolDescriptor;
use std::path::{Path, PathBuf};

/// Merge `pdfs` in the given order into `output`. Any failure is fatal.
pub async fn assemble(merger: &ToolDescriptor, pdfs: &[PathBuf], output: &Path) -> Result<()> {
    if pdfs.is_empty() {
        return Err(BookletError::NoPages);
    }

    tracing::debug!(tool = %merger.name, pages = pdfs.len(), output = %output.display(), "merging");

    let result = merger
        .merge_command(pdfs, output)
        .output()
        .await
        .map_err(|e| BookletError::Merge(format!("failed to run {}: {}", merger.name, e)))?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(BookletError::Merge(format!(
            "{} failed (code {:?}): {}",
            merger.name,
            result.status.code(),
            stderr.trim()
        )));
    }

    Ok(())
}
