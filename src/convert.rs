//! Doc→PDF conversion of the staged resumes
//!
//! Office documents go through the external converter one at a time. PDFs
//! pass through untouched. The output order is the staging folder listing
//! order and becomes the booklet page order.

use crate::error::{BookletError, Result};
use crate::scanner::{self, ResumeFile};
use crate::tools::ToolDescriptor;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};

const OFFICE_EXTENSIONS: &[&str] = &["doc", "docx", "docm", "odt", "rtf"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Office,
    Other,
}

pub fn classify(file: &ResumeFile) -> FileKind {
    match file.extension().as_deref() {
        Some("pdf") => FileKind::Pdf,
        Some(ext) if OFFICE_EXTENSIONS.contains(&ext) => FileKind::Office,
        _ => FileKind::Other,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionFailure {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionReport {
    /// PDFs in booklet order
    pub converted: Vec<PathBuf>,
    pub failed: Vec<ConversionFailure>,
    /// Neither PDF nor a known office format
    pub skipped: Vec<PathBuf>,
}

/// Convert everything in the staging folder that is not already a PDF.
///
/// A file that fails to convert is reported and left out; only an unreadable
/// staging folder is fatal.
pub async fn convert_staged(staging_dir: &Path, converter: &ToolDescriptor) -> Result<ConversionReport> {
    let files = scanner::list_files(staging_dir).map_err(|source| BookletError::StagingRead {
        path: staging_dir.to_path_buf(),
        source,
    })?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut report = ConversionReport::default();

    for file in files {
        pb.set_message(file.file_name.clone());

        match classify(&file) {
            FileKind::Pdf => report.converted.push(file.path),
            FileKind::Office => match convert_one(converter, &file.path, staging_dir).await {
                Ok(pdf) => report.converted.push(pdf),
                Err(reason) => {
                    tracing::warn!(file = %file.path.display(), %reason, "conversion failed");
                    pb.suspend(|| eprintln!("Error converting {} to pdf", file.path.display()));
                    report.failed.push(ConversionFailure { path: file.path, reason });
                }
            },
            FileKind::Other => {
                tracing::warn!(file = %file.path.display(), "not a pdf or office document, leaving it out");
                report.skipped.push(file.path);
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(report)
}

/// Where the converter writes the PDF for `input`
pub fn expected_pdf_path(input: &Path, outdir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".pdf");
    outdir.join(name)
}

async fn convert_one(
    converter: &ToolDescriptor,
    input: &Path,
    outdir: &Path,
) -> std::result::Result<PathBuf, String> {
    let output = converter
        .convert_command(input, outdir)
        .output()
        .await
        .map_err(|e| format!("failed to run {}: {}", converter.name, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!(
            "{} failed (code {:?}): {}",
            converter.name,
            output.status.code(),
            stderr.trim()
        ));
    }

    let pdf = expected_pdf_path(input, outdir);
    if !pdf.is_file() {
        return Err(format!("{} produced no {}", converter.name, pdf.display()));
    }

    tracing::debug!(from = %input.display(), to = %pdf.display(), "converted");
    Ok(pdf)
}
