use crate::error::{BookletError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl ResumeFile {
    /// Lowercased extension without the dot
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }
}

/// Regular files directly inside `folder`, sorted by file name.
///
/// Dotfiles and subdirectories (the staging folder among them) are ignored.
pub fn scan_folder(folder: &Path) -> Result<Vec<ResumeFile>> {
    if !folder.is_dir() {
        return Err(BookletError::FolderNotFound(folder.display().to_string()));
    }

    Ok(list_files(folder)?)
}

/// Like [`scan_folder`] but keeps the raw I/O error for the caller to wrap
pub fn list_files(folder: &Path) -> std::io::Result<Vec<ResumeFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // top level only
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if file_name.starts_with('.') {
            continue;
        }

        files.push(ResumeFile {
            path: path.to_path_buf(),
            file_name,
        });
    }

    Ok(files)
}
