//! Staging area
//!
//! Matched resumes are copied into a hidden working folder inside the resume
//! folder as `<member name><original extension>`, so conversion output and
//! booklet pages carry member names.

use crate::error::{BookletError, Result};
use booklet_common::MatchTable;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

#[derive(Debug)]
pub struct StagingArea {
    dir: PathBuf,
}

impl StagingArea {
    /// Create (or reuse) `<resume_folder>/<dir_name>`.
    ///
    /// An existing folder is emptied first so files left by an aborted run
    /// cannot end up in the booklet.
    pub fn create(resume_folder: &Path, dir_name: &str) -> Result<Self> {
        let dir = resume_folder.join(dir_name);
        if !is_plain_dir_name(dir_name) {
            return Err(BookletError::StagingDir {
                path: dir,
                source: std::io::Error::new(
                    ErrorKind::InvalidInput,
                    "staging folder must be a direct child of the resume folder",
                ),
            });
        }

        match std::fs::create_dir(&dir) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => {
                tracing::warn!(path = %dir.display(), "staging folder already exists, clearing leftovers");
                clear_dir(&dir).map_err(|source| BookletError::StagingDir {
                    path: dir.clone(),
                    source,
                })?;
            }
            Err(source) => return Err(BookletError::StagingDir { path: dir, source }),
        }

        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Copy every matched resume into the staging folder
    pub fn stage(&self, matches: &MatchTable, resume_folder: &Path) -> Result<Vec<PathBuf>> {
        let mut staged = Vec::with_capacity(matches.len());
        let mut taken = HashSet::new();

        for (member, file_name) in matches {
            let source = resume_folder.join(file_name);
            let dest = self.free_dest(member, file_name, &mut taken);

            std::fs::copy(&source, &dest)?;
            tracing::debug!(from = %source.display(), to = %dest.display(), "staged");
            staged.push(dest);
        }

        Ok(staged)
    }

    /// First `<member>`, `<member> (2)`, ... stem not used yet in this run.
    ///
    /// Stems are unique, not just file names, since `<stem>.docx` converts
    /// to `<stem>.pdf`.
    fn free_dest(&self, member: &str, original: &str, taken: &mut HashSet<String>) -> PathBuf {
        let mut n = 1;
        loop {
            let stem = numbered_stem(member, n);
            if taken.insert(stem.to_lowercase()) {
                if n > 1 {
                    tracing::warn!(%member, %stem, "staged name taken, using a numbered copy");
                }
                return self.dir.join(with_extension_of(stem, original));
            }
            n += 1;
        }
    }

    /// Remove the staging folder and everything in it
    pub fn remove(self) -> Result<()> {
        match std::fs::remove_dir_all(&self.dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Exactly one normal path component: no `.`, `..`, root or separator
pub fn is_plain_dir_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

/// `<member><ext of original>`, with path separators in the name neutralised.
///
/// Leading dots become `_` so the copy is neither hidden from the staging
/// listing nor resolved as `.` or `..`.
pub fn staged_file_name(member: &str, original: &str) -> String {
    with_extension_of(numbered_stem(member, 1), original)
}

fn numbered_stem(member: &str, n: usize) -> String {
    let mut stem: String = member
        .chars()
        .map(|c| if matches!(c, '/' | '\\') || c.is_control() { '_' } else { c })
        .collect();

    let dots = stem.len() - stem.trim_start_matches('.').len();
    stem.replace_range(..dots, &"_".repeat(dots));
    if stem.is_empty() {
        stem.push('_');
    }

    if n > 1 {
        format!("{} ({})", stem, n)
    } else {
        stem
    }
}

fn with_extension_of(stem: String, original: &str) -> String {
    match Path::new(original).extension() {
        Some(ext) => format!("{}.{}", stem, ext.to_string_lossy()),
        None => stem,
    }
}

fn clear_dir(dir: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            std::fs::remove_dir_all(&path)?;
        } else {
            std::fs::remove_file(&path)?;
        }
    }
    Ok(())
}
