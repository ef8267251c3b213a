use crate::error::{BookletError, Result};
use crate::staging;
use booklet_common::RosterColumns;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub name_column: usize,
    pub email_column: usize,
    /// Doc→PDF converter candidates, probed in order
    pub converters: Vec<String>,
    pub merger: String,
    pub output_file: String,
    pub staging_dir_name: String,
}

impl Default for Config {
    fn default() -> Self {
        let columns = RosterColumns::default();
        Self {
            name_column: columns.name,
            email_column: columns.email,
            converters: vec!["lowriter".into(), "soffice".into(), "libreoffice".into()],
            merger: "pdfunite".into(),
            output_file: "resume_booklet.pdf".into(),
            staging_dir_name: ".working-pdfs".into(),
        }
    }
}

impl Config {
    /// ~/.config/resume-booklet/config.json, or defaults when absent
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BookletError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("resume-booklet").join("config.json"))
    }

    pub fn columns(&self) -> RosterColumns {
        RosterColumns {
            name: self.name_column,
            email: self.email_column,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.converters.is_empty() {
            return Err(BookletError::Config("converters must not be empty".into()));
        }
        if self.merger.trim().is_empty() {
            return Err(BookletError::Config("merger must not be empty".into()));
        }
        if !staging::is_plain_dir_name(&self.staging_dir_name) || self.staging_dir_name.trim().is_empty() {
            return Err(BookletError::Config(format!(
                "staging_dir_name must be a plain directory name: {:?}",
                self.staging_dir_name
            )));
        }
        Ok(())
    }
}
