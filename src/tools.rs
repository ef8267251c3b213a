//! External tool discovery
//!
//! Both external programs are resolved once at startup into
//! [`ToolDescriptor`]s; later stages only build commands from them.
//!
//! - doc→PDF converter: `<tool> --convert-to pdf --outdir <dir> <file>`
//! - PDF merger: `<tool> <pdf1> ... <pdfN> <output>`

use crate::config::Config;
use crate::error::{BookletError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::process::Command;

#[cfg(windows)]
const LOOKUP_COMMAND: &str = "where";
#[cfg(not(windows))]
const LOOKUP_COMMAND: &str = "which";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Name the tool was probed under
    pub name: String,
    /// Resolved executable, or the bare name when unresolved
    pub program: PathBuf,
    /// Arguments placed before the tool-specific ones
    pub leading_args: Vec<OsString>,
    pub available: bool,
}

impl ToolDescriptor {
    /// A tool at a known location, skipping the lookup
    pub fn at(name: impl Into<String>, program: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            leading_args: Vec::new(),
            available: true,
        }
    }

    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Resolve `name` on PATH with `which`
    pub async fn probe(name: &str) -> Self {
        let output = Command::new(LOOKUP_COMMAND).arg(name).output().await;

        match output {
            Ok(out) if out.status.success() => {
                let stdout = String::from_utf8_lossy(&out.stdout);
                let program = stdout
                    .lines()
                    .next()
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(name));
                tracing::debug!(tool = name, program = %program.display(), "tool found");
                Self::at(name, program)
            }
            Ok(_) => {
                tracing::debug!(tool = name, "tool not on PATH");
                Self::missing(name)
            }
            Err(e) => {
                tracing::debug!(tool = name, error = %e, "{} failed", LOOKUP_COMMAND);
                Self::missing(name)
            }
        }
    }

    fn missing(name: &str) -> Self {
        Self {
            available: false,
            ..Self::at(name, name)
        }
    }

    /// `<tool> --convert-to pdf --outdir <outdir> <input>`
    pub fn convert_command(&self, input: &Path, outdir: &Path) -> Command {
        let mut cmd = self.base_command();
        cmd.arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(outdir)
            .arg(input);
        cmd
    }

    /// `<tool> <inputs...> <output>`
    pub fn merge_command(&self, inputs: &[PathBuf], output: &Path) -> Command {
        let mut cmd = self.base_command();
        cmd.args(inputs).arg(output);
        cmd
    }

    fn base_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args);
        cmd
    }
}

/// The two external programs a run needs
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub merger: ToolDescriptor,
    pub converter: ToolDescriptor,
}

impl Toolchain {
    /// Probe the merger first, then converter candidates in order.
    pub async fn discover(config: &Config) -> Result<Self> {
        let merger = ToolDescriptor::probe(&config.merger).await;
        if !merger.available {
            return Err(BookletError::ToolNotFound(config.merger.clone()));
        }

        let converter = first_available(&config.converters)
            .await
            .ok_or_else(|| BookletError::NoConverter(config.converters.clone()))?;

        Ok(Self { merger, converter })
    }
}

/// First candidate that resolves on PATH
pub async fn first_available(candidates: &[String]) -> Option<ToolDescriptor> {
    for name in candidates {
        let tool = ToolDescriptor::probe(name).await;
        if tool.available {
            return Some(tool);
        }
    }
    None
}
