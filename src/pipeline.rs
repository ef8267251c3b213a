//! End-to-end run: roster → match → stage → convert → merge → report
//!
//! Every stage finishes before the next starts. Tools are discovered by the
//! caller beforehand so a missing tool stops the run before any work.

use crate::booklet;
use crate::cli::Cli;
use crate::config::Config;
use crate::convert::{self, ConversionReport};
use crate::error::{BookletError, Result};
use crate::matcher;
use crate::prompt::Prompter;
use crate::reporter;
use crate::scanner;
use crate::staging::StagingArea;
use crate::tools::Toolchain;
use booklet_common::{member_names, parse_roster, MatchReport, MemberRecord, RosterColumns};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub members_csv: PathBuf,
    pub resume_folder: PathBuf,
    pub output: PathBuf,
    pub columns: RosterColumns,
    pub staging_dir_name: String,
    pub skip_unmatched: bool,
    pub show_emails: bool,
    pub keep_staging: bool,
    pub report: Option<PathBuf>,
}

impl RunOptions {
    /// CLI flags win over config values
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        let defaults = config.columns();
        Self {
            members_csv: cli.members_csv.clone(),
            resume_folder: cli.resume_folder.clone(),
            output: cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output_file)),
            columns: RosterColumns {
                name: cli.name_column.unwrap_or(defaults.name),
                email: cli.email_column.unwrap_or(defaults.email),
            },
            staging_dir_name: config.staging_dir_name.clone(),
            skip_unmatched: cli.skip_unmatched,
            show_emails: cli.emails,
            keep_staging: cli.keep_staging,
            report: cli.report.clone(),
        }
    }
}

/// JSON written by `--report`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub generated_at: String,
    pub output: PathBuf,
    pub matching: MatchReport,
    pub conversion: ConversionReport,
}

/// Existence checks that run before any tool is probed
pub fn check_inputs(options: &RunOptions) -> Result<()> {
    if !options.members_csv.is_file() {
        return Err(BookletError::FileNotFound(options.members_csv.display().to_string()));
    }
    if !options.resume_folder.is_dir() {
        return Err(BookletError::FolderNotFound(options.resume_folder.display().to_string()));
    }
    Ok(())
}

pub async fn run(
    options: &RunOptions,
    tools: &Toolchain,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<RunSummary> {
    // 1. Roster
    writeln!(out, "[1/5] Reading roster...")?;
    let text = std::fs::read_to_string(&options.members_csv)?;
    let members = parse_roster(&text, options.columns)?;
    writeln!(out, "✔ {} members\n", members.len())?;

    // 2. Matching
    writeln!(out, "[2/5] Matching resumes...")?;
    let files = scanner::scan_folder(&options.resume_folder)?;
    let matching = matcher::match_resumes(
        member_names(&members),
        &files,
        prompter,
        options.skip_unmatched,
    )?;
    writeln!(
        out,
        "✔ {} of {} files matched, {} members missing\n",
        matching.matches.len(),
        files.len(),
        matching.unmatched.len()
    )?;

    // 3-5. Stage, convert, merge. The staging folder goes away either way.
    let staging = StagingArea::create(&options.resume_folder, &options.staging_dir_name)?;
    let built = build_booklet(&staging, &matching, options, tools, out).await;

    if options.keep_staging {
        writeln!(out, "Staging folder kept at {}", staging.path().display())?;
    } else if let Err(e) = staging.remove() {
        tracing::warn!(error = %e, "could not remove staging folder");
    }

    let conversion = built?;
    writeln!(out, "Successfully created {}", options.output.display())?;

    let summary = RunSummary {
        generated_at: chrono::Local::now().to_rfc3339(),
        output: options.output.clone(),
        matching,
        conversion,
    };

    if let Some(report_path) = &options.report {
        write_summary(&summary, report_path)?;
        writeln!(out, "✔ Report saved: {}", report_path.display())?;
    }

    report_missing(&summary.matching, &members, prompter, options.show_emails, out)?;

    Ok(summary)
}

async fn build_booklet(
    staging: &StagingArea,
    matching: &MatchReport,
    options: &RunOptions,
    tools: &Toolchain,
    out: &mut dyn Write,
) -> Result<ConversionReport> {
    writeln!(out, "[3/5] Staging resumes...")?;
    let staged = staging.stage(&matching.matches, &options.resume_folder)?;
    writeln!(out, "✔ {} resumes copied\n", staged.len())?;

    writeln!(out, "[4/5] Converting resumes to pdf...")?;
    let conversion = convert::convert_staged(staging.path(), &tools.converter).await?;
    writeln!(out, "✔ {} pdfs ready", conversion.converted.len())?;
    if !conversion.failed.is_empty() {
        writeln!(out, "⚠ {} resumes could not be converted", conversion.failed.len())?;
    }
    writeln!(out)?;

    writeln!(out, "[5/5] Combining pdfs...")?;
    booklet::assemble(&tools.merger, &conversion.converted, &options.output).await?;

    Ok(conversion)
}

fn write_summary(summary: &RunSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn report_missing(
    matching: &MatchReport,
    members: &[MemberRecord],
    prompter: &mut dyn Prompter,
    show_emails: bool,
    out: &mut dyn Write,
) -> Result<()> {
    if matching.unmatched.is_empty() {
        return Ok(());
    }

    if show_emails {
        writeln!(out, "Warning: Missing resumes from {} members", matching.unmatched.len())?;
    }
    reporter::report_missing(&matching.unmatched, members, prompter, show_emails, out)?;
    Ok(())
}
