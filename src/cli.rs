use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resume-booklet", version)]
#[command(about = "Match a member roster against uploaded resumes and build one booklet PDF", long_about = None)]
pub struct Cli {
    /// Active members CSV (header row is skipped)
    pub members_csv: PathBuf,

    /// Folder containing uploaded resumes
    pub resume_folder: PathBuf,

    /// Output booklet (default: resume_booklet.pdf in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Zero-based column holding member names
    #[arg(long)]
    pub name_column: Option<usize>,

    /// Zero-based column holding member emails
    #[arg(long)]
    pub email_column: Option<usize>,

    /// Skip resumes that match no member instead of asking
    #[arg(long)]
    pub skip_unmatched: bool,

    /// Print missing members' emails without asking
    #[arg(long)]
    pub emails: bool,

    /// Leave the staging folder in place after the run
    #[arg(long)]
    pub keep_staging: bool,

    /// Write a JSON run summary to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
