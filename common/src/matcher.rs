//! Resume ↔ roster matching state machine
//!
//! Files are fed one at a time through [`MatchState::advance`]. A file that
//! matches no roster name parks the state in `AwaitingDecision` until the
//! caller answers with [`MatchState::resolve`]. The state is a plain value
//! threaded through a fold; nothing here touches the terminal or the disk.
//!
//! ## Matching rule
//! The first roster name (in current list order) whose normalized form is a
//! substring of the normalized file stem wins. Normalization lowercases and
//! collapses every run of non-alphanumeric characters into a single space, so
//! `Alice Smith` matches `alice_smith-resume.docx`.

use crate::error::{Error, Result};
use crate::types::{MatchReport, MatchTable};
use regex::Regex;

/// Where the matcher is in its scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Scanning,
    /// A file matched nobody and the operator has not answered yet
    AwaitingDecision { file: String },
    /// Unmatched files are skipped without asking
    SkipAll,
}

/// Operator answer for an unmatched file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Skip,
    /// The file belongs to this member (typo fix or missing roster entry)
    Name(String),
    SkipAll,
}

/// First-level answer to the "Skip?" prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Skip,
    SupplyName,
    SkipAll,
}

impl Choice {
    /// `n` asks for a name, `a` skips everything from here on, anything else
    /// (including an empty answer) skips this file. Case-sensitive.
    pub fn parse(answer: &str) -> Self {
        match answer.trim() {
            "n" => Choice::SupplyName,
            "a" => Choice::SkipAll,
            _ => Choice::Skip,
        }
    }
}

/// What a single step did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Matched { name: String, file: String },
    /// The file names a member who already has a resume
    AlreadyMatched { name: String, file: String },
    Skipped { file: String },
    SkipAllEngaged { file: String },
    /// Caller must obtain a [`Decision`] and call `resolve`
    Prompt { file: String },
}

#[derive(Debug, Clone)]
pub struct MatchState {
    mode: Mode,
    roster: Vec<String>,
    remaining: Vec<String>,
    matches: MatchTable,
}

impl MatchState {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut roster: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !roster.contains(&name) {
                roster.push(name);
            }
        }

        Self {
            mode: Mode::Scanning,
            remaining: roster.clone(),
            roster,
            matches: MatchTable::new(),
        }
    }

    /// Start with prompts suppressed
    pub fn with_skip_all(mut self) -> Self {
        self.mode = Mode::SkipAll;
        self
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    pub fn matches(&self) -> &MatchTable {
        &self.matches
    }

    /// Feed the next directory entry
    pub fn advance(mut self, file: &str) -> Result<(Self, Transition)> {
        if let Mode::AwaitingDecision { file: pending } = &self.mode {
            return Err(Error::DecisionPending(pending.clone()));
        }

        let member = corresponding_member(&self.roster, file).map(str::to_string);

        let transition = match member {
            Some(name) => {
                if self.take_remaining(&name) {
                    self.matches.insert(name.clone(), file.to_string());
                    Transition::Matched { name, file: file.to_string() }
                } else {
                    Transition::AlreadyMatched { name, file: file.to_string() }
                }
            }
            None if self.mode == Mode::SkipAll => Transition::Skipped { file: file.to_string() },
            None => {
                self.mode = Mode::AwaitingDecision { file: file.to_string() };
                Transition::Prompt { file: file.to_string() }
            }
        };

        Ok((self, transition))
    }

    /// Answer the pending prompt
    pub fn resolve(mut self, decision: Decision) -> Result<(Self, Transition)> {
        let file = match std::mem::replace(&mut self.mode, Mode::Scanning) {
            Mode::AwaitingDecision { file } => file,
            other => {
                self.mode = other;
                return Err(Error::NoPendingDecision);
            }
        };

        let transition = match decision {
            Decision::Skip => Transition::Skipped { file },
            Decision::SkipAll => {
                self.mode = Mode::SkipAll;
                Transition::SkipAllEngaged { file }
            }
            Decision::Name(name) => {
                let name = self.canonical_name(name.trim());
                if name.is_empty() {
                    Transition::Skipped { file }
                } else {
                    if !self.roster.contains(&name) {
                        self.roster.push(name.clone());
                    }
                    self.take_remaining(&name);
                    // an explicit answer replaces an earlier match for the same name
                    self.matches.insert(name.clone(), file.clone());
                    Transition::Matched { name, file }
                }
            }
        };

        Ok((self, transition))
    }

    /// Close the scan. Fails if a prompt was never answered.
    pub fn finish(self) -> Result<MatchReport> {
        if let Mode::AwaitingDecision { file } = self.mode {
            return Err(Error::DecisionPending(file));
        }

        Ok(MatchReport {
            roster: self.roster,
            matches: self.matches,
            unmatched: self.remaining,
        })
    }

    /// Roster spelling of `answer` when it differs only in case or separators
    fn canonical_name(&self, answer: &str) -> String {
        let key = normalize_key(answer);
        if key.is_empty() {
            return answer.to_string();
        }

        self.roster
            .iter()
            .find(|name| normalize_key(name) == key)
            .cloned()
            .unwrap_or_else(|| answer.to_string())
    }

    fn take_remaining(&mut self, name: &str) -> bool {
        match self.remaining.iter().position(|n| n == name) {
            Some(idx) => {
                self.remaining.remove(idx);
                true
            }
            None => false,
        }
    }
}

/// Lowercase and collapse separators into single spaces
pub fn normalize_key(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref SEPARATOR_RE: Regex = Regex::new(r"[^\p{Alphabetic}\p{Nd}]+").unwrap();
    }

    SEPARATOR_RE
        .replace_all(&text.to_lowercase(), " ")
        .trim()
        .to_string()
}

/// File name without its last extension. Dotfiles keep their full name.
fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    }
}

/// First roster name contained in the file name
pub fn corresponding_member<'a>(roster: &'a [String], file_name: &str) -> Option<&'a str> {
    let key = normalize_key(file_stem(file_name));

    roster
        .iter()
        .find(|name| {
            let name_key = normalize_key(name);
            !name_key.is_empty() && key.contains(&name_key)
        })
        .map(String::as_str)
}
