//! Operator prompts
//!
//! The matcher and reporter only talk to a [`Prompter`]. On a terminal the
//! questions go through dialoguer; anything else (piped stdin, tests) uses
//! [`LinePrompter`], which reads one line per answer.

use crate::error::{BookletError, Result};
use booklet_common::{Choice, Decision};
use dialoguer::Input;
use std::io::{BufRead, IsTerminal, Write};

pub trait Prompter {
    /// "Skip?" question for a resume that matched no member
    fn unmatched_file(&mut self, file: &str) -> Result<Choice>;

    /// Follow-up when the operator says the file belongs to someone
    fn member_name(&mut self, file: &str) -> Result<String>;

    /// Whether to list emails of members without a resume
    fn show_emails(&mut self, missing: usize) -> Result<bool>;
}

/// Ask until a full [`Decision`] is known
pub fn decide(prompter: &mut dyn Prompter, file: &str) -> Result<Decision> {
    let decision = match prompter.unmatched_file(file)? {
        Choice::Skip => Decision::Skip,
        Choice::SupplyName => Decision::Name(prompter.member_name(file)?),
        Choice::SkipAll => Decision::SkipAll,
    };
    Ok(decision)
}

fn skip_question(file: &str) -> String {
    format!("Found resume {file}. Skip? [Yna] (y = yes, n = no, a = yes to all)")
}

const NAME_QUESTION: &str = "What is their full name?";

fn emails_question(missing: usize) -> String {
    format!(
        "Warning: Missing resumes from {missing} members. Would you like their emails? [Yn] (y = yes, n = no)"
    )
}

/// Interactive prompts on the controlling terminal
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn ask(&self, question: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| BookletError::Prompt(e.to_string()))
    }
}

impl Prompter for TerminalPrompter {
    fn unmatched_file(&mut self, file: &str) -> Result<Choice> {
        Ok(Choice::parse(&self.ask(&skip_question(file))?))
    }

    fn member_name(&mut self, _file: &str) -> Result<String> {
        Ok(self.ask(NAME_QUESTION)?.trim().to_string())
    }

    fn show_emails(&mut self, missing: usize) -> Result<bool> {
        Ok(self.ask(&emails_question(missing))?.trim() == "y")
    }
}

/// One answer per input line. End of input answers with an empty line.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
    asked: usize,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer, asked: 0 }
    }

    /// Number of questions asked so far
    pub fn asked(&self) -> usize {
        self.asked
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        self.asked += 1;
        writeln!(self.writer, "{question}")?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn unmatched_file(&mut self, file: &str) -> Result<Choice> {
        let answer = self.ask(&skip_question(file))?;
        Ok(Choice::parse(&answer))
    }

    fn member_name(&mut self, _file: &str) -> Result<String> {
        Ok(self.ask(NAME_QUESTION)?.trim().to_string())
    }

    fn show_emails(&mut self, missing: usize) -> Result<bool> {
        Ok(self.ask(&emails_question(missing))?.trim() == "y")
    }
}

/// dialoguer on a terminal, plain line reading otherwise
pub fn stdio_prompter() -> Box<dyn Prompter> {
    if std::io::stdin().is_terminal() {
        Box::new(TerminalPrompter)
    } else {
        Box::new(LinePrompter::new(std::io::stdin().lock(), std::io::stdout()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(answers: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_decide_skip() {
        let mut prompter = scripted("y\n");
        assert_eq!(decide(&mut prompter, "x.pdf").unwrap(), Decision::Skip);
        assert_eq!(prompter.asked(), 1);
    }

    #[test]
    fn test_decide_name() {
        let mut prompter = scripted("n\nJohn Smith\n");
        assert_eq!(
            decide(&mut prompter, "jsmith.pdf").unwrap(),
            Decision::Name("John Smith".into())
        );
        assert_eq!(prompter.asked(), 2);

        let output = String::from_utf8(prompter.into_writer()).unwrap();
        assert!(output.contains("Found resume jsmith.pdf. Skip? [Yna]"));
        assert!(output.contains("What is their full name?"));
    }

    #[test]
    fn test_decide_skip_all() {
        let mut prompter = scripted("a\n");
        assert_eq!(decide(&mut prompter, "x.pdf").unwrap(), Decision::SkipAll);
    }

    #[test]
    fn test_end_of_input_skips() {
        let mut prompter = scripted("");
        assert_eq!(decide(&mut prompter, "x.pdf").unwrap(), Decision::Skip);
        assert!(!prompter.show_emails(3).unwrap());
    }

    #[test]
    fn test_show_emails_literal_y() {
        assert!(scripted("y\n").show_emails(1).unwrap());
        assert!(!scripted("Y\n").show_emails(1).unwrap());
        assert!(!scripted("yes\n").show_emails(1).unwrap());
        assert!(scripted("y\r\n").show_emails(1).unwrap());
    }
}
