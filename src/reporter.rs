use crate::error::Result;
use crate::prompt::Prompter;
use booklet_common::{missing_contacts, MemberRecord};
use std::io::Write;

/// Warn about members without a resume and optionally list their emails.
///
/// With `always_show` the question is skipped. Returns whether emails were
/// printed.
pub fn report_missing(
    unmatched: &[String],
    members: &[MemberRecord],
    prompter: &mut dyn Prompter,
    always_show: bool,
    out: &mut dyn Write,
) -> Result<bool> {
    if unmatched.is_empty() {
        return Ok(false);
    }

    let show = always_show || prompter.show_emails(unmatched.len())?;
    if !show {
        return Ok(false);
    }

    for contact in missing_contacts(unmatched, members) {
        match contact.email {
            Some(email) => writeln!(out, "{}", email)?,
            None => writeln!(out, "{}: no email on record", contact.name)?,
        }
    }

    Ok(true)
}
