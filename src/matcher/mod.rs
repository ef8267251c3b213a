use crate::error::Result;
use crate::prompt::{self, Prompter};
use crate::scanner::ResumeFile;
use booklet_common::{MatchReport, MatchState, Transition};

/// Fold the folder listing through the matching state machine.
///
/// Files that match nobody are handed to `prompter` unless `skip_unmatched`
/// is set or the operator has chosen skip-all.
pub fn match_resumes(
    names: Vec<String>,
    files: &[ResumeFile],
    prompter: &mut dyn Prompter,
    skip_unmatched: bool,
) -> Result<MatchReport> {
    let initial = if skip_unmatched {
        MatchState::new(names).with_skip_all()
    } else {
        MatchState::new(names)
    };

    let state = files
        .iter()
        .try_fold(initial, |state, file| step(state, &file.file_name, &mut *prompter))?;

    Ok(state.finish()?)
}

fn step(state: MatchState, file: &str, prompter: &mut dyn Prompter) -> Result<MatchState> {
    let (state, transition) = state.advance(file)?;

    let (state, transition) = match transition {
        Transition::Prompt { file } => {
            let decision = prompt::decide(prompter, &file)?;
            state.resolve(decision)?
        }
        other => (state, other),
    };

    match &transition {
        Transition::Matched { name, file } => tracing::debug!(%name, %file, "matched"),
        Transition::AlreadyMatched { name, file } => {
            tracing::debug!(%name, %file, "member already has a resume, skipping")
        }
        Transition::Skipped { file } => tracing::debug!(%file, "skipped"),
        Transition::SkipAllEngaged { file } => {
            tracing::info!(%file, "skip-all engaged, no more prompts")
        }
        Transition::Prompt { file } => tracing::warn!(%file, "prompt left unresolved"),
    }

    Ok(state)
}
