//! Resume Booklet Common Library
//!
//! I/O-free roster parsing and resume matching shared by the CLI

pub mod types;
pub mod error;
pub mod roster;
pub mod matcher;
pub mod report;

pub use types::{MemberRecord, MatchTable, MatchReport, MissingContact};
pub use error::{Error, Result};
pub use roster::{RosterColumns, parse_roster, member_names};
pub use matcher::{MatchState, Mode, Decision, Choice, Transition, corresponding_member, normalize_key};
pub use report::missing_contacts;
