//! Missing-resume contact lookup

use crate::types::{MemberRecord, MissingContact};

/// Pair each unmatched name with its roster email.
///
/// Lookup is by exact name. Names added during matching were never on the
/// roster and come back with `email: None`, same as blank email cells.
pub fn missing_contacts(unmatched: &[String], members: &[MemberRecord]) -> Vec<MissingContact> {
    unmatched
        .iter()
        .map(|name| MissingContact {
            name: name.clone(),
            email: members
                .iter()
                .find(|m| &m.name == name)
                .and_then(|m| m.email.clone()),
        })
        .collect()
}
