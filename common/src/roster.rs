//! Roster parsing
//!
//! The first line is a header and is skipped. Columns are picked by
//! position, never by header name.

use crate::error::{Error, Result};
use crate::types::MemberRecord;
use serde::{Deserialize, Serialize};

/// Positions of the name and email cells in a roster row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterColumns {
    pub name: usize,
    pub email: usize,
}

impl Default for RosterColumns {
    fn default() -> Self {
        Self { name: 0, email: 3 }
    }
}

impl RosterColumns {
    pub fn validate(&self) -> Result<()> {
        if self.name == self.email {
            return Err(Error::InvalidColumn(format!(
                "name and email both point at column {}",
                self.name
            )));
        }
        Ok(())
    }
}

/// Parse roster text into members, preserving row order.
///
/// Blank lines and rows with an empty name cell are dropped.
pub fn parse_roster(text: &str, columns: RosterColumns) -> Result<Vec<MemberRecord>> {
    columns.validate()?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut members = Vec::new();

    for record in reader.records() {
        let record = record?;

        let name = record.get(columns.name).map(str::trim).unwrap_or_default();
        if name.is_empty() {
            continue;
        }

        let email = record
            .get(columns.email)
            .map(|e| e.trim().to_string());

        members.push(MemberRecord::new(name, email));
    }

    Ok(members)
}

/// Member names in roster order
pub fn member_names(members: &[MemberRecord]) -> Vec<String> {
    members.iter().map(|m| m.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = "Name,Year,Major,Email\n\
Alice Smith,2025,CS,alice@x.com\n\
Bob Jones,2026,Math,bob@x.com\n\
Carol White,2024,EE,carol@x.com\n";

    #[test]
    fn test_parse_roster_fixed_columns() {
        let members = parse_roster(ROSTER, RosterColumns::default()).unwrap();
        assert_eq!(members.len(), 3);
        assert_eq!(members[0].name, "Alice Smith");
        assert_eq!(members[0].email.as_deref(), Some("alice@x.com"));
        assert_eq!(members[2].name, "Carol White");
        assert_eq!(members[2].email.as_deref(), Some("carol@x.com"));
    }

    #[test]
    fn test_header_only_roster() {
        let members = parse_roster("Name,Year,Major,Email\n", RosterColumns::default()).unwrap();
        assert!(members.is_empty());
    }

    #[test]
    fn test_blank_trailing_lines_are_dropped() {
        let text = format!("{}\n\n", ROSTER);
        let members = parse_roster(&text, RosterColumns::default()).unwrap();
        assert_eq!(members.len(), 3);
    }

    #[test]
    fn test_row_with_blank_name_is_dropped() {
        let text = "Name,Year,Major,Email\n,2025,CS,ghost@x.com\nDan,2025,CS,dan@x.com\n";
        let members = parse_roster(text, RosterColumns::default()).unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Dan");
    }

    #[test]
    fn test_short_row_has_no_email() {
        let text = "Name,Year,Major,Email\nEve,2025\n";
        let members = parse_roster(text, RosterColumns::default()).unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].email, None);
    }

    #[test]
    fn test_custom_columns() {
        let text = "Email,Name\nf@x.com,Frank\n";
        let columns = RosterColumns { name: 1, email: 0 };
        let members = parse_roster(text, columns).unwrap();
        assert_eq!(members[0], MemberRecord::new("Frank", Some("f@x.com".into())));
    }

    #[test]
    fn test_quoted_cells() {
        let text = "Name,Year,Major,Email\n\"Grace Hopper\",2025,\"CS, Math\",grace@x.com\n";
        let members = parse_roster(text, RosterColumns::default()).unwrap();
        assert_eq!(members[0].name, "Grace Hopper");
        assert_eq!(members[0].email.as_deref(), Some("grace@x.com"));
    }

    #[test]
    fn test_same_column_rejected() {
        let columns = RosterColumns { name: 2, email: 2 };
        let result = parse_roster(ROSTER, columns);
        assert!(matches!(result, Err(Error::InvalidColumn(_))));
    }

    #[test]
    fn test_member_names_order() {
        let members = parse_roster(ROSTER, RosterColumns::default()).unwrap();
        assert_eq!(
            member_names(&members),
            vec!["Alice Smith", "Bob Jones", "Carol White"]
        );
    }
}
