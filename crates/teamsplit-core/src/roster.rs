//! roster.toml parsing and validation.
//!
//! The partition engine itself accepts any slice and assumes the caller has
//! already rejected duplicates. This module is that caller-side layer: a
//! small TOML document holding the member list and an optional default team
//! count, with the validation the engine relies on.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from roster validation. These are edge failures — the partition
/// engine never sees a roster that failed here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("duplicate roster name: {0}")]
    DuplicateName(String),

    #[error("blank roster name at position {0}")]
    BlankName(usize),

    #[error("roster has no members")]
    Empty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    pub roster: RosterSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSection {
    pub members: Vec<String>,
    pub default_teams: Option<usize>,
}

impl RosterFile {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let roster: RosterFile = toml::from_str(&content)?;
        Ok(roster)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Scaffold a starter roster.toml.
    pub fn scaffold(members: &[&str]) -> Self {
        RosterFile {
            roster: RosterSection {
                members: members.iter().map(|m| m.to_string()).collect(),
                default_teams: Some(2),
            },
        }
    }

    /// Check the invariants the partition engine assumes: at least one
    /// member, no blank names, no two names comparing equal.
    pub fn validate(&self) -> Result<(), RosterError> {
        validate_names(&self.roster.members)
    }
}

/// Validate a member list from any source (roster file or CLI arguments).
pub fn validate_names(names: &[String]) -> Result<(), RosterError> {
    if names.is_empty() {
        return Err(RosterError::Empty);
    }

    let mut seen: Vec<&str> = Vec::with_capacity(names.len());
    for (idx, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(RosterError::BlankName(idx));
        }
        if seen.contains(&name.as_str()) {
            return Err(RosterError::DuplicateName(name.clone()));
        }
        seen.push(name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_minimal() {
        let toml_str = r#"
[roster]
members = ["Ada", "Grace", "Barbara"]
default_teams = 2
"#;
        let file: RosterFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.roster.members.len(), 3);
        assert_eq!(file.roster.default_teams, Some(2));
        assert!(file.validate().is_ok());
    }

    #[test]
    fn default_teams_is_optional() {
        let toml_str = r#"
[roster]
members = ["Ada"]
"#;
        let file: RosterFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.roster.default_teams, None);
    }

    #[test]
    fn scaffold_round_trips() {
        let file = RosterFile::scaffold(&["Ada", "Grace"]);
        let rendered = file.to_toml_string().unwrap();

        let parsed: RosterFile = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.roster.members, names(&["Ada", "Grace"]));
        assert_eq!(parsed.roster.default_teams, Some(2));
    }

    #[test]
    fn from_file_reads_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(
            &path,
            "[roster]\nmembers = [\"Ada\", \"Grace\"]\ndefault_teams = 2\n",
        )
        .unwrap();

        let file = RosterFile::from_file(&path).unwrap();
        assert_eq!(file.roster.members, names(&["Ada", "Grace"]));
    }

    #[test]
    fn duplicates_are_rejected() {
        let err = validate_names(&names(&["Ada", "Grace", "Ada"])).unwrap_err();
        assert_eq!(err, RosterError::DuplicateName("Ada".to_string()));
    }

    #[test]
    fn case_differs_is_not_a_duplicate() {
        // Exact comparison only; "ada" and "Ada" are distinct members.
        assert!(validate_names(&names(&["Ada", "ada"])).is_ok());
    }

    #[test]
    fn blank_names_are_rejected() {
        let err = validate_names(&names(&["Ada", "   "])).unwrap_err();
        assert_eq!(err, RosterError::BlankName(1));
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert_eq!(validate_names(&[]).unwrap_err(), RosterError::Empty);
    }
}
