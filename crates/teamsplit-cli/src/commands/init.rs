use std::path::Path;

use teamsplit_core::RosterFile;

pub fn init(path: &str) -> anyhow::Result<()> {
    let dir = Path::new(path);
    let output = dir.join("roster.toml");

    let scaffold = RosterFile::scaffold(&["Ada", "Grace", "Barbara", "Margaret"]);
    std::fs::write(&output, scaffold.to_toml_string()?)?;
    println!("✓ Generated {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_writes_a_valid_roster_file() {
        let dir = tempfile::tempdir().unwrap();

        init(dir.path().to_str().unwrap()).unwrap();

        let written = RosterFile::from_file(&dir.path().join("roster.toml")).unwrap();
        assert!(written.validate().is_ok());
        assert_eq!(written.roster.default_teams, Some(2));
    }
}
