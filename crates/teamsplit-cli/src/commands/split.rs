use std::path::Path;

use anyhow::{Context, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use teamsplit_core::{Partition, RosterFile, generate, generate_partition, validate_names};
use tracing::info;

pub fn split(
    names: &[String],
    teams: Option<usize>,
    path: &str,
    seed: Option<u64>,
    format: &str,
) -> anyhow::Result<()> {
    let (members, default_teams) = load_roster(names, path)?;
    validate_names(&members)?;

    let Some(team_count) = teams.or(default_teams) else {
        bail!("no team count given: pass --teams or set default_teams in the roster file");
    };

    let partition = match seed {
        Some(seed) => {
            info!(seed, "using seeded RNG");
            generate_partition(&members, team_count, &mut StdRng::seed_from_u64(seed))?
        }
        None => generate(&members, team_count)?,
    };

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&partition)?);
        }
        _ => {
            print!("{}", format_partition(&partition));
        }
    }

    Ok(())
}

/// Roster comes from positional names when given, otherwise from the file.
fn load_roster(names: &[String], path: &str) -> anyhow::Result<(Vec<String>, Option<usize>)> {
    if !names.is_empty() {
        return Ok((names.to_vec(), None));
    }

    let file = RosterFile::from_file(Path::new(path))
        .with_context(|| format!("reading roster file {path}"))?;
    Ok((file.roster.members.clone(), file.roster.default_teams))
}

fn format_partition(partition: &Partition<String>) -> String {
    let mut out = String::new();
    for (idx, team) in partition.teams.iter().enumerate() {
        out.push_str(&format!("Team {}: {}\n", idx + 1, team.join(", ")));
    }
    out
}
