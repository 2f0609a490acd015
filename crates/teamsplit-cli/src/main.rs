use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "teamsplit",
    about = "teamsplit — random team assignment from a roster",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a roster into randomly assigned teams.
    ///
    /// The roster comes from positional NAMES, or from a roster.toml when
    /// none are given. --teams falls back to the file's default_teams.
    Split {
        /// Roster member names (leave empty to read the roster file)
        names: Vec<String>,
        /// Number of teams to form
        #[arg(short, long)]
        teams: Option<usize>,
        /// Path to a roster.toml (default: ./roster.toml)
        #[arg(short, long, default_value = "roster.toml")]
        path: String,
        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Generate a roster.toml scaffold
    Init {
        /// Directory to write roster.toml into
        #[arg(short, long, default_value = ".")]
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("teamsplit_cli=info".parse()?)
                .add_directive("teamsplit_core=info".parse()?)
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Split { names, teams, path, seed, format } => {
            commands::split::split(&names, teams, &path, seed, &format)
        }
        Commands::Init { path } => {
            commands::init::init(&path)
        }
    }
}
