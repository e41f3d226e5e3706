//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use reflist::output::OutputMode;

/// reflist - list git branches and tags, sorted by recency or name
#[derive(Parser, Debug)]
#[command(
    name = "reflist",
    version,
    about = "List git branches and tags, sorted by recency or name",
    long_about = "List the refs of a git repository as typed, classified records.\n\n\
                  Branches and tags can be sorted by last access date (annotated and\n\
                  lightweight tags sort together) or byte-wise by full ref path."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Repository to read (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub repo: Option<String>,

    /// Ref backend to use
    #[arg(long, global = true, default_value = "cli", value_name = "cli|libgit2")]
    pub backend: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List local branches
    Branches {
        /// Ordering: "date" (most recent first) or "name"
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// List tags
    Tags {
        /// Ordering: "date" (most recent first) or "name"
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// List every branch and tag in repository order, unsorted
    All,

    /// Show version information
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Branches { sort }) => {
            let repo = commands::RepoArgs::new(cli.repo, &cli.backend)?;
            commands::list_branches(&repo, sort.as_deref(), output_mode)
        },
        Some(Command::Tags { sort }) => {
            let repo = commands::RepoArgs::new(cli.repo, &cli.backend)?;
            commands::list_tags(&repo, sort.as_deref(), output_mode)
        },
        Some(Command::All) => {
            let repo = commands::RepoArgs::new(cli.repo, &cli.backend)?;
            commands::list_all(&repo, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("reflist v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("reflist v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'reflist --help' for usage");
                println!("Run 'reflist branches' to list local branches");
            }
            Ok(())
        },
    }
}
