//! skillpack CLI library.

mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use skillpack_core::config::{PackConfig, PathsConfig};
use skillpack_core::skill::discover_skills_in_workspace;

/// Run the CLI: parse args, init tracing, dispatch.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    skillpack_core::observability::init_tracing();

    match cli.command {
        None => {
            skillpack_commands::cmd_pack(&PackConfig::from_env(), false)?;
        }
        Some(Commands::Pack {
            skills,
            out_dir,
            all,
            strict,
            json,
        }) => {
            let mut config = PackConfig::from_env()
                .with_skills(skills)
                .with_output_dir(out_dir.map(PathBuf::from))
                .with_strict(strict);
            if all {
                // An empty discovery packs nothing rather than the configured list.
                config.skills = discovered_skills();
            }
            skillpack_commands::cmd_pack(&config, json)?;
        }
        Some(Commands::List { archive, json }) => {
            skillpack_commands::cmd_list(&archive, json)?;
        }
    }

    Ok(())
}

fn discovered_skills() -> Vec<String> {
    let workspace = PathsConfig::from_env().workspace;
    let found = discover_skills_in_workspace(&workspace);
    tracing::debug!(workspace = %workspace.display(), count = found.len(), "Discovered skills");
    found
        .into_iter()
        .map(|p| p.to_string_lossy().to_string())
        .collect()
}
