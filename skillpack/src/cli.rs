use clap::{Parser, Subcommand};

/// skillpack - bundle skill folders into .skill archives
#[derive(Parser, Debug)]
#[command(name = "skillpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// With no subcommand, packages the configured skill list (same as `pack`).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Package skill folders (each containing SKILL.md) into <name>.skill archives
    Pack {
        /// Skill folders to package (default: SKILLPACK_SKILLS or the built-in list)
        #[arg(value_name = "SKILL_DIR")]
        skills: Vec<String>,

        /// Output directory (default: SKILLPACK_OUTPUT_DIR or "dist")
        #[arg(long, short = 'o', value_name = "DIR")]
        out_dir: Option<String>,

        /// Package every skill folder found directly under the workspace
        #[arg(long, conflicts_with = "skills")]
        all: bool,

        /// Exit with an error when any skill fails to package
        #[arg(long)]
        strict: bool,

        /// Print the run summary as JSON after the report
        #[arg(long)]
        json: bool,
    },

    /// List the entries stored in a .skill archive
    List {
        /// Path to the .skill archive
        #[arg(value_name = "ARCHIVE")]
        archive: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
