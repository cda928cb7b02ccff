//! Command-line interface implementation for modkit.
//! Provides argument parsing using clap's derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::descriptor::Difficulty;

/// Command-line arguments structure for modkit.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "modkit: scaffolding and validation for learning modules",
    long_about = None
)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a modkit configuration file (modkit.json / modkit.yml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new learning module from a template
    Create {
        /// Name of the module to create (kebab-case)
        #[arg(value_name = "MODULE_NAME")]
        module_name: String,

        /// Template to instantiate
        #[arg(short, long, default_value = "module-basic")]
        template: String,

        /// Module category
        #[arg(short, long)]
        category: Option<String>,

        /// Module difficulty level
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,

        /// Primary language of the module content
        #[arg(short, long)]
        language: Option<String>,

        /// Module author
        #[arg(short, long)]
        author: Option<String>,

        /// Directory in which the module directory is created
        #[arg(short, long, default_value = ".", value_name = "DIR")]
        output_dir: PathBuf,

        /// Extra template variables as KEY=VALUE (repeatable)
        #[arg(long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,

        /// Prompt for category, difficulty, language and author
        #[arg(short, long)]
        interactive: bool,
    },

    /// Validate a learning module's structure and content
    Validate {
        /// Path to the module directory
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
    },

    /// Delete a learning module directory
    Delete {
        /// Path to the module directory
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Delete without confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// List the templates available across all search roots
    Templates,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
