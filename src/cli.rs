use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use hearth::AssetKind;

/// Hearth - reconcile prompts and skills with one canonical home store
#[derive(Parser, Debug)]
#[command(name = "hearth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Plain ASCII icons in text output (also implied by TERM=dumb)
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Home store directory (overrides HEARTH_HOME and the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub home: Option<PathBuf>,

    /// Config file (overrides HEARTH_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover assets and report what is missing from home
    Scan {
        /// Extra source root, scanned as-is (repeatable)
        #[arg(short, long = "source", value_name = "PATH")]
        sources: Vec<PathBuf>,

        /// Include the conflict list with reasons and diffs
        #[arg(long)]
        conflicts: bool,
    },

    /// Show synced/tracked status of every discovered asset
    Status {
        /// Extra source root, scanned as-is (repeatable)
        #[arg(short, long = "source", value_name = "PATH")]
        sources: Vec<PathBuf>,
    },

    /// Copy assets from sources into the home store
    Import {
        /// Extra source root, scanned as-is (repeatable)
        #[arg(short, long = "source", value_name = "PATH")]
        sources: Vec<PathBuf>,

        /// Import every unsynced asset that is not ambiguous
        #[arg(long, conflicts_with_all = ["kind", "id"])]
        all: bool,

        /// Asset kind
        #[arg(value_enum, required_unless_present = "all")]
        kind: Option<KindArg>,

        /// Asset id, e.g. `git/commit`
        #[arg(required_unless_present = "all")]
        id: Option<String>,

        /// Source label or trailing copy path to import from (required for
        /// ambiguous assets)
        #[arg(long, value_name = "LABEL|PATH", conflicts_with = "all")]
        from: Option<String>,

        /// Replace an existing home copy
        #[arg(long)]
        overwrite: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Prompt,
    Skill,
}

impl From<KindArg> for AssetKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Prompt => AssetKind::Prompt,
            KindArg::Skill => AssetKind::Skill,
        }
    }
}
