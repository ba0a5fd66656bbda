use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Overrides;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read settings from this TOML file instead of the per-user config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find positions whose mutations split the tree and mask them until none remain
    MaskSplits {
        /// Input mutation-annotated tree (.pb or .pb.gz)
        #[arg(long, default_value = "public-latest.all.masked.pb.gz")]
        input_tree: PathBuf,

        /// Output tree; gzip-compressed when the name ends in .gz
        #[arg(long, default_value = "masked_sites.pb.gz")]
        output_tree: PathBuf,

        /// Minimum mutations required on both sides of a split (default: 500)
        #[arg(long)]
        min_total: Option<u64>,

        /// Minimum occurrences for a position to be scanned (default: 50)
        #[arg(long)]
        min_count: Option<u64>,

        /// Statistic a split must exceed to be masked; 0 only reports (default: 5000)
        #[arg(long)]
        mask_chi: Option<f64>,

        /// Positions evaluated at the same time (default: 100)
        #[arg(long)]
        nthreads: Option<usize>,

        /// Use max(10, 75th percentile of position counts) as the minimum count
        #[arg(long)]
        derive_min_count: bool,

        /// Stop after this many rounds; 0 runs to convergence
        #[arg(long)]
        max_rounds: Option<usize>,

        /// Write a TSV of every evaluated position per round
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Report subtrees with an unusually high mutation to sample ratio
    MutationRatio {
        /// Input mutation-annotated tree (.pb or .pb.gz)
        #[arg(long)]
        input_tree: PathBuf,

        /// Ratio at which a subtree is flagged; 0 derives mean + 2 sd
        #[arg(long, default_value = "0")]
        threshold: f64,

        /// File receiving the samples under every flagged subtree
        #[arg(long, default_value = "to_prune.txt")]
        prune_list: PathBuf,
    },

    /// Print the effective settings as TOML
    PrintConfig,
}

impl Commands {
    /// Masking settings given on the command line.
    pub fn overrides(&self) -> Overrides {
        match self {
            Commands::MaskSplits {
                min_total,
                min_count,
                mask_chi,
                nthreads,
                derive_min_count,
                max_rounds,
                ..
            } => Overrides {
                min_total: *min_total,
                min_count: *min_count,
                mask_chi: *mask_chi,
                nthreads: *nthreads,
                derive_min_count: *derive_min_count,
                max_rounds: *max_rounds,
            },
            _ => Overrides::default(),
        }
    }
}
