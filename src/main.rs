use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use spectrum_splits::cli::{Args, Commands};
use spectrum_splits::commands;
use spectrum_splits::config::Config;

fn setup_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over -v.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::resolve(args.config.as_deref())?;
    config.apply(&args.command.overrides());

    match args.command {
        Commands::MaskSplits {
            input_tree,
            output_tree,
            report,
            ..
        } => commands::mask_splits::run(
            config.masking_options(),
            &input_tree,
            &output_tree,
            report.as_deref(),
        ),
        Commands::MutationRatio {
            input_tree,
            threshold,
            prune_list,
        } => commands::mutation_ratio::run(&input_tree, threshold, &prune_list),
        Commands::PrintConfig => commands::print_config::run(&config),
    }
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
