mod generator;
mod inspect;
mod stats;
mod throughput;

use anyhow::Result;
use calo_core::channel::Detector;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(author, version, about = "Decode calorimeter channel ids")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode ids given on the command line
    Decode {
        #[arg(short, long)]
        detector: Detector,
        /// Ids in decimal, 0x hex or 0b binary
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Decode every id in a binary (.ids/.bin) or text file
    Dump {
        #[arg(short, long)]
        detector: Detector,
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print field bit ranges of one or all layouts
    Layout {
        #[arg(short, long)]
        detector: Option<Detector>,
    },
    /// Print the ECAL (layer, slice) material table
    Materials,
    /// Write random ids to a file
    Gen {
        #[arg(short, long, default_value = "sample.ids")]
        output: PathBuf,
        #[arg(short, long, default_value_t = 1024)]
        count: usize,
        #[arg(short, long, default_value_t = 12345)]
        seed: u64,
        /// Keep reserved bits of this detector clear
        #[arg(short, long)]
        detector: Option<Detector>,
    },
    /// Measure parallel decode throughput
    Bench {
        #[arg(short, long)]
        detector: Detector,
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long, default_value_t = 10_000_000)]
        count: usize,
        #[arg(short, long, default_value_t = 4096)]
        batch: usize,
        #[arg(short, long, default_value_t = 12345)]
        seed: u64,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Decode { detector, ids } => {
            inspect::decode_ids(detector, &ids)?;
        }
        Commands::Dump {
            detector,
            input,
            limit,
        } => {
            inspect::dump_file(detector, &input, limit)?;
        }
        Commands::Layout { detector } => match detector {
            Some(detector) => inspect::print_layout(detector),
            None => Detector::ALL.into_iter().for_each(inspect::print_layout),
        },
        Commands::Materials => inspect::print_materials(),
        Commands::Gen {
            output,
            count,
            seed,
            detector,
        } => {
            generator::generate_ids(&output, count, seed, detector)?;
        }
        Commands::Bench {
            detector,
            input,
            count,
            batch,
            seed,
        } => {
            throughput::run_benchmark(detector, input.as_deref(), count, batch, seed)?;
        }
    }
    Ok(())
}
