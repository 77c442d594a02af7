//! Command line interface to the plycheck harness.
//!
//! Reads a dump record from stdin or a file, searches the reconstructed tree
//! and reports whether the search agrees with the record's oracle move.
//! Exits 0 on agreement and 1 otherwise, including on a malformed record.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use log::debug;

use plycheck_engine::error;
use plycheck_engine::{Algorithm, Comparison, Depth, Record};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search depth in plies. Missing, negative or non-integer means the full tree.
    #[arg(allow_negative_numbers = true)]
    depth: Option<String>,

    /// Search algorithm: minimax, negamax, alpha-beta or negascout
    #[arg(short, long, default_value_t = Algorithm::NegaScout)]
    algorithm: Algorithm,

    /// Read the record from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print the reconstructed tree
    #[arg(long)]
    show_tree: bool,

    /// Print every root move with its score
    #[arg(long)]
    scores: bool,

    /// Print search statistics
    #[arg(long)]
    stats: bool,

    /// Increase logging, -v for debug and -vv for trace
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn search_depth(&self) -> Depth {
        self.depth.as_deref().map_or(Depth::Full, Depth::from_arg)
    }
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format_timestamp(None)
    .target(env_logger::Target::Stderr)
    .init();
}

fn read_input(input: Option<&PathBuf>) -> error::Result<String> {
    let text = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    Ok(text)
}

fn run(args: &Args) -> error::Result<Comparison> {
    let depth = args.search_depth();
    debug!("depth {}, algorithm {}", depth, args.algorithm);

    let text = read_input(args.input.as_ref())?;
    let record = Record::parse(&text)?;
    let tree = record.tree()?;

    if args.show_tree {
        print!("{}", tree);
    }

    let comparison = record.check(&tree, depth, args.algorithm);

    if args.scores {
        for (move_, score) in &comparison.result.root_scores {
            println!("{:>8} {}", score.to_string(), move_);
        }
    }
    if args.stats {
        print!("{}", comparison.result);
    }

    Ok(comparison)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let outcome = run(&args);
    match &outcome {
        Ok(comparison) => print!("{}", comparison),
        Err(err) => eprintln!("plycheck: {}", err),
    }
    process::exit(exit_code(&outcome));
}

/// 0 only when the search agrees with the oracle.
fn exit_code(outcome: &error::Result<Comparison>) -> i32 {
    match outcome {
        Ok(comparison) => comparison.exit_code(),
        Err(_) => 1,
    }
}
