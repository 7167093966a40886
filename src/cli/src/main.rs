#![warn(clippy::pedantic)]

mod config;
mod net;
mod timer;

use std::{io, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::OptionExt;
use config::Config;
use cubelab_core::{
    Algorithm, Cube, NotationError,
    catalog::{self, Category},
    create_solved_cube, parse, parse_strict, run_algorithm,
    scramble::generate_scramble,
};
use env_logger::TimestampPrecision;
use fastrand::Rng;
use itertools::Itertools;
use log::{LevelFilter, debug, warn};
use net::{NetStyle, render_net};
use owo_colors::OwoColorize;

/// Simulate, invert and practice 3x3x3 cube algorithms
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Reject notation that isn't part of the move grammar instead of
    /// ignoring it
    #[arg(long, global = true)]
    strict: bool,

    /// The configuration file to use, in TOML format
    #[arg(long, short = 'c', global = true, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Draw stickers as letters
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an algorithm and draw the result
    Apply {
        /// The moves to apply, e.g. "(R U R') U'"
        algorithm: String,
        /// Moves that set up the starting state, applied to a solved cube first
        #[arg(long)]
        on: Option<String>,
    },
    /// Print the inverse of an algorithm
    Invert {
        /// The moves to invert
        algorithm: String,
    },
    /// Show a catalog formula together with the case it solves
    Case {
        /// The formula identifier, e.g. `oll-sune`
        id: String,
    },
    /// List the catalog
    Catalog {
        /// Only list one category
        #[arg(long)]
        category: Option<CategoryArg>,
    },
    /// Generate a random scramble
    Scramble {
        /// Number of moves, defaults to the configured length
        #[arg(long, short = 'n')]
        length: Option<usize>,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Practice solves with a line driven timer
    Timer {
        /// Number of moves per scramble, defaults to the configured length
        #[arg(long, short = 'n')]
        length: Option<usize>,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum CategoryArg {
    Lbl,
    Oll,
    Pll,
}

impl From<CategoryArg> for Category {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Lbl => Category::LblBeginner,
            CategoryArg::Oll => Category::CfopOll,
            CategoryArg::Pll => Category::CfopPll,
        }
    }
}

fn read_algorithm(text: &str, strict: bool) -> Result<Algorithm, NotationError> {
    if strict {
        return parse_strict(text);
    }

    let alg = parse(text);
    let ignored = alg.iter().filter(|token| token.turn().is_none()).join(" ");
    if !ignored.is_empty() {
        warn!("Ignoring unrecognized moves: {ignored}");
    }
    Ok(alg)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = Config::load(cli.config.as_deref())?;
    debug!("Using {config:?}");

    let style = NetStyle {
        color: config.color && !cli.no_color,
        sticker: config.sticker.clone(),
    };

    match cli.command {
        Commands::Apply { algorithm, on } => {
            let start = match on {
                Some(setup) => {
                    let setup = read_algorithm(&setup, cli.strict)?;
                    run_algorithm(&create_solved_cube(), &setup)
                }
                None => create_solved_cube(),
            };
            let alg = read_algorithm(&algorithm, cli.strict)?;
            let cube = run_algorithm(&start, &alg);

            println!("{alg}");
            print!("{}", render_net(&cube, &style));
            if cube.is_solved() {
                println!("{}", "Solved".green());
            }
        }
        Commands::Invert { algorithm } => {
            println!("{}", read_algorithm(&algorithm, cli.strict)?.inverse());
        }
        Commands::Case { id } => {
            let formula = catalog::formula(&id).ok_or_eyre(format!(
                "No formula named `{id}`, choose one of: {}",
                catalog::formulas().map(|(id, _)| id).join(", ")
            ))?;

            println!("{} ({})", formula.name.bold(), formula.category);
            println!("{}", formula.description);
            println!("Algorithm: {}", formula.tokens());
            println!("Setup:     {}", formula.tokens().inverse());
            print!("{}", render_net(&formula.case_state(), &style));
        }
        Commands::Catalog { category } => {
            let category = category.map(Category::from);
            for current in catalog::categories() {
                if category.is_some_and(|wanted| wanted != current) {
                    continue;
                }

                println!("{}", current.bold());
                for (id, formula) in catalog::formulas().filter(|(_, f)| f.category == current) {
                    println!("  {id:<16} {:<14} {}", formula.name, formula.algorithm);
                }
            }
        }
        Commands::Scramble { length, seed } => {
            let mut rng = seed.map_or_else(Rng::new, Rng::with_seed);
            let scramble =
                generate_scramble(length.unwrap_or(config.scramble_length), &mut rng);
            let cube: Cube = run_algorithm(&create_solved_cube(), &scramble);

            println!("{scramble}");
            print!("{}", render_net(&cube, &style));
        }
        Commands::Timer { length } => {
            let session = timer::run_timer(
                &mut io::stdin().lock(),
                &mut io::stdout(),
                &mut Rng::new(),
                length.unwrap_or(config.scramble_length),
                Some(&style),
            )?;
            debug!("Session ended after {} solves", session.solves().len());
        }
    }

    Ok(())
}
