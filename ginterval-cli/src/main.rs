mod compare;
mod coords;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "ginterval";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Compare, measure and convert genomic intervals written as chrom:start-end (1-based, closed).")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase logging verbosity (-v info, -vv debug)"),
        )
        .subcommand(compare::cli::create_compare_cli())
        .subcommand(compare::cli::create_expand_cli())
        .subcommand(coords::cli::create_info_cli())
        .subcommand(coords::cli::create_convert_cli())
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn init_logger(verbosity: u8) {
    // RUST_LOG is parsed after the -v level, so it wins when set
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logger(matches.get_count("verbose"));

    match matches.subcommand() {
        //
        // COMPARE
        //
        Some((compare::cli::COMPARE_CMD, matches)) => {
            compare::handlers::run_compare(matches)?;
        }

        //
        // EXPAND
        //
        Some((compare::cli::EXPAND_CMD, matches)) => {
            compare::handlers::run_expand(matches)?;
        }

        //
        // INFO
        //
        Some((coords::cli::INFO_CMD, matches)) => {
            coords::handlers::run_info(matches)?;
        }

        //
        // ZERO-BASED CONVERSION
        //
        Some((coords::cli::CONVERT_CMD, matches)) => {
            coords::handlers::run_convert(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
