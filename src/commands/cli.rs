//! Command-line definition and settings overrides

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use log::debug;

use crate::config::Settings;
use crate::errors::BenchResult;

/// Build the clap command tree
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("chipbench")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Benchmark chip extraction from NITF imagery versus Cloud-Optimized GeoTIFF")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Settings file (defaults to ./chipbench.toml when present)")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Log file")
                .value_name("FILE")
                .default_value("chipbench.log")
                .global(true),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .help("Hide progress bars")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("bucket")
                .long("bucket")
                .help("Bucket holding the NITF files and COG conversions")
                .value_name("NAME")
                .global(true),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Directory for downloaded NITF files and the bounding-box file")
                .value_name("DIR")
                .global(true),
        )
        .arg(
            Arg::new("results-dir")
                .long("results-dir")
                .help("Directory for results JSON files")
                .value_name("DIR")
                .global(true),
        )
        .arg(
            Arg::new("plots-dir")
                .long("plots-dir")
                .help("Directory for plots")
                .value_name("DIR")
                .global(true),
        )
        .arg(
            Arg::new("variant")
                .long("variant")
                .help("Access profile to benchmark (repeatable)")
                .value_name("PROFILE")
                .action(ArgAction::Append)
                .global(true),
        )
        .subcommand(ClapCommand::new("download").about("Download the bucket's NITF files"))
        .subcommand(generation_args(
            ClapCommand::new("generate").about("Generate random chip bounding boxes for local NITF files"),
        ))
        .subcommand(run_args(
            ClapCommand::new("run").about("Time chip extraction from COG and NITF for each access profile"),
        ))
        .subcommand(ClapCommand::new("plot").about("Plot saved results"))
        .subcommand(run_args(generation_args(
            ClapCommand::new("all").about("Download, generate, run and plot in one go"),
        )))
}

fn generation_args(command: ClapCommand) -> ClapCommand {
    command
        .arg(
            Arg::new("divisor")
                .long("divisor")
                .help("Chip size divisor: chips are width/divisor x height/divisor pixels")
                .value_name("N")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("trials")
                .long("trials")
                .help("Bounding boxes per raster")
                .value_name("N")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for reproducible bounding boxes")
                .value_name("SEED")
                .value_parser(clap::value_parser!(u64)),
        )
}

fn run_args(command: ClapCommand) -> ClapCommand {
    command
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .help("URL prefix rasters are opened from instead of /vsis3/<bucket>/")
                .value_name("URL"),
        )
        .arg(
            Arg::new("save-chips")
                .long("save-chips")
                .help("Write every extracted chip as a grayscale PNG into this directory")
                .value_name("DIR"),
        )
}

/// Overwrite settings with the flags given on the command line
///
/// # Arguments
/// * `settings` - Settings loaded from file or defaults
/// * `args` - Matches of the selected subcommand
pub fn apply_overrides(settings: &mut Settings, args: &ArgMatches) -> BenchResult<()> {
    if let Some(bucket) = string_arg(args, "bucket") {
        settings.bucket = bucket;
    }
    if let Some(dir) = string_arg(args, "data-dir") {
        settings.data_dir = PathBuf::from(dir);
    }
    if let Some(dir) = string_arg(args, "results-dir") {
        settings.results_dir = PathBuf::from(dir);
    }
    if let Some(dir) = string_arg(args, "plots-dir") {
        settings.plots_dir = PathBuf::from(dir);
    }
    if let Ok(Some(variants)) = args.try_get_many::<String>("variant") {
        settings.variants = variants.cloned().collect();
    }
    if let Ok(Some(divisor)) = args.try_get_one::<usize>("divisor") {
        settings.divisor = *divisor;
    }
    if let Ok(Some(trials)) = args.try_get_one::<usize>("trials") {
        settings.trials = *trials;
    }
    if let Ok(Some(seed)) = args.try_get_one::<u64>("seed") {
        settings.seed = Some(*seed);
    }

    settings.validate()?;
    settings.selected_profiles()?;
    debug!("Effective settings: {:?}", settings);
    Ok(())
}

/// Value of an optional string argument; absent when the subcommand lacks it
pub fn string_arg(args: &ArgMatches, name: &str) -> Option<String> {
    args.try_get_one::<String>(name).ok().flatten().cloned()
}
