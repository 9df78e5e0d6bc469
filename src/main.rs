use std::path::Path;
use std::process;

use log::{error, info};

use chipbench::commands::{apply_overrides, build_cli, ChipbenchCommandFactory, CommandFactory};
use chipbench::config::Settings;
use chipbench::errors::BenchResult;
use chipbench::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, sub)) = matches.subcommand() else {
        eprintln!("Error: no command given");
        process::exit(2);
    };

    let log_file = sub
        .get_one::<String>("log-file")
        .map(String::as_str)
        .unwrap_or("chipbench.log");
    let default_filter = if sub.get_flag("verbose") { "debug" } else { "info" };
    if let Err(e) = Logger::init_global_logger(log_file, default_filter) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    info!("Starting '{}'", name);
    if let Err(e) = run(&matches) {
        error!("Command execution error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> BenchResult<()> {
    let (_, sub) = matches
        .subcommand()
        .ok_or_else(|| chipbench::errors::BenchError::GenericError("No command given".to_string()))?;

    let config_path = sub.get_one::<String>("config").map(Path::new);
    let mut settings = Settings::load(config_path)?;
    apply_overrides(&mut settings, sub)?;

    let factory = ChipbenchCommandFactory::new();
    let command = factory.create_command(matches, &settings)?;
    command.execute()
}
