use std::process;

use log::error;

use rasterguard::cli::build_cli;
use rasterguard::commands::{CommandFactory, RasterguardCommandFactory};
use rasterguard::utils::logger::Logger;

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let default_level = if matches.get_flag("verbose") { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let logger = match matches.get_one::<String>("log-file") {
        Some(path) => match Logger::new(path) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error initializing audit log: {}", e);
                process::exit(1);
            }
        },
        None => Logger::disabled(),
    };

    let factory = RasterguardCommandFactory::new();

    let command = match factory.create_command(&matches, &logger) {
        Ok(command) => command,
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match command.execute().await {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("Command execution error: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
