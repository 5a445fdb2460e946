//! Command-line interface definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Builds the `rasterguard` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("rasterguard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check GeoTIFF, PNG and JPEG files before upload")
        .arg(
            Arg::new("files")
                .help("Files to validate")
                .value_name("FILES")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("mime")
                .long("mime")
                .help("Declared MIME type for every file (guessed from the extension by default)")
                .value_name("TYPE")
                .required(false),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Also verify PNG and JPEG signatures")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("locale")
                .long("locale")
                .help("Language of rejection messages (en, zh-CN)")
                .value_name("LOCALE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write an audit line per file to this log")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("inspect")
                .short('i')
                .long("inspect")
                .help("Print header bytes and detected byte order instead of validating")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
