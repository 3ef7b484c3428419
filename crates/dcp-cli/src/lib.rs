//! DCP command line
//!
//! - `dcp generate --bundle <file>`: generate a policy from an assessment bundle
//! - `dcp group --bundle <file>`: show the step-2 data-type grouping

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod bundle;
pub mod commands;

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub use bundle::{Bundle, BundleOrganization};
pub use commands::{generate, group, GenerateArgs};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn bundle_arg() -> Arg {
    Arg::new("bundle")
        .long("bundle")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Assessment bundle (JSON)")
}

/// Command definition
#[must_use]
pub fn cli() -> Command {
    Command::new("dcp")
        .version(VERSION)
        .about("Generate data classification policies from assessment answers")
        .subcommand_required(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate the policy document")
                .arg(bundle_arg())
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("Configuration file (TOML)"),
                )
                .arg(
                    Arg::new("docx")
                        .long("docx")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write the policy as DOCX to this path"),
                )
                .arg(
                    Arg::new("preview")
                        .long("preview")
                        .action(ArgAction::SetTrue)
                        .help("Print the markdown preview"),
                )
                .arg(
                    Arg::new("offline")
                        .long("offline")
                        .action(ArgAction::SetTrue)
                        .help("Do not call the text generation service"),
                ),
        )
        .subcommand(
            Command::new("group")
                .about("Print step-2 data types grouped by risk profile")
                .arg(bundle_arg()),
        )
}

/// Options of `dcp generate` from parsed arguments
#[must_use]
pub fn generate_args(matches: &clap::ArgMatches) -> GenerateArgs {
    GenerateArgs {
        bundle: matches
            .get_one::<PathBuf>("bundle")
            .cloned()
            .unwrap_or_default(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        docx: matches.get_one::<PathBuf>("docx").cloned(),
        preview: matches.get_flag("preview"),
        offline: matches.get_flag("offline"),
    }
}

/// Install the global subscriber
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Logs go to stderr so
/// stdout carries only command output.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
