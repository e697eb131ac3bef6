// SPDX-License-Identifier: Apache-2.0

mod error;
mod gen;
mod parse;

pub(crate) use self::error::CliError;
use self::{gen::GenCommand, parse::ParseCommand};

fn main() -> Result<(), CliError> {
    let mut cli_cmd = clap::Command::new("ruid")
        .about("Generate and inspect random UUIDs")
        .version(clap::crate_version!())
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            clap::Arg::new("quiet")
                .short('q')
                .action(clap::ArgAction::SetTrue)
                .help("Disable logging")
                .global(true),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .action(clap::ArgAction::Count)
                .help("Increase verbose level")
                .global(true),
        )
        .subcommand(GenCommand::gen_command())
        .subcommand(ParseCommand::gen_command());

    let matches = cli_cmd.get_matches_mut();

    let (log_groups, log_level) = match matches.get_count("verbose") {
        0 => (vec!["ruid", "ruuid"], log::LevelFilter::Warn),
        1 => (vec!["ruid", "ruuid"], log::LevelFilter::Info),
        2 => (vec!["ruid", "ruuid"], log::LevelFilter::Debug),
        _ => (vec![], log::LevelFilter::Trace),
    };

    if !matches.get_flag("quiet") {
        let mut log_builder = env_logger::Builder::new();
        if log_groups.is_empty() {
            log_builder.filter(None, log_level);
        } else {
            for log_group in log_groups {
                log_builder.filter(Some(log_group), log_level);
            }
        }
        log_builder.init();
    }

    log::info!("ruid version: {}", clap::crate_version!());

    if let Err(e) = call_subcommand(&matches) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    Ok(())
}

fn call_subcommand(matches: &clap::ArgMatches) -> Result<(), CliError> {
    if let Some(matches) = matches.subcommand_matches(GenCommand::NAME) {
        GenCommand::handle(matches)
    } else if let Some(matches) = matches.subcommand_matches(ParseCommand::NAME)
    {
        ParseCommand::handle(matches)
    } else {
        Err(CliError::from("Unknown command"))
    }
}
