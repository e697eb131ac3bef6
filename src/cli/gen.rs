// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use ruuid::{ErrorKind, RuuidError, Uuid, UuidGenerator};

use crate::CliError;

const MAX_COUNT: usize = 1_000_000;

pub(crate) struct GenCommand;

impl GenCommand {
    pub(crate) const NAME: &str = "gen";

    pub(crate) fn gen_command() -> clap::Command {
        clap::Command::new(Self::NAME)
            .alias("g")
            .about("Generate random UUIDs")
            .arg(
                clap::Arg::new("COUNT")
                    .long("count")
                    .short('n')
                    .value_parser(clap::value_parser!(usize))
                    .default_value("1")
                    .help("Number of UUIDs to generate, at most 1000000"),
            )
            .arg(
                clap::Arg::new("COMPACT")
                    .long("compact")
                    .short('c')
                    .action(clap::ArgAction::SetTrue)
                    .help("Print without dashes"),
            )
            .arg(
                clap::Arg::new("JSON")
                    .long("json")
                    .short('j')
                    .action(clap::ArgAction::SetTrue)
                    .help("Print as JSON string"),
            )
            .group(clap::ArgGroup::new("FORMAT").args(["COMPACT", "JSON"]))
    }

    pub(crate) fn handle(matches: &clap::ArgMatches) -> Result<(), CliError> {
        let stdout = std::io::stdout();
        Self::write_uuids(matches, &mut stdout.lock())
    }

    fn write_uuids<W: Write>(
        matches: &clap::ArgMatches,
        out: &mut W,
    ) -> Result<(), CliError> {
        let count = Self::get_count(matches)?;
        log::debug!("Generating {count} UUIDs");

        let mut generator: UuidGenerator = UuidGenerator::default();
        for _ in 0..count {
            writeln!(out, "{}", Self::format(&generator.generate(), matches)?)?;
        }
        Ok(())
    }

    fn get_count(matches: &clap::ArgMatches) -> Result<usize, CliError> {
        let count = matches.get_one::<usize>("COUNT").copied().unwrap_or(1);
        if count == 0 || count > MAX_COUNT {
            return Err(RuuidError::new(
                ErrorKind::InvalidArgument,
                format!(
                    "Count should be between 1 and {MAX_COUNT}, got {count}"
                ),
            )
            .into());
        }
        Ok(count)
    }

    fn format(
        uuid: &Uuid,
        matches: &clap::ArgMatches,
    ) -> Result<String, CliError> {
        if matches.get_flag("JSON") {
            Ok(String::from_utf8(uuid.marshal()?)?)
        } else if matches.get_flag("COMPACT") {
            Ok(uuid.to_compact_string())
        } else {
            Ok(uuid.to_canonical_string())
        }
    }
}
