// SPDX-License-Identifier: Apache-2.0

use ruuid::Uuid;
use serde::Serialize;

use crate::CliError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
struct UuidInfo {
    canonical: String,
    compact: String,
    version: u8,
    rfc4122_variant: bool,
}

impl From<&Uuid> for UuidInfo {
    fn from(uuid: &Uuid) -> Self {
        Self {
            canonical: uuid.to_canonical_string(),
            compact: uuid.to_compact_string(),
            version: uuid.version(),
            rfc4122_variant: uuid.is_rfc4122_variant(),
        }
    }
}

pub(crate) struct ParseCommand;

impl ParseCommand {
    pub(crate) const NAME: &str = "parse";

    pub(crate) fn gen_command() -> clap::Command {
        clap::Command::new(Self::NAME)
            .alias("p")
            .about("Parse UUID string and show its forms")
            .arg(
                clap::Arg::new("UUID")
                    .required(true)
                    .index(1)
                    .help("UUID string, dashes are optional"),
            )
            .arg(
                clap::Arg::new("STRICT")
                    .long("strict")
                    .short('s')
                    .action(clap::ArgAction::SetTrue)
                    .help("Only accept 32 hex digits without dashes"),
            )
    }

    pub(crate) fn handle(matches: &clap::ArgMatches) -> Result<(), CliError> {
        let uuid_str = matches
            .get_one::<String>("UUID")
            .ok_or(CliError::from("UUID argument is required"))?;

        let uuid = if matches.get_flag("STRICT") {
            Uuid::from_compact_str(uuid_str)?
        } else {
            Uuid::parse_str(uuid_str)?
        };
        if uuid.version() != 4 || !uuid.is_rfc4122_variant() {
            log::warn!("{uuid} is not a version 4 RFC 4122 UUID");
        }

        print!("{}", serde_yaml::to_string(&UuidInfo::from(&uuid))?);
        Ok(())
    }
}
