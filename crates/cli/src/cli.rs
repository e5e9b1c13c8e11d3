use crate::commands::Commands;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Arguments common to every generator: exactly one configuration file
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Generator configuration file (YAML)
    #[arg(value_name = "FILE_CONF")]
    pub config: PathBuf,
}

impl Cli {
    /// Parse the process arguments for `command`
    pub fn try_parse_for(command: Commands) -> Result<Self, clap::Error> {
        Self::try_parse_for_from(command, std::env::args_os())
    }

    /// Parse explicit arguments for `command`
    pub fn try_parse_for_from<I, T>(command: Commands, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command()
            .name(command.bin_name())
            .about(command.about())
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }
}
