// SPDX-FileCopyrightText: 2026 The tavern authors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use chrono::Local;
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tavern_client::ApiClient;
use tracing_subscriber::EnvFilter;

use crate::cmd_event::{CmdEventDelete, CmdEventLike, CmdEventLiked, CmdEventList, CmdEventMine};
use crate::config::parse_config;

pub(crate) const APP_NAME: &str = "tavern";

/// Run the tavern command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Discover, filter and manage bar events.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // default to listing events
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/tavern/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/tavern/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdEventList::command())
            .subcommand(CmdEventLiked::command())
            .subcommand(CmdEventMine::command())
            .subcommand(CmdEventLike::command())
            .subcommand(CmdEventDelete::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdEventList::NAME, matches)) => Events(CmdEventList::from(matches)),
            Some((CmdEventLiked::NAME, matches)) => Liked(CmdEventLiked::from(matches)),
            Some((CmdEventMine::NAME, matches)) => Mine(CmdEventMine::from(matches)),
            Some((CmdEventLike::NAME, matches)) => Like(CmdEventLike::from(matches)),
            Some((CmdEventDelete::NAME, matches)) => Delete(CmdEventDelete::from(matches)),
            None => Events(CmdEventList::default()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = parse_config(self.config).await?;
        let client = ApiClient::new(config.api)?;
        let now = Local::now();

        self.command.run(&client, &now).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List events, optionally filtered
    Events(CmdEventList),

    /// List liked events
    Liked(CmdEventLiked),

    /// List events created by the user
    Mine(CmdEventMine),

    /// Like an event
    Like(CmdEventLike),

    /// Delete an owned event
    Delete(CmdEventDelete),
}

impl Commands {
    /// Run the command against the configured backend
    pub async fn run(
        self,
        client: &ApiClient,
        now: &chrono::DateTime<Local>,
    ) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Events(a) => a.run(client, now).await,
            Liked(a) => a.run(client, now).await,
            Mine(a) => a.run(client, now).await,
            Like(a) => a.run(client, now).await,
            Delete(a) => a.run(client, now).await,
        }
    }
}
