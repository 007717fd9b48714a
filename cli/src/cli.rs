// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use launchdesk_client::ApiClient;
use launchdesk_core::APP_NAME;
use tracing_subscriber::EnvFilter;

use crate::cmd_edit::CmdEdit;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_launch::{CmdLaunchGuard, CmdLaunchList};
use crate::cmd_media::{CmdMediaDelete, CmdMediaList, CmdMediaPick, CmdMediaShow};
use crate::config::parse_config;
use crate::util::resolve_today;

/// Run the Launchdesk command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                tracing::error!(error = %e, "command failed");
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

    /// Date used as today for launch decisions, `DD.MM.YYYY`
    pub today: Option<String>,

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
            .about("Run landing-page launches from the terminal: media, sections and launch dates.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/launchdesk/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/launchdesk/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(
                arg!(--today <DATE> "Treat this date (DD.MM.YYYY) as today")
                    .global(true),
            )
            .subcommand(
                Command::new("media")
                    .alias("m")
                    .about("Manage uploaded media")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdMediaList::command())
                    .subcommand(CmdMediaDelete::command())
                    .subcommand(CmdMediaShow::command())
                    .subcommand(CmdMediaPick::command()),
            )
            .subcommand(
                Command::new("launch")
                    .alias("l")
                    .about("Inspect launches and their dates")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdLaunchGuard::command())
                    .subcommand(CmdLaunchList::command()),
            )
            .subcommand(CmdEdit::command())
            .subcommand(CmdGenerateCompletion::command())
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
            Some(("media", matches)) => match matches.subcommand() {
                Some((CmdMediaList::NAME, matches)) => MediaList(CmdMediaList::from(matches)),
                Some((CmdMediaDelete::NAME, matches)) => MediaDelete(CmdMediaDelete::from(matches)),
                Some((CmdMediaShow::NAME, matches)) => MediaShow(CmdMediaShow::from(matches)),
                Some((CmdMediaPick::NAME, matches)) => MediaPick(CmdMediaPick::from(matches)),
                _ => return Err("Unknown media command".into()),
            },
            Some(("launch", matches)) => match matches.subcommand() {
                Some((CmdLaunchGuard::NAME, matches)) => LaunchGuard(CmdLaunchGuard::from(matches)),
                Some((CmdLaunchList::NAME, matches)) => LaunchList(CmdLaunchList::from(matches)),
                _ => return Err("Unknown launch command".into()),
            },
            Some((CmdEdit::NAME, matches)) => Edit(CmdEdit::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            _ => return Err("No command given".into()),
        };

        let config = matches.get_one("config").cloned();
        let today = matches.get_one("today").cloned();
        Ok(Cli {
            config,
            today,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, self.today).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List uploaded media
    MediaList(CmdMediaList),

    /// Delete media objects
    MediaDelete(CmdMediaDelete),

    /// Show the preview kind and asset URL of a media object
    MediaShow(CmdMediaShow),

    /// Pick a media object interactively
    MediaPick(CmdMediaPick),

    /// Resolve where a launch link leads
    LaunchGuard(CmdLaunchGuard),

    /// List launches with their SEO settings
    LaunchList(CmdLaunchList),

    /// Edit a landing page section
    Edit(CmdEdit),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(
        self,
        config: Option<PathBuf>,
        today: Option<String>,
    ) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        if let GenerateCompletion(a) = self {
            return a.run();
        }

        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        if let MediaShow(a) = self {
            return a.run(&config);
        }

        let client = ApiClient::new(config.client_config())?;
        match self {
            MediaList(a) => a.run(&config, &client).await,
            MediaDelete(a) => a.run(&config, &client).await,
            MediaPick(a) => a.run(&client).await,
            LaunchGuard(a) => a.run(&client, resolve_today(today.as_deref())?).await,
            LaunchList(a) => a.run(&client, resolve_today(today.as_deref())?).await,
            Edit(a) => a.run(&client).await,
            MediaShow(_) | GenerateCompletion(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_generate_completion::Shell;
    use crate::util::OutputFormat;
    use launchdesk_core::{Bucket, SectionKind};

    #[test]
    fn test_parse_config() {
        let args = vec!["test", "-c", "/tmp/config.toml", "media", "list"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::MediaList(_)));
    }

    #[test]
    fn test_parse_global_args_after_subcommand() {
        let args = vec!["test", "launch", "guard", "7", "--today", "01.02.2030"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.today.as_deref(), Some("01.02.2030"));
        match cli.command {
            Commands::LaunchGuard(cmd) => assert_eq!(cmd.id, "7"),
            _ => panic!("Expected LaunchGuard command"),
        }
    }

    #[test]
    fn test_parse_requires_command() {
        assert!(Cli::try_parse_from(vec!["test"]).is_err());
    }

    #[test]
    fn test_parse_media_list() {
        let args = vec!["test", "media", "list", "--output-format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::MediaList(cmd) => assert_eq!(cmd.output_format, OutputFormat::Json),
            _ => panic!("Expected MediaList command"),
        }
    }

    #[test]
    fn test_parse_media_alias() {
        let cli = Cli::try_parse_from(vec!["test", "m", "rm", "a.png", "b.mp4"]).unwrap();
        match cli.command {
            Commands::MediaDelete(cmd) => assert_eq!(cmd.keys, vec!["a.png", "b.mp4"]),
            _ => panic!("Expected MediaDelete command"),
        }
    }

    #[test]
    fn test_parse_media_show() {
        let cli = Cli::try_parse_from(vec!["test", "media", "show", "promo.MP4"]).unwrap();
        match cli.command {
            Commands::MediaShow(cmd) => assert_eq!(cmd.key, "promo.MP4"),
            _ => panic!("Expected MediaShow command"),
        }
    }

    #[test]
    fn test_parse_media_pick() {
        let cli = Cli::try_parse_from(vec!["test", "media", "pick", "-s", "hero"]).unwrap();
        match cli.command {
            Commands::MediaPick(cmd) => assert_eq!(cmd.search, "hero"),
            _ => panic!("Expected MediaPick command"),
        }
    }

    #[test]
    fn test_parse_launch_list() {
        let args = vec!["test", "launch", "list", "--bucket", "past"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::LaunchList(cmd) => assert_eq!(cmd.bucket, Some(Bucket::Past)),
            _ => panic!("Expected LaunchList command"),
        }
    }

    #[test]
    fn test_parse_edit() {
        let cli = Cli::try_parse_from(vec!["test", "edit", "accordion"]).unwrap();
        match cli.command {
            Commands::Edit(cmd) => assert_eq!(cmd.kind, SectionKind::Accordion),
            _ => panic!("Expected Edit command"),
        }
    }

    #[test]
    fn test_parse_generate_completions() {
        let args = vec!["test", "generate-completion", "zsh"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::GenerateCompletion(cmd) => {
                assert_eq!(cmd.shell, Shell::Zsh);
            }
            _ => panic!("Expected GenerateCompletion command"),
        }
    }
}
