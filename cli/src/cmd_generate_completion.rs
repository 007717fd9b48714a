// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use clap_complete::Shell as ClapShell;
use clap_complete_nushell::Nushell;

use crate::Cli;

#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,

    /// Directory to write the completion script into; stdout if unset
    pub out_dir: Option<PathBuf>,
}

/// Runs `$body` with `$generator` bound to the clap generator of `$shell`.
macro_rules! with_generator {
    ($shell:expr, $generator:ident => $body:expr) => {
        match $shell {
            Shell::Bash => {
                let $generator = ClapShell::Bash;
                $body
            }
            Shell::Elvish => {
                let $generator = ClapShell::Elvish;
                $body
            }
            Shell::Fish => {
                let $generator = ClapShell::Fish;
                $body
            }
            Shell::PowerShell => {
                let $generator = ClapShell::PowerShell;
                $body
            }
            Shell::Zsh => {
                let $generator = ClapShell::Zsh;
                $body
            }
            Shell::Nushell => {
                let $generator = Nushell;
                $body
            }
        }
    };
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell generator to use")
                    .value_parser(value_parser!(Shell)),
            )
            .arg(
                arg!(--"out-dir" <DIR> "Write the script into this directory")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::DirPath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches
                .get_one::<Shell>("shell")
                .copied()
                .unwrap_or(Shell::Bash),
            out_dir: matches.get_one("out-dir").cloned(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        match &self.out_dir {
            Some(dir) => {
                let path = with_generator!(self.shell, g => {
                    clap_complete::generate_to(g, &mut cmd, &name, dir)
                })?;
                tracing::info!(path = %path.display(), "completion script written");
            }
            None => self.generate(&mut io::stdout()),
        }
        Ok(())
    }

    pub fn generate(&self, buf: &mut impl io::Write) {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        with_generator!(self.shell, g => clap_complete::generate(g, &mut cmd, name, buf));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}
