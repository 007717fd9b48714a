// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use jiff::civil::Date;
use launchdesk_core::{
    Bucket, GuardOutcome, LAUNCH_ENDED, LaunchBrowser, LaunchGuard, LaunchSource, Redirect,
};

use crate::arg::CommonArgs;
use crate::launch_formatter::LaunchFormatter;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdLaunchGuard {
    pub id: String,
    pub output_format: OutputFormat,
}

impl CmdLaunchGuard {
    pub const NAME: &str = "guard";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Decide where a launch link leads today")
            .arg(arg!(id: <ID> "Identifier of the launch"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: matches.get_one::<String>("id").cloned().unwrap_or_default(),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run<S: LaunchSource + ?Sized>(
        self,
        source: &S,
        today: Date,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(id = self.id, %today, "resolving launch guard...");
        let (phase, redirect) = match LaunchGuard::resolve(source, &self.id, today).await {
            GuardOutcome::Redirect { phase, redirect } => (phase, redirect),
            GuardOutcome::Unavailable(notice) => return Err(notice.into()),
        };

        match self.output_format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "id": self.id,
                    "phase": phase.to_string(),
                    "redirect": redirect.path(),
                    "message": matches!(redirect, Redirect::Ended).then_some(LAUNCH_ENDED),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Table => match redirect {
                Redirect::Ended => println!("{}", LAUNCH_ENDED.yellow()),
                redirect => println!("{} {}", format!("{phase}:").green(), redirect),
            },
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdLaunchList {
    pub bucket: Option<Bucket>,
    pub query: String,
    pub output_format: OutputFormat,
}

impl CmdLaunchList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List launches with their SEO titles")
            .arg(
                arg!(-b --bucket <BUCKET> "Only show launches in this bucket")
                    .value_parser(value_parser!(Bucket)),
            )
            .arg(arg!(-q --query <QUERY> "Search SEO keywords and titles"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            bucket: matches.get_one("bucket").copied(),
            query: matches.get_one::<String>("query").cloned().unwrap_or_default(),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run<S: LaunchSource + ?Sized>(
        self,
        source: &S,
        today: Date,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(bucket = ?self.bucket, query = self.query, "listing launches...");
        let mut browser = LaunchBrowser::load(source).await?;
        if let Some(bucket) = self.bucket {
            browser.select_bucket(bucket, today);
        }
        browser.search(&self.query, today);

        let cards = browser.cards();
        if cards.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No launches found".italic());
            return Ok(());
        }

        let formatter = LaunchFormatter::new(today).with_output_format(self.output_format);
        print!("{}", formatter.format(&cards));
        Ok(())
    }
}
