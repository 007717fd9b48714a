// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use launchdesk_client::ObjectKey;
use launchdesk_core::{Config, Gallery, MediaMatch, MediaSource};

use crate::arg::{CommonArgs, MediaArgs};
use crate::media_formatter::MediaFormatter;
use crate::tui;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdMediaList {
    pub search: String,
    pub output_format: OutputFormat,
}

impl CmdMediaList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List uploaded media")
            .arg(MediaArgs::search())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            search: MediaArgs::get_search(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run<S: MediaSource + ?Sized>(
        self,
        config: &Config,
        source: &S,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(search = self.search, "listing media...");
        let mut gallery = load_gallery(config, source).await?;
        gallery.set_search(self.search);

        let rows = gallery.rows();
        if rows.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No media found".italic());
            return Ok(());
        }

        let formatter = MediaFormatter::new().with_output_format(self.output_format);
        print!("{}", formatter.format(&rows));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdMediaDelete {
    pub keys: Vec<String>,
}

impl CmdMediaDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete media, one request at a time; stops at the first failure")
            .arg(MediaArgs::keys())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            keys: MediaArgs::get_keys(matches),
        }
    }

    pub async fn run<S: MediaSource + ?Sized>(
        self,
        config: &Config,
        source: &S,
    ) -> Result<(), Box<dyn Error>> {
        let mut gallery = load_gallery(config, source).await?;
        let keys: Vec<ObjectKey> = self.keys.into_iter().map(ObjectKey::from).collect();
        if let Some(unknown) = keys
            .iter()
            .find(|key| !gallery.items().iter().any(|item| &item.key == *key))
        {
            return Err(format!("No media with key: {unknown}").into());
        }

        if let [key] = keys.as_slice() {
            tracing::debug!(%key, "deleting media...");
            gallery.delete_one(source, key).await?;
            println!("{} {key}", "Deleted".green());
            return Ok(());
        }

        tracing::debug!(count = keys.len(), "deleting media in bulk...");
        gallery.toggle_selection_mode();
        for key in &keys {
            if !gallery.is_selected(key) {
                gallery.toggle(key);
            }
        }

        let report = gallery.delete_selected(source).await;
        for key in &report.deleted {
            println!("{} {key}", "Deleted".green());
        }
        match (report.failed_at, gallery.notice()) {
            (Some(key), Some(notice)) => {
                let left = gallery.selected().len();
                Err(format!("{notice}: {key}, {left} media not deleted").into())
            }
            (None, Some(notice)) => Err(notice.message().into()),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdMediaShow {
    pub key: String,
    pub output_format: OutputFormat,
}

impl CmdMediaShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show how a media object is previewed and where it is served")
            .arg(MediaArgs::key())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            key: MediaArgs::get_key(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        let (kind, url) = Gallery::new(config.asset_base_url.clone()).preview(&self.key);
        match self.output_format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "key": self.key,
                    "kind": kind.to_string(),
                    "mime": kind.mime(),
                    "url": url,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Table => {
                println!("{} {}", "Key: ".bold(), self.key);
                println!("{} {}", "Kind:".bold(), kind);
                if let Some(mime) = kind.mime() {
                    println!("{} {}", "Mime:".bold(), mime);
                }
                println!("{} {}", "URL: ".bold(), url);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdMediaPick {
    pub search: String,
    pub matcher: MediaMatch,
}

impl CmdMediaPick {
    pub const NAME: &str = "pick";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Pick a media object interactively and print its key")
            .arg(MediaArgs::search())
            .arg(MediaArgs::matcher())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            search: MediaArgs::get_search(matches),
            matcher: MediaArgs::get_matcher(matches).unwrap_or_default(),
        }
    }

    pub async fn run<S: MediaSource + ?Sized>(self, source: &S) -> Result<(), Box<dyn Error>> {
        match tui::pick_media(source, self.matcher, self.search).await? {
            Some(key) => println!("{key}"),
            None => tracing::info!("media picker closed without a selection"),
        }
        Ok(())
    }
}

async fn load_gallery<S: MediaSource + ?Sized>(
    config: &Config,
    source: &S,
) -> Result<Gallery, Box<dyn Error>> {
    let mut gallery = Gallery::new(config.asset_base_url.clone());
    gallery.refresh(source).await;
    match gallery.notice() {
        Some(notice) => Err(notice.message().into()),
        None => Ok(gallery),
    }
}
