// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Section editing opens the TUI directly; the saved section is printed as JSON.

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use launchdesk_core::{MediaMatch, MediaSource, Section, SectionKind};
use tokio::fs;

use crate::arg::MediaArgs;
use crate::tui;

#[derive(Debug, Clone)]
pub struct CmdEdit {
    pub kind: SectionKind,
    pub from: Option<PathBuf>,
    pub output: Option<PathBuf>,

    /// Overrides the section's own media match rule
    pub matcher: Option<MediaMatch>,
}

impl CmdEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit a landing page section using TUI")
            .arg(
                arg!(kind: <SECTION> "Kind of the section")
                    .value_parser(value_parser!(SectionKind)),
            )
            .arg(
                arg!(--from <FILE> "Start from a section saved as JSON")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-o --output <FILE> "Write the saved section to a file instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(MediaArgs::matcher())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            kind: matches
                .get_one("kind")
                .copied()
                .unwrap_or(SectionKind::Header),
            from: matches.get_one("from").cloned(),
            output: matches.get_one("output").cloned(),
            matcher: MediaArgs::get_matcher(matches),
        }
    }

    /// The match rule of the media picker for this section.
    pub fn media_match(&self) -> MediaMatch {
        self.matcher.unwrap_or_else(|| self.kind.default_match())
    }

    pub async fn run<S: MediaSource + ?Sized>(self, source: &S) -> Result<(), Box<dyn Error>> {
        let section = match &self.from {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading section...");
                let json = fs::read_to_string(path)
                    .await
                    .map_err(|e| format!("Failed to read section at {}: {e}", path.display()))?;
                Section::from_json(self.kind, &json)?
            }
            None => Section::blank(self.kind),
        };

        let matcher = self.media_match();
        let Some(section) = tui::edit_section(source, section, matcher).await? else {
            println!("{}", "Changes discarded".italic());
            return Ok(());
        };

        let json = section.to_json()?;
        match &self.output {
            Some(path) => {
                fs::write(path, json + "\n").await?;
                tracing::info!(path = %path.display(), "section saved");
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use launchdesk_client::MediaObject;
    use launchdesk_core::MediaPicker;

    use super::*;

    #[test]
    fn test_parse_edit() {
        let cmd = Command::new("test").subcommand(CmdEdit::command());
        let matches = cmd
            .try_get_matches_from(["test", "edit", "reels", "--from", "reels.json"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("edit").unwrap();
        let parsed = CmdEdit::from(sub_matches);
        assert_eq!(parsed.kind, SectionKind::Reels);
        assert_eq!(parsed.from, Some(PathBuf::from("reels.json")));
        assert_eq!(parsed.output, None);
        assert_eq!(parsed.matcher, None);
        assert_eq!(parsed.media_match(), MediaMatch::KeyOrLaunchName);
    }

    #[test]
    fn test_edit_header_finds_media_by_launch_name() {
        let cmd = Command::new("test").subcommand(CmdEdit::command());
        let matches = cmd.try_get_matches_from(["test", "edit", "header"]).unwrap();
        let parsed = CmdEdit::from(matches.subcommand_matches("edit").unwrap());

        let mut picker = MediaPicker::new(parsed.media_match());
        picker.apply_load(Ok(vec![
            MediaObject {
                key: "hero.png".into(),
                last_modified: None,
                launch_name: Some("Spring Campaign".to_string()),
            },
            MediaObject {
                key: "logo.svg".into(),
                last_modified: None,
                launch_name: None,
            },
        ]));
        picker.set_search("spring");

        let keys: Vec<_> = picker.visible().into_iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["hero.png"]);
    }

    #[test]
    fn test_edit_match_flag_overrides_section_rule() {
        let cmd = Command::new("test").subcommand(CmdEdit::command());
        let matches = cmd
            .try_get_matches_from(["test", "edit", "header", "--match", "key"])
            .unwrap();
        let parsed = CmdEdit::from(matches.subcommand_matches("edit").unwrap());
        assert_eq!(parsed.media_match(), MediaMatch::Key);

        let cmd = Command::new("test").subcommand(CmdEdit::command());
        let matches = cmd.try_get_matches_from(["test", "edit", "accordion"]).unwrap();
        let parsed = CmdEdit::from(matches.subcommand_matches("edit").unwrap());
        assert_eq!(parsed.media_match(), MediaMatch::Key);
    }

    #[test]
    fn test_parse_edit_kebab_case_kind() {
        let cmd = Command::new("test").subcommand(CmdEdit::command());
        let matches = cmd
            .try_get_matches_from(["test", "edit", "left-text-card", "-o", "out.json"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("edit").unwrap();
        let parsed = CmdEdit::from(sub_matches);
        assert_eq!(parsed.kind, SectionKind::LeftTextCard);
        assert_eq!(parsed.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_parse_edit_requires_kind() {
        let cmd = Command::new("test").subcommand(CmdEdit::command());
        assert!(cmd.try_get_matches_from(["test", "edit"]).is_err());
    }
}
