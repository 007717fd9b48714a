// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use launchdesk_core::MediaMatch;

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MediaArgs;

impl MediaArgs {
    pub fn search() -> Arg {
        arg!(-s --search <TERM> "Only show media whose key contains the term")
    }

    pub fn get_search(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("search")
            .cloned()
            .unwrap_or_default()
    }

    pub fn matcher() -> Arg {
        arg!(--"match" <RULE> "What the search term is matched against")
            .value_parser(value_parser!(MediaMatch))
    }

    pub fn get_matcher(matches: &ArgMatches) -> Option<MediaMatch> {
        matches.get_one("match").copied()
    }

    pub fn key() -> Arg {
        arg!(key: <KEY> "Storage key of the media object")
    }

    pub fn get_key(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("key")
            .cloned()
            .unwrap_or_default()
    }

    pub fn keys() -> Arg {
        arg!(key: <KEY> "Storage keys of the media objects, deleted in the given order")
            .num_args(1..)
    }

    pub fn get_keys(matches: &ArgMatches) -> Vec<String> {
        matches
            .get_many::<String>("key")
            .map(|keys| keys.cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use clap::Command;

    use super::*;

    #[test]
    fn test_media_args_defaults() {
        let cmd = Command::new("test")
            .arg(MediaArgs::search())
            .arg(MediaArgs::matcher())
            .arg(CommonArgs::output_format());

        let matches = cmd.try_get_matches_from(["test"]).unwrap();
        assert_eq!(MediaArgs::get_search(&matches), "");
        assert_eq!(MediaArgs::get_matcher(&matches), None);
        assert_eq!(CommonArgs::get_output_format(&matches), OutputFormat::Table);
    }

    #[test]
    fn test_media_args_values() {
        let cmd = Command::new("test")
            .arg(MediaArgs::search())
            .arg(MediaArgs::matcher())
            .arg(CommonArgs::output_format());

        let matches = cmd
            .try_get_matches_from([
                "test",
                "--search",
                "hero",
                "--match",
                "key-or-launch-name",
                "--output-format",
                "json",
            ])
            .unwrap();
        assert_eq!(MediaArgs::get_search(&matches), "hero");
        assert_eq!(
            MediaArgs::get_matcher(&matches),
            Some(MediaMatch::KeyOrLaunchName)
        );
        assert_eq!(CommonArgs::get_output_format(&matches), OutputFormat::Json);
    }

    #[test]
    fn test_keys_keep_order() {
        let cmd = Command::new("test").arg(MediaArgs::keys());
        let matches = cmd
            .try_get_matches_from(["test", "b.png", "a.png"])
            .unwrap();
        assert_eq!(MediaArgs::get_keys(&matches), vec!["b.png", "a.png"]);
    }
}
