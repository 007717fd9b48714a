// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface and terminal editors of Launchdesk.

mod arg;
mod cli;
mod cmd_edit;
mod cmd_generate_completion;
mod cmd_launch;
mod cmd_media;
mod config;
mod launch_formatter;
mod media_formatter;
mod table;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
