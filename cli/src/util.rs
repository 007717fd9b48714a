// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Range;

use jiff::Zoned;
use jiff::civil::Date;
use launchdesk_core::LaunchDate;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Today in the local time zone, unless overridden with `DD.MM.YYYY`.
pub fn resolve_today(overridden: Option<&str>) -> Result<Date, String> {
    match overridden {
        Some(s) => LaunchDate::parse(s)
            .map(LaunchDate::date)
            .map_err(|e| format!("Invalid --today value: {e}")),
        None => Ok(Zoned::now().date()),
    }
}

/// Display width of the first `first_n_chars` characters of `s`.
pub fn unicode_width_of_slice(s: &str, first_n_chars: usize) -> usize {
    if first_n_chars == 0 || s.is_empty() {
        0
    } else if let Some((idx, ch)) = s.char_indices().nth(first_n_chars - 1) {
        let byte_idx = idx + ch.len_utf8();
        s.split_at(byte_idx).0.width()
    } else {
        s.width()
    }
}

/// Return the byte range of the character at index `c_idx` in `s`.
/// If out of bounds, returns None.
pub fn byte_range_of_char_at(s: &str, c_idx: usize) -> Option<Range<usize>> {
    s.char_indices()
        .nth(c_idx)
        .map(|(byte_start, c)| byte_start..byte_start + c.len_utf8())
}

/// Shortens `s` to at most `width` columns, marking the cut with `…`.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let w = g.width();
        if used + w + 1 > width {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push('…');
    out
}
