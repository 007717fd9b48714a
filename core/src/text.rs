// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Text fields with a hard character cap.

/// Limit of an accordion item subtitle.
pub const ACCORDION_SUBTITLE: usize = 200;

/// Limit of the text on a left or right side card.
pub const SIDE_CARD_TEXT: usize = 325;

/// Limit of a full-width text block.
pub const FULL_TEXT: usize = 450;

/// Message shown while the last input exceeded the limit.
pub const LIMIT_EXCEEDED: &str = "character limit exceeded";

/// A text field that accepts at most `limit` characters.
///
/// Input over the limit is not rejected: it is cut down to the limit and the
/// field keeps an error message until the next input that fits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedText {
    limit: usize,
    value: String,
    count: usize,
    exceeded: bool,
}

impl BoundedText {
    /// Creates an empty field with the given limit.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            limit,
            value: String::new(),
            count: 0,
            exceeded: false,
        }
    }

    /// Creates a field holding an initial value, clamped like any other input.
    #[must_use]
    pub fn with_value(limit: usize, value: &str) -> Self {
        let mut field = Self::new(limit);
        field.input(value);
        field
    }

    /// Applies a new input and returns the value to forward to the owner.
    pub fn input(&mut self, text: &str) -> String {
        let (kept, exceeded) = clamp(text, self.limit);
        self.exceeded = exceeded;
        self.count = if exceeded {
            self.limit
        } else {
            text.chars().count()
        };
        self.value = kept.to_string();
        self.value.clone()
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The number of characters counted for the current value.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// The character limit.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// The error message, if the last input was over the limit.
    #[must_use]
    pub const fn error(&self) -> Option<&'static str> {
        if self.exceeded {
            Some(LIMIT_EXCEEDED)
        } else {
            None
        }
    }

    /// Counter text such as `12/200`.
    #[must_use]
    pub fn counter(&self) -> String {
        format!("{}/{}", self.count, self.limit)
    }
}

/// Cuts `text` down to at most `limit` characters.
///
/// Returns the kept prefix and whether anything was cut.
#[must_use]
pub fn clamp(text: &str, limit: usize) -> (&str, bool) {
    match text.char_indices().nth(limit) {
        Some((i, _)) => (text.split_at(i).0, true),
        None => (text, false),
    }
}
