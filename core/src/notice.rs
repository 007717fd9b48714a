// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// A user-facing message raised by a component after a failed operation.
///
/// Notices are deliberately generic: the underlying error is logged, the user
/// only learns which operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The media list could not be loaded.
    FetchMediaFailed,

    /// The launch data could not be loaded.
    FetchLaunchFailed,

    /// A media object could not be deleted.
    DeleteFailed,

    /// A bulk delete was requested with nothing selected.
    NothingSelected,
}

impl Notice {
    /// The message shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Notice::FetchMediaFailed => "could not fetch media list",
            Notice::FetchLaunchFailed => "could not fetch launch data",
            Notice::DeleteFailed => "error deleting file",
            Notice::NothingSelected => "select media to delete",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Notice {}
