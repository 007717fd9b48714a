// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use launchdesk_client::{LaunchDates, LaunchRecord};

use crate::notice::Notice;
use crate::source::LaunchSource;

/// Message shown instead of redirecting to a finished launch.
pub const LAUNCH_ENDED: &str = "this launch has ended";

/// A calendar day written as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LaunchDate(Date);

impl LaunchDate {
    /// Parses a `DD.MM.YYYY` date. One-digit days and months are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not in that format or names a day that
    /// does not exist.
    pub fn parse(s: &str) -> Result<Self, LaunchDateError> {
        let format_err = || LaunchDateError::Format(s.to_string());

        let mut parts = s.trim().split('.');
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(format_err());
        };

        let digits = |p: &str, max_len: usize| {
            !p.is_empty() && p.len() <= max_len && p.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(day, 2) || !digits(month, 2) || year.len() != 4 || !digits(year, 4) {
            return Err(format_err());
        }

        let day: i8 = day.parse().map_err(|_| format_err())?;
        let month: i8 = month.parse().map_err(|_| format_err())?;
        let year: i16 = year.parse().map_err(|_| format_err())?;
        Date::new(year, month, day)
            .map(LaunchDate)
            .map_err(|e| LaunchDateError::Invalid(s.to_string(), e.to_string()))
    }

    /// The calendar date.
    #[must_use]
    pub const fn date(self) -> Date {
        self.0
    }
}

impl From<Date> for LaunchDate {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl FromStr for LaunchDate {
    type Err = LaunchDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LaunchDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%d.%m.%Y"))
    }
}

/// Error for a date that is not a valid `DD.MM.YYYY` day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchDateError {
    /// The text does not look like `DD.MM.YYYY`.
    Format(String),

    /// The text is well formed but names a day that does not exist.
    Invalid(String, String),
}

impl fmt::Display for LaunchDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchDateError::Format(s) => write!(f, "Invalid date '{s}', expected DD.MM.YYYY"),
            LaunchDateError::Invalid(s, reason) => write!(f, "Invalid date '{s}': {reason}"),
        }
    }
}

impl Error for LaunchDateError {}

/// Where a launch stands relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
    /// The launch has not started yet.
    Upcoming,

    /// The launch is running, both ends included.
    Ongoing,

    /// The launch is over.
    Finished,
}

impl fmt::Display for LaunchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchPhase::Upcoming => f.write_str("upcoming"),
            LaunchPhase::Ongoing => f.write_str("ongoing"),
            LaunchPhase::Finished => f.write_str("finished"),
        }
    }
}

/// Filter buckets of the launch listing.
///
/// Bucket boundaries differ from [`LaunchWindow::classify`]: a launch on its
/// first day is in both `Today` and `Ongoing`, and a launch on its last day is
/// in neither `Ongoing` nor `Past`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Bucket {
    /// Launches starting today.
    Today,

    /// Launches that started on or before today and end after today.
    Ongoing,

    /// Launches starting after today.
    Upcoming,

    /// Launches that ended before today.
    Past,
}

impl Bucket {
    /// Whether the window falls into this bucket on `today`.
    #[must_use]
    pub fn matches(self, window: &LaunchWindow, today: Date) -> bool {
        let (launch, end) = (window.launch.date(), window.end.date());
        match self {
            Bucket::Today => launch == today,
            Bucket::Ongoing => launch <= today && end > today,
            Bucket::Upcoming => launch > today,
            Bucket::Past => end < today,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Today => f.write_str("today"),
            Bucket::Ongoing => f.write_str("ongoing"),
            Bucket::Upcoming => f.write_str("upcoming"),
            Bucket::Past => f.write_str("past"),
        }
    }
}

/// First and last day of a launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchWindow {
    /// First day.
    pub launch: LaunchDate,

    /// Last day.
    pub end: LaunchDate,
}

impl LaunchWindow {
    /// Parses both dates of a window.
    ///
    /// # Errors
    ///
    /// Returns an error if either date is malformed.
    pub fn parse(launch: &str, end: &str) -> Result<Self, LaunchDateError> {
        Ok(Self {
            launch: LaunchDate::parse(launch)?,
            end: LaunchDate::parse(end)?,
        })
    }

    /// Classifies `today` against the window, both ends included.
    #[must_use]
    pub fn classify(&self, today: Date) -> LaunchPhase {
        if today < self.launch.date() {
            LaunchPhase::Upcoming
        } else if today <= self.end.date() {
            LaunchPhase::Ongoing
        } else {
            LaunchPhase::Finished
        }
    }
}

impl TryFrom<&LaunchDates> for LaunchWindow {
    type Error = LaunchDateError;

    fn try_from(dates: &LaunchDates) -> Result<Self, Self::Error> {
        Self::parse(&dates.launch_date, &dates.end_date)
    }
}

/// A launch with parsed dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    /// Launch identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Launch window.
    pub window: LaunchWindow,
}

impl TryFrom<LaunchRecord> for Launch {
    type Error = LaunchDateError;

    fn try_from(record: LaunchRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            window: LaunchWindow::parse(&record.launch_date, &record.end_date)?,
            id: record.id,
            name: record.launch_name,
        })
    }
}

/// Where the launch guard sends the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    /// The running launch page.
    Preview(String),

    /// The pre-launch teaser page.
    Teaser(String),

    /// No redirect; the launch is over.
    Ended,
}

impl Redirect {
    /// The redirect for a launch in the given phase.
    #[must_use]
    pub fn for_launch(launch_id: &str, phase: LaunchPhase) -> Self {
        match phase {
            LaunchPhase::Ongoing => Redirect::Preview(format!("/preview/{launch_id}")),
            LaunchPhase::Upcoming => Redirect::Teaser(format!("/fragman/{launch_id}")),
            LaunchPhase::Finished => Redirect::Ended,
        }
    }

    /// The target path, if there is one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Redirect::Preview(path) | Redirect::Teaser(path) => Some(path),
            Redirect::Ended => None,
        }
    }
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Redirect::Preview(path) | Redirect::Teaser(path) => f.write_str(path),
            Redirect::Ended => f.write_str(LAUNCH_ENDED),
        }
    }
}

/// Outcome of the single-launch guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The launch was found and classified.
    Redirect {
        /// Phase of the launch on the given day.
        phase: LaunchPhase,
        /// Where to send the visitor.
        redirect: Redirect,
    },

    /// The launch could not be loaded.
    Unavailable(Notice),
}

/// Decides where a launch link leads on a given day.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaunchGuard;

impl LaunchGuard {
    /// Fetches one launch and decides the redirect for `today`.
    ///
    /// Fetch failures and malformed dates end as [`GuardOutcome::Unavailable`].
    pub async fn resolve<S: LaunchSource + ?Sized>(
        source: &S,
        launch_id: &str,
        today: Date,
    ) -> GuardOutcome {
        let dates = match source.get_launch(launch_id).await {
            Ok(dates) => dates,
            Err(e) => {
                tracing::error!(launch_id, "failed to fetch launch: {e}");
                return GuardOutcome::Unavailable(Notice::FetchLaunchFailed);
            }
        };

        let window = match LaunchWindow::try_from(&dates) {
            Ok(window) => window,
            Err(e) => {
                tracing::error!(launch_id, "launch has malformed dates: {e}");
                return GuardOutcome::Unavailable(Notice::FetchLaunchFailed);
            }
        };

        let phase = window.classify(today);
        tracing::debug!(launch_id, %phase, "launch classified");
        GuardOutcome::Redirect {
            phase,
            redirect: Redirect::for_launch(launch_id, phase),
        }
    }
}
