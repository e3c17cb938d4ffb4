// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything a user action can fail with.
///
/// Input and missing-resource variants are reported to the user and abort the
/// action before any file is touched. `Io` aborts the action mid-way; there
/// is no rollback since every write is a single whole-file overwrite.
#[derive(Error, Debug)]
pub enum AttendanceError {
    #[error("Please select a section first.")]
    NoSection,

    #[error("Please enter a section name.")]
    EmptySectionName,

    #[error("Invalid section name: {0:?}")]
    InvalidSectionName(String),

    #[error("Please enter a date first.")]
    EmptyDate,

    #[error("Please enter a valid date in the format MM-DD-YYYY (got {0:?}).")]
    InvalidDate(String),

    #[error("The date you entered is in the future: {0}")]
    FutureDate(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("There are no attendance reports for the section {0}.")]
    NoReports(String),

    #[error("Roster file for section {0} is missing.")]
    RosterMissing(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AttendanceError {
    /// Wrap an `io::Error` with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Bad input from the user; nothing was changed.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::NoSection
                | Self::EmptySectionName
                | Self::InvalidSectionName(_)
                | Self::EmptyDate
                | Self::InvalidDate(_)
                | Self::FutureDate(_)
        )
    }

    /// The section, roster or reports the action needs are not there.
    pub fn is_missing_resource(&self) -> bool {
        matches!(
            self,
            Self::SectionNotFound(_) | Self::NoReports(_) | Self::RosterMissing(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AttendanceError>;
