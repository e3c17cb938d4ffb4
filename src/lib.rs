// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod absences;
pub mod confirm;
pub mod csv;
pub mod file;
pub mod frequency;
pub mod import;
pub mod roster;
pub mod session;
pub mod suggest;
pub mod workspace;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use error::{AttendanceError, Result};
pub use workspace::Workspace;
