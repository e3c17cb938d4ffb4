// src/core/mod.rs

pub mod date;
pub mod html;
pub mod names;
pub mod sanitize;

pub use date::AttendanceDate;
