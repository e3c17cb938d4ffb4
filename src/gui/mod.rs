// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod dialog;

pub use app::run;
