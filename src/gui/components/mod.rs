// src/gui/components/mod.rs
pub mod attendance_list;
pub mod frequency_table;
pub mod section_panel;
pub mod suggestions;
