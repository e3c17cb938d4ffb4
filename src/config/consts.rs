// src/config/consts.rs

// Working directory layout
pub const DEFAULT_ROOT: &str = ".";
pub const ROSTER_DIR: &str = "rosters";
pub const REPORTS_DIR: &str = "reports";
pub const RECORD_EXT: &str = "txt";
pub const FREQUENCY_FILE: &str = "frequency_report.csv";

// Debug log
pub const LOG_DIR: &str = ".attendance";
pub const LOG_FILE: &str = "debug.log";

// Dates
pub const DATE_FORMAT: &str = "%m-%d-%Y";
pub const DATE_HINT: &str = "MM-DD-YYYY";

// Frequency report
pub const FREQUENCY_HEADERS: [&str; 3] = ["Last Name", "First Name", "Frequency"];
pub const NAME_SEP: &str = ", ";

// Absences report
pub const ABSENCE_THRESHOLD: usize = 3;
pub const ABSENCES_RULE_WIDTH: usize = 52;

// Roster import: cell positions in the registrar's export table
pub const IMPORT_FIRST_COL: usize = 2;
pub const IMPORT_LAST_COL: usize = 3;
pub const IMPORT_SECTION_COL: usize = 8;

// GUI
pub const WINDOW_W: f32 = 1280.0;
pub const WINDOW_H: f32 = 600.0;
pub const SUGGESTION_LIMIT: usize = 12;
