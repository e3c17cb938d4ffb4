// src/config/options.rs
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub paths: Paths,
    pub suggest_limit: usize,
    pub import: ImportLayout,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            paths: Paths::default(),
            suggest_limit: SUGGESTION_LIMIT,
            import: ImportLayout::default(),
        }
    }
}

impl AppOptions {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { paths: Paths::new(root), ..Self::default() }
    }
}

/// Where everything lives, relative to one working directory:
///
/// ```text
/// <root>/rosters/<section>.txt
/// <root>/reports/<section>/<MM-DD-YYYY>.txt
/// <root>/reports/<section>/frequency_report.csv
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paths {
    root: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self { root: PathBuf::from(DEFAULT_ROOT) }
    }
}

impl Paths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path { &self.root }

    pub fn roster_dir(&self) -> PathBuf {
        self.root.join(ROSTER_DIR)
    }

    pub fn roster_file(&self, section: &str) -> PathBuf {
        self.roster_dir().join(join!(section, ".", RECORD_EXT))
    }

    pub fn reports_dir(&self, section: &str) -> PathBuf {
        self.root.join(REPORTS_DIR).join(section)
    }

    pub fn record_file(&self, section: &str, date: &str) -> PathBuf {
        self.reports_dir(section).join(join!(date, ".", RECORD_EXT))
    }

    pub fn frequency_file(&self, section: &str) -> PathBuf {
        self.reports_dir(section).join(FREQUENCY_FILE)
    }
}

/// Column positions (0-based `<td>` index) used by the HTML roster import.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImportLayout {
    pub first_col: usize,
    pub last_col: usize,
    pub section_col: usize,
}

impl Default for ImportLayout {
    fn default() -> Self {
        Self {
            first_col: IMPORT_FIRST_COL,
            last_col: IMPORT_LAST_COL,
            section_col: IMPORT_SECTION_COL,
        }
    }
}

impl ImportLayout {
    /// Number of cells a row needs before any of the columns can be read.
    pub fn min_cells(&self) -> usize {
        self.first_col.max(self.last_col).max(self.section_col) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_paths() {
        let p = Paths::new("/tmp/class");
        assert_eq!(p.roster_file("CS 101"), PathBuf::from("/tmp/class/rosters/CS 101.txt"));
        assert_eq!(
            p.record_file("CS 101", "01-02-2025"),
            PathBuf::from("/tmp/class/reports/CS 101/01-02-2025.txt")
        );
        assert_eq!(
            p.frequency_file("CS 101"),
            PathBuf::from("/tmp/class/reports/CS 101/frequency_report.csv")
        );
    }

    #[test]
    fn import_layout_min_cells() {
        assert_eq!(ImportLayout::default().min_cells(), 9);
    }
}
