// src/roster.rs
//
// One text file per section under `rosters/`, one "Last, First" per line.
// The file's line order is the canonical order for reports.

use std::collections::BTreeMap;
use std::path::Path;

use crate::{
    config::{consts::RECORD_EXT, options::Paths},
    confirm::{Confirm, Outcome},
    core::sanitize::validate_section_name,
    error::{AttendanceError, Result},
    file,
};

/// Section name → ordered student names.
pub type Sections = BTreeMap<String, Vec<String>>;

#[derive(Clone, Debug)]
pub struct RosterStore {
    paths: Paths,
}

impl RosterStore {
    pub fn new(paths: Paths) -> Self { Self { paths } }

    pub fn paths(&self) -> &Paths { &self.paths }

    /// Read every roster. Creates `rosters/` when it is missing.
    pub fn load_sections(&self) -> Result<Sections> {
        let dir = self.paths.roster_dir();
        if !dir.exists() {
            logd!("Roster: {} missing, creating", dir.display());
            file::ensure_directory(&dir)?;
            return Ok(Sections::new());
        }

        let mut sections = Sections::new();
        for path in file::list_files(&dir, RECORD_EXT)? {
            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };
            let names = file::read_lines(&path)?;
            logd!("Roster: loaded {:?} ({} students)", stem, names.len());
            sections.insert(stem, names);
        }
        logf!("Roster: {} section(s) in {}", sections.len(), dir.display());
        Ok(sections)
    }

    pub fn exists(&self, section: &str) -> bool {
        self.paths.roster_file(section).is_file()
    }

    /// Ordered names of one section.
    pub fn read_roster(&self, section: &str) -> Result<Vec<String>> {
        let section = validate_section_name(section)?;
        let path = self.paths.roster_file(section);
        if !path.is_file() {
            return Err(AttendanceError::RosterMissing(s!(section)));
        }
        file::read_lines(&path)
    }

    /// Copy trimmed lines of `source` into `rosters/<section>.txt`.
    /// An existing roster of the same name is replaced, not merged.
    pub fn add_roster(&self, source: &Path, section: &str) -> Result<Vec<String>> {
        // a new name is being typed here, not picked from the list
        if section.trim().is_empty() {
            return Err(AttendanceError::EmptySectionName);
        }
        let section = validate_section_name(section)?;
        let names = file::read_lines(source)?;
        self.write_roster(section, &names)?;
        logf!(
            "Roster: added {:?} from {} ({} students)",
            section,
            source.display(),
            names.len()
        );
        Ok(names)
    }

    /// Write a roster from names already in memory (roster import).
    pub fn write_roster(&self, section: &str, names: &[String]) -> Result<()> {
        let section = validate_section_name(section)?;
        let path = self.paths.roster_file(section);
        if path.exists() {
            logd!("Roster: overwriting {}", path.display());
        }
        file::write_lines(&path, names)
    }

    /// Delete `rosters/<section>.txt` after the gate says yes.
    /// Saved attendance records are left alone.
    pub fn remove_roster(&self, section: &str, confirm: &mut dyn Confirm) -> Result<Outcome<()>> {
        let section = validate_section_name(section)?;
        let path = self.paths.roster_file(section);
        if !path.is_file() {
            return Err(AttendanceError::SectionNotFound(s!(section)));
        }

        let question = format!("Are you sure you want to delete the roster for {section}?");
        if !confirm.confirm("Confirm Deletion", &question) {
            logd!("Roster: delete {:?} declined", section);
            return Ok(Outcome::Declined);
        }

        file::remove_file(&path)?;
        logf!("Roster: removed {:?}", section);
        Ok(Outcome::Done(()))
    }
}
