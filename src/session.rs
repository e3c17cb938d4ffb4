// src/session.rs
//
// In-memory attendance lists, one per section, flushed to
// `reports/<section>/<MM-DD-YYYY>.txt` on save.
//
// A list behaves like a set (no duplicates) but keeps insertion order so the
// display and the saved file read in the order names were marked.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::{
    config::{consts::RECORD_EXT, options::Paths},
    confirm::{Confirm, Outcome},
    core::{date::{self, AttendanceDate}, sanitize::validate_section_name},
    error::Result,
    file,
};

#[derive(Clone, Debug)]
pub struct Session {
    paths: Paths,
    present: HashMap<String, Vec<String>>,
}

impl Session {
    pub fn new(paths: Paths) -> Self {
        Self { paths, present: HashMap::new() }
    }

    /// Names currently marked present for `section`.
    pub fn entries(&self, section: &str) -> &[String] {
        self.present.get(section).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, section: &str, name: &str) -> bool {
        self.entries(section).iter().any(|n| n == name)
    }

    /// Append `name` unless it is blank or already there.
    /// Returns whether the list changed.
    pub fn add(&mut self, section: &str, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(section, name) {
            return false;
        }
        self.present.entry(s!(section)).or_default().push(s!(name));
        logd!("Session: +{:?} in {:?}", name, section);
        true
    }

    /// Drop `name` if present. Returns whether the list changed.
    pub fn remove(&mut self, section: &str, name: &str) -> bool {
        let Some(list) = self.present.get_mut(section) else { return false };
        let before = list.len();
        list.retain(|n| n != name);
        let changed = list.len() != before;
        if changed {
            logd!("Session: -{:?} in {:?}", name, section);
        }
        changed
    }

    pub fn clear(&mut self, section: &str) {
        self.present.remove(section);
    }

    /// Write the list for `section` to the file for `date` and clear it.
    pub fn save(
        &mut self,
        section: &str,
        date: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<Outcome<PathBuf>> {
        self.save_on(section, date, date::today(), confirm)
    }

    /// `save` with an explicit "today" for the future-date check.
    pub fn save_on(
        &mut self,
        section: &str,
        date: &str,
        today: NaiveDate,
        confirm: &mut dyn Confirm,
    ) -> Result<Outcome<PathBuf>> {
        let section = validate_section_name(section)?;
        let date = AttendanceDate::parse_on(date, today)?;

        let question = format!(
            "Are you sure you want to save the attendance report for {section} on {date}?"
        );
        if !confirm.confirm("Confirm", &question) {
            logd!("Save: {:?} {} declined", section, date);
            return Ok(Outcome::Declined);
        }

        let path = self.paths.record_file(section, &date.stem());
        file::write_lines(&path, self.entries(section))?;
        logf!(
            "Save: {} name(s) → {}",
            self.entries(section).len(),
            path.display()
        );

        self.clear(section);
        Ok(Outcome::Done(path))
    }

    /// Replace the list for `section` with the saved record for `date`.
    /// Returns `false` (and changes nothing) when there is no such record.
    pub fn load(&mut self, section: &str, date: &str) -> Result<bool> {
        let section = validate_section_name(section)?;
        let date = date.trim();
        if !date::is_record_stem(date) {
            logd!("Session: {:?} is not a record date", date);
            return Ok(false);
        }
        let path = self.paths.record_file(section, date);
        if !path.is_file() {
            logd!("Session: no record at {}", path.display());
            return Ok(false);
        }

        let mut names = file::read_lines(&path)?;
        // Hand-edited files may repeat a name; keep the first.
        let mut seen = std::collections::HashSet::new();
        names.retain(|n| seen.insert(n.clone()));

        logf!("Session: loaded {} name(s) from {}", names.len(), path.display());
        self.present.insert(s!(section), names);
        Ok(true)
    }

    /// Saved record dates (file stems) for `section`, sorted.
    pub fn list_reports(&self, section: &str) -> Result<Vec<String>> {
        let section = validate_section_name(section)?;
        file::list_stems(&self.paths.reports_dir(section), RECORD_EXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::Always;

    #[test]
    fn add_is_idempotent_and_ordered() {
        let mut s = Session::new(Paths::default());
        assert!(s.add("A", "Lee, Kim"));
        assert!(s.add("A", "Smith, John"));
        assert!(!s.add("A", "Lee, Kim"));
        assert!(!s.add("A", "   "));
        assert_eq!(s.entries("A"), ["Lee, Kim", "Smith, John"]);
        assert!(s.entries("B").is_empty());
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut s = Session::new(Paths::default());
        s.add("A", "Lee, Kim");
        assert!(!s.remove("A", "Doe, Jane"));
        assert!(!s.remove("Z", "Lee, Kim"));
        assert!(s.remove("A", "Lee, Kim"));
        assert!(s.entries("A").is_empty());
    }

    #[test]
    fn declined_save_keeps_list_and_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = Session::new(Paths::new(tmp.path()));
        s.add("A", "Lee, Kim");
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let out = s.save_on("A", "01-02-2025", today, &mut Always(false)).unwrap();
        assert_eq!(out, Outcome::Declined);
        assert_eq!(s.entries("A"), ["Lee, Kim"]);
        assert!(!tmp.path().join("reports").exists());
    }

    #[test]
    fn load_only_reads_date_files() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = Paths::new(tmp.path());
        file::write_lines(&paths.roster_file("A"), &["Smith, John"]).unwrap();
        file::write_lines(&paths.record_file("A", "01-02-2025"), &["Lee, Kim"]).unwrap();

        let mut s = Session::new(paths);
        assert!(!s.load("A", "../../rosters/A").unwrap());
        assert!(!s.load("A", "13-40-2025").unwrap());
        assert!(s.entries("A").is_empty());

        assert!(s.load("A", " 01-02-2025 ").unwrap());
        assert_eq!(s.entries("A"), ["Lee, Kim"]);
    }
}
