// src/frequency.rs
//
// Per-student attendance counts across every saved record of a section.
//
// Rows always follow the roster file's line order. Downstream users diff
// reports between runs, so neither date order nor alphabetical order is
// acceptable here. Names that appear in records but not in the roster are
// never emitted; they are only counted in `unmatched`.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::{
    config::{consts::{FREQUENCY_HEADERS, RECORD_EXT}, options::Paths},
    confirm::{Confirm, Outcome},
    core::{names::split_name, sanitize::validate_section_name},
    csv,
    error::{AttendanceError, Result},
    file,
    roster::RosterStore,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyRow {
    pub last: String,
    pub first: String,
    pub count: usize,
}

impl FrequencyRow {
    pub fn cells(&self) -> Vec<String> {
        vec![self.last.clone(), self.first.clone(), self.count.to_string()]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyReport {
    pub section: String,
    /// One row per roster line, in roster order
    pub rows: Vec<FrequencyRow>,
    /// Number of record files read
    pub records: usize,
    /// Distinct record names that are not on the roster
    pub unmatched: Vec<String>,
}

impl FrequencyReport {
    pub fn headers() -> &'static [&'static str] { &FREQUENCY_HEADERS }

    pub fn table(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(FrequencyRow::cells).collect()
    }

    pub fn to_csv(&self) -> String {
        csv::to_csv_string(Self::headers(), &self.table(), ',')
    }

    pub fn count_for(&self, last: &str, first: &str) -> Option<usize> {
        self.rows
            .iter()
            .find(|r| r.last == last && r.first == first)
            .map(|r| r.count)
    }
}

/// Count how many records each name appears in.
/// A name repeated inside one record counts once for that record.
pub fn tally<'a, I>(records: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for names in records {
        let mut seen = std::collections::HashSet::new();
        for name in names {
            if seen.insert(name.as_str()) {
                *counts.entry(name.clone()).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Walk the roster in order and attach counts (0 when absent).
pub fn rows_in_roster_order(roster: &[String], counts: &HashMap<String, usize>) -> Vec<FrequencyRow> {
    roster
        .iter()
        .map(|name| {
            let (last, first) = split_name(name);
            FrequencyRow {
                last: s!(last),
                first: s!(first),
                count: counts.get(name).copied().unwrap_or(0),
            }
        })
        .collect()
}

pub struct FrequencyAggregator<'a> {
    paths: &'a Paths,
    rosters: &'a RosterStore,
}

impl<'a> FrequencyAggregator<'a> {
    pub fn new(paths: &'a Paths, rosters: &'a RosterStore) -> Self {
        Self { paths, rosters }
    }

    /// Read every record of `section` and tally it against the roster.
    pub fn generate(&self, section: &str) -> Result<FrequencyReport> {
        let section = validate_section_name(section)?;
        let dir = self.paths.reports_dir(section);

        let record_files = file::list_files(&dir, RECORD_EXT)?;
        if record_files.is_empty() {
            logd!("Report: no records in {}", dir.display());
            return Err(AttendanceError::NoReports(s!(section)));
        }

        let mut records = Vec::with_capacity(record_files.len());
        for path in &record_files {
            records.push(file::read_lines(path)?);
        }
        let counts = tally(records.iter().map(Vec::as_slice));

        let roster = self.rosters.read_roster(section)?;
        let rows = rows_in_roster_order(&roster, &counts);

        let mut unmatched: Vec<String> = counts
            .keys()
            .filter(|name| !roster.contains(*name))
            .cloned()
            .collect();
        unmatched.sort();
        if !unmatched.is_empty() {
            logd!("Report: {:?} not on roster, dropped: {:?}", section, unmatched);
        }

        logf!(
            "Report: {:?} records={} students={}",
            section,
            record_files.len(),
            rows.len()
        );

        Ok(FrequencyReport {
            section: s!(section),
            rows,
            records: record_files.len(),
            unmatched,
        })
    }

    /// Generate, ask, then write `reports/<section>/frequency_report.csv`.
    pub fn export(
        &self,
        section: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<Outcome<(PathBuf, FrequencyReport)>> {
        let report = self.generate(section)?;

        let question = format!(
            "Are you sure you want to generate a frequency report for the section {}?",
            report.section
        );
        if !confirm.confirm("Confirm", &question) {
            logd!("Report: export {:?} declined", report.section);
            return Ok(Outcome::Declined);
        }

        let path = self.paths.frequency_file(&report.section);
        file::write_string(&path, &report.to_csv())?;
        logf!("Report: wrote {}", path.display());
        Ok(Outcome::Done((path, report)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn duplicate_inside_one_record_counts_once() {
        let a = names(&["Lee, Kim", "Lee, Kim"]);
        let b = names(&["Lee, Kim"]);
        let counts = tally([a.as_slice(), b.as_slice()]);
        assert_eq!(counts["Lee, Kim"], 2);
    }

    #[test]
    fn roster_order_and_zero_counts() {
        let roster = names(&["Smith, John", "Doe, Jane", "Lee, Kim"]);
        let r1 = names(&["Smith, John"]);
        let r2 = names(&["Smith, John", "Lee, Kim", "Ghost, Guy"]);
        let rows = rows_in_roster_order(&roster, &tally([r1.as_slice(), r2.as_slice()]));
        let flat: Vec<Vec<String>> = rows.iter().map(FrequencyRow::cells).collect();
        assert_eq!(
            flat,
            vec![
                names(&["Smith", "John", "2"]),
                names(&["Doe", "Jane", "0"]),
                names(&["Lee", "Kim", "1"]),
            ]
        );
    }
}
