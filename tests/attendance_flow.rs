// tests/attendance_flow.rs
use std::fs;
use std::path::Path;

use attendance::{
    config::options::Paths,
    confirm::{Always, Outcome},
    AttendanceError, Workspace,
};
use chrono::NaiveDate;
use tempfile::TempDir;

fn workspace() -> (TempDir, Workspace) {
    let dir = tempfile::tempdir().unwrap();
    let ws = Workspace::new(Paths::new(dir.path()));
    (dir, ws)
}

fn write(path: &Path, text: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

#[test]
fn roster_add_then_load_keeps_file_order() {
    let (dir, ws) = workspace();
    let src = dir.path().join("incoming.txt");
    write(&src, "Smith, John\n\nDoe, Jane\n  Lee, Kim  \n");

    let names = ws.rosters.add_roster(&src, "CS101").unwrap();
    assert_eq!(names, vec!["Smith, John", "Doe, Jane", "Lee, Kim"]);

    let sections = ws.rosters.load_sections().unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections["CS101"], names);
    assert!(dir.path().join("rosters").join("CS101.txt").is_file());
}

#[test]
fn smith_doe_lee_frequency_report() {
    let (dir, mut ws) = workspace();
    let roster = dir.path().join("roster.txt");
    write(&roster, "Smith, John\nDoe, Jane\nLee, Kim\n");
    ws.rosters.add_roster(&roster, "CS101").unwrap();

    for n in ["Smith, John"] {
        ws.session.add("CS101", n);
    }
    ws.session.save_on("CS101", "01-02-2025", today(), &mut Always(true)).unwrap();

    for n in ["Smith, John", "Lee, Kim"] {
        ws.session.add("CS101", n);
    }
    ws.session.save_on("CS101", "01-03-2025", today(), &mut Always(true)).unwrap();

    let Outcome::Done((path, report)) = ws.frequency().export("CS101", &mut Always(true)).unwrap() else {
        panic!("export declined");
    };
    assert_eq!(path, dir.path().join("reports/CS101/frequency_report.csv"));
    assert_eq!(report.records, 2);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Last Name,First Name,Frequency\nSmith,John,2\nDoe,Jane,0\nLee,Kim,1\n"
    );
}

#[test]
fn bad_dates_write_nothing() {
    let (dir, mut ws) = workspace();
    ws.session.add("CS101", "Smith, John");

    let err = ws.session.save_on("CS101", "13-01-2025", today(), &mut Always(true)).unwrap_err();
    assert!(matches!(err, AttendanceError::InvalidDate(_)));

    let err = ws.session.save_on("CS101", "06-02-2025", today(), &mut Always(true)).unwrap_err();
    assert!(matches!(err, AttendanceError::FutureDate(_)));

    let err = ws.session.save_on("CS101", "  ", today(), &mut Always(true)).unwrap_err();
    assert!(matches!(err, AttendanceError::EmptyDate));

    let err = ws.session.save_on("", "01-02-2025", today(), &mut Always(true)).unwrap_err();
    assert!(matches!(err, AttendanceError::NoSection));

    assert!(!dir.path().join("reports").exists());
    assert_eq!(ws.session.entries("CS101"), ["Smith, John"]);
}

#[test]
fn declined_save_keeps_list_and_disk() {
    let (dir, mut ws) = workspace();
    ws.session.add("CS101", "Doe, Jane");

    let mut asked = Vec::new();
    let mut gate = |title: &str, question: &str| {
        asked.push(format!("{title}: {question}"));
        false
    };
    let out = ws.session.save_on("CS101", "01-02-2025", today(), &mut gate).unwrap();

    assert_eq!(out, Outcome::Declined);
    assert_eq!(asked.len(), 1);
    assert!(asked[0].contains("CS101 on 01-02-2025"));
    assert!(!dir.path().join("reports/CS101/01-02-2025.txt").exists());
    assert_eq!(ws.session.entries("CS101"), ["Doe, Jane"]);
}

#[test]
fn save_clears_list_and_load_restores_it() {
    let (_dir, mut ws) = workspace();
    ws.session.add("CS101", "Smith, John");
    ws.session.add("CS101", "Lee, Kim");
    ws.session.save_on("CS101", "01-02-2025", today(), &mut Always(true)).unwrap();
    assert!(ws.session.entries("CS101").is_empty());

    assert_eq!(ws.session.list_reports("CS101").unwrap(), vec!["01-02-2025"]);
    assert!(ws.session.load("CS101", "01-02-2025").unwrap());
    assert_eq!(ws.session.entries("CS101"), ["Smith, John", "Lee, Kim"]);

    // edit and overwrite the same date
    ws.session.remove("CS101", "Lee, Kim");
    ws.session.save_on("CS101", "01-02-2025", today(), &mut Always(true)).unwrap();
    assert!(ws.session.load("CS101", "01-02-2025").unwrap());
    assert_eq!(ws.session.entries("CS101"), ["Smith, John"]);

    assert!(!ws.session.load("CS101", "01-09-2025").unwrap());
}

#[test]
fn add_then_remove_restores_list() {
    let (_dir, mut ws) = workspace();
    ws.session.add("CS101", "Smith, John");
    let before = ws.session.entries("CS101").to_vec();

    assert!(ws.session.add("CS101", "Doe, Jane"));
    assert!(!ws.session.add("CS101", "Doe, Jane"));
    assert!(ws.session.remove("CS101", "Doe, Jane"));

    assert_eq!(ws.session.entries("CS101"), before.as_slice());
}

#[test]
fn names_off_the_roster_are_left_out() {
    let (dir, ws) = workspace();
    write(&dir.path().join("rosters/CS101.txt"), "Smith, John\nDoe, Jane\n");
    write(
        &dir.path().join("reports/CS101/01-02-2025.txt"),
        "Smith, John\nGhost, Guy\n",
    );

    let report = ws.frequency().generate("CS101").unwrap();
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.count_for("Smith", "John"), Some(1));
    assert_eq!(report.count_for("Doe", "Jane"), Some(0));
    assert_eq!(report.count_for("Ghost", "Guy"), None);
    assert_eq!(report.unmatched, vec!["Ghost, Guy"]);
}

#[test]
fn frequency_needs_reports_and_roster() {
    let (dir, ws) = workspace();
    write(&dir.path().join("rosters/CS101.txt"), "Smith, John\n");

    let err = ws.frequency().generate("CS101").unwrap_err();
    assert!(matches!(err, AttendanceError::NoReports(ref s) if s == "CS101"));

    // an existing frequency_report.csv is not a record
    write(&dir.path().join("reports/CS101/frequency_report.csv"), "x\n");
    assert!(matches!(
        ws.frequency().generate("CS101"),
        Err(AttendanceError::NoReports(_))
    ));

    write(&dir.path().join("reports/CS200/01-02-2025.txt"), "Smith, John\n");
    assert!(matches!(
        ws.frequency().generate("CS200"),
        Err(AttendanceError::RosterMissing(_))
    ));
}

#[test]
fn declined_export_writes_nothing() {
    let (dir, ws) = workspace();
    write(&dir.path().join("rosters/CS101.txt"), "Smith, John\n");
    write(&dir.path().join("reports/CS101/01-02-2025.txt"), "Smith, John\n");

    let out = ws.frequency().export("CS101", &mut Always(false)).unwrap();
    assert_eq!(out, Outcome::Declined);
    assert!(!dir.path().join("reports/CS101/frequency_report.csv").exists());
}

#[test]
fn remove_roster_is_gated_and_keeps_reports() {
    let (dir, ws) = workspace();
    write(&dir.path().join("rosters/CS101.txt"), "Smith, John\n");
    write(&dir.path().join("reports/CS101/01-02-2025.txt"), "Smith, John\n");

    assert_eq!(ws.rosters.remove_roster("CS101", &mut Always(false)).unwrap(), Outcome::Declined);
    assert!(ws.rosters.exists("CS101"));

    assert_eq!(ws.rosters.remove_roster("CS101", &mut Always(true)).unwrap(), Outcome::Done(()));
    assert!(!ws.rosters.exists("CS101"));
    assert!(ws.rosters.load_sections().unwrap().is_empty());
    assert!(dir.path().join("reports/CS101/01-02-2025.txt").is_file());

    assert!(matches!(
        ws.rosters.remove_roster("CS101", &mut Always(true)),
        Err(AttendanceError::SectionNotFound(_))
    ));
}
