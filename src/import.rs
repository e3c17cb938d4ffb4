// src/import.rs
//
// One-shot roster import from the registrar's HTML class list.
//
// Every `<tr>` with enough `<td>` cells is read as one enrollment: first
// name, last name and a course/section identifier, each optionally prefixed
// by a `Label:`. Identifiers are mapped to section names through a small
// text file:
//
//     # identifier=Section Name
//     2252-UTDAL-CS-4349-SEC001-23154=CS 4349.001 - MW 11_30am

use std::collections::BTreeMap;
use std::path::Path;

use crate::{
    config::options::ImportLayout,
    core::{html::{row_cells, TagBlocks}, names::display_name, sanitize::strip_label},
    error::{AttendanceError, Result},
    roster::{RosterStore, Sections},
};

/// Identifier → section name
pub type SectionMap = BTreeMap<String, String>;

/// Parse `identifier=Section Name` lines. `#` starts a comment line.
pub fn parse_section_map(text: &str) -> SectionMap {
    let mut map = SectionMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        match line.split_once('=') {
            Some((id, name)) if !id.trim().is_empty() && !name.trim().is_empty() => {
                map.insert(s!(id.trim()), s!(name.trim()));
            }
            _ => logd!("Import: ignoring map line {:?}", line),
        }
    }
    map
}

pub fn load_section_map(path: &Path) -> Result<SectionMap> {
    let text = std::fs::read_to_string(path).map_err(|e| AttendanceError::io(path, e))?;
    Ok(parse_section_map(&text))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub sections: Sections,
    /// Rows with too few cells (header rows, spacer rows)
    pub skipped_rows: usize,
    /// Identifiers seen in the table but missing from the map
    pub unmapped: Vec<String>,
}

/// Group the table's students by mapped section, in table order.
/// Every mapped section gets an entry, even if no row landed in it.
pub fn import_html(html: &str, map: &SectionMap, layout: ImportLayout) -> ImportSummary {
    let mut out = ImportSummary::default();
    for name in map.values() {
        out.sections.entry(name.clone()).or_default();
    }

    for tr in TagBlocks::new(html, "tr") {
        let cells = row_cells(tr);
        if cells.len() < layout.min_cells() {
            out.skipped_rows += 1;
            continue;
        }

        let first = strip_label(&cells[layout.first_col]);
        let last = strip_label(&cells[layout.last_col]);
        let id = strip_label(&cells[layout.section_col]);

        let Some(section) = map.get(id) else {
            if !out.unmapped.iter().any(|u| u == id) {
                logd!("Import: unmapped section id {:?}", id);
                out.unmapped.push(s!(id));
            }
            continue;
        };
        if first.is_empty() && last.is_empty() {
            out.skipped_rows += 1;
            continue;
        }

        let student = display_name(last, first);
        let list = out.sections.entry(section.clone()).or_default();
        if !list.contains(&student) {
            list.push(student);
        }
    }

    logf!(
        "Import: {} section(s), {} student(s), {} skipped row(s)",
        out.sections.len(),
        out.sections.values().map(Vec::len).sum::<usize>(),
        out.skipped_rows
    );
    out
}

/// Write every imported section through the roster store (overwrites).
pub fn write_rosters(store: &RosterStore, sections: &Sections) -> Result<usize> {
    for (section, names) in sections {
        store.write_roster(section, names)?;
    }
    Ok(sections.len())
}
