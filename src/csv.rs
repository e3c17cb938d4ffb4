// src/csv.rs
//
// Just enough CSV writing for the frequency report.

use std::io::{self, Write};

fn quoted(cell: &str, sep: char) -> bool {
    cell.contains([sep, '"', '\n', '\r'])
}

/// One row, `\n`-terminated. Cells are quoted only when they must be.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        let cell = cell.as_ref();
        if quoted(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    writeln!(w)
}

pub fn to_csv_string<H: AsRef<str>>(headers: &[H], rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // in-memory writes cannot fail
    let _ = write_row(&mut buf, headers, sep);
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }
    String::from_utf8_lossy(&buf).into_owned()
}
