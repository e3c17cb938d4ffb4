// src/core/names.rs
//
// Students are identified by the literal "Last, First" string. Two students
// with the same name cannot be told apart; that is a known limitation.

use crate::config::consts::NAME_SEP;

/// Split `"Last, First"` on the first `", "`.
/// A name without the separator is all last name.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.split_once(NAME_SEP) {
        Some((last, first)) => (last, first),
        None => (name, ""),
    }
}

pub fn display_name(last: &str, first: &str) -> String {
    join!(last.trim(), NAME_SEP, first.trim())
}

/// Trimmed, non-blank lines. Used for rosters and attendance records alike.
pub fn parse_name_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| s!(l))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_variants() {
        assert_eq!(split_name("Smith, John"), ("Smith", "John"));
        assert_eq!(split_name("Van Dyke, Mary Ann"), ("Van Dyke", "Mary Ann"));
        assert_eq!(split_name("Cher"), ("Cher", ""));
        assert_eq!(split_name("Doe, Jane, Jr."), ("Doe", "Jane, Jr."));
    }

    #[test]
    fn lines_trimmed_blank_dropped() {
        let got = parse_name_lines("  Smith, John \r\n\nDoe, Jane\n   \n");
        assert_eq!(got, vec!["Smith, John", "Doe, Jane"]);
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(display_name(" Lee ", "Kim"), "Lee, Kim");
    }
}
