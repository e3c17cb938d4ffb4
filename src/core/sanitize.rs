// src/core/sanitize.rs

use crate::error::{AttendanceError, Result};

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop a leading `Label:` from an exported cell ("First Name: Kim" → "Kim").
/// Only a short alphabetic label counts; digits or punctuation before the
/// colon leave the cell as it is.
pub fn strip_label(cell: &str) -> &str {
    if let Some((label, rest)) = cell.split_once(':') {
        let is_label = !label.trim().is_empty()
            && label.len() <= 24
            && label.chars().all(|c| c.is_ascii_alphabetic() || c == ' ' || c == '_');
        if is_label {
            return rest.trim();
        }
    }
    cell.trim()
}

/// Section names become file and directory names; keep them to a single
/// path component.
pub fn validate_section_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AttendanceError::NoSection);
    }
    let bad = trimmed.contains(['/', '\\'])
        || trimmed == "."
        || trimmed == ".."
        || trimmed.chars().any(char::is_control);
    if bad {
        return Err(AttendanceError::InvalidSectionName(s!(trimmed)));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stripped() {
        assert_eq!(strip_label("First Name: Kim"), "Kim");
        assert_eq!(strip_label("  Lee "), "Lee");
        assert_eq!(strip_label("Course ID: 2252-UTDAL-CS-4349-SEC001"), "2252-UTDAL-CS-4349-SEC001");
        // Digits before the colon: not a label
        assert_eq!(strip_label("10:30 lab"), "10:30 lab");
    }

    #[test]
    fn section_names() {
        assert_eq!(validate_section_name(" CS 4349.001 - MW 11_30am ").unwrap(), "CS 4349.001 - MW 11_30am");
        assert!(matches!(validate_section_name("   "), Err(AttendanceError::NoSection)));
        assert!(matches!(validate_section_name("a/b"), Err(AttendanceError::InvalidSectionName(_))));
        assert!(matches!(validate_section_name(".."), Err(AttendanceError::InvalidSectionName(_))));
    }

    #[test]
    fn entities_and_whitespace() {
        assert_eq!(normalize_ws(&normalize_entities("Doe,&nbsp;\n Jane  &amp;co")), "Doe, Jane &co");
    }
}
