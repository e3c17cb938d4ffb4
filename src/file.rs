// src/file.rs
//
// Whole-file reads and overwrites. No locking, no temp-file renames: a failed
// write leaves whatever the OS managed to flush and the caller reports it.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::core::names::parse_name_lines;
use crate::error::{AttendanceError, Result};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(AttendanceError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| AttendanceError::io(dir, e))?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// Read a one-name-per-line file (roster or attendance record).
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| AttendanceError::io(path, e))?;
    Ok(parse_name_lines(&text))
}

/// Create/truncate `path` and write one entry per line, in order.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    ensure_parent(path)?;
    let io_err = |e| AttendanceError::io(path, e);

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    for line in lines {
        writeln!(out, "{}", line.as_ref()).map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;
    Ok(())
}

/// Create/truncate `path` with `contents`.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, contents).map_err(|e| AttendanceError::io(path, e))
}

pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| AttendanceError::io(path, e))
}

/// Stems of the regular files in `dir` with extension `ext`, sorted.
/// A missing directory is an empty listing.
pub fn list_stems(dir: &Path, ext: &str) -> Result<Vec<String>> {
    Ok(list_files(dir, ext)?
        .into_iter()
        .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .collect())
}

/// Regular files in `dir` with extension `ext`, sorted by file name.
pub fn list_files(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let io_err = |e| AttendanceError::io(dir, e);

    let mut out = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() { continue; }
        if path.extension().and_then(|s| s.to_str()) != Some(ext) { continue; }
        out.push(path);
    }
    out.sort();
    Ok(out)
}
