//! Input helpers shared by the scoring commands

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use promptgrade_core::error::{GradeError, Result};

/// True when the path argument means stdin
pub fn is_stdin(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p.as_os_str() == "-")
}

/// Open a file, or stdin for `-` and no path
pub fn open(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(p) if !is_stdin(Some(p)) => {
            let file = File::open(p).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => GradeError::not_found("input file", p.display()),
                _ => GradeError::io_operation("open", p.display(), e),
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Read a whole file, or stdin for `-` and no path
pub fn read_to_string(path: Option<&Path>) -> Result<String> {
    let mut reader = open(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|e| {
        let target = path.map(|p| p.display().to_string()).unwrap_or_else(|| "stdin".into());
        GradeError::io_operation("read", target, e)
    })?;
    Ok(text)
}
