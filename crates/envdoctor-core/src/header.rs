use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::DoctorResult;

/// Report whether `directive` appears within the first `scan_lines` lines of
/// `path`.
///
/// A missing file is an informational result, not an error. Only the leading
/// prefix is read, so arbitrarily large files stay cheap to inspect.
pub fn directive_status(path: &Path, directive: &str, scan_lines: usize) -> DoctorResult<String> {
    if !path.exists() {
        return Ok(format!("not found: {}", path.display()));
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut found = false;
    for line in reader.lines().take(scan_lines) {
        if line?.contains(directive) {
            found = true;
            break;
        }
    }

    Ok(format!("{} present: {}", directive, found))
}
