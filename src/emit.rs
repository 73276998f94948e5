use crate::error::FelixError;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
/// Writes the `===== <display> =====` header for `path`, then its lines, each ending in `\n`.
///
/// Returns the number of lines written. A failure to open or read the file returns
/// [`FelixError::Io`] after the header and any lines already copied; a failure to write
/// returns [`FelixError::Output`].
pub fn emit_file<W: Write>(out: &mut W, path: &Path, display: &str) -> Result<usize, FelixError> {
    write!(out, "\n===== {} =====\n", display).map_err(FelixError::Output)?;
    let file = File::open(path).map_err(|e| FelixError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    let mut lines = 0;
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| FelixError::io(path, e))?;
        if read == 0 {
            break;
        }
        out.write_all(trim_line_ending(&line))
            .map_err(FelixError::Output)?;
        out.write_all(b"\n").map_err(FelixError::Output)?;
        lines += 1;
    }
    Ok(lines)
}
