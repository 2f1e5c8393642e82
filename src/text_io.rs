use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::error::{Result, RoundRobinError};

/// Reads newline-delimited text, trimming each line and dropping blank ones
pub fn read_lines_from<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

/// Reads the non-blank lines of a file
///
/// # Arguments
/// * `path` - File to read
/// * `what` - Name of the input used in error messages ("input", "fuzz")
pub fn read_lines(path: &Path, what: &'static str) -> Result<Vec<String>> {
    let read_err = |source| RoundRobinError::Read {
        what,
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let lines = read_lines_from(BufReader::new(file)).map_err(read_err)?;
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Reads from the given file, or from stdin when no path is given
pub fn read_input(path: Option<&Path>, what: &'static str) -> Result<Vec<String>> {
    match path {
        Some(path) => read_lines(path, what),
        None => {
            debug!("Reading {} from stdin", what);
            read_lines_from(io::stdin().lock())
                .map_err(|source| RoundRobinError::ReadStdin { what, source })
        }
    }
}

/// Creates (or truncates) an output file behind a buffered writer
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| RoundRobinError::write(Some(path), e))?;
    Ok(BufWriter::new(file))
}

/// Opens the output file, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(create_output(path)?)),
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Writes one line per item and flushes
pub fn write_lines<S, W>(out: &mut W, lines: &[S]) -> io::Result<u64>
where
    S: AsRef<str>,
    W: Write + ?Sized,
{
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    out.flush()?;
    Ok(lines.len() as u64)
}
