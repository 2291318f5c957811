use std::io::{BufRead, Write};
use std::path::PathBuf;

use url::Url;

use crate::config::OUTPUT_EXTENSION;
use crate::error::{Error, Result};
use crate::utils::has_extension;

const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Check one input line, returning the URL it names
pub fn parse_url_line(line: &str) -> Option<String> {
    let line = line.trim();
    if !SCHEMES.iter().any(|scheme| line.starts_with(scheme)) {
        return None;
    }
    Url::parse(line).ok().map(|_| line.to_string())
}

/// Read URLs one per line until a blank line or end of input.
///
/// Lines that are not http(s) URLs are reported on `out` and skipped.
pub fn read_urls<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Vec<String>> {
    writeln!(out, "\nPlease paste your URLs (one per line).")?;
    writeln!(
        out,
        "When you're done, press Enter twice (i.e., leave a blank line):\n"
    )?;
    out.flush()?;

    let mut urls = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }

        match parse_url_line(trimmed) {
            Some(url) => urls.push(url),
            None => {
                writeln!(out, "Warning: Skipping invalid URL format: {}", trimmed)?;
                ::log::debug!("Rejected input line {:?}", trimmed);
            }
        }
    }

    Ok(urls)
}

/// Validate a report filename
pub fn check_output_path(name: &str) -> Result<PathBuf> {
    let name = name.trim();
    if has_extension(name, OUTPUT_EXTENSION) {
        Ok(PathBuf::from(name))
    } else {
        Err(Error::InvalidOutputPath {
            path: PathBuf::from(name),
            extension: OUTPUT_EXTENSION,
        })
    }
}

/// Prompt until a filename with the report extension is given
pub fn read_output_path<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<PathBuf> {
    let mut line = String::new();
    loop {
        write!(
            out,
            "\nEnter the desired output filename (e.g., output.{}): ",
            OUTPUT_EXTENSION
        )?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed("an output filename"));
        }

        match check_output_path(&line) {
            Ok(path) => return Ok(path),
            Err(_) => writeln!(out, "Filename must end with .{}", OUTPUT_EXTENSION)?,
        }
    }
}
