// inlistrs/src/reader.rs

//! Reading namelist sections and defaults files.

use crate::error::{InlistError, Result};
use crate::line::{is_blank_or_comment, is_terminator, parse_line, strip_inline_comment};
use crate::namelist::{NamelistKind, Section};
use crate::options::OptionMap;
use log::debug;
use std::fs;
use std::path::Path;

/// Options found in one section of an inlist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamelistRead {
    pub options: OptionMap,
    /// Header that was matched, `None` if the section is not in the file
    pub kind: Option<NamelistKind>,
}

impl NamelistRead {
    /// Whether the binary variant of the section was found
    pub fn is_binary(&self) -> bool {
        self.kind.is_some_and(|kind| kind.is_binary())
    }

    pub fn is_found(&self) -> bool {
        self.kind.is_some()
    }
}

/// Read one section out of an inlist file.
///
/// A file without the section is not an error and gives an empty mapping.
pub fn read_section<P: AsRef<Path>>(path: P, section: Section) -> Result<NamelistRead> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| InlistError::io(path, e))?;
    Ok(parse_section(&content, section))
}

/// Parse one section out of inlist content.
///
/// Only the first occurrence of the section is read: the scan stops at its
/// terminator.
pub fn parse_section(content: &str, section: Section) -> NamelistRead {
    let mut read = NamelistRead::default();

    for raw in content.lines() {
        let line = raw.trim();

        if let Some(kind) = section.match_header(strip_inline_comment(line).trim()) {
            read.kind = Some(kind);
            continue;
        }

        if read.kind.is_none() || is_blank_or_comment(line) {
            continue;
        }

        if is_terminator(line) {
            break;
        }

        match parse_line(line) {
            Some((name, value)) => {
                read.options.insert(name, value);
            }
            None => debug!("skipping line without assignment: {}", line),
        }
    }

    read
}

/// Read a `.defaults` file, where the whole file is the namelist.
pub fn read_defaults<P: AsRef<Path>>(path: P) -> Result<OptionMap> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| InlistError::io(path, e))?;
    Ok(parse_defaults(&content))
}

/// Parse the content of a `.defaults` file.
pub fn parse_defaults(content: &str) -> OptionMap {
    content
        .lines()
        .filter(|line| !is_blank_or_comment(line))
        .filter_map(|line| parse_line(line.trim()))
        .collect()
}
