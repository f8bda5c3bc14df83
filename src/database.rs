//! Reading an SDL mapping database into a [`LookupTable`].
//!
//! Each non-blank line is `identifier,name,control:source,...`. A `#` starts a
//! comment that runs to the end of the line. Lines whose identifier is
//! `xinput` describe a platform default, not a device, and are skipped. When
//! several lines normalize to the same key only the first one is resolved; the
//! rest are dropped without being looked at.

use crate::error::{ConvertError, Result};
use crate::ident::{normalize_identifier, PLATFORM_DEFAULT_ID};
use crate::resolve::resolve_fields;
use crate::table::LookupTable;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// What happened to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank or comment-only.
    Skipped,
    /// `xinput` entry.
    PlatformDefault,
    /// Key already in the table; line ignored.
    Duplicate(String),
    /// New entry under this key.
    Added(String),
}

/// Accumulates database lines into a table.
#[derive(Debug, Default)]
pub struct TableBuilder {
    table: LookupTable,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes one raw line. `line_no` is 1-based and only used in errors.
    pub fn push_line(&mut self, line_no: usize, raw: &str) -> Result<LineOutcome> {
        let content = strip_comment(raw).trim();
        if content.is_empty() {
            return Ok(LineOutcome::Skipped);
        }

        let mut fields = content.split(',');
        let ident = fields.next().unwrap_or_default();
        if fields.next().is_none() {
            return Err(ConvertError::MissingName { line: line_no });
        }
        if ident == PLATFORM_DEFAULT_ID {
            debug!(line = line_no, "skipping platform default entry");
            return Ok(LineOutcome::PlatformDefault);
        }

        let key = normalize_identifier(ident).map_err(|source| ConvertError::Identifier {
            line: line_no,
            source,
        })?;
        if self.table.contains_key(&key) {
            debug!(line = line_no, %key, "duplicate device, keeping first entry");
            return Ok(LineOutcome::Duplicate(key));
        }

        let compact = resolve_fields(fields).map_err(|source| ConvertError::Resolve {
            line: line_no,
            key: key.clone(),
            source,
        })?;
        self.table.insert_first(key.clone(), &compact);
        Ok(LineOutcome::Added(key))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn finish(self) -> LookupTable {
        self.table
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Converts database text held in memory.
pub fn convert_str(text: &str) -> Result<LookupTable> {
    let mut builder = TableBuilder::new();
    for (i, line) in text.lines().enumerate() {
        builder.push_line(i + 1, line)?;
    }
    info!(devices = builder.len(), "built lookup table");
    Ok(builder.finish())
}

/// Reads and converts the database at `path`.
pub fn convert_file(path: impl AsRef<Path>) -> Result<LookupTable> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read mapping database");
    convert_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{IdentError, ResolveError};

    const PS3: &str = "030000004c0500006802000011010000,PS3 Controller,a:b0,b:b1,back:b8,\
                       dpdown:b14,dpleft:b15,dpright:b16,dpup:b13,guide:b10,leftshoulder:b4,\
                       leftstick:b11,lefttrigger:+a2,leftx:a0,lefty:a1,rightshoulder:b5,\
                       rightstick:b12,righttrigger:+a5,rightx:a3,righty:a4,start:b9,x:b3,y:b2,\
                       platform:Linux,";

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        let mut builder = TableBuilder::new();
        assert_eq!(builder.push_line(1, "").unwrap(), LineOutcome::Skipped);
        assert_eq!(builder.push_line(2, "   \t").unwrap(), LineOutcome::Skipped);
        assert_eq!(builder.push_line(3, "# Windows").unwrap(), LineOutcome::Skipped);
        assert!(builder.is_empty());
    }

    #[test]
    fn trailing_comment_is_stripped() {
        let mut builder = TableBuilder::new();
        let line = format!("{PS3} # from the community db");
        assert_eq!(
            builder.push_line(1, &line).unwrap(),
            LineOutcome::Added("054c:0268".into())
        );
    }

    #[test]
    fn ps3_line() {
        let table = convert_str(PS3).unwrap();
        assert_eq!(
            table.get("054c:0268"),
            Some(
                "b0 b1 b3 b2 b4 b5 a2+ a5+ b8 b9 b11 b12 b13 b14 b15 b16 b10 \
                 a0- a0+ a1- a1+ a3- a3+ a4- a4+"
            )
        );
    }

    #[test]
    fn xinput_lines_are_skipped() {
        let mut builder = TableBuilder::new();
        let outcome = builder.push_line(1, "xinput,XInput Controller,a:b0,b:b1,").unwrap();
        assert_eq!(outcome, LineOutcome::PlatformDefault);
        assert!(builder.finish().is_empty());
    }

    #[test]
    fn first_key_wins() {
        let text = format!(
            "{PS3}\n030000004c0500006802000000000000,PS3 again,a:b7,\n\
             050000004c0500006802000000800000,PS3 Bluetooth,a:q,"
        );
        let mut builder = TableBuilder::new();
        let outcomes: Vec<_> = text
            .lines()
            .enumerate()
            .map(|(i, l)| builder.push_line(i + 1, l).unwrap())
            .collect();
        assert_eq!(
            outcomes,
            vec![
                LineOutcome::Added("054c:0268".into()),
                LineOutcome::Duplicate("054c:0268".into()),
                // never resolved, so the bad source is not an error
                LineOutcome::Duplicate("054c:0268".into()),
            ]
        );
        let table = builder.finish();
        assert!(table.get("054c:0268").unwrap().starts_with("b0 b1"));
    }

    #[test]
    fn missing_name_is_fatal() {
        let err = convert_str("\n030000004c0500006802000011010000\n").unwrap_err();
        assert!(matches!(err, ConvertError::MissingName { line: 2 }));
    }

    #[test]
    fn short_identifier_is_fatal() {
        let err = convert_str("0300004c05,Broken,a:b0,").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Identifier { line: 1, source: IdentError::TooShort(_) }
        ));
    }

    #[test]
    fn resolve_errors_carry_line_and_key() {
        let text = format!("{PS3}\n03000000de2800000112000001000000,Steam,dpup:h0.5,");
        let err = convert_str(&text).unwrap_err();
        match err {
            ConvertError::Resolve { line, key, source } => {
                assert_eq!(line, 2);
                assert_eq!(key, "28de:1201");
                assert!(matches!(source, ResolveError::UnknownHatDirection { bit: 5, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = convert_file("/nonexistent/gamecontrollerdb.txt").unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }
}
