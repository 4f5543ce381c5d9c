//! Command-line argument parsing for the headless grid driver
//!
//! Supports:
//! - Opening a file and overriding bytes per line
//! - Placing the cursor and selecting a range
//! - Typing hex digits, deleting, copying
//! - Text or JSON output and writing the edited bytes back out

use clap::Parser;
use std::path::PathBuf;

use crate::export::CopyFormat;
use crate::messages::{DocumentMsg, EditorMsg, LayoutMsg, Msg};

/// Drive the hex grid engine from the command line
#[derive(Parser, Debug)]
#[command(name = "hexgrid", version, about = "Hex grid cursor, selection and edit engine")]
pub struct CliArgs {
    /// File to load
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Bytes per line (overrides the config file)
    #[arg(long, value_name = "N")]
    pub bytes_per_line: Option<usize>,

    /// Put the cursor on a byte offset (decimal or 0x-prefixed hex)
    #[arg(long, value_name = "OFFSET", value_parser = parse_offset)]
    pub cursor: Option<usize>,

    /// Select an inclusive byte range, e.g. `16:31` or `0x10:0x1f`
    #[arg(long, value_name = "START:END", value_parser = parse_range)]
    pub select: Option<(usize, usize)>,

    /// Hex digits to type at the cursor, one nibble each
    #[arg(long = "type", value_name = "DIGITS")]
    pub type_digits: Option<String>,

    /// Delete the selection (or the byte under the cursor)
    #[arg(long)]
    pub delete: bool,

    /// Copy the selection to the system clipboard as `hex` or `text`
    #[arg(long, value_name = "FORMAT")]
    pub copy: Option<CopyFormat>,

    /// Print a JSON state snapshot instead of the text grid
    #[arg(long)]
    pub json: bool,

    /// Write the edited bytes to this file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl CliArgs {
    /// Messages to feed through `update`, in the order they apply
    pub fn messages(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();

        if let Some(bpl) = self.bytes_per_line {
            msgs.push(Msg::Layout(LayoutMsg::SetBytesPerLine(bpl)));
        }
        if let Some(offset) = self.cursor {
            msgs.push(Msg::Editor(EditorMsg::SetCursorPosition(offset)));
        }
        if let Some((start, end)) = self.select {
            msgs.push(Msg::Editor(EditorMsg::SelectRange { start, end }));
        }
        if let Some(digits) = &self.type_digits {
            msgs.extend(
                digits
                    .chars()
                    .map(|ch| Msg::Document(DocumentMsg::HexDigit(ch))),
            );
        }
        if self.delete {
            msgs.push(Msg::Document(DocumentMsg::Delete));
        }
        if let Some(format) = self.copy {
            msgs.push(Msg::Document(DocumentMsg::Copy(format)));
        }

        msgs
    }
}

/// Parse `123` or `0x7b`
pub fn parse_offset(s: &str) -> Result<usize, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid offset '{}': {}", s, e))
}

/// Parse `START:END`
pub fn parse_range(s: &str) -> Result<(usize, usize), String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("invalid range '{}': expected START:END", s))?;
    Ok((parse_offset(start)?, parse_offset(end)?))
}
