//! Text formatting for clipboard export and the char band
//!
//! The grid hands out raw byte slices; this module turns them into the text
//! that goes on the clipboard or into the char column.

use serde::{Deserialize, Serialize};

/// Clipboard text format for a copied selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyFormat {
    /// Uppercase hex pairs separated by spaces: `"DE AD BE EF"`
    #[default]
    Hex,
    /// Printable ASCII verbatim, everything else as `.`
    Text,
}

impl CopyFormat {
    /// Format bytes for the clipboard
    pub fn format(self, bytes: &[u8]) -> String {
        match self {
            CopyFormat::Hex => format_hex(bytes),
            CopyFormat::Text => format_text(bytes),
        }
    }
}

impl std::str::FromStr for CopyFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(CopyFormat::Hex),
            "text" | "ascii" => Ok(CopyFormat::Text),
            other => Err(format!("unknown copy format '{}' (expected hex or text)", other)),
        }
    }
}

/// `"DE AD BE EF"`
pub fn format_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{:02X}", byte));
    }
    out
}

/// Printable ASCII (0x20..=0x7E) verbatim, anything else as `.`
pub fn format_text(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if (0x20..0x7F).contains(&b) { b as char } else { '.' })
        .collect()
}

/// Glyph shown in the char band for a byte.
///
/// Bytes are displayed as Latin-1. Control characters (C0 and C1), DEL and
/// the soft hyphen are shown as `.`.
pub fn display_char(byte: u8) -> char {
    match byte {
        0x00..=0x1F | 0x7F..=0x9F | 0xAD => '.',
        _ => byte as char,
    }
}

/// Hex text of a byte as shown in the hex band (lowercase)
pub fn display_hex(byte: u8) -> String {
    format!("{:02x}", byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(&[0xDE, 0xAD, 0x0F]), "DE AD 0F");
        assert_eq!(format_hex(&[]), "");
    }

    #[test]
    fn test_format_text_masks_non_printable() {
        assert_eq!(format_text(b"Hi\x00\x7F~ "), "Hi..~ ");
        assert_eq!(format_text(&[0xE9]), ".");
    }

    #[test]
    fn test_display_char_latin1() {
        assert_eq!(display_char(b'A'), 'A');
        assert_eq!(display_char(0x0A), '.');
        assert_eq!(display_char(0x85), '.');
        assert_eq!(display_char(0xAD), '.');
        assert_eq!(display_char(0xE9), 'é');
        assert_eq!(display_char(0xA0), '\u{A0}');
    }

    #[test]
    fn test_copy_format_from_str() {
        assert_eq!("HEX".parse::<CopyFormat>(), Ok(CopyFormat::Hex));
        assert_eq!("ascii".parse::<CopyFormat>(), Ok(CopyFormat::Text));
        assert!("binary".parse::<CopyFormat>().is_err());
    }

    #[test]
    fn test_copy_format_dispatch() {
        assert_eq!(CopyFormat::Hex.format(b"AB"), "41 42");
        assert_eq!(CopyFormat::Text.format(b"AB"), "AB");
    }
}
