use crate::utils::error::{Result, ToolError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Glyph cell width in pixels; one row packs into one byte.
pub const GLYPH_WIDTH: usize = 8;
/// Glyph cell height in pixels (rows per table entry).
pub const GLYPH_HEIGHT: usize = 16;
/// Number of character codes in a font table.
pub const GLYPH_COUNT: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl FromStr for MacAddr {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ToolError::InvalidMacAddress {
            value: s.to_string(),
        };

        let mut octets = [0u8; 6];
        let mut parts = s.trim().split(|c: char| c == ':' || c == '-');
        for octet in octets.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self(octets))
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}", a, b, c, d, e, g)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthernetFrame {
    pub destination: MacAddr,
    pub source: MacAddr,
    pub ethertype: u16,
    pub payload: Vec<u8>,
}

/// 8-bit intensities, row-major, `rows * width` long.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphBitmap {
    pub rows: usize,
    pub width: usize,
    pub pixels: Vec<u8>,
}

/// One packed glyph: a byte per row, leftmost pixel in bit 7.
pub type GlyphRows = [u8; GLYPH_HEIGHT];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontTable {
    pub glyphs: Vec<GlyphRows>,
    /// Codes the rasterizer failed on, emitted as zero rows.
    pub blank_fallbacks: usize,
}

impl FontTable {
    pub fn blank() -> Self {
        Self {
            glyphs: vec![[0u8; GLYPH_HEIGHT]; GLYPH_COUNT],
            blank_fallbacks: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueStyle {
    /// `prefix"1.2.3"`
    Quoted,
    /// `prefix1.2.3`
    Bare,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionTarget {
    pub path: String,
    pub prefix: String,
    pub style: ValueStyle,
    #[serde(default)]
    pub terminator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    Updated { line: String },
    Unchanged { line: String },
    PrefixNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mac_addr() {
        let mac: MacAddr = "52:54:00:12:34:56".parse().unwrap();
        assert_eq!(mac.octets(), [0x52, 0x54, 0x00, 0x12, 0x34, 0x56]);

        let mac: MacAddr = "DE-AD-BE-EF-00-01".parse().unwrap();
        assert_eq!(mac.to_string(), "de:ad:be:ef:00:01");
    }

    #[test]
    fn test_reject_bad_mac_addr() {
        for bad in [
            "",
            "52:54:00:12:34",
            "52:54:00:12:34:56:78",
            "5:54:00:12:34:56",
            "zz:54:00:12:34:56",
            "+5:54:00:12:34:56",
        ] {
            assert!(bad.parse::<MacAddr>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_blank_font_table_shape() {
        let table = FontTable::blank();
        assert_eq!(table.glyphs.len(), GLYPH_COUNT);
        assert!(table.glyphs.iter().all(|g| g.iter().all(|&b| b == 0)));
    }
}
