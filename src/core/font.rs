use crate::domain::model::{
    FontTable, GlyphBitmap, GlyphRows, GLYPH_COUNT, GLYPH_HEIGHT, GLYPH_WIDTH,
};
use crate::domain::ports::GlyphRasterizer;
use crate::utils::error::{Result, ToolError};
use std::fmt::Write as _;
use std::str::FromStr;

/// Packs the top-left 8x16 cell of a bitmap, one byte per row, MSB first.
/// Any non-zero intensity is "on"; pixels outside the bitmap are "off".
pub fn pack_glyph(bitmap: &GlyphBitmap) -> GlyphRows {
    let mut rows = [0u8; GLYPH_HEIGHT];
    for (y, row) in rows.iter_mut().enumerate() {
        for x in 0..GLYPH_WIDTH {
            if y < bitmap.rows && x < bitmap.width {
                let on = bitmap
                    .pixels
                    .get(y * bitmap.width + x)
                    .is_some_and(|&p| p > 0);
                if on {
                    *row |= 1 << (7 - x);
                }
            }
        }
    }
    rows
}

pub struct FontConverter<R: GlyphRasterizer> {
    rasterizer: R,
}

impl<R: GlyphRasterizer> FontConverter<R> {
    pub fn new(rasterizer: R) -> Self {
        Self { rasterizer }
    }

    /// Rasterizes codes 0..=255; a glyph that fails to render becomes blank.
    pub fn convert(&mut self) -> FontTable {
        let mut table = FontTable::blank();

        for code in 0..GLYPH_COUNT as u32 {
            match self.rasterizer.rasterize(code) {
                Ok(bitmap) => table.glyphs[code as usize] = pack_glyph(&bitmap),
                Err(e) => {
                    tracing::debug!("Glyph {:#04x} falls back to blank: {}", code, e);
                    table.blank_fallbacks += 1;
                }
            }
        }

        if table.blank_fallbacks > 0 {
            tracing::info!(
                "⚠️ {} of {} glyphs missing, emitted as blank",
                table.blank_fallbacks,
                GLYPH_COUNT
            );
        }
        table
    }

    pub fn into_rasterizer(self) -> R {
        self.rasterizer
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    C,
    Rust,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(OutputFormat::C),
            "rust" | "rs" => Ok(OutputFormat::Rust),
            "json" => Ok(OutputFormat::Json),
            other => Err(ToolError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Supported formats: c, rust, json".to_string(),
            }),
        }
    }
}

/// Identifiers used in the generated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayNames {
    pub name: String,
    pub element_type: String,
}

impl Default for ArrayNames {
    fn default() -> Self {
        Self {
            name: "font".to_string(),
            element_type: "U8".to_string(),
        }
    }
}

pub fn render(table: &FontTable, format: OutputFormat, names: &ArrayNames) -> Result<String> {
    match format {
        OutputFormat::C => Ok(render_c(table, names)),
        OutputFormat::Rust => Ok(render_rust(table, names)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string(&table.glyphs)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_c(table: &FontTable, names: &ArrayNames) -> String {
    let mut out = format!(
        "const {} {}[{}][{}] = {{\n",
        names.element_type,
        names.name,
        table.glyphs.len(),
        GLYPH_HEIGHT
    );
    for glyph in &table.glyphs {
        out.push_str("  {");
        for byte in glyph {
            let _ = write!(out, "0x{:02X},", byte);
        }
        out.push_str("},\n");
    }
    out.push_str("};\n");
    out
}

fn render_rust(table: &FontTable, names: &ArrayNames) -> String {
    let mut out = format!(
        "pub const {}: [[u8; {}]; {}] = [\n",
        names.name.to_uppercase(),
        GLYPH_HEIGHT,
        table.glyphs.len()
    );
    for glyph in &table.glyphs {
        let bytes: Vec<String> = glyph.iter().map(|b| format!("0x{:02X}", b)).collect();
        let _ = writeln!(out, "    [{}],", bytes.join(", "));
    }
    out.push_str("];\n");
    out
}
