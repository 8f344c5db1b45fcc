use crate::domain::model::GlyphBitmap;
use crate::domain::ports::GlyphRasterizer;
use crate::utils::error::{Result, ToolError};
use freetype::bitmap::PixelMode;
use freetype::face::LoadFlag;
use freetype::{Face, Library};
use std::path::Path;

/// FreeType-backed rasterizer. Handles outline fonts as well as bitmap-only
/// containers such as `.otb` and `.pcf`.
pub struct FreeTypeRasterizer {
    // face before library: fields drop in order
    face: Face,
    _library: Library,
}

impl FreeTypeRasterizer {
    pub fn open<P: AsRef<Path>>(path: P, pixel_size: u32) -> Result<Self> {
        let library = Library::init()?;
        let face = library.new_face(path.as_ref().as_os_str(), 0)?;
        face.set_pixel_sizes(0, pixel_size)?;

        tracing::debug!("Loaded font {} at {}px", path.as_ref().display(), pixel_size);

        Ok(Self {
            face,
            _library: library,
        })
    }
}

impl GlyphRasterizer for FreeTypeRasterizer {
    fn rasterize(&mut self, code: u32) -> Result<GlyphBitmap> {
        self.face.load_char(code as usize, LoadFlag::RENDER)?;

        let bitmap = self.face.glyph().bitmap();
        let rows = bitmap.rows().max(0) as usize;
        let width = bitmap.width().max(0) as usize;
        let pitch = bitmap.pitch().unsigned_abs() as usize;
        let buffer = bitmap.buffer();

        let sample: fn(&[u8], usize) -> u8 = match bitmap.pixel_mode()? {
            PixelMode::Gray => |row, x| row.get(x).copied().unwrap_or(0),
            PixelMode::Mono => |row, x| {
                let bit = row.get(x / 8).map_or(0, |byte| (byte >> (7 - x % 8)) & 1);
                bit * 0xFF
            },
            _ => {
                return Err(ToolError::GlyphError {
                    code,
                    message: "unsupported pixel mode".to_string(),
                })
            }
        };

        let mut pixels = Vec::with_capacity(rows * width);
        for y in 0..rows {
            let start = (y * pitch).min(buffer.len());
            let end = (start + pitch).min(buffer.len());
            let row = &buffer[start..end];
            for x in 0..width {
                pixels.push(sample(row, x));
            }
        }

        Ok(GlyphBitmap {
            rows,
            width,
            pixels,
        })
    }
}
