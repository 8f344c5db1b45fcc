use crate::domain::model::{GlyphBitmap, MacAddr};
use crate::utils::error::Result;

/// A link-layer interface able to put raw Ethernet frames on the wire.
pub trait LinkLayer {
    fn name(&self) -> &str;
    fn mac_address(&self) -> Result<MacAddr>;
    fn transmit(&mut self, frame: &[u8]) -> Result<()>;
}

/// Renders one character code of a font into an intensity bitmap.
pub trait GlyphRasterizer {
    fn rasterize(&mut self, code: u32) -> Result<GlyphBitmap>;
}

/// Whole-file text access for the version patcher.
pub trait TextStore {
    fn read_to_string(&self, path: &str) -> Result<String>;
    fn write(&self, path: &str, contents: &str) -> Result<()>;
}
