pub mod font;
pub mod frame;
pub mod version;

pub use crate::domain::model::{EthernetFrame, FontTable, GlyphBitmap, MacAddr, VersionTarget};
pub use crate::domain::ports::{GlyphRasterizer, LinkLayer, TextStore};
pub use crate::utils::error::Result;
