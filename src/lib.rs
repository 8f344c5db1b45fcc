pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{FontConfig, SendFrameConfig, VersionConfig};

#[cfg(feature = "net")]
pub use adapters::datalink::DatalinkInterface;

#[cfg(feature = "font")]
pub use adapters::freetype::FreeTypeRasterizer;

pub use adapters::storage::LocalStorage;
pub use crate::core::{font::FontConverter, frame::FrameSender, version::VersionPatcher};
pub use domain::model::{EthernetFrame, FontTable, MacAddr, PatchOutcome, VersionTarget};
pub use utils::error::{Result, ToolError};
