// Adapters layer: concrete implementations of the domain ports.

pub mod storage;

#[cfg(feature = "net")]
pub mod datalink;

#[cfg(feature = "font")]
pub mod freetype;
