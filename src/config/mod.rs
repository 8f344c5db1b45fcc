#[cfg(feature = "cli")]
pub mod font;
#[cfg(feature = "cli")]
pub mod frame;
pub mod toml_config;
#[cfg(feature = "cli")]
pub mod version;

#[cfg(feature = "cli")]
pub use font::FontConfig;
#[cfg(feature = "cli")]
pub use frame::SendFrameConfig;
#[cfg(feature = "cli")]
pub use version::VersionConfig;
