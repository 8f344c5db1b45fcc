use crate::core::font::{ArrayNames, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "font-to-array")]
#[command(about = "Convert a bitmap font into a 256x16 byte glyph table for kernel source")]
pub struct FontConfig {
    /// Font file to rasterize (any format FreeType reads)
    #[arg(short, long, default_value = "BmPlus_IBM_VGA_8x16-2x.otb")]
    pub font: String,

    /// Pixel height passed to the rasterizer
    #[arg(long, default_value = "16")]
    pub pixel_size: u32,

    /// Output format: c, rust or json
    #[arg(long, default_value = "c")]
    pub format: String,

    /// Array identifier in the generated source
    #[arg(long, default_value = "font")]
    pub name: String,

    /// Element type for C output
    #[arg(long, default_value = "U8")]
    pub element_type: String,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl FontConfig {
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse()
    }

    pub fn array_names(&self) -> ArrayNames {
        ArrayNames {
            name: self.name.clone(),
            element_type: self.element_type.clone(),
        }
    }
}

impl Validate for FontConfig {
    fn validate(&self) -> Result<()> {
        validate_path("font", &self.font)?;
        validate_range("pixel_size", self.pixel_size, 1, 256)?;
        self.output_format()?;
        validate_non_empty_string("name", &self.name)?;
        validate_non_empty_string("element_type", &self.element_type)?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FontConfig::parse_from(["font-to-array"]);
        assert_eq!(config.pixel_size, 16);
        assert_eq!(config.output_format().unwrap(), OutputFormat::C);
        assert_eq!(config.array_names(), ArrayNames::default());
        assert!(config.output.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let config = FontConfig::parse_from(["font-to-array", "--pixel-size", "0"]);
        assert!(config.validate().is_err());

        let config = FontConfig::parse_from(["font-to-array", "--format", "asm"]);
        assert!(config.validate().is_err());
    }
}
