use crate::domain::model::MacAddr;
use crate::utils::error::{Result, ToolError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "send-frame")]
#[command(about = "Send a single raw Ethernet frame, e.g. to exercise a virtual RTL8139")]
pub struct SendFrameConfig {
    /// Interface to transmit on
    #[arg(short, long, default_value = "tap0")]
    pub interface: String,

    /// Destination MAC address
    #[arg(short, long, default_value = "52:54:00:12:34:56")]
    pub destination: String,

    /// Source MAC address (defaults to the interface's own address)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Payload text
    #[arg(short, long, default_value = "Hello RTL8139!")]
    pub payload: String,

    /// Ethertype, decimal or 0x-prefixed hex
    #[arg(long, default_value = "0x9000")]
    pub ethertype: String,

    /// Build and print the frame without sending it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl SendFrameConfig {
    pub fn destination_mac(&self) -> Result<MacAddr> {
        self.destination.parse()
    }

    pub fn source_mac(&self) -> Result<Option<MacAddr>> {
        self.source.as_deref().map(str::parse).transpose()
    }

    pub fn ethertype_value(&self) -> Result<u16> {
        parse_ethertype(&self.ethertype)
    }
}

pub fn parse_ethertype(value: &str) -> Result<u16> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => trimmed.parse::<u16>(),
    };

    parsed.map_err(|e| ToolError::InvalidConfigValueError {
        field: "ethertype".to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

impl Validate for SendFrameConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("interface", &self.interface)?;
        self.destination_mac()?;
        self.source_mac()?;
        self.ethertype_value()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_rtl8139_setup() {
        let config = SendFrameConfig::parse_from(["send-frame"]);
        assert_eq!(config.interface, "tap0");
        assert_eq!(config.destination_mac().unwrap().to_string(), "52:54:00:12:34:56");
        assert_eq!(config.payload, "Hello RTL8139!");
        assert_eq!(config.ethertype_value().unwrap(), 0x9000);
        assert!(config.source_mac().unwrap().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_destination_rejected() {
        let config = SendFrameConfig::parse_from(["send-frame", "--destination", "52:54:00"]);
        assert!(matches!(
            config.validate(),
            Err(ToolError::InvalidMacAddress { .. })
        ));
    }

    #[test]
    fn test_parse_ethertype() {
        assert_eq!(parse_ethertype("0x88B5").unwrap(), 0x88b5);
        assert_eq!(parse_ethertype("2048").unwrap(), 0x0800);
        assert!(parse_ethertype("0x10000").is_err());
        assert!(parse_ethertype("ipv4").is_err());
    }
}
