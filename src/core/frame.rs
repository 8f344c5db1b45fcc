use crate::domain::model::{EthernetFrame, MacAddr};
use crate::domain::ports::LinkLayer;
use crate::utils::error::{Result, ToolError};

/// Destination(6) + source(6) + ethertype(2).
pub const HEADER_LEN: usize = 14;

/// Ethertype carried by a bare Ethernet header with a raw payload
/// (configuration test protocol, "loopback").
pub const ETHERTYPE_LOOPBACK: u16 = 0x9000;

impl EthernetFrame {
    pub fn new(destination: MacAddr, source: MacAddr, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            destination,
            source,
            ethertype: ETHERTYPE_LOOPBACK,
            payload: payload.into(),
        }
    }

    pub fn with_ethertype(mut self, ethertype: u16) -> Self {
        self.ethertype = ethertype;
        self
    }

    /// Wire bytes without padding or FCS; the NIC adds both.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.payload.len());
        bytes.extend_from_slice(&self.destination.octets());
        bytes.extend_from_slice(&self.source.octets());
        bytes.extend_from_slice(&self.ethertype.to_be_bytes());
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(ToolError::FrameError {
                message: format!(
                    "{} bytes is shorter than the {}-byte Ethernet header",
                    bytes.len(),
                    HEADER_LEN
                ),
            });
        }

        let mut destination = [0u8; 6];
        let mut source = [0u8; 6];
        destination.copy_from_slice(&bytes[0..6]);
        source.copy_from_slice(&bytes[6..12]);

        Ok(Self {
            destination: MacAddr::new(destination),
            source: MacAddr::new(source),
            ethertype: u16::from_be_bytes([bytes[12], bytes[13]]),
            payload: bytes[HEADER_LEN..].to_vec(),
        })
    }
}

/// Classic 16-bytes-per-line hex dump, used by `send-frame --dry-run`.
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (i, chunk) in bytes.chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
            .collect();
        out.push_str(&format!("{:04x}  {:<47}  {}\n", i * 16, hex.join(" "), ascii));
    }
    out
}

pub struct FrameSender<L: LinkLayer> {
    link: L,
    source_override: Option<MacAddr>,
    ethertype: u16,
}

impl<L: LinkLayer> FrameSender<L> {
    pub fn new(link: L) -> Self {
        Self {
            link,
            source_override: None,
            ethertype: ETHERTYPE_LOOPBACK,
        }
    }

    pub fn with_source(mut self, source: Option<MacAddr>) -> Self {
        self.source_override = source;
        self
    }

    pub fn with_ethertype(mut self, ethertype: u16) -> Self {
        self.ethertype = ethertype;
        self
    }

    /// The source address the frame will carry: the override if set,
    /// otherwise the interface's own hardware address.
    pub fn source_address(&self) -> Result<MacAddr> {
        match self.source_override {
            Some(mac) => Ok(mac),
            None => self.link.mac_address(),
        }
    }

    pub fn build(&self, destination: MacAddr, payload: &[u8]) -> Result<EthernetFrame> {
        let source = self.source_address()?;
        Ok(EthernetFrame::new(destination, source, payload).with_ethertype(self.ethertype))
    }

    /// Builds the frame and transmits it exactly once.
    pub fn send(&mut self, destination: MacAddr, payload: &[u8]) -> Result<EthernetFrame> {
        let frame = self.build(destination, payload)?;
        let bytes = frame.to_bytes();

        tracing::debug!(
            "Sending {} bytes on {}: {} -> {} type {:#06x}",
            bytes.len(),
            self.link.name(),
            frame.source,
            frame.destination,
            frame.ethertype
        );
        self.link.transmit(&bytes)?;
        tracing::info!("📤 Sent {}-byte frame on {}", bytes.len(), self.link.name());

        Ok(frame)
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn into_link(self) -> L {
        self.link
    }
}
