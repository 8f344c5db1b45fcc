use crate::domain::model::MacAddr;
use crate::domain::ports::LinkLayer;
use crate::utils::error::{Result, ToolError};
use pnet_datalink::{Channel, DataLinkSender, NetworkInterface};

/// A named host interface with an open Ethernet channel (AF_PACKET on Linux).
pub struct DatalinkInterface {
    interface: NetworkInterface,
    tx: Box<dyn DataLinkSender>,
}

/// Looks up an interface by name without opening a socket.
pub fn find_interface(name: &str) -> Result<NetworkInterface> {
    pnet_datalink::interfaces()
        .into_iter()
        .find(|iface| iface.name == name)
        .ok_or_else(|| ToolError::InterfaceNotFound {
            name: name.to_string(),
        })
}

/// Hardware address of a named interface, if it has one.
pub fn interface_mac(name: &str) -> Result<MacAddr> {
    let interface = find_interface(name)?;
    mac_of(&interface)
}

fn mac_of(interface: &NetworkInterface) -> Result<MacAddr> {
    interface
        .mac
        .map(|mac| MacAddr::new(mac.octets()))
        .ok_or_else(|| ToolError::InterfaceError {
            name: interface.name.clone(),
            message: "interface has no hardware address".to_string(),
        })
}

impl DatalinkInterface {
    pub fn open(name: &str) -> Result<Self> {
        let interface = find_interface(name)?;
        tracing::debug!("Opening datalink channel on {}", interface.name);

        let tx = match pnet_datalink::channel(&interface, Default::default()) {
            Ok(Channel::Ethernet(tx, _rx)) => tx,
            #[allow(unreachable_patterns)]
            Ok(_) => {
                return Err(ToolError::InterfaceError {
                    name: name.to_string(),
                    message: "unsupported channel type".to_string(),
                })
            }
            Err(e) => {
                return Err(ToolError::InterfaceError {
                    name: name.to_string(),
                    message: e.to_string(),
                })
            }
        };

        Ok(Self { interface, tx })
    }
}

impl LinkLayer for DatalinkInterface {
    fn name(&self) -> &str {
        &self.interface.name
    }

    fn mac_address(&self) -> Result<MacAddr> {
        mac_of(&self.interface)
    }

    fn transmit(&mut self, frame: &[u8]) -> Result<()> {
        let transmit_error = |message: String| ToolError::TransmitError {
            name: self.interface.name.clone(),
            message,
        };

        match self.tx.send_to(frame, None) {
            Some(Ok(())) => Ok(()),
            Some(Err(e)) => Err(transmit_error(e.to_string())),
            None => Err(transmit_error("send buffer unavailable".to_string())),
        }
    }
}
