use crate::midi::{MidiEngine, MidiMessage, Result};
use log::{debug, info};
use midir::os::unix::VirtualOutput;
use midir::{MidiOutput, MidiOutputConnection};

const CLIENT_NAME: &str = "cubeturner-midi";

/// Virtual output port registered with the system MIDI subsystem
pub struct VirtualPortEngine {
    port_name: String,
    output: MidiOutputConnection,
}

impl VirtualPortEngine {
    /// Creates the virtual port; other MIDI software sees it under `port_name`
    pub fn open(port_name: &str) -> Result<Self> {
        let midi_out = MidiOutput::new(CLIENT_NAME)?;
        let output = midi_out.create_virtual(port_name)?;
        info!("Created virtual MIDI output port: {}", port_name);
        Ok(VirtualPortEngine {
            port_name: port_name.to_string(),
            output,
        })
    }

    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    /// Names of the output ports currently visible, without creating one
    pub fn list_available_ports() -> Result<Vec<String>> {
        let midi_out = MidiOutput::new("cubeturner-midi-port-lister")?;
        let ports = midi_out.ports();
        let port_names = ports
            .iter()
            .filter_map(|p| midi_out.port_name(p).ok())
            .collect();
        Ok(port_names)
    }
}

impl MidiEngine for VirtualPortEngine {
    fn send(&mut self, msg: MidiMessage) -> Result<()> {
        let bytes = msg.to_bytes();
        debug!("Sending {} -> {:02X?}", msg, bytes);
        self.output.send(&bytes)?;
        Ok(())
    }
}

impl Drop for VirtualPortEngine {
    fn drop(&mut self) {
        debug!("Closing virtual MIDI output port: {}", self.port_name);
    }
}
