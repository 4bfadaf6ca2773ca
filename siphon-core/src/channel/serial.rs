use super::{Channel, PortParams};
use crate::error::Result;
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use std::io::{self, Read, Write};

/// Channel over a real serial device. 8 data bits, no parity, one stop bit,
/// no flow control (device defaults on the original rig).
pub struct SerialChannel {
    port: Box<dyn SerialPort>,
}

impl SerialChannel {
    pub fn open(params: &PortParams) -> Result<Self> {
        let port = serialport::new(&params.path, params.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(params.poll_timeout)
            .open()?;
        tracing::info!(path = %params.path, baud = params.baud_rate, "serial port open");
        Ok(Self { port })
    }
}

impl Channel for SerialChannel {
    fn send(&mut self, chunk: &[u8]) -> Result<()> {
        self.port.write_all(chunk)?;
        self.port.flush()?;
        Ok(())
    }

    fn recv_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.port.read(&mut byte) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(byte[0])),
            // An empty poll is the no-data sentinel, not a failure.
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
