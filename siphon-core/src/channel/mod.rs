use crate::error::Result;
use std::time::Duration;

pub mod loopback;
pub mod serial;

/// Upper bound for a single no-data poll on the channel. This is not a
/// deadline for the exchange: a poll that elapses empty yields the no-data
/// sentinel and the caller polls again.
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Clone, Debug)]
pub struct PortParams {
    pub path: String,
    pub baud_rate: u32,
    pub poll_timeout: Duration,
}

/// Byte stream to the transform device. One channel is open per run and
/// released when the value drops, on every exit path.
pub trait Channel: Send {
    /// Write the whole chunk, blocking. Never splits or reorders.
    fn send(&mut self, chunk: &[u8]) -> Result<()>;

    /// One blocking poll for a single byte. `Ok(None)` means the poll
    /// elapsed with nothing received; `Err` is a real I/O failure.
    fn recv_byte(&mut self) -> Result<Option<u8>>;
}

pub enum Backend {
    Serial,
    Loopback,
}

pub fn open_channel(backend: Backend, params: PortParams) -> Result<Box<dyn Channel>> {
    match backend {
        Backend::Serial => Ok(Box::new(serial::SerialChannel::open(&params)?)),
        Backend::Loopback => Ok(Box::new(loopback::LoopbackChannel::new())),
    }
}
