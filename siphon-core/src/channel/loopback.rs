use super::Channel;
use crate::error::Result;
use std::collections::VecDeque;

/// Echo channel: every byte sent comes straight back, in order. Stands in
/// for the device in tests and in the CLI's `--loopback` dry-run mode.
pub struct LoopbackChannel {
    fifo: VecDeque<u8>,
}

impl LoopbackChannel {
    pub fn new() -> Self {
        Self {
            fifo: VecDeque::new(),
        }
    }
}

impl Default for LoopbackChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl Channel for LoopbackChannel {
    fn send(&mut self, chunk: &[u8]) -> Result<()> {
        self.fifo.extend(chunk);
        Ok(())
    }

    fn recv_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.fifo.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_in_order() {
        let mut ch = LoopbackChannel::new();
        ch.send(b"abc").unwrap();
        assert_eq!(ch.recv_byte().unwrap(), Some(b'a'));
        assert_eq!(ch.recv_byte().unwrap(), Some(b'b'));
        assert_eq!(ch.recv_byte().unwrap(), Some(b'c'));
    }

    #[test]
    fn empty_fifo_is_the_sentinel() {
        let mut ch = LoopbackChannel::new();
        assert_eq!(ch.recv_byte().unwrap(), None);
        ch.send(&[0x42]).unwrap();
        assert_eq!(ch.recv_byte().unwrap(), Some(0x42));
        assert_eq!(ch.recv_byte().unwrap(), None);
    }
}
