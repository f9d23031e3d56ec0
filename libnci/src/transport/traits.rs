// libnci/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the host bus away from the NCI engine.
///
/// All calls are synchronous. `wait_until_ready` is the only place the
/// engine blocks; how long it may block is the transport's policy.
pub trait Transport {
    /// Write one complete packet. Returns the number of bytes the bus
    /// accepted, which the engine compares against the packet size.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Read up to `buf.len()` bytes. Returns the number of bytes read;
    /// 0 means nothing was available.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Block until the controller signals that a packet is pending.
    fn wait_until_ready(&mut self) -> Result<()>;

    /// Perform a hardware-level reset of the controller. Transports without
    /// a reset line keep the default no-op.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        (**self).write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }

    fn wait_until_ready(&mut self) -> Result<()> {
        (**self).wait_until_ready()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}
