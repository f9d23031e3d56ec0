// libnci/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written packets and serves
/// queued controller bytes.
///
/// Inbound bytes form one stream, so a test can queue a header without its
/// payload, or a truncated payload, to exercise the engine's read checks.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub rx: VecDeque<u8>,
    /// Testing hook: number of upcoming writes that report one byte less
    /// than requested
    pub short_writes: usize,
    /// Testing hook: number of upcoming writes that fail outright
    pub write_failures: usize,
    /// Number of hardware resets requested
    pub resets: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a complete packet (or any raw bytes) for the engine to read.
    pub fn push_frame(&mut self, frame: Vec<u8>) {
        self.rx.extend(frame);
    }

    /// Set how many subsequent writes should come up short (for tests).
    pub fn set_short_writes(&mut self, n: usize) {
        self.short_writes = n;
    }

    /// Set how many subsequent writes should fail (for tests).
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Bytes still waiting to be read.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::Transport("simulated write failure".into()));
        }
        self.sent.push(data.to_vec());
        if self.short_writes > 0 {
            self.short_writes -= 1;
            return Ok(data.len().saturating_sub(1));
        }
        Ok(data.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = buf.len().min(self.rx.len());
        for (slot, b) in buf.iter_mut().zip(self.rx.drain(..n)) {
            *slot = b;
        }
        Ok(n)
    }

    fn wait_until_ready(&mut self) -> Result<()> {
        if self.rx.is_empty() {
            Err(Error::Timeout)
        } else {
            Ok(())
        }
    }

    fn reset(&mut self) -> Result<()> {
        // Reset clears recorded writes but keeps queued input so tests can
        // pre-seed replies before the session resets the controller.
        self.sent.clear();
        self.resets += 1;
        Ok(())
    }
}
