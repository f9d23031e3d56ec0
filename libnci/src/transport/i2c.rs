// libnci/src/transport/i2c.rs

//! NCI over I2C for PN7120-style controllers.
//!
//! The controller raises IRQ (active high) while a packet is pending and is
//! held in reset while VEN is low. Each NCI packet is one I2C write; reads
//! may be split (header, then payload) as the engine does. Packet dumps are
//! left to the engine.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, InputPin, OutputPin};
use embedded_hal::i2c::{Error as _, I2c};

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// 7-bit I2C address of the PN7120 with both address pins low.
pub const PN7120_DEFAULT_ADDRESS: u8 = 0x28;

/// IRQ polling period
const IRQ_POLL_INTERVAL_MS: u32 = 10;
/// VEN settle time after a level change
const VEN_SETTLE_MS: u32 = 10;

pub struct Pn7120<I2C, IRQ, VEN, D> {
    i2c: I2C,
    irq: IRQ,
    ven: VEN,
    delay: D,
    address: u8,
    /// Give up waiting for IRQ after this many polls; `None` waits forever.
    max_polls: Option<u32>,
}

impl<I2C, IRQ, VEN, D> Pn7120<I2C, IRQ, VEN, D>
where
    I2C: I2c,
    IRQ: InputPin,
    VEN: OutputPin,
    D: DelayNs,
{
    pub fn new(i2c: I2C, irq: IRQ, ven: VEN, delay: D, address: u8) -> Self {
        Self {
            i2c,
            irq,
            ven,
            delay,
            address,
            max_polls: None,
        }
    }

    /// Bound `wait_until_ready` to `polls` IRQ checks, after which it fails
    /// with `Error::Timeout`.
    pub fn with_wait_limit(mut self, polls: u32) -> Self {
        self.max_polls = Some(polls);
        self
    }

    /// Power the controller up: VEN must be high before the first packet.
    pub fn init(&mut self) -> Result<()> {
        self.ven
            .set_high()
            .map_err(|e| Error::Transport(format!("VEN: {:?}", e.kind())))?;
        self.delay.delay_ms(VEN_SETTLE_MS);
        Ok(())
    }

    /// Give the bus and pins back.
    pub fn release(self) -> (I2C, IRQ, VEN, D) {
        (self.i2c, self.irq, self.ven, self.delay)
    }

    fn irq_high(&mut self) -> Result<bool> {
        self.irq
            .is_high()
            .map_err(|e| Error::Transport(format!("IRQ: {:?}", e.kind())))
    }
}

impl<I2C, IRQ, VEN, D> Transport for Pn7120<I2C, IRQ, VEN, D>
where
    I2C: I2c,
    IRQ: InputPin,
    VEN: OutputPin,
    D: DelayNs,
{
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.i2c
            .write(self.address, data)
            .map_err(|e| Error::Transport(format!("i2c write: {:?}", e.kind())))?;
        Ok(data.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.i2c
            .read(self.address, buf)
            .map_err(|e| Error::Transport(format!("i2c read: {:?}", e.kind())))?;
        Ok(buf.len())
    }

    fn wait_until_ready(&mut self) -> Result<()> {
        let mut polls = 0u32;
        while !self.irq_high()? {
            if let Some(max) = self.max_polls {
                if polls >= max {
                    return Err(Error::Timeout);
                }
            }
            polls = polls.saturating_add(1);
            self.delay.delay_ms(IRQ_POLL_INTERVAL_MS);
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        log::debug!("PN7120 hard reset");
        self.ven
            .set_low()
            .map_err(|e| Error::Transport(format!("VEN: {:?}", e.kind())))?;
        self.delay.delay_ms(VEN_SETTLE_MS);
        self.init()
    }
}
