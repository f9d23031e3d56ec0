// libnci/src/transport/mod.rs

#[cfg(feature = "i2c")]
pub mod i2c;
pub mod mock;
pub mod traits;

#[cfg(feature = "i2c")]
pub use i2c::Pn7120;
pub use mock::MockTransport;
pub use traits::Transport;
