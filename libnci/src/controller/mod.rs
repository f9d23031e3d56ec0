// libnci/src/controller/mod.rs

//! NCI protocol engine: owns the transport, tracks the controller state and
//! turns inbound packets into [`NciEvent`]s.

pub mod engine;
pub mod event;
pub mod state;

pub use engine::Nci;
pub use event::NciEvent;
pub use state::ControllerState;
