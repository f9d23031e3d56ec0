// libnci/src/controller/state.rs

use derive_more::Display;

/// Controller state as seen by the host.
///
/// `None -> Reset -> Idle -> Discovery -> PollActive`, and back to
/// `Discovery` on deactivation. Only successfully processed responses and
/// notifications move it.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControllerState {
    #[default]
    #[display(fmt = "NONE")]
    None,
    #[display(fmt = "RFST_RESET")]
    Reset,
    #[display(fmt = "RFST_IDLE")]
    Idle,
    #[display(fmt = "RFST_DISCOVERY")]
    Discovery,
    #[display(fmt = "RFST_POLL_ACTIVE")]
    PollActive,
}
