// libnci/src/tags/state.rs

use derive_more::Display;

/// Where the session is inside the current command family.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    #[display(fmt = "NONE")]
    None,
    #[display(fmt = "INIT_RESET")]
    InitReset,
    #[display(fmt = "INIT_INIT")]
    InitInit,
    #[display(fmt = "INIT_DONE")]
    InitDone,
    #[display(fmt = "DISCOVER_MAP")]
    DiscoverMap,
    #[display(fmt = "DISCOVER")]
    Discover,
    #[display(fmt = "DISCOVER_NTF")]
    DiscoverNtf,
    #[display(fmt = "DISCOVER_ACTIVATED")]
    DiscoverActivated,
    #[display(fmt = "DEACTIVATE")]
    Deactivate,
    #[display(fmt = "DEACTIVATE_RSP")]
    DeactivateRsp,
    #[display(fmt = "DEACTIVATE_NTF")]
    DeactivateNtf,
    #[display(fmt = "DUMP")]
    Dump,
    #[display(fmt = "DUMP_RSP")]
    DumpRsp,
}

/// The user-level operation an inbound event is routed to.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommandFamily {
    #[default]
    #[display(fmt = "NONE")]
    None,
    #[display(fmt = "RESET")]
    Reset,
    #[display(fmt = "DISCOVER")]
    Discover,
    #[display(fmt = "DEACTIVATE")]
    Deactivate,
    #[display(fmt = "DUMP")]
    Dump,
}
