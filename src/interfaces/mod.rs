// ============================================================================
// Interfaces Module
// Contains all trait definitions and the host boundary
// ============================================================================

mod event_handler;
mod host;

pub use event_handler::{
    CollectingEventHandler, ConversionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
};
pub use host::{populate, Selection, SelectionInput};
