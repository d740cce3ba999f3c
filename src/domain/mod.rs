// ============================================================================
// Domain Models Module
// Glyph tables, configuration and the host action descriptor
// ============================================================================

pub mod action;
pub mod config;
pub mod glyphs;

pub use action::{Action, AfterAction};
pub use config::{ConverterConfig, WholeSuffix};
