// ============================================================================
// RMB Uppercase Library
// Arabic numerals to Chinese uppercase (大写) currency amounts
// ============================================================================

//! # RMB Uppercase
//!
//! Converts plain arabic numerals into the formal uppercase numerals used on
//! invoices, receipts and cheques, e.g. `123.45` → `壹佰贰拾叁元肆角伍分`.
//!
//! ## Features
//!
//! - **Strict validator** for selected text (`-?\d+(\.\d+)?`, finite)
//! - **Place-value renderer** with zero-run collapsing and 万/亿 grouping
//! - **One rounding rule** for text and float input: nearest cent of the `f64`
//! - **Host adapter** producing a paste-ready action descriptor
//! - **Event hooks** for logging and auditing conversions
//!
//! ## Example
//!
//! ```rust
//! use rmb_uppercase::prelude::*;
//! use std::sync::Arc;
//!
//! assert!(is_valid_number("1001"));
//! assert_eq!(number_to_chinese(1001.0), "壹仟零壹元整");
//!
//! let converter = RmbConverter::new(ConverterConfig::standard(), Arc::new(LoggingEventHandler));
//! let action = converter.populate_action(&Selection::new("5.06")).unwrap();
//! assert_eq!(action.title, "伍元零陆分");
//! assert_eq!(action.after, AfterAction::PasteResult);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Action, AfterAction, ConverterConfig, WholeSuffix};
    pub use crate::engine::{
        create_from_config, is_valid_number, number_to_chinese, RmbConverter,
        RmbConverterBuilder,
    };
    pub use crate::interfaces::{
        populate, CollectingEventHandler, ConversionEvent, EventHandler, LoggingEventHandler,
        NoOpEventHandler, Selection, SelectionInput,
    };
    pub use crate::numeric::{Amount, Cents, NumericError};
}
