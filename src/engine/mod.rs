// ============================================================================
// Engine Module
// Contains the validator, the converter and the conversion service
// ============================================================================

mod converter;
mod rmb_converter;
mod validator;

pub mod factory;

pub use converter::{number_to_chinese, render_amount};
pub use factory::{create_from_config, RmbConverterBuilder};
pub use rmb_converter::RmbConverter;
pub use validator::is_valid_number;
