// ============================================================================
// Converter Factory
// Creates conversion services with proper configuration
// ============================================================================

use crate::domain::config::{ConverterConfig, WholeSuffix};
use crate::domain::AfterAction;
use crate::engine::RmbConverter;
use crate::interfaces::{EventHandler, NoOpEventHandler};
use std::sync::Arc;

/// Creates a converter from configuration
///
/// # Example
/// ```
/// use rmb_uppercase::prelude::*;
/// use std::sync::Arc;
///
/// let converter = create_from_config(ConverterConfig::cheque(), Arc::new(NoOpEventHandler));
/// assert_eq!(converter.convert_text("100").unwrap(), "壹佰元正");
/// ```
pub fn create_from_config(
    config: ConverterConfig,
    event_handler: Arc<dyn EventHandler>,
) -> RmbConverter {
    tracing::trace!(?config, "creating converter");
    RmbConverter::new(config, event_handler)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating converters with fluent API
///
/// # Example
/// ```
/// use rmb_uppercase::prelude::*;
/// use std::sync::Arc;
///
/// let converter = RmbConverterBuilder::new()
///     .zheng_alt_suffix()
///     .copy_result()
///     .build(Arc::new(LoggingEventHandler));
///
/// assert_eq!(converter.convert_text("5.06").unwrap(), "伍元零陆分");
/// ```
#[derive(Debug, Default)]
pub struct RmbConverterBuilder {
    config: ConverterConfig,
}

impl RmbConverterBuilder {
    /// Create a new builder with the standard configuration
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Output Configuration
    // ========================================================================

    /// Close whole amounts with 整 (default)
    pub fn zheng_suffix(mut self) -> Self {
        self.config.whole_suffix = WholeSuffix::Zheng;
        self
    }

    /// Close whole amounts with 正
    pub fn zheng_alt_suffix(mut self) -> Self {
        self.config.whole_suffix = WholeSuffix::ZhengAlt;
        self
    }

    // ========================================================================
    // Host Configuration
    // ========================================================================

    /// Paste the result over the selection (default)
    pub fn paste_result(mut self) -> Self {
        self.config.after = AfterAction::PasteResult;
        self
    }

    /// Copy the result without touching the selection
    pub fn copy_result(mut self) -> Self {
        self.config.after = AfterAction::CopyResult;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply cheque-style configuration
    pub fn cheque_style() -> Self {
        Self {
            config: ConverterConfig::cheque(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> RmbConverter {
        create_from_config(self.config, event_handler)
    }

    /// Build the converter with no event handling
    pub fn build_silent(self) -> RmbConverter {
        self.build(Arc::new(NoOpEventHandler))
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_from_config() {
        let converter = create_from_config(ConverterConfig::standard(), Arc::new(NoOpEventHandler));
        assert_eq!(converter.convert_text("10000").as_deref(), Some("壹万元整"));
    }

    #[test]
    fn test_builder_pattern() {
        let builder = RmbConverterBuilder::new().zheng_alt_suffix().copy_result();
        assert_eq!(builder.get_config(), &ConverterConfig::cheque());

        let converter = builder.build_silent();
        let action = converter.populate_action("42").unwrap();
        assert_eq!(action.title, "肆拾贰元正");
        assert_eq!(action.after, AfterAction::CopyResult);
    }

    #[test]
    fn test_builder_overrides_preset() {
        let converter = RmbConverterBuilder::cheque_style()
            .zheng_suffix()
            .paste_result()
            .build_silent();

        assert_eq!(converter.config(), &ConverterConfig::standard());
    }
}
