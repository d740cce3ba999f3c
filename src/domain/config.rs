// ============================================================================
// Converter Configuration
// Output glyph choices and host behaviour for a conversion service
// ============================================================================

use super::action::AfterAction;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Whole Amount Suffix
// ============================================================================

/// Glyph closing an amount with no jiao or fen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WholeSuffix {
    /// 整 - the usual form on invoices and receipts
    #[default]
    Zheng,

    /// 正 - accepted on bank cheques and some older forms
    ZhengAlt,
}

impl WholeSuffix {
    pub const fn glyph(self) -> &'static str {
        match self {
            WholeSuffix::Zheng => "整",
            WholeSuffix::ZhengAlt => "正",
        }
    }
}

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration for an [`RmbConverter`](crate::engine::RmbConverter)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Suffix written when the amount has no fractional part
    pub whole_suffix: WholeSuffix,

    /// What the host should do with the result once the action runs
    pub after: AfterAction,
}

impl ConverterConfig {
    /// Create a new configuration
    pub fn new(whole_suffix: WholeSuffix, after: AfterAction) -> Self {
        Self {
            whole_suffix,
            after,
        }
    }

    /// Builder method: Set the whole-amount suffix
    pub fn with_whole_suffix(mut self, suffix: WholeSuffix) -> Self {
        self.whole_suffix = suffix;
        self
    }

    /// Builder method: Set the after-action directive
    pub fn with_after_action(mut self, after: AfterAction) -> Self {
        self.after = after;
        self
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Invoice style
    /// - 整 suffix
    /// - Result pasted over the selection
    pub fn standard() -> Self {
        Self::default()
    }

    /// Cheque style
    /// - 正 suffix
    /// - Result copied, selection left untouched
    pub fn cheque() -> Self {
        Self::new(WholeSuffix::ZhengAlt, AfterAction::CopyResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConverterConfig::default();
        assert_eq!(config.whole_suffix, WholeSuffix::Zheng);
        assert_eq!(config.after, AfterAction::PasteResult);
        assert_eq!(config, ConverterConfig::standard());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ConverterConfig::standard()
            .with_whole_suffix(WholeSuffix::ZhengAlt)
            .with_after_action(AfterAction::CopyResult);

        assert_eq!(config, ConverterConfig::cheque());
        assert_eq!(config.whole_suffix.glyph(), "正");
    }
}
