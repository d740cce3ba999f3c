// ============================================================================
// RMB Converter
// Validates selected text, converts it and reports what happened
// ============================================================================

use super::converter::render_amount;
use crate::domain::{Action, ConverterConfig};
use crate::interfaces::{ConversionEvent, EventHandler, NoOpEventHandler, SelectionInput};
use crate::numeric::{Amount, NumericResult};
use chrono::Utc;
use std::sync::Arc;

/// Conversion service with a fixed configuration and event handler
pub struct RmbConverter {
    /// Output and host behaviour
    config: ConverterConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl RmbConverter {
    /// Create a new converter
    pub fn new(config: ConverterConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Render an amount with this converter's suffix
    pub fn convert_amount(&self, amount: &Amount) -> String {
        render_amount(amount, self.config.whole_suffix)
    }

    /// Parse and convert, reporting why the text was rejected.
    ///
    /// Text goes through the same `f64` split as [`number_to_chinese`], so the
    /// result always matches it for in-range input.
    ///
    /// [`number_to_chinese`]: crate::engine::number_to_chinese
    ///
    /// # Errors
    /// - `InvalidInput` if the trimmed text is not a plain numeral
    /// - `OutOfRange` if the integer part exceeds the hundred-billion range
    pub fn try_convert_text(&self, text: &str) -> NumericResult<String> {
        let amount: Amount = text.trim().parse()?;
        Ok(self.convert_amount(&amount))
    }

    /// Convert selected text, or `None` if it is not applicable
    pub fn convert_text(&self, text: &str) -> Option<String> {
        match self.try_convert_text(text) {
            Ok(output) => {
                self.event_handler.on_event(ConversionEvent::Converted {
                    input: text.to_string(),
                    output: output.clone(),
                    timestamp: Utc::now(),
                });
                Some(output)
            }
            Err(error) => {
                tracing::debug!(%error, "selection is not a convertible numeral");
                self.event_handler.on_event(ConversionEvent::Rejected {
                    input: text.to_string(),
                    reason: error.to_string(),
                    timestamp: Utc::now(),
                });
                None
            }
        }
    }

    /// Build the host action for a selection
    pub fn populate_action<I: SelectionInput + ?Sized>(&self, input: &I) -> Option<Action> {
        self.convert_text(input.text())
            .map(|result| Action::new(result, self.config.after))
    }
}

impl Default for RmbConverter {
    fn default() -> Self {
        Self::new(ConverterConfig::default(), Arc::new(NoOpEventHandler))
    }
}
