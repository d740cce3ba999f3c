// ============================================================================
// Event Handler Interface
// Defines the contract for observing conversions
// ============================================================================

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the converter
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionEvent {
    /// Selected text converted to an uppercase amount
    Converted {
        input: String,
        output: String,
        timestamp: DateTime<Utc>,
    },

    /// Selected text is not a convertible numeral; no action offered
    Rejected {
        input: String,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for conversion events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ConversionEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        tracing::debug!("Converter event: {:?}", event);
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct CollectingEventHandler {
    events: Mutex<Vec<ConversionEvent>>,
}

impl CollectingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far
    pub fn events(&self) -> Vec<ConversionEvent> {
        self.events.lock().clone()
    }

    /// Remove and return the events seen so far
    pub fn drain(&self) -> Vec<ConversionEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for CollectingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        self.events.lock().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converted(input: &str, output: &str) -> ConversionEvent {
        ConversionEvent::Converted {
            input: input.to_string(),
            output: output.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(converted("100", "壹佰元整"));
        // Should not panic
    }

    #[test]
    fn test_collecting_handler() {
        let handler = CollectingEventHandler::new();
        handler.on_event(converted("1", "壹元整"));
        handler.on_event(ConversionEvent::Rejected {
            input: "abc".to_string(),
            reason: "invalid input".to_string(),
            timestamp: Utc::now(),
        });

        let events = handler.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ConversionEvent::Converted { .. }));
        assert!(matches!(events[1], ConversionEvent::Rejected { .. }));

        assert_eq!(handler.drain().len(), 2);
        assert!(handler.events().is_empty());
    }
}
