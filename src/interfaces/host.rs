// ============================================================================
// Host Adapter
// Boundary between a text-selection utility and the converter
// ============================================================================

use crate::domain::Action;
use crate::engine::RmbConverter;

/// Input handed over by the host: at least the selected text.
pub trait SelectionInput {
    /// Raw selected text, untrimmed
    fn text(&self) -> &str;
}

impl SelectionInput for str {
    fn text(&self) -> &str {
        self
    }
}

impl SelectionInput for String {
    fn text(&self) -> &str {
        self
    }
}

/// Owned selection as received from a host bridge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub text: String,
}

impl Selection {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl SelectionInput for Selection {
    fn text(&self) -> &str {
        &self.text
    }
}

/// Host entry point with the default configuration.
///
/// Returns `None` when the trimmed selection is not a plain numeral (or lies
/// outside the supported range), so the host shows no action.
///
/// # Example
/// ```
/// use rmb_uppercase::interfaces::{populate, Selection};
///
/// let action = populate(&Selection::new(" 123.45 ")).unwrap();
/// assert_eq!(action.title, "壹佰贰拾叁元肆角伍分");
/// assert!(populate("hello").is_none());
/// ```
pub fn populate<I: SelectionInput + ?Sized>(input: &I) -> Option<Action> {
    RmbConverter::default().populate_action(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AfterAction;

    #[test]
    fn test_populate_valid_selection() {
        let action = populate(&Selection::new("10000")).unwrap();
        assert_eq!(action.title, "壹万元整");
        assert_eq!(action.icon, None);
        assert_eq!(action.after, AfterAction::PasteResult);
        assert_eq!(action.perform(), "壹万元整");
    }

    #[test]
    fn test_populate_trims_selection() {
        let text = String::from("\t5.06\n");
        assert_eq!(populate(&text).unwrap().title, "伍元零陆分");
    }

    #[test]
    fn test_populate_not_applicable() {
        for text in ["", "abc", "12.", "1e5", "1000000000000"] {
            assert!(populate(text).is_none(), "{:?}", text);
        }
    }
}
