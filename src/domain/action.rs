// ============================================================================
// Action Descriptor
// What the host text-selection utility shows and does for a conversion
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Directive telling the host what to do with the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AfterAction {
    /// Insert the result in place of the selection
    #[default]
    PasteResult,

    /// Put the result on the clipboard only
    CopyResult,
}

impl AfterAction {
    /// Host directive name, e.g. `paste-result`
    pub const fn as_str(self) -> &'static str {
        match self {
            AfterAction::PasteResult => "paste-result",
            AfterAction::CopyResult => "copy-result",
        }
    }
}

/// An action offered to the host for a selected numeral.
///
/// The title is the converted text itself and the icon is suppressed, so the
/// host shows the result as the button label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Action {
    /// Display title (the converted string)
    pub title: String,

    /// Icon directive; `None` shows the title text instead
    pub icon: Option<String>,

    /// Post-action directive
    pub after: AfterAction,
}

impl Action {
    pub fn new(result: String, after: AfterAction) -> Self {
        Self {
            title: result,
            icon: None,
            after,
        }
    }

    /// Run the action: returns the text handed back to the host.
    pub fn perform(&self) -> &str {
        &self.title
    }

    /// JSON descriptor for hosts that talk over a bridge.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
