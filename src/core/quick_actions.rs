//! Shortcut phrases offered next to the chat input

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub query: &'static str,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "About Me",
        query: "Tell me about yourself",
    },
    QuickAction {
        label: "Skills",
        query: "What are your skills?",
    },
    QuickAction {
        label: "Projects",
        query: "Show me your projects",
    },
    QuickAction {
        label: "Contact",
        query: "How can I contact you?",
    },
    QuickAction {
        label: "Experience",
        query: "Tell your previous experience",
    },
];

/// Look up a quick action by label, ignoring case and surrounding whitespace
pub fn find(label: &str) -> Option<&'static QuickAction> {
    let label = label.trim();
    QUICK_ACTIONS
        .iter()
        .find(|action| action.label.eq_ignore_ascii_case(label))
}
