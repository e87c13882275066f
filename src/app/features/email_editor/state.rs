//! Mode-switching state machine behind the composite email field.
//!
//! `transition` is pure: it takes the current editor state, the parent-owned
//! [`EmailParts`] and one input event, and returns the next state plus the
//! ordered part changes the parent should apply.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::app::domain::EmailParts;

/// Which control drives the domain half.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EditorMode {
    /// Domain picked from the known list; the text field edits the local part.
    #[default]
    Preset,
    /// Full address typed freely and split by the editor.
    Custom,
}

/// Component-local editor state. Never holds the authoritative address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pub mode: EditorMode,
    /// Last free text typed in `Custom` mode, echoed back verbatim.
    pub custom_buffer: String,
}

/// One discrete user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// A known domain (starting with `@`) was picked in the select.
    SelectDomain(String),
    /// The "other" entry was picked in the select.
    SelectOther,
    /// The text field now contains this value.
    Input(String),
}

/// A proposed update to one half of the parent's address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartChange {
    Local(String),
    Domain(String),
}

/// Result of feeding one event to the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: EditorState,
    /// Changes in emission order. A parent that applies them one by one must
    /// apply all of them against the latest value, or the earlier one is lost.
    pub changes: Vec<PartChange>,
}

impl Transition {
    /// Apply every change to `parts` as one combined update.
    pub fn apply(&self, parts: &mut EmailParts) {
        for change in &self.changes {
            match change {
                PartChange::Local(v) => parts.set_local_part(v.as_str()),
                PartChange::Domain(v) => parts.set_domain_part(v.as_str()),
            }
        }
    }

    /// Replay the changes through the two-callback contract, in order.
    pub fn emit<S: EmailPartsSink + ?Sized>(&self, sink: &mut S) {
        for change in &self.changes {
            match change {
                PartChange::Local(v) => sink.on_local_part_change(v),
                PartChange::Domain(v) => sink.on_domain_part_change(v),
            }
        }
    }
}

/// Receiver of the editor's proposed changes, i.e. the containing form.
pub trait EmailPartsSink {
    fn on_local_part_change(&mut self, value: &str);
    fn on_domain_part_change(&mut self, value: &str);

    /// Atomic variant. The default falls back to domain-then-local.
    fn on_email_parts_change(&mut self, local_part: &str, domain_part: &str) {
        self.on_domain_part_change(domain_part);
        self.on_local_part_change(local_part);
    }
}

impl EmailPartsSink for EmailParts {
    fn on_local_part_change(&mut self, value: &str) {
        self.set_local_part(value);
    }

    fn on_domain_part_change(&mut self, value: &str) {
        self.set_domain_part(value);
    }

    fn on_email_parts_change(&mut self, local_part: &str, domain_part: &str) {
        *self = EmailParts::new(local_part, domain_part);
    }
}

/// Split free text at its rightmost `@`. Order of the returned changes is part
/// of the contract: domain first whenever an `@` is present, local first otherwise.
fn split_custom_input(value: &str) -> Vec<PartChange> {
    match value.rfind('@') {
        Some(i) => {
            let local = &value[..i];
            let domain = &value[i..];
            tracing::debug!(local, domain, "parsed custom email input");
            vec![
                PartChange::Domain(domain.to_string()),
                PartChange::Local(local.to_string()),
            ]
        }
        None => {
            tracing::debug!(local = value, "custom email input has no domain yet");
            vec![
                PartChange::Local(value.to_string()),
                PartChange::Domain(String::new()),
            ]
        }
    }
}

/// Advance the machine by one event.
pub fn transition(state: &EditorState, parts: &EmailParts, event: EditorEvent) -> Transition {
    match event {
        EditorEvent::SelectDomain(domain) => Transition {
            state: EditorState {
                mode: EditorMode::Preset,
                custom_buffer: String::new(),
            },
            changes: vec![PartChange::Domain(domain)],
        },
        EditorEvent::SelectOther => {
            let custom_buffer = if parts.is_complete() {
                parts.compose()
            } else {
                String::new()
            };
            Transition {
                state: EditorState {
                    mode: EditorMode::Custom,
                    custom_buffer,
                },
                changes: Vec::new(),
            }
        }
        EditorEvent::Input(value) => match state.mode {
            EditorMode::Custom => Transition {
                changes: split_custom_input(&value),
                state: EditorState {
                    mode: EditorMode::Custom,
                    custom_buffer: value,
                },
            },
            EditorMode::Preset => Transition {
                state: state.clone(),
                changes: vec![PartChange::Local(value)],
            },
        },
    }
}
