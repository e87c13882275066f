//! Composite email input: a text field paired with a domain select.
//!
//! In preset mode the select owns the domain and the text field edits only the
//! local part. Picking "other" switches to a single free-text field that is
//! split back into local and domain parts on every keystroke.

pub mod domains;
pub mod state;

pub use domains::{DomainChoice, DomainListError, KnownDomains, OTHER_CHOICE};
pub use state::{transition, EditorEvent, EditorMode, EditorState, EmailPartsSink, PartChange, Transition};

use crate::app::domain::EmailParts;

/// Placeholder shown in custom mode, and in the preview when nothing was typed.
pub const CUSTOM_PLACEHOLDER: &str = "correo@ejemplo.com";

/// Placeholder shown for the local part in preset mode.
pub const PRESET_PLACEHOLDER: &str = "usuario";

/// Editor instance: the state machine plus its domain list.
#[derive(Debug, Clone, Default)]
pub struct EmailEditor {
    domains: KnownDomains,
    state: EditorState,
}

impl EmailEditor {
    pub fn new(domains: KnownDomains) -> Self {
        Self {
            domains,
            state: EditorState::default(),
        }
    }

    pub fn domains(&self) -> &KnownDomains {
        &self.domains
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn mode(&self) -> EditorMode {
        self.state.mode
    }

    /// Feed one event and apply the resulting changes to `parts` atomically.
    pub fn handle(&mut self, event: EditorEvent, parts: &mut EmailParts) -> Transition {
        let t = transition(&self.state, parts, event);
        t.apply(parts);
        self.state = t.state.clone();
        t
    }

    /// Same as [`handle`](Self::handle) but reports through a two-callback sink.
    pub fn handle_with_sink<S: EmailPartsSink + ?Sized>(
        &mut self,
        event: EditorEvent,
        parts: &EmailParts,
        sink: &mut S,
    ) -> Transition {
        let t = transition(&self.state, parts, event);
        t.emit(sink);
        self.state = t.state.clone();
        t
    }

    /// Handle a raw select value. Values the select never offers are ignored.
    pub fn select(&mut self, value: &str, parts: &mut EmailParts) -> Option<Transition> {
        let event = match self.domains.choice(value)? {
            DomainChoice::Known(d) => EditorEvent::SelectDomain(d),
            DomainChoice::Other => EditorEvent::SelectOther,
        };
        Some(self.handle(event, parts))
    }

    pub fn input(&mut self, value: impl Into<String>, parts: &mut EmailParts) -> Transition {
        self.handle(EditorEvent::Input(value.into()), parts)
    }

    /// Back to preset mode with an empty buffer, as when the form resets.
    pub fn reset(&mut self) {
        self.state = EditorState::default();
    }

    /// Value of the text field.
    pub fn input_value<'a>(&'a self, parts: &'a EmailParts) -> &'a str {
        match self.state.mode {
            EditorMode::Custom => &self.state.custom_buffer,
            EditorMode::Preset => parts.local_part(),
        }
    }

    /// Value of the domain select.
    pub fn select_value<'a>(&self, parts: &'a EmailParts) -> &'a str {
        match self.state.mode {
            EditorMode::Custom => OTHER_CHOICE,
            EditorMode::Preset => parts.domain_part(),
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self.state.mode {
            EditorMode::Custom => CUSTOM_PLACEHOLDER,
            EditorMode::Preset => PRESET_PLACEHOLDER,
        }
    }

    /// HTML input type hint for the text field.
    pub fn input_type(&self) -> &'static str {
        match self.state.mode {
            EditorMode::Custom => "email",
            EditorMode::Preset => "text",
        }
    }

    /// The "full email" line under the control.
    pub fn preview(&self, parts: &EmailParts) -> String {
        match self.state.mode {
            EditorMode::Custom if self.state.custom_buffer.is_empty() => CUSTOM_PLACEHOLDER.to_string(),
            EditorMode::Custom => self.state.custom_buffer.clone(),
            EditorMode::Preset => {
                let local = match parts.local_part() {
                    "" => PRESET_PLACEHOLDER,
                    l => l,
                };
                format!("{}{}", local, parts.domain_part())
            }
        }
    }
}
