//! In-place editable text field
//!
//! One instance per content slot. The field reads through the content store
//! (stored value, else its compiled-in default), and while the admin session
//! has edit mode on, a pointer press moves it from Viewing into Editing with
//! a local buffer seeded from the resolved value. Focus loss commits; Enter
//! commits single-line fields and inserts a line break in multiline ones;
//! Escape discards.

use std::sync::Arc;

use stagedoor_content::{ContentStore, AdminSession, SlotId};
use stagedoor_core::events::{event_types, Event, EventData, KeyCode};
use stagedoor_core::fsm::{EventId, StateId, StateMachine, Transition};

// Interaction states
const VIEWING: StateId = 0;
const EDITING: StateId = 1;

// Interaction events
const ACTIVATE: EventId = 1;
const COMMIT: EventId = 2;
const CANCEL: EventId = 3;

/// Marker appended next to a field while edit mode is on
pub const EDIT_MARKER: &str = "\u{270F}\u{FE0F}";

/// Hint shown under an open editor
pub const EDIT_HINT: &str = "Press Enter to save, Esc to cancel";

/// Semantic role the field renders as
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextTag {
    H1,
    H2,
    H3,
    #[default]
    P,
    Span,
}

/// What a field looks like right now; the presentation layer renders this
/// against the current style scope.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedField {
    pub tag: TextTag,
    /// Resolved value (or placeholder) in Viewing; the live buffer in Editing
    pub text: String,
    pub editing: bool,
    /// Show the edit-affordance marker (edit mode on, editor closed)
    pub marker: bool,
    pub hint: Option<&'static str>,
}

pub struct EditableText {
    slot: SlotId,
    default_content: String,
    placeholder: String,
    multiline: bool,
    tag: TextTag,
    content: Arc<ContentStore>,
    session: Arc<AdminSession>,
    machine: StateMachine,
    buffer: String,
}

impl EditableText {
    /// Create a field for one slot.
    ///
    /// `default_content` is the compiled-in copy shown when the store has no
    /// entry for the slot.
    pub fn new(
        slot: impl Into<SlotId>,
        default_content: impl Into<String>,
        content: Arc<ContentStore>,
        session: Arc<AdminSession>,
    ) -> Self {
        let guard_session = session.clone();
        let machine = StateMachine::builder(VIEWING)
            .transition(
                Transition::new(VIEWING, ACTIVATE, EDITING)
                    .with_guard(move || guard_session.is_edit_mode()),
            )
            .on(EDITING, COMMIT, VIEWING)
            .on(EDITING, CANCEL, VIEWING)
            .build();

        let mut field = Self {
            slot: slot.into(),
            default_content: default_content.into(),
            placeholder: "Click to edit...".to_string(),
            multiline: false,
            tag: TextTag::default(),
            content,
            session,
            machine,
            buffer: String::new(),
        };
        field.buffer = field.resolved();
        field
    }

    /// Override the placeholder shown for an empty resolved value
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Accept line breaks in the buffer; commit happens on blur only
    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Set the semantic role
    pub fn tag(mut self, tag: TextTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn is_editing(&self) -> bool {
        self.machine.is_in(EDITING)
    }

    /// The local edit buffer
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The value this field displays: stored text if present, else its
    /// compiled-in default.
    pub fn resolved(&self) -> String {
        self.content
            .get_text(&self.slot)
            .unwrap_or_else(|| self.default_content.clone())
    }

    /// Try to enter Editing. Fires only while edit mode is on and the field
    /// is not already editing; seeds the buffer from the resolved value.
    pub fn activate(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }
        if self.machine.send(ACTIVATE) == EDITING {
            self.buffer = self.resolved();
            tracing::debug!("slot `{}` entered editing", self.slot);
            true
        } else {
            false
        }
    }

    /// Commit the buffer to the content store and return to Viewing
    pub fn commit(&mut self) {
        if !self.is_editing() {
            return;
        }
        self.machine.send(COMMIT);
        self.content.set_text(&self.slot, self.buffer.clone());
        tracing::debug!("slot `{}` committed", self.slot);
    }

    /// Discard the buffer and return to Viewing
    pub fn cancel(&mut self) {
        if !self.is_editing() {
            return;
        }
        self.machine.send(CANCEL);
        self.buffer = self.resolved();
        tracing::debug!("slot `{}` cancelled", self.slot);
    }

    /// Replace the buffer wholesale (a bound platform input does this)
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        if self.is_editing() {
            self.buffer = text.into();
        }
    }

    /// Re-seed the buffer from the resolved value.
    ///
    /// Called when the store changes under a field that is not editing; an
    /// open editor keeps its buffer.
    pub fn sync(&mut self) {
        if !self.is_editing() {
            self.buffer = self.resolved();
        }
    }

    /// Route one input event through the field's state machine
    pub fn handle_event(&mut self, event: &Event) {
        match event.event_type {
            event_types::POINTER_DOWN => {
                self.activate();
            }
            event_types::BLUR => self.commit(),
            event_types::KEY_DOWN => {
                if !self.is_editing() {
                    return;
                }
                if let EventData::Key { key, .. } = event.data {
                    self.handle_key(key);
                }
            }
            event_types::TEXT_INPUT => {
                if !self.is_editing() {
                    return;
                }
                if let EventData::TextInput { ref text } = event.data {
                    self.buffer.push_str(text);
                }
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::ENTER if self.multiline => self.buffer.push('\n'),
            // Single-line: accept gesture commits, newline suppressed
            KeyCode::ENTER => self.commit(),
            KeyCode::ESCAPE => self.cancel(),
            KeyCode::BACKSPACE => {
                self.buffer.pop();
            }
            _ => {}
        }
    }

    /// Snapshot the field for presentation
    pub fn render(&self) -> RenderedField {
        if self.is_editing() {
            return RenderedField {
                tag: self.tag,
                text: self.buffer.clone(),
                editing: true,
                marker: false,
                hint: Some(EDIT_HINT),
            };
        }

        let resolved = self.resolved();
        let text = if resolved.is_empty() {
            // Empty default and no stored entry: placeholder, not an error
            self.placeholder.clone()
        } else {
            resolved
        };

        RenderedField {
            tag: self.tag,
            text,
            editing: false,
            marker: self.session.is_edit_mode(),
            hint: None,
        }
    }
}
