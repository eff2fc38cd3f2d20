//! Input events consumed by the stagedoor widgets
//!
//! The site core is event-driven: every state transition happens
//! synchronously inside the handler for one of these events.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
    pub const KEY_DOWN: EventType = 20;
    /// Text input event (for character input, IME composition)
    pub const TEXT_INPUT: EventType = 22;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: u64, // Widget ID
    pub data: EventData,
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Key {
        /// Virtual key code (platform-specific, use KeyCode constants)
        key: KeyCode,
        /// Whether this is a repeat event
        repeat: bool,
    },
    /// Text input from keyboard or IME
    TextInput {
        /// The input text (may be multiple characters for IME)
        text: String,
    },
    None,
}

impl Event {
    /// Pointer press on a widget
    pub fn pointer_down(target: u64) -> Self {
        Self {
            event_type: event_types::POINTER_DOWN,
            target,
            data: EventData::None,
            timestamp: 0,
        }
    }

    /// Focus loss on a widget
    pub fn blur(target: u64) -> Self {
        Self {
            event_type: event_types::BLUR,
            target,
            data: EventData::None,
            timestamp: 0,
        }
    }

    /// Key press on a widget
    pub fn key_down(target: u64, key: KeyCode) -> Self {
        Self {
            event_type: event_types::KEY_DOWN,
            target,
            data: EventData::Key { key, repeat: false },
            timestamp: 0,
        }
    }

    /// Text input on a widget
    pub fn text_input(target: u64, text: impl Into<String>) -> Self {
        Self {
            event_type: event_types::TEXT_INPUT,
            target,
            data: EventData::TextInput { text: text.into() },
            timestamp: 0,
        }
    }
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const BACKSPACE: KeyCode = KeyCode(0x08);
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);
    pub const DELETE: KeyCode = KeyCode(0x7F);

    // Unknown/unmapped key
    pub const UNKNOWN: KeyCode = KeyCode(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_carries_code() {
        let event = Event::key_down(7, KeyCode::ENTER);
        assert_eq!(event.event_type, event_types::KEY_DOWN);
        assert_eq!(event.target, 7);
        match event.data {
            EventData::Key { key, repeat } => {
                assert_eq!(key, KeyCode::ENTER);
                assert!(!repeat);
            }
            _ => panic!("expected key data"),
        }
    }

    #[test]
    fn test_text_input_event() {
        let event = Event::text_input(0, "abc");
        match event.data {
            EventData::TextInput { ref text } => assert_eq!(text, "abc"),
            _ => panic!("expected text input data"),
        }
    }
}
