#![forbid(unsafe_code)]

//! Input events and dispatch outcomes.
//!
//! Hosts feed events into event-aware containers (the modal stack, for
//! one) and inspect the returned [`EventOutcome`] to decide whether the
//! event may propagate to the rest of the application. `Consumed` is the
//! stop-propagation contract: a consumed event must not be delivered to
//! anything below the consumer.

use bitflags::bitflags;

/// A key that was pressed, released, or repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    Escape,
    Enter,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const CTRL = 0b0000_0010;
        const ALT = 0b0000_0100;
    }
}

/// Whether a key event is a press, repeat, or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    Press,
    Repeat,
    Release,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A plain key press with no modifiers.
    pub const fn press(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What the mouse did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    Moved,
}

/// A mouse event at a cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub x: u16,
    pub y: u16,
}

impl MouseEvent {
    /// A left-button press at the given position.
    pub const fn click(x: u16, y: u16) -> Self {
        Self {
            kind: MouseEventKind::Down(MouseButton::Left),
            x,
            y,
        }
    }
}

/// An input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
}

/// Result of dispatching an event into a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event was handled and must not propagate further.
    Consumed,
    /// The event was not handled; the caller may keep routing it.
    Ignored,
}

impl EventOutcome {
    /// Whether the event was consumed.
    #[inline]
    pub const fn is_consumed(&self) -> bool {
        matches!(self, EventOutcome::Consumed)
    }
}
