//! Semantic application events: crossterm events mapped to a widget-agnostic
//! vocabulary so widgets never touch crossterm directly.
//!
//! # Keybindings
//!
//! | Key(s)               | Event              |
//! |----------------------|--------------------|
//! | `q`, `Ctrl+c`        | `Quit`             |
//! | `Tab` / `Shift+Tab`  | `FocusNext` / `FocusPrev` |
//! | `↑` / `k`            | `Nav(Up)`          |
//! | `↓` / `j`            | `Nav(Down)`        |
//! | `←` / `→`            | `Nav(Left/Right)`  |
//! | `Home` / `End`       | `Home` / `End`     |
//! | printable char       | `Char(c)`          |
//! | `Backspace`/`Delete` | `Backspace`/`Delete` |
//! | `Enter`              | `Enter`            |
//! | `Esc`                | `Escape`           |
//! | left mouse button    | `Click(col, row)`  |
//! | terminal resize      | `Resize(w, h)`     |
//!
//! ## Insert mode
//!
//! While the query bar is focused the event loop calls
//! [`to_app_event_insert`]: `q`, `j`, `k` and every other printable character
//! produce `Char`. Only `Ctrl+c`, `Tab`, `Esc`, `Enter`, arrows and the
//! editing keys keep their special meaning.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

/// Cursor / selection movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Move keyboard focus to the next element.
    FocusNext,
    /// Move keyboard focus to the previous element.
    FocusPrev,
    /// Move the text cursor or the result selection.
    Nav(Direction),
    /// Jump to the start of the input.
    Home,
    /// Jump to the end of the input.
    End,
    /// A printable character.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Confirm: search, open a link, or press the focused button.
    Enter,
    /// Leave the query bar, close the help popup.
    Escape,
    /// Left mouse button pressed at (column, row).
    Click(u16, u16),
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (navigation mode).
///
/// Returns `None` for events without meaning to the application (key
/// releases, mouse movement, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse.kind, mouse.column, mouse.row),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for text-input mode.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        Event::Mouse(mouse) => map_mouse(mouse.kind, mouse.column, mouse.row),
        _ => None,
    }
}

fn map_mouse(kind: MouseEventKind, column: u16, row: u16) -> Option<AppEvent> {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::Click(column, row)),
        MouseEventKind::ScrollUp => Some(AppEvent::Nav(Direction::Up)),
        MouseEventKind::ScrollDown => Some(AppEvent::Nav(Direction::Down)),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        BackTab => Some(AppEvent::FocusPrev),

        Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),
        Home => Some(AppEvent::Home),
        End => Some(AppEvent::End),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace => Some(AppEvent::Backspace),
        Delete => Some(AppEvent::Delete),
        Enter => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even while typing
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        BackTab => Some(AppEvent::FocusPrev),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),
        Home => Some(AppEvent::Home),
        End => Some(AppEvent::End),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace => Some(AppEvent::Backspace),
        Delete => Some(AppEvent::Delete),
        Enter => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
