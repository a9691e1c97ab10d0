//! Global key bindings.
//!
//! A key press is parsed into a [`Key`] and routed to at most one
//! [`Command`]. While the preview overlay is open only the playback bindings
//! are live; the listing behind it is inert. No command means the browser's
//! default behaviour must be left alone.

use super::focus::FocusMove;

/// Keys the page reacts to, parsed from `KeyboardEvent.key`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Home,
    End,
    Backspace,
    Enter,
    Space,
    Escape,
    Char(char),
    Other,
}

impl Key {
    pub fn parse(key: &str) -> Self {
        match key {
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "Home" => Self::Home,
            "End" => Self::End,
            "Backspace" => Self::Backspace,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// Page state a binding depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// A text input, textarea, select or content-editable element has focus.
    pub editing: bool,
    /// Ctrl, Alt or Meta is held.
    pub modified: bool,
    /// The preview overlay is open.
    pub preview_open: bool,
}

/// What a key press asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Focus(FocusMove),
    Activate,
    NavigateParent,
    ClosePreview,
    TogglePlayback,
    ToggleFullscreen,
    ToggleMute,
}

/// Route a key press to a command.
pub fn route_key(key: Key, context: KeyContext) -> Option<Command> {
    if context.editing || context.modified {
        return None;
    }

    if context.preview_open {
        return match key {
            Key::Escape => Some(Command::ClosePreview),
            Key::Space | Key::Char('p') => Some(Command::TogglePlayback),
            Key::Char('f') => Some(Command::ToggleFullscreen),
            Key::Char('m') => Some(Command::ToggleMute),
            _ => None,
        };
    }

    match key {
        Key::ArrowDown | Key::Char('j') => Some(Command::Focus(FocusMove::Next)),
        Key::ArrowUp | Key::Char('k') => Some(Command::Focus(FocusMove::Previous)),
        Key::Home => Some(Command::Focus(FocusMove::First)),
        Key::End => Some(Command::Focus(FocusMove::Last)),
        Key::Backspace => Some(Command::NavigateParent),
        Key::Enter | Key::Space => Some(Command::Activate),
        _ => None,
    }
}
