/// High-level events with element targeting.
///
/// Targets are element ids from the rendered tree; `None` means the pointer
/// landed on nothing the host could identify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Completed mouse click
    Click {
        target: Option<String>,
        button: MouseButton,
    },
    /// Mouse button pressed
    Press {
        target: Option<String>,
        button: MouseButton,
    },
    /// Mouse button released
    Release {
        target: Option<String>,
        button: MouseButton,
    },
    /// Pointer entered an element
    MouseEnter { target: String },
    /// Pointer left an element
    MouseLeave { target: String },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
    /// Text input value changed (hosts with native text fields)
    Change { target: String, text: String },
    /// Viewport resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Shorthand for a left click on `target`.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            button: MouseButton::Left,
        }
    }

    /// Shorthand for an unmodified key press on `target`.
    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Self::Key {
            target: Some(target.into()),
            key,
            modifiers: Modifiers::new(),
        }
    }

    /// The element this event is aimed at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Key { target, .. }
            | Self::Click { target, .. }
            | Self::Press { target, .. }
            | Self::Release { target, .. } => target.as_deref(),
            Self::MouseEnter { target }
            | Self::MouseLeave { target }
            | Self::Focus { target }
            | Self::Blur { target }
            | Self::Change { target, .. } => Some(target),
            Self::Resize { .. } => None,
        }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::Click { .. } | Self::Press { .. } | Self::Release { .. }
        )
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types

/// Keys without a [`Key`] counterpart (caps lock, media keys, ...) are
/// handed back unchanged.
impl TryFrom<crossterm::event::KeyCode> for Key {
    type Error = crossterm::event::KeyCode;

    fn try_from(code: crossterm::event::KeyCode) -> Result<Self, Self::Error> {
        use crossterm::event::KeyCode;
        Ok(match code {
            KeyCode::Char(c) if !c.is_control() => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            other => return Err(other),
        })
    }
}

impl Event {
    /// Key event for `target` from a crossterm key press.
    ///
    /// Returns `None` for releases and for keys [`Key`] cannot express.
    pub fn from_crossterm_key(
        target: Option<String>,
        event: crossterm::event::KeyEvent,
    ) -> Option<Self> {
        if event.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
        let key = Key::try_from(event.code).ok()?;
        Some(Self::Key {
            target,
            key,
            modifiers: event.modifiers.into(),
        })
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
