//! Keyboard modifier state attached to a key press.

/// Keyboard modifier state.
///
/// Tracks which modifier keys (Ctrl, Shift, Alt) were held when a key was
/// pressed. Bindings such as `Ctrl+Q` only match when the modifiers agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Ctrl key held
    pub ctrl: bool,
    /// Shift key held
    pub shift: bool,
    /// Alt key held
    pub alt: bool,
}

impl Modifiers {
    /// Creates a Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    /// Returns true if any modifier that changes a key's meaning is held.
    ///
    /// Shift is excluded: on character keys it is already folded into the
    /// character itself (`Shift+8` arrives as `*`).
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.alt
    }
}
