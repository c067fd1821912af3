use leptos::ev::KeyboardEvent;

/// The parts of a keydown event the search shortcut cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub meta: bool,
    pub ctrl: bool,
    pub repeat: bool,
}

impl KeyChord {
    /// Cmd+K on macOS, Ctrl+K elsewhere. Held keys only count once.
    pub fn is_search_toggle(&self) -> bool {
        (self.meta || self.ctrl) && !self.repeat && self.key.eq_ignore_ascii_case("k")
    }

    pub fn is_escape(&self) -> bool {
        self.key == "Escape"
    }
}

impl From<&KeyboardEvent> for KeyChord {
    fn from(event: &KeyboardEvent) -> Self {
        Self {
            key: event.key(),
            meta: event.meta_key(),
            ctrl: event.ctrl_key(),
            repeat: event.repeat(),
        }
    }
}
