// Key classification: crossterm events -> tagged key input
//
// A key is "special" when it has no character representation (arrows,
// function keys, ...). Space counts as special, matching how desktop key
// hooks report it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Named keys without a character representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Tab,
    BackTab,
    Backspace,
    Esc,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    F(u8),
    /// Anything else the terminal reports (media keys, lone modifiers, ...)
    Other,
}

/// A single key press, already classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    Character(char),
    Special(SpecialKey),
}

impl KeyInput {
    /// Classify a terminal key event. Releases yield `None`; presses and
    /// auto-repeats both count as a key press.
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        Some(Self::from(event.code))
    }
}

impl From<KeyCode> for KeyInput {
    fn from(code: KeyCode) -> Self {
        let special = match code {
            KeyCode::Char(' ') => SpecialKey::Space,
            KeyCode::Char(c) => return KeyInput::Character(c),
            KeyCode::Up => SpecialKey::Up,
            KeyCode::Down => SpecialKey::Down,
            KeyCode::Left => SpecialKey::Left,
            KeyCode::Right => SpecialKey::Right,
            KeyCode::Enter => SpecialKey::Enter,
            KeyCode::Tab => SpecialKey::Tab,
            KeyCode::BackTab => SpecialKey::BackTab,
            KeyCode::Backspace => SpecialKey::Backspace,
            KeyCode::Esc => SpecialKey::Esc,
            KeyCode::Home => SpecialKey::Home,
            KeyCode::End => SpecialKey::End,
            KeyCode::PageUp => SpecialKey::PageUp,
            KeyCode::PageDown => SpecialKey::PageDown,
            KeyCode::Insert => SpecialKey::Insert,
            KeyCode::Delete => SpecialKey::Delete,
            KeyCode::F(n) => SpecialKey::F(n),
            _ => SpecialKey::Other,
        };
        KeyInput::Special(special)
    }
}

/// Ctrl-C. Raw mode swallows the terminal's SIGINT, so the host has to
/// treat this chord as a quit request itself.
pub fn is_interrupt(event: &KeyEvent) -> bool {
    event.kind != KeyEventKind::Release
        && event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(event.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_character_keys() {
        assert_eq!(
            KeyInput::from_key_event(&KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE)),
            Some(KeyInput::Character('w'))
        );
        // Case is preserved; bindings decide what uppercase means
        assert_eq!(KeyInput::from(KeyCode::Char('W')), KeyInput::Character('W'));
    }

    #[test]
    fn test_arrow_keys_are_special() {
        assert_eq!(KeyInput::from(KeyCode::Up), KeyInput::Special(SpecialKey::Up));
        assert_eq!(KeyInput::from(KeyCode::Down), KeyInput::Special(SpecialKey::Down));
        assert_eq!(KeyInput::from(KeyCode::Left), KeyInput::Special(SpecialKey::Left));
        assert_eq!(KeyInput::from(KeyCode::Right), KeyInput::Special(SpecialKey::Right));
    }

    #[test]
    fn test_space_and_function_keys_are_special() {
        assert_eq!(KeyInput::from(KeyCode::Char(' ')), KeyInput::Special(SpecialKey::Space));
        assert_eq!(KeyInput::from(KeyCode::F(5)), KeyInput::Special(SpecialKey::F(5)));
        assert_eq!(KeyInput::from(KeyCode::CapsLock), KeyInput::Special(SpecialKey::Other));
    }

    #[test]
    fn test_release_ignored_repeat_accepted() {
        assert_eq!(
            KeyInput::from_key_event(&event(KeyCode::Char('w'), KeyEventKind::Release)),
            None
        );
        assert_eq!(
            KeyInput::from_key_event(&event(KeyCode::Up, KeyEventKind::Repeat)),
            Some(KeyInput::Special(SpecialKey::Up))
        );
    }

    #[test]
    fn test_ctrl_c_is_interrupt() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt(&ctrl_c));

        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!is_interrupt(&plain_c));

        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert!(!is_interrupt(&ctrl_d));
    }
}
