//! Input mapping from terminal events to game input events.
//!
//! Keeps crossterm types out of the core: the state machine only ever sees
//! the closed `InputEvent`/`Key` vocabulary from `types`.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::types::{InputEvent, Key};

/// Translate one terminal event; `None` for events the game ignores
/// (key releases, repeats, mouse movement, focus changes).
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(width, height) => Some(InputEvent::Resize(width, height)),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    // Ctrl-C quits from anywhere, regardless of the active screen.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }

    let key = match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char('[') => Key::LeftBracket,
        KeyCode::Char(']') => Key::RightBracket,
        KeyCode::Char(',') => Key::Comma,
        KeyCode::Char('.') => Key::Period,
        KeyCode::Char('-') => Key::Minus,
        KeyCode::Char('+') | KeyCode::Char('=') => Key::Plus,
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Key::Char(c.to_ascii_lowercase()),
        _ => return None,
    };
    Some(InputEvent::Key(key))
}

fn map_mouse(mouse: MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::MouseDown {
            x: mouse.column,
            y: mouse.row,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys_map_to_named_variants() {
        assert_eq!(map_event(press(KeyCode::Up)), Some(InputEvent::Key(Key::Up)));
        assert_eq!(
            map_event(press(KeyCode::Left)),
            Some(InputEvent::Key(Key::Left))
        );
    }

    #[test]
    fn test_letters_arrive_lowercased() {
        assert_eq!(
            map_event(press(KeyCode::Char('W'))),
            Some(InputEvent::Key(Key::Char('w')))
        );
        assert_eq!(
            map_event(press(KeyCode::Char('t'))),
            Some(InputEvent::Key(Key::Char('t')))
        );
    }

    #[test]
    fn test_settings_adjustment_keys() {
        assert_eq!(
            map_event(press(KeyCode::Char('['))),
            Some(InputEvent::Key(Key::LeftBracket))
        );
        assert_eq!(
            map_event(press(KeyCode::Char('='))),
            Some(InputEvent::Key(Key::Plus))
        );
        assert_eq!(
            map_event(press(KeyCode::Char('-'))),
            Some(InputEvent::Key(Key::Minus))
        );
    }

    #[test]
    fn test_ctrl_c_is_quit() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(event), Some(InputEvent::Quit));
    }

    #[test]
    fn test_plain_c_is_a_letter() {
        assert_eq!(
            map_event(press(KeyCode::Char('c'))),
            Some(InputEvent::Key(Key::Char('c')))
        );
    }

    #[test]
    fn test_unrecognized_keys_are_dropped() {
        assert_eq!(map_event(press(KeyCode::F(1))), None);
        assert_eq!(map_event(press(KeyCode::Tab)), None);
        assert_eq!(map_event(press(KeyCode::Char('?'))), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = KeyEvent::from(KeyCode::Up);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn test_left_mouse_down_carries_position() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            map_event(Event::Mouse(mouse)),
            Some(InputEvent::MouseDown { x: 12, y: 7 })
        );
    }

    #[test]
    fn test_other_mouse_events_are_dropped() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(map_event(Event::Mouse(mouse)), None);
    }

    #[test]
    fn test_resize_passes_through() {
        assert_eq!(
            map_event(Event::Resize(120, 40)),
            Some(InputEvent::Resize(120, 40))
        );
    }
}
