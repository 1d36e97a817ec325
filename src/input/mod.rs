//! Key mapping from terminal events to game directions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Direction, KeyLayout};

/// Map keyboard input to a direction under the given layout.
///
/// Arrow keys work in every layout; letter keys follow the layout table
/// (w/a/s/d or z/q/s/d), uppercase accepted. Anything else returns None and
/// must not consume a turn.
pub fn map_key(key: KeyEvent, layout: KeyLayout) -> Option<Direction> {
    match key.code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Char(c) => {
            let c = c.to_ascii_lowercase();
            let [up, left, down, right] = layout.keys();
            if c == up {
                Some(Direction::Up)
            } else if c == left {
                Some(Direction::Left)
            } else if c == down {
                Some(Direction::Down)
            } else if c == right {
                Some(Direction::Right)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Esc and Ctrl-C always quit; 'q' only outside AZERTY, where it is the
/// Left key.
pub fn should_quit(key: KeyEvent, layout: KeyLayout) -> bool {
    if key.code == KeyCode::Esc {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    layout != KeyLayout::Azerty
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_work_in_both_layouts() {
        for layout in [KeyLayout::Qwerty, KeyLayout::Azerty] {
            assert_eq!(
                map_key(KeyEvent::from(KeyCode::Up), layout),
                Some(Direction::Up)
            );
            assert_eq!(
                map_key(KeyEvent::from(KeyCode::Left), layout),
                Some(Direction::Left)
            );
            assert_eq!(
                map_key(KeyEvent::from(KeyCode::Down), layout),
                Some(Direction::Down)
            );
            assert_eq!(
                map_key(KeyEvent::from(KeyCode::Right), layout),
                Some(Direction::Right)
            );
        }
    }

    #[test]
    fn test_qwerty_letters() {
        let layout = KeyLayout::Qwerty;
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('w')), layout),
            Some(Direction::Up)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('a')), layout),
            Some(Direction::Left)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('s')), layout),
            Some(Direction::Down)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('d')), layout),
            Some(Direction::Right)
        );
        // AZERTY letters mean nothing here
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('z')), layout), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('q')), layout), None);
    }

    #[test]
    fn test_azerty_letters() {
        let layout = KeyLayout::Azerty;
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('z')), layout),
            Some(Direction::Up)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('q')), layout),
            Some(Direction::Left)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('s')), layout),
            Some(Direction::Down)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('d')), layout),
            Some(Direction::Right)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('w')), layout), None);
    }

    #[test]
    fn test_uppercase_letters_map_too() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('W')), KeyLayout::Qwerty),
            Some(Direction::Up)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('Q')), KeyLayout::Azerty),
            Some(Direction::Left)
        );
    }

    #[test]
    fn test_unrecognized_keys_map_to_none() {
        for layout in [KeyLayout::Qwerty, KeyLayout::Azerty] {
            assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x')), layout), None);
            assert_eq!(map_key(KeyEvent::from(KeyCode::Enter), layout), None);
            assert_eq!(map_key(KeyEvent::from(KeyCode::Tab), layout), None);
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(
            KeyEvent::from(KeyCode::Char('q')),
            KeyLayout::Qwerty
        ));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc), KeyLayout::Qwerty));
        assert!(should_quit(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyLayout::Azerty
        ));
        assert!(!should_quit(
            KeyEvent::from(KeyCode::Char('x')),
            KeyLayout::Qwerty
        ));
    }

    #[test]
    fn test_q_is_left_not_quit_on_azerty() {
        let key = KeyEvent::from(KeyCode::Char('q'));
        assert!(!should_quit(key, KeyLayout::Azerty));
        assert_eq!(map_key(key, KeyLayout::Azerty), Some(Direction::Left));
    }
}
