use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit vector `(dx, dy)` for this direction.
    ///
    /// The y axis grows downward, so up is `(0, -1)`.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Confirm,
    Quit,
}

/// Maps a terminal key event to a game input.
///
/// Arrows and WASD steer, space or `p` toggles pause, Enter confirms
/// (restart on a finished game), `q` or Esc quits. Key releases and
/// unmapped keys yield `None`.
#[must_use]
pub fn translate_key(event: KeyEvent) -> Option<GameInput> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let input = match event.code {
        KeyCode::Up | KeyCode::Char('w') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => GameInput::Direction(Direction::Right),
        KeyCode::Char(' ') | KeyCode::Char('p') => GameInput::Pause,
        KeyCode::Enter => GameInput::Confirm,
        KeyCode::Char('q') | KeyCode::Esc => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use super::{Direction, GameInput, translate_key};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn opposite_deltas_sum_to_zero() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = direction.delta();
            let (ox, oy) = direction.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn arrows_and_wasd_both_steer() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        let w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);

        assert_eq!(translate_key(up), Some(GameInput::Direction(Direction::Up)));
        assert_eq!(translate_key(w), Some(GameInput::Direction(Direction::Up)));
    }

    #[test]
    fn control_keys_map_to_game_inputs() {
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);

        assert_eq!(translate_key(space), Some(GameInput::Pause));
        assert_eq!(translate_key(enter), Some(GameInput::Confirm));
        assert_eq!(translate_key(quit), Some(GameInput::Quit));
    }

    #[test]
    fn releases_and_unmapped_keys_are_ignored() {
        let mut release = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        let unmapped = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);

        assert_eq!(translate_key(release), None);
        assert_eq!(translate_key(unmapped), None);
    }
}
