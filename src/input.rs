use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Canonical absolute headings on the field.
///
/// Row indices grow downward, so `Up` is the `(-1, 0)` unit vector.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the `(row, col)` unit vector for this heading.
    #[must_use]
    pub fn vector(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Reconstructs a heading from a `(row, col)` unit vector.
    #[must_use]
    pub fn from_vector(vector: (i32, i32)) -> Option<Self> {
        match vector {
            (-1, 0) => Some(Self::Up),
            (1, 0) => Some(Self::Down),
            (0, -1) => Some(Self::Left),
            (0, 1) => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns the opposite heading.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Heading after a left-hand (counterclockwise on screen) turn.
    #[must_use]
    pub fn turned_left(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
            Self::Right => Self::Up,
        }
    }

    /// Heading after a right-hand (clockwise on screen) turn.
    #[must_use]
    pub fn turned_right(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }
}

/// Movement commands expressed relative to the current heading.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Turn {
    Straight,
    Left,
    Right,
}

impl Turn {
    /// Resolves this relative command against an absolute heading.
    #[must_use]
    pub fn applied_to(self, heading: Direction) -> Direction {
        match self {
            Self::Straight => heading,
            Self::Left => heading.turned_left(),
            Self::Right => heading.turned_right(),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Turn(Turn),
    Confirm,
    Quit,
}

/// Maps a terminal key event to a game input. Unmapped keys are ignored.
///
/// Turn keys follow the original vi-style layout: `h` left, `l` right,
/// `s` straight ahead.
#[must_use]
pub fn map_key(event: KeyEvent) -> Option<GameInput> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    match event.code {
        KeyCode::Char('h') => Some(GameInput::Turn(Turn::Left)),
        KeyCode::Char('l') => Some(GameInput::Turn(Turn::Right)),
        KeyCode::Char('s') => Some(GameInput::Turn(Turn::Straight)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent};

    use super::{Direction, GameInput, Turn, map_key};

    const HEADINGS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn left_then_right_restores_every_heading() {
        for heading in HEADINGS {
            assert_eq!(heading.turned_left().turned_right(), heading);
            assert_eq!(heading.turned_right().turned_left(), heading);
        }
    }

    #[test]
    fn straight_keeps_the_heading() {
        for heading in HEADINGS {
            assert_eq!(Turn::Straight.applied_to(heading), heading);
        }
    }

    #[test]
    fn turns_are_perpendicular_to_the_heading() {
        for heading in HEADINGS {
            assert_ne!(Turn::Left.applied_to(heading), heading);
            assert_ne!(Turn::Left.applied_to(heading), heading.opposite());
            assert_ne!(Turn::Right.applied_to(heading), heading);
            assert_ne!(Turn::Right.applied_to(heading), heading.opposite());
        }
    }

    #[test]
    fn turn_handedness_matches_screen_coordinates() {
        assert_eq!(Turn::Left.applied_to(Direction::Up), Direction::Left);
        assert_eq!(Turn::Right.applied_to(Direction::Up), Direction::Right);
        assert_eq!(Turn::Left.applied_to(Direction::Down), Direction::Right);
        assert_eq!(Turn::Right.applied_to(Direction::Down), Direction::Left);
    }

    #[test]
    fn vector_round_trips_through_from_vector() {
        for heading in HEADINGS {
            assert_eq!(Direction::from_vector(heading.vector()), Some(heading));
        }
        assert_eq!(Direction::from_vector((1, 1)), None);
    }

    #[test]
    fn reference_keys_map_to_turns() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('h'))),
            Some(GameInput::Turn(Turn::Left))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('l'))),
            Some(GameInput::Turn(Turn::Right))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('s'))),
            Some(GameInput::Turn(Turn::Straight))
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }
}
