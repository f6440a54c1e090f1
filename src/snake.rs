use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighbor one cell along `direction`, without wrapping.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns this position wrapped into the grid on both axes.
    #[must_use]
    pub fn wrapped(self, size: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(size.cols)),
            y: wrap_axis(self.y, i32::from(size.rows)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Snake body as an ordered sequence of cells, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates the three-segment starting snake: head at
    /// (⌊cols/2⌋, ⌊rows/2⌋), body extending two cells to the left.
    #[must_use]
    pub fn centered(size: GridSize) -> Self {
        let head = Position {
            x: i32::from(size.cols / 2),
            y: i32::from(size.rows / 2),
        };

        Self::from_segments(vec![
            head,
            Position {
                x: head.x - 1,
                y: head.y,
            },
            Position {
                x: head.x - 2,
                y: head.y,
            },
        ])
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Advances the body onto `next_head`.
    ///
    /// With zero growth the tail cell is vacated. Otherwise every current
    /// segment stays put and `growth - 1` duplicates of the tail are
    /// appended, for a net length increase of `growth`.
    pub fn advance(&mut self, next_head: Position, growth: usize) {
        self.body.push_front(next_head);

        if growth == 0 {
            let _ = self.body.pop_back();
        } else if growth > 1 {
            let tail = *self
                .body
                .back()
                .expect("snake body must always contain at least one segment");
            for _ in 0..growth - 1 {
                self.body.push_back(tail);
            }
        }
    }

    /// Returns true when `position` hits a segment that will still be
    /// occupied after this tick: the whole body when growing, everything
    /// but the tail when not (a plain move vacates the tail cell).
    #[must_use]
    pub fn blocks(&self, position: Position, growing: bool) -> bool {
        let checked = if growing {
            self.body.len()
        } else {
            self.body.len().saturating_sub(1)
        };

        self.body
            .iter()
            .take(checked)
            .any(|segment| *segment == position)
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn position_wrapping_keeps_coordinates_inside_bounds() {
        let size = GridSize { cols: 10, rows: 8 };

        let wrapped_left = Position { x: -1, y: 3 }.wrapped(size);
        let wrapped_bottom = Position { x: 4, y: 8 }.wrapped(size);

        assert_eq!(wrapped_left, Position { x: 9, y: 3 });
        assert_eq!(wrapped_bottom, Position { x: 4, y: 0 });
    }

    #[test]
    fn centered_snake_extends_left_of_the_head() {
        let snake = Snake::centered(GridSize { cols: 20, rows: 20 });

        let segments: Vec<Position> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position { x: 10, y: 10 },
                Position { x: 9, y: 10 },
                Position { x: 8, y: 10 },
            ]
        );
    }

    #[test]
    fn advance_without_growth_vacates_the_tail() {
        let mut snake = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
            Position { x: 0, y: 2 },
        ]);

        snake.advance(snake.head().stepped(Direction::Right), 0);

        assert_eq!(snake.head(), Position { x: 3, y: 2 });
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Position { x: 0, y: 2 }));
    }

    #[test]
    fn advance_with_growth_one_keeps_every_segment() {
        let mut snake = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
        ]);

        snake.advance(Position { x: 3, y: 2 }, 1);

        assert_eq!(snake.len(), 3);
        assert!(snake.occupies(Position { x: 1, y: 2 }));
    }

    #[test]
    fn advance_with_growth_three_duplicates_the_tail() {
        let mut snake = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
        ]);

        snake.advance(Position { x: 3, y: 2 }, 3);

        let segments: Vec<Position> = snake.segments().copied().collect();
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[3], Position { x: 1, y: 2 });
        assert_eq!(segments[4], Position { x: 1, y: 2 });
    }

    #[test]
    fn blocks_exempts_the_tail_only_without_growth() {
        let snake = Snake::from_segments(vec![
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
        ]);
        let tail = Position { x: 1, y: 2 };

        assert!(!snake.blocks(tail, false));
        assert!(snake.blocks(tail, true));
        assert!(snake.blocks(Position { x: 2, y: 1 }, false));
    }
}
