use std::collections::HashSet;

use rand::Rng;

use crate::config::GridSize;
use crate::placement::place_random_cell;
use crate::snake::{Position, Snake};

/// Fruit kinds with fixed growth and skull-penalty values.
///
/// New kinds are data: add a variant and its two catalog entries.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FruitKind {
    Banana,
    Apple,
    Strawberry,
}

/// Canonical order when spawning one fruit of each kind.
///
/// Only placement reproducibility under a seeded RNG depends on this
/// order, not game semantics.
pub const SPAWN_ORDER: [FruitKind; 3] =
    [FruitKind::Banana, FruitKind::Apple, FruitKind::Strawberry];

impl FruitKind {
    /// Segments gained when this fruit is eaten.
    #[must_use]
    pub fn growth(self) -> usize {
        match self {
            Self::Banana => 1,
            Self::Apple => 2,
            Self::Strawberry => 3,
        }
    }

    /// Skulls spawned as a penalty when this fruit is eaten.
    #[must_use]
    pub fn skull_spawns(self) -> usize {
        match self {
            Self::Banana => 1,
            Self::Apple => 2,
            Self::Strawberry => 3,
        }
    }
}

/// Fruit currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Fruit {
    pub position: Position,
    pub kind: FruitKind,
}

impl Fruit {
    /// Creates a fruit of `kind` at `position`.
    #[must_use]
    pub fn new(kind: FruitKind, position: Position) -> Self {
        Self { position, kind }
    }
}

/// Spawns the full fruit complement in catalog order.
///
/// Each placement excludes the snake, every skull, and fruits placed
/// earlier in the same pass. Stops early when no free cell remains, so a
/// nearly full board carries fewer than three fruits.
#[must_use]
pub fn respawn_all<R: Rng + ?Sized>(
    size: GridSize,
    snake: &Snake,
    skulls: &[Position],
    rng: &mut R,
) -> Vec<Fruit> {
    let mut occupied: HashSet<Position> = snake
        .segments()
        .copied()
        .chain(skulls.iter().copied())
        .collect();
    let mut fruits = Vec::with_capacity(SPAWN_ORDER.len());

    for kind in SPAWN_ORDER {
        let Some(position) = place_random_cell(size, &occupied, rng) else {
            break;
        };
        occupied.insert(position);
        fruits.push(Fruit::new(kind, position));
    }

    fruits
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::snake::{Position, Snake};

    use super::{FruitKind, SPAWN_ORDER, respawn_all};

    #[test]
    fn catalog_values_match_the_fruit_kinds() {
        assert_eq!(FruitKind::Banana.growth(), 1);
        assert_eq!(FruitKind::Banana.skull_spawns(), 1);
        assert_eq!(FruitKind::Apple.growth(), 2);
        assert_eq!(FruitKind::Apple.skull_spawns(), 2);
        assert_eq!(FruitKind::Strawberry.growth(), 3);
        assert_eq!(FruitKind::Strawberry.skull_spawns(), 3);
    }

    #[test]
    fn respawn_yields_one_fruit_per_kind_in_catalog_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
        ]);
        let skulls = [Position { x: 4, y: 4 }, Position { x: 5, y: 1 }];

        for _ in 0..50 {
            let fruits = respawn_all(GridSize { cols: 8, rows: 6 }, &snake, &skulls, &mut rng);

            let kinds: Vec<FruitKind> = fruits.iter().map(|fruit| fruit.kind).collect();
            assert_eq!(kinds, SPAWN_ORDER);

            for (i, fruit) in fruits.iter().enumerate() {
                assert!(!snake.occupies(fruit.position));
                assert!(!skulls.contains(&fruit.position));
                for other in &fruits[i + 1..] {
                    assert_ne!(fruit.position, other.position);
                }
            }
        }
    }

    #[test]
    fn respawn_stops_early_when_the_board_fills() {
        // 4x1 board, snake on three cells: only one fruit fits.
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::from_segments(vec![
            Position { x: 2, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 0, y: 0 },
        ]);

        let fruits = respawn_all(GridSize { cols: 4, rows: 1 }, &snake, &[], &mut rng);

        assert_eq!(fruits.len(), 1);
        assert_eq!(fruits[0].kind, FruitKind::Banana);
        assert_eq!(fruits[0].position, Position { x: 3, y: 0 });
    }
}
