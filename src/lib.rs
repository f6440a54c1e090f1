//! Terminal snake with three fruit kinds and accumulating skull hazards.
//!
//! The game core (`config`, `input`, `snake`, `fruit`, `placement`, `game`)
//! is pure: every operation takes a state value and returns its replacement,
//! with randomness injected as an explicit [`rand::Rng`]. The terminal front
//! end in `renderer` and the binary only read state and feed inputs.

pub mod config;
pub mod fruit;
pub mod game;
pub mod input;
pub mod placement;
pub mod renderer;
pub mod snake;
