//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, reflect_velocity};
pub use state::{Ball, Brick, BrickTier, GameEvent, GamePhase, GameState, Paddle, RngState};
pub use tick::{TickInput, tick};
