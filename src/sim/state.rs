//! Game state and core simulation types
//!
//! Everything the simulation touches lives here so an attempt can be
//! reproduced from a seed alone.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Attract screen, nothing simulates
    Menu,
    /// Active gameplay
    Playing,
    /// Ran out of lives
    GameOver,
    /// Cleared the whole grid
    Won,
}

/// Events emitted by the simulation, drained by the host each frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    BrickDestroyed { row: usize, col: usize },
    PaddleBounce,
    LifeLost { remaining: u8 },
    GameOver { score: u64 },
    Won { score: u64 },
    /// Fired exactly once per winning attempt
    CouponEarned { code: &'static str },
}

/// The ball entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the serve position, moving up and toward `serve_sign` (+1 right, -1 left)
    pub fn serve(serve_sign: f32) -> Self {
        Self {
            pos: Vec2::new(
                FIELD_WIDTH / 2.0,
                FIELD_HEIGHT - PADDLE_HEIGHT - BALL_RADIUS - 2.0,
            ),
            vel: Vec2::new(serve_sign * BALL_START_SPEED * 0.6, -BALL_START_SPEED * 0.8),
            radius: BALL_RADIUS,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Horizontal center (clamped so the paddle stays on the field)
    pub x: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: FIELD_WIDTH / 2.0,
        }
    }
}

impl Paddle {
    /// Move the paddle center, clamped to the field bounds
    pub fn set_center(&mut self, x: f32) {
        self.x = x.clamp(PADDLE_WIDTH / 2.0, FIELD_WIDTH - PADDLE_WIDTH / 2.0);
    }

    /// Collision box along the bottom edge of the field
    pub fn rect(&self) -> Aabb {
        Aabb::from_rect(
            self.x - PADDLE_WIDTH / 2.0,
            FIELD_HEIGHT - PADDLE_HEIGHT,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
        )
    }
}

/// Row tier of a brick (drives color and nothing else)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickTier {
    Pepperoni,
    Cheese,
    Sauce,
}

impl BrickTier {
    pub fn from_row(row: usize) -> Self {
        match row {
            0 => Self::Pepperoni,
            1 => Self::Cheese,
            _ => Self::Sauce,
        }
    }
}

/// One cell of the brick grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub alive: bool,
    pub tier: BrickTier,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Sign of the next serve's horizontal velocity (advances the stream)
    pub fn next_serve_sign(&mut self) -> f32 {
        let mut rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.stream));
        self.stream += 1;
        if rng.random_bool(0.5) { 1.0 } else { -1.0 }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Attempt seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Current phase
    pub phase: GamePhase,
    /// Score (monotonically increasing within an attempt)
    pub score: u64,
    /// Player lives
    pub lives: u8,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player paddle
    pub paddle: Paddle,
    /// The ball
    pub ball: Ball,
    /// Brick grid, row-major `BRICK_ROWS x BRICK_COLS`
    pub bricks: Vec<Brick>,
    /// Events since the last drain (not part of the persisted state)
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed, sitting at the menu
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            phase: GamePhase::Menu,
            score: 0,
            lives: START_LIVES,
            time_ticks: 0,
            paddle: Paddle::default(),
            ball: Ball::serve(1.0),
            bricks: Vec::new(),
            events: Vec::new(),
        };
        state.reset_attempt();
        state
    }

    /// Start (or restart) an attempt: fresh entities, then simulate
    pub fn start(&mut self) {
        self.reset_attempt();
        self.phase = GamePhase::Playing;
        log::info!("attempt started (seed {})", self.seed);
    }

    /// Back to the attract screen, discarding the attempt
    pub fn return_to_menu(&mut self) {
        self.reset_attempt();
        self.phase = GamePhase::Menu;
    }

    /// Reset grid, score, lives and serve the ball
    fn reset_attempt(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.time_ticks = 0;
        self.bricks = (0..BRICK_ROWS * BRICK_COLS)
            .map(|i| Brick {
                alive: true,
                tier: BrickTier::from_row(i / BRICK_COLS),
            })
            .collect();
        self.serve_reset();
    }

    /// Reset ball and paddle after a lost life; the grid persists
    pub(crate) fn serve_reset(&mut self) {
        self.paddle = Paddle::default();
        self.ball = Ball::serve(self.rng_state.next_serve_sign());
    }

    /// Collision box for the brick at (row, col)
    pub fn brick_rect(row: usize, col: usize) -> Aabb {
        Aabb::from_rect(
            BRICK_OFFSET_LEFT + col as f32 * (BRICK_WIDTH + BRICK_PADDING),
            BRICK_OFFSET_TOP + row as f32 * (BRICK_HEIGHT + BRICK_PADDING),
            BRICK_WIDTH,
            BRICK_HEIGHT,
        )
    }

    pub fn brick(&self, row: usize, col: usize) -> &Brick {
        &self.bricks[row * BRICK_COLS + col]
    }

    pub fn brick_mut(&mut self, row: usize, col: usize) -> &mut Brick {
        &mut self.bricks[row * BRICK_COLS + col]
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain events accumulated since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
