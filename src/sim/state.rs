//! Game state and core simulation types
//!
//! Everything the engine mutates lives in [`Game`]; a host owns it and lends
//! it to [`advance`](super::advance) once per frame.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// All lives lost
    GameOver,
    /// All bricks cleared
    Win,
}

impl GamePhase {
    /// True for the two absorbing phases
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Something that happened during a frame (hook for audio/effects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the left, right or top wall
    WallBounce,
    /// Ball touched the paddle
    PaddleHit,
    /// A brick was destroyed
    BrickBroken { points: u32 },
    /// Ball fell past the bottom of the field
    LifeLost,
    /// Last brick destroyed this frame
    Won,
    /// Last life lost this frame
    GameOver,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: IVec2,
}

impl Ball {
    /// Ball at the start position with velocity drawn from `rng`
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            rect: Rect::from_origin(WALL_SIZE, WALL_SIZE, BALL_WIDTH, BALL_HEIGHT),
            vel: IVec2::new(
                rng.random_range(1..=BALL_MAX_SPEED / 2),
                rng.random_range(1..=BALL_MAX_SPEED / 2),
            ),
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Horizontal velocity (units per frame)
    pub vel: i32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::from_origin(
                WALL_SIZE,
                GAME_HEIGHT - PADDLE_HEIGHT,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            vel: 0,
        }
    }
}

impl Paddle {
    /// Horizontal center used by pointer control
    pub fn center_x(&self) -> i32 {
        self.rect.min.x + self.rect.width() / 2
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub points: u32,
}

/// The single brick row: left to right, worth 0, 1, 2, ... points
pub fn brick_layout() -> Vec<Brick> {
    (0..BRICK_COUNT)
        .map(|i| Brick {
            rect: Rect::from_origin(
                WALL_SIZE + i * BRICK_WIDTH,
                BRICK_ROW_Y,
                BRICK_WIDTH,
                BRICK_HEIGHT,
            ),
            points: i as u32,
        })
        .collect()
}

/// RNG state wrapper for serialization
///
/// Each ball spawn seeds a fresh generator from the run seed and the spawn
/// index, so replays only need the seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub spawns: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, spawns: 0 }
    }

    /// Generator for the next spawn
    pub fn next_rng(&mut self) -> Pcg32 {
        let spawn_seed = self
            .spawns
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add(self.seed);
        self.spawns += 1;
        Pcg32::seed_from_u64(spawn_seed)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Remaining lives
    pub lives: u8,
    /// Sum of points of destroyed bricks
    pub score: u32,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Remaining bricks, in layout order
    pub bricks: Vec<Brick>,
    /// Events from the most recent frame
    #[serde(default)]
    pub events: Vec<GameEvent>,
    pub rng_state: RngState,
}

impl Game {
    /// Create a new game with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng_state = RngState::new(seed);
        let ball = Ball::spawn(&mut rng_state.next_rng());

        Self {
            lives: START_LIVES,
            score: 0,
            paddle: Paddle::default(),
            ball,
            bricks: brick_layout(),
            events: Vec::new(),
            rng_state,
        }
    }

    /// Current phase, derived from lives and bricks
    pub fn phase(&self) -> GamePhase {
        if self.lives == 0 {
            GamePhase::GameOver
        } else if self.bricks.is_empty() {
            GamePhase::Win
        } else {
            GamePhase::Playing
        }
    }

    /// Replace the ball with a freshly spawned one
    pub fn respawn_ball(&mut self) {
        self.ball = Ball::spawn(&mut self.rng_state.next_rng());
    }
}
