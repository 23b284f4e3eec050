//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical frame per `advance` call
//! - Seeded RNG only
//! - Stable brick iteration order (layout order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Face, WallHits, Zone, face_of, zone_of};
pub use rect::Rect;
pub use state::{Ball, Brick, Game, GameEvent, GamePhase, Paddle, RngState, brick_layout};
pub use tick::{InputIntent, advance};
