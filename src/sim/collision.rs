//! Collision detection and response for walls, paddle and bricks
//!
//! Every resolver takes the overlap between the ball and an obstacle,
//! decides which face was struck from the overlap's shape, pushes the ball
//! out by the overlap and picks a new velocity. Where along a face the ball
//! landed is quantized into three zones.

use glam::IVec2;

use super::rect::Rect;
use super::state::{Ball, Brick, Paddle};
use crate::consts::*;

/// Which part of a face an impact landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Left,
    Center,
    Right,
}

/// Face of an obstacle that was struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Top or bottom (overlap wider than tall)
    Horizontal,
    /// Struck from the left side
    Left,
    /// Struck from the right side
    Right,
}

/// Quantize the overlap's horizontal center against `target`
///
/// The outer zones each span `1/edge_divisor` of the target width and the
/// center zone gets the rest: 4 gives quarter/half/quarter, 3 gives thirds.
/// Points exactly on a divider belong to the center.
pub fn zone_of(overlap: &Rect, target: &Rect, edge_divisor: i32) -> Zone {
    let edge = target.width() / edge_divisor;
    let left_div = target.min.x + edge;
    let right_div = target.max.x - edge;
    let center = overlap.min.x + overlap.width() / 2;

    if center < left_div {
        Zone::Left
    } else if center > right_div {
        Zone::Right
    } else {
        Zone::Center
    }
}

/// Classify which face of `target` the overlap sits on
pub fn face_of(overlap: &Rect, target: &Rect) -> Face {
    if overlap.width() > overlap.height() {
        Face::Horizontal
    } else if overlap.min.x == target.min.x {
        Face::Left
    } else {
        Face::Right
    }
}

/// Which walls were hit this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub right: bool,
    pub left: bool,
    pub top: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.right || self.left || self.top
    }
}

/// Push the ball back inside the right, left and top walls
///
/// There is no bottom wall; falling out the bottom costs a life.
pub fn resolve_walls(ball: &mut Ball) -> WallHits {
    let mut hits = WallHits::default();

    let overflow = ball.rect.max.x - RIGHT_WALL;
    if overflow > 0 {
        ball.rect.translate(IVec2::new(-overflow, 0));
        ball.vel.x *= -1;
        hits.right = true;
    }

    let overflow = LEFT_WALL - ball.rect.min.x;
    if overflow > 0 {
        ball.rect.translate(IVec2::new(overflow, 0));
        ball.vel.x *= -1;
        hits.left = true;
    }

    let overflow = TOP_WALL - ball.rect.min.y;
    if overflow > 0 {
        ball.rect.translate(IVec2::new(0, overflow));
        ball.vel.y *= -1;
        hits.top = true;
    }

    hits
}

/// Resolve a ball/paddle overlap. Returns true on contact.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    let overlap = ball.rect.intersect(&paddle.rect);
    if overlap.is_empty() {
        return false;
    }

    match face_of(&overlap, &paddle.rect) {
        Face::Horizontal => {
            if paddle.vel != 0 {
                // Moving paddle hands its momentum straight to the ball
                ball.vel.x = paddle.vel;
            } else {
                ball.rect.translate(IVec2::new(0, -overlap.height()));
                match zone_of(&overlap, &paddle.rect, 4) {
                    Zone::Left => {
                        ball.vel = IVec2::new(-BALL_MAX_SPEED / 2, -BALL_MAX_SPEED / 3);
                    }
                    Zone::Right => {
                        ball.vel = IVec2::new(BALL_MAX_SPEED / 2, -BALL_MAX_SPEED / 3);
                    }
                    Zone::Center => {
                        ball.vel.y = -BALL_MAX_SPEED / 2;
                    }
                }
            }
        }
        Face::Left => {
            ball.rect.translate(IVec2::new(-overlap.width(), 0));
            ball.vel.x = -BALL_MAX_SPEED;
            ball.vel.y *= -1;
        }
        Face::Right => {
            ball.rect.translate(IVec2::new(overlap.width(), 0));
            ball.vel.x = BALL_MAX_SPEED;
            ball.vel.y *= -1;
        }
    }

    true
}

/// Resolve a ball/brick overlap. Returns true when the brick was hit.
pub fn resolve_brick(ball: &mut Ball, brick: &Brick) -> bool {
    let overlap = ball.rect.intersect(&brick.rect);
    if overlap.is_empty() {
        return false;
    }

    match face_of(&overlap, &brick.rect) {
        Face::Horizontal => {
            // Always pushed upward, even when entering from below
            ball.rect.translate(IVec2::new(0, -overlap.height()));
            match zone_of(&overlap, &brick.rect, 3) {
                Zone::Left => ball.vel.x = -BALL_MAX_SPEED / 3,
                Zone::Right => ball.vel.x = BALL_MAX_SPEED / 3,
                Zone::Center => {
                    let overlap_mid_y = overlap.min.y + overlap.height() / 2;
                    let brick_mid_y = brick.rect.min.y + brick.rect.height() / 2;
                    ball.vel.y = if overlap_mid_y < brick_mid_y {
                        -BALL_MAX_SPEED / 2
                    } else {
                        BALL_MAX_SPEED / 2
                    };
                }
            }
        }
        Face::Left => {
            ball.rect.translate(IVec2::new(-overlap.width(), 0));
            ball.vel.x = -BALL_MAX_SPEED / 2;
            ball.vel.y *= -1;
        }
        Face::Right => {
            ball.rect.translate(IVec2::new(overlap.width(), 0));
            ball.vel.x = BALL_MAX_SPEED / 2;
            ball.vel.y *= -1;
        }
    }

    true
}
