//! Fixed-step simulation frame
//!
//! Core game loop that advances simulation deterministically.

use glam::IVec2;

use super::collision::{resolve_brick, resolve_paddle, resolve_walls};
use super::state::{Game, GameEvent, GamePhase};
use crate::clamp;
use crate::consts::*;

/// Paddle control for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputIntent {
    /// Pointer held: move the paddle center onto the pointer
    PointerDrag(i32),
    KeyLeft,
    KeyRight,
    /// Nothing held: paddle coasts to a stop
    #[default]
    None,
}

/// Advance the game by one logical frame
pub fn advance(game: &mut Game, input: InputIntent) {
    // Terminal phases are absorbing
    if game.phase().is_terminal() {
        return;
    }

    game.events.clear();

    update_paddle(game, input);

    game.ball.rect.translate(game.ball.vel);

    if game.ball.rect.min.y > GAME_HEIGHT {
        game.lives -= 1;
        game.events.push(GameEvent::LifeLost);
        if game.lives == 0 {
            log::info!("Game over with score {}", game.score);
            game.events.push(GameEvent::GameOver);
        } else {
            log::info!("Life lost, {} remaining", game.lives);
        }
        game.respawn_ball();
        return;
    }

    if resolve_walls(&mut game.ball).any() {
        game.events.push(GameEvent::WallBounce);
    }

    if resolve_paddle(&mut game.ball, &game.paddle) {
        log::debug!("Paddle hit, ball velocity now {:?}", game.ball.vel);
        game.events.push(GameEvent::PaddleHit);
    }

    let mut remaining = Vec::with_capacity(game.bricks.len());
    for brick in game.bricks.drain(..) {
        if !resolve_brick(&mut game.ball, &brick) {
            remaining.push(brick);
            continue;
        }
        log::debug!("Brick at {:?} broken for {} points", brick.rect.min, brick.points);
        game.score += brick.points;
        game.events.push(GameEvent::BrickBroken {
            points: brick.points,
        });
    }
    game.bricks = remaining;

    game.ball.vel = IVec2::new(
        clamp(game.ball.vel.x, -BALL_MAX_SPEED, BALL_MAX_SPEED),
        clamp(game.ball.vel.y, -BALL_MAX_SPEED, BALL_MAX_SPEED),
    );

    if game.phase() == GamePhase::Win {
        log::info!("All bricks cleared with score {}", game.score);
        game.events.push(GameEvent::Won);
    }
}

/// Apply input to the paddle and keep it between the walls
fn update_paddle(game: &mut Game, input: InputIntent) {
    let paddle = &mut game.paddle;

    if let InputIntent::PointerDrag(delta) = input {
        paddle.rect.translate(IVec2::new(delta, 0));
        paddle.vel = delta;
    } else {
        match input {
            InputIntent::KeyLeft => paddle.vel -= PADDLE_SPEED,
            InputIntent::KeyRight => paddle.vel += PADDLE_SPEED,
            // Deceleration may step past zero; that flip is kept as-is
            _ => {
                if paddle.vel > 0 {
                    paddle.vel -= PADDLE_DECEL;
                } else if paddle.vel < 0 {
                    paddle.vel += PADDLE_DECEL;
                }
            }
        }

        paddle.vel = clamp(paddle.vel, -PADDLE_MAX_SPEED, PADDLE_MAX_SPEED);
        paddle.rect.translate(IVec2::new(paddle.vel, 0));
    }

    let overflow = paddle.rect.max.x - RIGHT_WALL;
    if overflow > 0 {
        paddle.rect.translate(IVec2::new(-overflow, 0));
        paddle.vel = 0;
    }

    let overflow = LEFT_WALL - paddle.rect.min.x;
    if overflow > 0 {
        paddle.rect.translate(IVec2::new(overflow, 0));
        paddle.vel = 0;
    }
}
