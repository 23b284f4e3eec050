//! Render sinks
//!
//! A sink reads the game after `advance` has returned; it never sees a
//! half-updated frame.

use crate::sim::{Game, GamePhase};

/// Consumer of settled game state, called once per frame
pub trait RenderSink {
    fn present(&mut self, game: &Game);
}

/// Headless sink that logs the HUD and phase changes
#[derive(Debug, Clone)]
pub struct LogSink {
    last_phase: GamePhase,
    last_hud: (u8, u32),
}

impl Default for LogSink {
    fn default() -> Self {
        Self {
            last_phase: GamePhase::Playing,
            last_hud: (0, 0),
        }
    }
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_phase(&self) -> GamePhase {
        self.last_phase
    }
}

impl RenderSink for LogSink {
    fn present(&mut self, game: &Game) {
        let phase = game.phase();
        if phase != self.last_phase {
            match phase {
                GamePhase::GameOver => log::info!("Game Over"),
                GamePhase::Win => log::info!("You Win!"),
                GamePhase::Playing => {}
            }
            self.last_phase = phase;
        }

        let hud = (game.lives, game.score);
        if hud != self.last_hud {
            log::info!(
                "Lives {} | Score {} | Bricks {}",
                game.lives,
                game.score,
                game.bricks.len()
            );
            self.last_hud = hud;
        }

        log::trace!(
            "paddle {:?} ball {:?} vel {:?}",
            game.paddle.rect,
            game.ball.rect,
            game.ball.vel
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_phase() {
        let mut sink = LogSink::new();
        let mut game = Game::new(1);
        sink.present(&game);
        assert_eq!(sink.last_phase(), GamePhase::Playing);

        game.bricks.clear();
        sink.present(&game);
        assert_eq!(sink.last_phase(), GamePhase::Win);
    }
}
