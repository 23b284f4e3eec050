//! Input device snapshots
//!
//! A host samples its devices once per frame into a [`DeviceState`]; the
//! adapter turns that into the single [`InputIntent`] the engine consumes.

use crate::sim::{Game, InputIntent, Paddle};

/// Raw device state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceState {
    /// Primary pointer button held
    pub pointer_held: bool,
    /// Pointer x in field coordinates
    pub pointer_x: i32,
    pub left_held: bool,
    pub right_held: bool,
}

impl DeviceState {
    /// Translate to paddle intent
    ///
    /// A held pointer wins over keys, and left wins over right.
    pub fn intent(&self, paddle: &Paddle) -> InputIntent {
        if self.pointer_held {
            InputIntent::PointerDrag(self.pointer_x - paddle.center_x())
        } else if self.left_held {
            InputIntent::KeyLeft
        } else if self.right_held {
            InputIntent::KeyRight
        } else {
            InputIntent::None
        }
    }
}

/// Anything that can be polled for a device snapshot once per frame
pub trait InputSource {
    fn sample(&mut self, game: &Game) -> DeviceState;
}

/// Demo player that chases the ball with the pointer
///
/// Holds the pointer over the ball with a small wandering offset so the
/// paddle does not always strike dead center.
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    frame: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for Autopilot {
    fn sample(&mut self, game: &Game) -> DeviceState {
        self.frame += 1;

        // Sweeps -30..30 over a 120 frame cycle
        let phase = (self.frame % 120) as i32;
        let offset = if phase < 60 { phase - 30 } else { 90 - phase };

        DeviceState {
            pointer_held: true,
            pointer_x: game.ball.rect.center().x + offset,
            left_held: false,
            right_held: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_wins() {
        let paddle = Paddle::default();
        let state = DeviceState {
            pointer_held: true,
            pointer_x: 100,
            left_held: true,
            right_held: true,
        };
        // Paddle center is 75
        assert_eq!(state.intent(&paddle), InputIntent::PointerDrag(25));
    }

    #[test]
    fn test_left_before_right() {
        let paddle = Paddle::default();
        let state = DeviceState {
            left_held: true,
            right_held: true,
            ..Default::default()
        };
        assert_eq!(state.intent(&paddle), InputIntent::KeyLeft);

        let state = DeviceState {
            right_held: true,
            ..Default::default()
        };
        assert_eq!(state.intent(&paddle), InputIntent::KeyRight);
    }

    #[test]
    fn test_idle() {
        let paddle = Paddle::default();
        assert_eq!(DeviceState::default().intent(&paddle), InputIntent::None);
    }

    #[test]
    fn test_autopilot_tracks_ball() {
        let game = Game::new(5);
        let mut pilot = Autopilot::new();
        let ball_x = game.ball.rect.center().x;
        for _ in 0..240 {
            let state = pilot.sample(&game);
            assert!(state.pointer_held);
            assert!((state.pointer_x - ball_x).abs() <= 30);
        }
    }
}
