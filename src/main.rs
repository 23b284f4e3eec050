//! Break'em entry point
//!
//! Headless host: loads settings, drives the simulation at a fixed frame
//! rate with the demo autopilot, renders collision tones and prints the
//! final game state as JSON.

use std::io::Read;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use breakem::Settings;
use breakem::audio::{SoundEffect, Tone, pcm_len};
use breakem::platform::{Autopilot, FrameClock, InputSource, LogSink, RenderSink};
use breakem::sim::{Game, advance};

fn main() {
    env_logger::init();
    log::info!("Break'em (headless) starting...");

    let settings = match std::env::args_os().nth(1) {
        Some(path) => Settings::load(&PathBuf::from(path)),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Seed {}", seed);

    let mut game = Game::new(seed);
    let mut input = Autopilot::new();
    let mut sink = LogSink::new();
    let mut tone = Tone::from_settings(&settings);
    let mut clock = FrameClock::new(settings.frame_rate, settings.max_catch_up);

    let mut frames: u64 = 0;
    let mut pcm_bytes: usize = 0;
    let mut tone_frames_left: u64 = 0;
    let mut last_time = Instant::now();

    while frames < settings.max_frames && !game.phase().is_terminal() {
        let due = if settings.realtime {
            let now = Instant::now();
            let due = clock.tick(now - last_time);
            last_time = now;
            due
        } else {
            1
        };

        for _ in 0..due {
            let device = input.sample(&game);
            let intent = device.intent(&game.paddle);
            advance(&mut game, intent);
            frames += 1;

            if tone_frames_left > 0 {
                tone_frames_left -= 1;
                if tone_frames_left == 0 {
                    tone.stop();
                }
            }

            for effect in game.events.iter().filter_map(SoundEffect::for_event) {
                let Some(duration) = tone.play_effect(effect) else {
                    continue;
                };
                pcm_bytes += render_tone(&mut tone, duration);
                tone_frames_left = frames_for(duration, clock.step());
            }

            sink.present(&game);
        }

        if settings.realtime {
            thread::sleep(clock.step() / 2);
        }
    }

    log::info!(
        "Finished after {} frames: {:?}, score {}, lives {}, {} bytes of audio",
        frames,
        game.phase(),
        game.score,
        game.lives,
        pcm_bytes
    );

    match serde_json::to_string_pretty(&game) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("Failed to serialize final state: {}", err),
    }
}

/// Seed from the wall clock when settings do not pin one
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Pull one tone's worth of PCM; a device backend would queue it
fn render_tone(tone: &mut Tone, duration: Duration) -> usize {
    let Some(stream) = tone.stream_mut() else {
        return 0;
    };
    let mut buf = vec![0u8; pcm_len(duration)];
    match stream.read(&mut buf) {
        Ok(n) => n,
        Err(err) => {
            log::warn!("Tone synthesis failed: {}", err);
            0
        }
    }
}

/// Whole frames covering `duration` (at least one)
fn frames_for(duration: Duration, step: Duration) -> u64 {
    (duration.as_nanos().div_ceil(step.as_nanos()) as u64).max(1)
}
