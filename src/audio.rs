//! Tone synthesis for collision sounds
//!
//! Procedurally generated sine tones - no device backend or sound files.
//! The host pulls PCM from the active [`ToneStream`] and hands it to
//! whatever output it has.

use std::f64::consts::PI;
use std::io::{self, Read};
use std::time::Duration;

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Output sample rate (Hz)
pub const SAMPLE_RATE: f64 = 48_000.0;
/// Base pitch; note `n` plays at `n` times this
pub const BASE_FREQUENCY: f64 = 440.0;
/// How long a triggered tone lasts
pub const TONE_DURATION: Duration = Duration::from_millis(50);
/// 16-bit stereo
pub const BYTES_PER_FRAME: usize = 4;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits wall
    WallHit,
    /// Ball hits paddle
    PaddleHit,
    /// Brick breaks; pitch rises with its points
    BrickBreak { points: u32 },
    /// Ball fell out of the field
    LifeLost,
}

impl SoundEffect {
    /// Sound for an engine event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match *event {
            GameEvent::WallBounce => Some(SoundEffect::WallHit),
            GameEvent::PaddleHit => Some(SoundEffect::PaddleHit),
            GameEvent::BrickBroken { points } => Some(SoundEffect::BrickBreak { points }),
            GameEvent::LifeLost => Some(SoundEffect::LifeLost),
            GameEvent::Won | GameEvent::GameOver => None,
        }
    }

    /// Note number passed to [`Tone::play`]
    pub fn note(&self) -> u32 {
        match self {
            SoundEffect::LifeLost => 1,
            SoundEffect::WallHit => 2,
            SoundEffect::PaddleHit => 3,
            SoundEffect::BrickBreak { points } => 4 + points,
        }
    }
}

/// Endless sine wave rendered as little-endian 16-bit stereo PCM
#[derive(Debug, Clone)]
pub struct ToneStream {
    /// Byte offset into the current period
    position: u64,
    /// Bytes generated for a previous short read
    remainder: Vec<u8>,
    frequency: f64,
    gain: f64,
}

impl ToneStream {
    pub fn new(frequency: f64, gain: f64) -> Self {
        Self {
            position: 0,
            remainder: Vec::new(),
            frequency,
            gain: gain.clamp(0.0, 1.0),
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Samples per period (at least one)
    fn period(&self) -> u64 {
        ((SAMPLE_RATE / self.frequency) as u64).max(1)
    }

    fn fill(&mut self, buf: &mut [u8]) {
        let period = self.period();
        let mut p = self.position / BYTES_PER_FRAME as u64;

        for frame in buf.chunks_exact_mut(BYTES_PER_FRAME) {
            let phase = 2.0 * PI * p as f64 / period as f64;
            let sample = (phase.sin() * self.gain * i16::MAX as f64) as i16;
            let [lo, hi] = sample.to_le_bytes();
            frame.copy_from_slice(&[lo, hi, lo, hi]);
            p += 1;
        }

        self.position += buf.len() as u64;
        self.position %= period * BYTES_PER_FRAME as u64;
    }
}

impl Read for ToneStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.remainder.is_empty() {
            let n = buf.len().min(self.remainder.len());
            buf[..n].copy_from_slice(&self.remainder[..n]);
            self.remainder.drain(..n);
            return Ok(n);
        }

        if buf.len() % BYTES_PER_FRAME == 0 {
            self.fill(buf);
            return Ok(buf.len());
        }

        // Render whole frames, hand back what fits, keep the tail
        let padded = buf.len() + BYTES_PER_FRAME - buf.len() % BYTES_PER_FRAME;
        let mut scratch = vec![0u8; padded];
        self.fill(&mut scratch);
        let n = buf.len();
        buf.copy_from_slice(&scratch[..n]);
        self.remainder = scratch.split_off(n);
        Ok(n)
    }
}

/// Single-voice tone player
///
/// Only one tone sounds at a time; triggers while a tone is active are
/// dropped until the host calls [`Tone::stop`].
#[derive(Debug)]
pub struct Tone {
    stream: Option<ToneStream>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for Tone {
    fn default() -> Self {
        Self::new()
    }
}

impl Tone {
    pub fn new() -> Self {
        Self {
            stream: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Tone player with volumes taken from settings
    pub fn from_settings(settings: &Settings) -> Self {
        let mut tone = Self::new();
        tone.set_master_volume(settings.master_volume);
        tone.set_sfx_volume(settings.sfx_volume);
        tone.set_muted(settings.muted);
        tone
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn is_playing(&self) -> bool {
        self.stream.is_some()
    }

    /// Start a tone at `note * 440` Hz
    ///
    /// Returns how long the tone should sound, or `None` when nothing was
    /// started (a tone is already playing, audio is silent, or `note` is 0).
    pub fn play(&mut self, note: u32) -> Option<Duration> {
        if self.stream.is_some() {
            return None;
        }
        if note == 0 {
            log::warn!("Ignoring tone with note 0");
            return None;
        }

        let vol = self.effective_volume();
        if vol <= 0.0 {
            return None;
        }

        self.stream = Some(ToneStream::new(BASE_FREQUENCY * note as f64, vol as f64));
        Some(TONE_DURATION)
    }

    /// Play the tone for a sound effect
    pub fn play_effect(&mut self, effect: SoundEffect) -> Option<Duration> {
        self.play(effect.note())
    }

    /// Active stream to pull PCM from
    pub fn stream_mut(&mut self) -> Option<&mut ToneStream> {
        self.stream.as_mut()
    }

    pub fn stop(&mut self) {
        self.stream = None;
    }
}

/// Bytes of PCM covering `duration`
pub fn pcm_len(duration: Duration) -> usize {
    (duration.as_secs_f64() * SAMPLE_RATE) as usize * BYTES_PER_FRAME
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(bytes: &[u8]) -> Vec<(i16, i16)> {
        bytes
            .chunks_exact(4)
            .map(|f| {
                (
                    i16::from_le_bytes([f[0], f[1]]),
                    i16::from_le_bytes([f[2], f[3]]),
                )
            })
            .collect()
    }

    #[test]
    fn test_stream_starts_at_zero_and_is_stereo() {
        let mut stream = ToneStream::new(440.0, 1.0);
        let mut buf = [0u8; 64];
        assert_eq!(stream.read(&mut buf).unwrap(), 64);

        let frames = samples(&buf);
        assert_eq!(frames[0], (0, 0));
        assert!(frames.iter().all(|(l, r)| l == r));
        // Rising edge of the sine
        assert!(frames[1].0 > 0);
        assert!(frames[5].0 > frames[1].0);
    }

    #[test]
    fn test_stream_wraps_at_period() {
        // 48000 / 4800 = 10 frames per period
        let mut stream = ToneStream::new(4800.0, 1.0);
        let mut first = [0u8; 40];
        let mut second = [0u8; 40];
        stream.read(&mut first).unwrap();
        stream.read(&mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_short_reads_use_remainder() {
        let mut whole = ToneStream::new(880.0, 0.5);
        let mut expected = [0u8; 8];
        whole.read(&mut expected).unwrap();

        let mut split = ToneStream::new(880.0, 0.5);
        let mut got = Vec::new();
        let mut chunk = [0u8; 3];
        while got.len() < 8 {
            let n = split.read(&mut chunk).unwrap();
            got.extend_from_slice(&chunk[..n]);
        }
        assert_eq!(&got[..8], &expected[..]);
    }

    #[test]
    fn test_gain_scales_amplitude() {
        let mut loud = ToneStream::new(440.0, 1.0);
        let mut quiet = ToneStream::new(440.0, 0.25);
        let mut a = [0u8; 400];
        let mut b = [0u8; 400];
        loud.read(&mut a).unwrap();
        quiet.read(&mut b).unwrap();
        let peak = |bytes: &[u8]| samples(bytes).iter().map(|s| s.0.unsigned_abs()).max();
        assert!(peak(&b) < peak(&a));
    }

    #[test]
    fn test_play_only_when_idle() {
        let mut tone = Tone::new();
        assert_eq!(tone.play(2), Some(TONE_DURATION));
        assert!(tone.is_playing());
        assert_eq!(tone.stream_mut().map(|s| s.frequency()), Some(880.0));
        assert_eq!(tone.play(3), None);

        tone.stop();
        assert!(!tone.is_playing());
        assert_eq!(tone.play(3), Some(TONE_DURATION));
    }

    #[test]
    fn test_muted_and_zero_note() {
        let mut tone = Tone::new();
        assert_eq!(tone.play(0), None);
        tone.set_muted(true);
        assert_eq!(tone.play(1), None);
        assert!(!tone.is_playing());
    }

    #[test]
    fn test_effect_mapping() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::BrickBroken { points: 2 }),
            Some(SoundEffect::BrickBreak { points: 2 })
        );
        assert_eq!(SoundEffect::BrickBreak { points: 2 }.note(), 6);
        assert_eq!(SoundEffect::for_event(&GameEvent::Won), None);
    }

    #[test]
    fn test_pcm_len() {
        assert_eq!(pcm_len(TONE_DURATION), 2400 * 4);
    }
}
