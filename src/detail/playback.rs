use std::time::Duration;

/// Play/pause flag and progress of the demo video
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Playback {
    playing: bool,
    progress: f64,
}

impl Playback {
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Percentage in `[0, 100]`
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Set progress from a media position. A zero (or negative, or NaN) duration yields 0.
    pub fn update(&mut self, position: f64, duration: f64) {
        self.progress = if duration > 0.0 && position.is_finite() {
            (position / duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
    }
}

/// Simulated media element
///
/// The terminal cannot show video, so the popup drives playback progress from this clock.
/// It advances only while playing and stops at its duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaClock {
    position: Duration,
    duration: Duration,
}

impl MediaClock {
    pub fn new(duration: Duration) -> Self {
        Self { position: Duration::ZERO, duration }
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.duration
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.position = (self.position + elapsed).min(self.duration);
    }

    pub fn rewind(&mut self) {
        self.position = Duration::ZERO;
    }
}
