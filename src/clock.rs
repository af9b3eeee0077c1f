//! Authoritative simulation clock.
//!
//! Owns the single elapsed-time value from which every ring angle is
//! derived. Advancement is frame-driven: the host calls [`ClockEngine::tick`]
//! with a real delta each display refresh, and the delta is scaled by the
//! ease curve and the tempo before it accumulates. Seeks and rewinds move
//! the same value, so playback and seeking can never drift apart.
//!
//! Cycle-wrap detection compares consecutive progress samples: whenever the
//! new sample is smaller than the previous one, a revolution has completed
//! and a transient flash pulse starts.

use crate::ease;

/// Duration of the wrap flash pulse, in seconds of real time.
pub const FLASH_DURATION: f64 = 0.3;

/// Default tempo scalar, beats per minute.
pub const DEFAULT_TEMPO_BPM: f64 = 60.0;

/// Frame-driven clock with play/pause, synchronize, seek and rewind.
#[derive(Debug, Clone)]
pub struct ClockEngine {
    elapsed: f64,
    revolutions: u64,
    running: bool,
    tempo_bpm: f64,
    ease_enabled: bool,
    prev_progress: f64,
    flash_remaining: f64,
    seek_serial: u64,
}

impl Default for ClockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockEngine {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            revolutions: 0,
            running: true,
            tempo_bpm: DEFAULT_TEMPO_BPM,
            ease_enabled: true,
            prev_progress: 0.0,
            flash_remaining: 0.0,
            seek_serial: 0,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn revolutions(&self) -> u64 {
        self.revolutions
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tempo_bpm(&self) -> f64 {
        self.tempo_bpm
    }

    /// Set the tempo scalar. Non-positive values are ignored.
    pub fn set_tempo_bpm(&mut self, bpm: f64) {
        if bpm > 0.0 && bpm.is_finite() {
            self.tempo_bpm = bpm;
        }
    }

    pub fn ease_enabled(&self) -> bool {
        self.ease_enabled
    }

    pub fn toggle_ease(&mut self) {
        self.ease_enabled = !self.ease_enabled;
    }

    /// Fraction of the recurrence cycle elapsed, in `[0, 1)`. Defined as 0
    /// for a degenerate (zero) recurrence rather than dividing by zero.
    pub fn progress(&self, recurrence: f64) -> f64 {
        if recurrence <= 0.0 {
            0.0
        } else {
            self.elapsed.rem_euclid(recurrence) / recurrence
        }
    }

    /// True while the wrap flash pulse is active.
    pub fn flash_active(&self) -> bool {
        self.flash_remaining > 0.0
    }

    /// Monotonically increasing identifier, bumped by every seek and
    /// synchronize. One-shot consumers (a renderer applying a seek) key on
    /// this rather than on values that may recompute for unrelated reasons.
    pub fn seek_serial(&self) -> u64 {
        self.seek_serial
    }

    /// Advance by one frame. The flash pulse decays on every call; elapsed
    /// time accumulates only while running, scaled by the ease factor and
    /// the tempo.
    pub fn tick(&mut self, real_dt: f64, recurrence: f64) {
        self.flash_remaining = (self.flash_remaining - real_dt).max(0.0);
        if !self.running || real_dt <= 0.0 {
            return;
        }
        let factor = if self.ease_enabled {
            ease::speed_factor(self.progress(recurrence), recurrence)
        } else {
            1.0
        };
        self.elapsed += real_dt * factor * (self.tempo_bpm / 60.0);
        self.observe_progress(recurrence);
    }

    /// Flip between Running and Paused. Elapsed time is untouched.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Reset elapsed time to 0 and restart revolution tracking, so the next
    /// wrap is not mis-signaled as an extra revolution. Emits a flash pulse
    /// and bumps the seek serial (a synchronize is a seek to fraction 0).
    pub fn synchronize(&mut self) {
        log::debug!("clock synchronize: elapsed 0, revolutions reset");
        self.elapsed = 0.0;
        self.prev_progress = 0.0;
        self.revolutions = 0;
        self.flash_remaining = FLASH_DURATION;
        self.seek_serial += 1;
    }

    /// Jump to an absolute fraction of the recurrence cycle. One-shot: the
    /// seek serial is bumped so consumers apply it exactly once. Wrap
    /// detection runs on the new progress sample, so a backward seek counts
    /// as a completed revolution just like a wrap during playback.
    pub fn seek(&mut self, fraction: f64, recurrence: f64) {
        let f = fraction.clamp(0.0, 1.0);
        self.elapsed = f * recurrence.max(0.0);
        self.seek_serial += 1;
        log::debug!("clock seek to fraction {f:.4} (elapsed {:.4})", self.elapsed);
        self.observe_progress(recurrence);
    }

    /// Step back by `seconds` within the current cycle, wrapping to
    /// `recurrence - seconds` when the subtraction would go negative. A
    /// cycle shorter than the rewind is silently ignored.
    pub fn rewind(&mut self, seconds: f64, recurrence: f64) {
        if recurrence <= 0.0 || recurrence < seconds || seconds < 0.0 {
            return;
        }
        let current = self.elapsed.rem_euclid(recurrence);
        let target = if current >= seconds {
            current - seconds
        } else {
            recurrence - seconds
        };
        self.seek(target / recurrence, recurrence);
    }

    /// Compare the new progress sample with the previous one; a decrease
    /// means the cycle wrapped.
    fn observe_progress(&mut self, recurrence: f64) {
        let p = self.progress(recurrence);
        if p < self.prev_progress {
            self.revolutions += 1;
            self.flash_remaining = FLASH_DURATION;
            log::debug!("cycle wrapped, revolution {}", self.revolutions);
        }
        self.prev_progress = p;
    }
}
