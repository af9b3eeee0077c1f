//! Explicitly owned simulation aggregate.
//!
//! Bundles the speed catalog, the ring collection and the clock into one
//! value the host passes around, replacing the implicit global session
//! state of a UI-driven implementation. All derived quantities (recurrence
//! time, radii, angles) are recomputed from the canonical configuration on
//! read, so they can never go stale.
//!
//! Ordering within one `advance` pass: recurrence derivation, then clock
//! advancement, then angle derivation. Rendering reads happen after the
//! pass and never observe a half-updated state.

use num_rational::Ratio;
use num_traits::ToPrimitive;

use crate::catalog::SpeedCatalog;
use crate::clock::ClockEngine;
use crate::collection::RingCollection;
use crate::recurrence::recurrence_time;
use crate::ring::{angle_of, MotifConfig};

/// Read-only per-ring tuple handed to the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct RingView {
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Absolute angle in radians, `[0, 2π)`.
    pub theta: f64,
    pub motif: MotifConfig,
}

/// Read-only clock data for display collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockView {
    pub elapsed: f64,
    pub recurrence: f64,
    pub progress: f64,
    pub revolutions: u64,
    pub flash_active: bool,
    pub running: bool,
}

/// The whole in-memory session: catalog, rings, clock.
#[derive(Debug, Clone)]
pub struct SimulationSession {
    catalog: SpeedCatalog,
    rings: RingCollection,
    clock: ClockEngine,
}

impl Default for SimulationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationSession {
    pub fn new() -> Self {
        Self::with_catalog(SpeedCatalog::default())
    }

    pub fn with_catalog(catalog: SpeedCatalog) -> Self {
        Self {
            catalog,
            rings: RingCollection::new(),
            clock: ClockEngine::new(),
        }
    }

    pub fn catalog(&self) -> &SpeedCatalog {
        &self.catalog
    }

    pub fn rings(&self) -> &RingCollection {
        &self.rings
    }

    pub fn clock(&self) -> &ClockEngine {
        &self.clock
    }

    /// Exact recurrence time of the current ensemble, as a reduced rational.
    pub fn recurrence(&self) -> Ratio<u128> {
        recurrence_time(&self.rings.periods(&self.catalog), &self.rings.wedge_counts())
    }

    /// Recurrence time as a float, for clock arithmetic.
    pub fn recurrence_seconds(&self) -> f64 {
        self.recurrence().to_f64().unwrap_or(0.0)
    }

    /// Advance the session by one frame of real time. Callable from any
    /// host's timer or frame primitive.
    pub fn advance(&mut self, real_dt: f64) {
        let recurrence = self.recurrence_seconds();
        self.clock.tick(real_dt, recurrence);
    }

    /// Finalized per-ring geometry for the renderer, derived from the
    /// current elapsed time.
    pub fn ring_views(&self) -> Vec<RingView> {
        let elapsed = self.clock.elapsed();
        let tempo = self.clock.tempo_bpm();
        self.rings
            .rings()
            .iter()
            .map(|ring| RingView {
                inner_radius: ring.inner_radius,
                outer_radius: ring.outer_radius,
                theta: angle_of(elapsed, tempo, ring, &self.catalog),
                motif: ring.motif.clone(),
            })
            .collect()
    }

    pub fn clock_view(&self) -> ClockView {
        let recurrence = self.recurrence_seconds();
        ClockView {
            elapsed: self.clock.elapsed(),
            recurrence,
            progress: self.clock.progress(recurrence),
            revolutions: self.clock.revolutions(),
            flash_active: self.clock.flash_active(),
            running: self.clock.is_running(),
        }
    }

    /// Progress gauge text: elapsed whole time units over the recurrence,
    /// the denominator shown as a reduced fraction when it is below 1.
    pub fn gauge(&self) -> String {
        let recurrence = self.recurrence();
        let seconds = self.recurrence_seconds();
        let ticks = (self.clock.progress(seconds) * seconds).floor() as u128;
        format!("{}/{}", ticks, recurrence)
    }

    // ── Clock actions ───────────────────────────────────────────────────

    pub fn play_pause(&mut self) {
        self.clock.toggle();
    }

    pub fn synchronize(&mut self) {
        self.clock.synchronize();
    }

    pub fn seek(&mut self, fraction: f64) {
        let recurrence = self.recurrence_seconds();
        self.clock.seek(fraction, recurrence);
    }

    pub fn rewind(&mut self, seconds: f64) {
        let recurrence = self.recurrence_seconds();
        self.clock.rewind(seconds, recurrence);
    }

    pub fn set_tempo_bpm(&mut self, bpm: f64) {
        self.clock.set_tempo_bpm(bpm);
    }

    pub fn toggle_ease(&mut self) {
        self.clock.toggle_ease();
    }

    // ── Structural actions ──────────────────────────────────────────────

    pub fn add_ring(&mut self) {
        self.rings.add_ring();
    }

    pub fn remove_ring(&mut self) {
        self.rings.remove_ring();
    }

    // ── Speed actions ───────────────────────────────────────────────────
    //
    // Changing a period changes the cycle length, so these resynchronize
    // the clock to keep visible motion phase-consistent.

    /// Per-ring speed control: `delta` 0 resets to index 0.
    pub fn adjust_ring_speed(&mut self, index: usize, delta: i64) {
        if delta == 0 {
            self.rings.reset_speed(index);
        } else {
            self.rings.adjust_speed(index, delta, &self.catalog);
        }
        self.clock.synchronize();
    }

    /// Batch speed control: `delta` 0 resets every ring to index 0.
    pub fn adjust_all_speeds(&mut self, delta: i64) {
        if delta == 0 {
            self.rings.reset_all_speeds();
        } else {
            self.rings.adjust_all_speeds(delta, &self.catalog);
        }
        self.clock.synchronize();
    }

    pub fn accumulate_speeds_down(&mut self) {
        self.rings.accumulate_speed_down(&self.catalog);
    }

    pub fn accumulate_speeds_up(&mut self) {
        self.rings.accumulate_speed_up(&self.catalog);
    }

    // ── Wedge actions ───────────────────────────────────────────────────

    /// Per-ring wedge control: `delta` 0 resets to a single wedge.
    pub fn adjust_ring_wedges(&mut self, index: usize, delta: i64) {
        if delta == 0 {
            self.rings.reset_wedges(index);
        } else {
            self.rings.adjust_wedges(index, delta);
        }
        self.clock.synchronize();
    }

    /// Batch wedge control: `delta` 0 resets every ring to a single wedge
    /// without resynchronizing (the pattern phase is unchanged by a reset
    /// to the undivided state).
    pub fn adjust_all_wedges(&mut self, delta: i64) {
        if delta == 0 {
            self.rings.reset_all_wedges();
        } else {
            self.rings.adjust_all_wedges(delta);
            self.clock.synchronize();
        }
    }

    pub fn accumulate_wedges_down(&mut self) {
        self.rings.accumulate_wedges_down();
    }

    pub fn accumulate_wedges_up(&mut self) {
        self.rings.accumulate_wedges_up();
    }

    // ── Width actions ───────────────────────────────────────────────────

    /// Per-ring width control: `steps` 0 resets to the default width.
    pub fn adjust_ring_width(&mut self, index: usize, steps: i64) {
        if steps == 0 {
            self.rings.reset_width(index);
        } else {
            self.rings.adjust_width(index, steps);
        }
    }

    /// Batch width control: `steps` 0 resets every ring.
    pub fn adjust_all_widths(&mut self, steps: i64) {
        if steps == 0 {
            self.rings.reset_all_widths();
        } else {
            self.rings.adjust_all_widths(steps);
        }
    }

    pub fn accumulate_widths_down(&mut self) {
        self.rings.accumulate_width_down();
    }

    pub fn accumulate_widths_up(&mut self) {
        self.rings.accumulate_width_up();
    }

    // ── Direction and phase actions ─────────────────────────────────────

    pub fn toggle_ring_direction(&mut self, index: usize) {
        self.rings.toggle_direction(index);
    }

    pub fn invert_all_directions(&mut self) {
        self.rings.invert_all_directions();
    }

    pub fn toggle_ring_phase(&mut self, index: usize) {
        self.rings.toggle_phase(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn default_session_recurrence_is_the_slowest_period() {
        let s = SimulationSession::new();
        // one ring at catalog index 0, period 50, one wedge
        assert_eq!(s.recurrence(), Ratio::from_integer(50));
    }

    #[test]
    fn advance_then_views_are_consistent() {
        let mut s = SimulationSession::new();
        s.toggle_ease();
        s.advance(1.0);
        let views = s.ring_views();
        assert_eq!(views.len(), 1);
        // period 50 at 60 bpm: 1/50 of a turn past the top
        let expected = (2.0 * PI / 50.0 + PI / 2.0).rem_euclid(2.0 * PI);
        assert!((views[0].theta - expected).abs() < 1e-9);
    }

    #[test]
    fn ring_views_carry_derived_geometry() {
        let mut s = SimulationSession::new();
        s.add_ring();
        let views = s.ring_views();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].inner_radius, 0.0);
        assert!((views[1].inner_radius - views[0].outer_radius).abs() < 1e-12);
        assert!(views[1].motif.gray > views[0].motif.gray);
    }

    #[test]
    fn speed_change_resynchronizes_the_clock() {
        let mut s = SimulationSession::new();
        s.toggle_ease();
        s.advance(3.0);
        assert!(s.clock().elapsed() > 0.0);
        let serial = s.clock().seek_serial();
        s.adjust_ring_speed(0, 1);
        assert_eq!(s.clock().elapsed(), 0.0);
        assert_eq!(s.clock().seek_serial(), serial + 1);
    }

    #[test]
    fn wedge_change_updates_recurrence() {
        let mut s = SimulationSession::new();
        s.adjust_ring_wedges(0, 1); // 2 wedges, period 50 -> effective 25
        assert_eq!(s.recurrence(), Ratio::from_integer(25));
    }

    #[test]
    fn width_change_leaves_the_clock_alone() {
        let mut s = SimulationSession::new();
        s.toggle_ease();
        s.advance(2.0);
        let before = s.clock().elapsed();
        s.adjust_ring_width(0, 3);
        s.adjust_all_widths(-1);
        assert_eq!(s.clock().elapsed(), before);
    }

    #[test]
    fn seek_lands_on_the_requested_fraction() {
        let mut s = SimulationSession::new();
        s.seek(0.25);
        let view = s.clock_view();
        assert!((view.progress - 0.25).abs() < 1e-12);
        assert!((view.elapsed - 12.5).abs() < 1e-9);
    }

    #[test]
    fn gauge_shows_whole_units_over_recurrence() {
        let mut s = SimulationSession::new();
        s.seek(0.5);
        assert_eq!(s.gauge(), "25/50");
    }

    #[test]
    fn gauge_reduces_a_subunit_recurrence() {
        let mut s = SimulationSession::with_catalog(SpeedCatalog::from_periods([1]));
        s.adjust_ring_wedges(0, 1); // period 1, 2 wedges -> recurrence 1/2
        assert_eq!(s.gauge(), "0/1/2");
    }

    #[test]
    fn empty_recurrence_never_divides_by_zero() {
        // A session always has one ring, but the clock view must stay
        // finite even when driven with a degenerate recurrence.
        let s = SimulationSession::new();
        let view = s.clock_view();
        assert!(view.progress.is_finite());
        assert!(view.recurrence.is_finite());
    }

    #[test]
    fn full_cycle_counts_one_revolution() {
        let mut s = SimulationSession::with_catalog(SpeedCatalog::from_periods([4]));
        s.toggle_ease();
        for _ in 0..9 {
            s.advance(0.5);
        }
        let view = s.clock_view();
        assert_eq!(view.revolutions, 1);
    }
}
