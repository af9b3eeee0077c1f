//! Ordered ring set and its mutation operations.
//!
//! The collection owns everything that is derived from ring membership:
//! for k rings, ring i occupies the annulus `[i/k, (i+1)/k] * r_max`, and
//! its shade interpolates linearly between a dark and a light gray endpoint
//! by index. Radii and shades are rederived after every mutation that can
//! change them; they are never settable from outside.
//!
//! Every operation family comes in a per-ring and a batch form, plus the
//! inward/outward accumulation variants that propagate a ring's value onto
//! its neighbor.

use smallvec::{smallvec, SmallVec};

use crate::catalog::SpeedCatalog;
use crate::ring::{MotifConfig, RingConfig, WIDTH_DEFAULT, WIDTH_MAX, WIDTH_MIN};

/// Outer radius of the whole wheel.
pub const DEFAULT_MAX_RADIUS: f64 = 120.0;

const GRAY_DARK: u8 = 0x33;
const GRAY_LIGHT: u8 = 0xCC;

/// Width step for the ±width controls.
const WIDTH_STEP: f64 = 0.05;

/// Ordered sequence of rings, innermost first. Never empty.
#[derive(Debug, Clone)]
pub struct RingCollection {
    rings: SmallVec<[RingConfig; 8]>,
    max_radius: f64,
}

impl Default for RingCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl RingCollection {
    /// One default ring, radii and shade derived.
    pub fn new() -> Self {
        Self::with_max_radius(DEFAULT_MAX_RADIUS)
    }

    pub fn with_max_radius(max_radius: f64) -> Self {
        let mut c = Self {
            rings: smallvec![RingConfig::default()],
            max_radius,
        };
        c.rederive();
        c
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn rings(&self) -> &[RingConfig] {
        &self.rings
    }

    pub fn get(&self, index: usize) -> Option<&RingConfig> {
        self.rings.get(index)
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Period of every ring, resolved through the catalog, for recurrence
    /// computation.
    pub fn periods(&self, catalog: &SpeedCatalog) -> Vec<u64> {
        self.rings
            .iter()
            .map(|r| catalog.at(r.speed_index).period)
            .collect()
    }

    /// Wedge count of every ring, parallel to [`Self::periods`].
    pub fn wedge_counts(&self) -> Vec<u64> {
        self.rings
            .iter()
            .map(|r| u64::from(r.motif.wedge_count))
            .collect()
    }

    // ── Structural ──────────────────────────────────────────────────────

    /// Append a ring with the appended-ring display defaults.
    pub fn add_ring(&mut self) {
        self.rings.push(RingConfig {
            motif: MotifConfig::appended(),
            ..RingConfig::default()
        });
        self.rederive();
        log::debug!("ring added, {} total", self.rings.len());
    }

    /// Remove the outermost ring. Removing below one ring is a no-op;
    /// returns whether a ring was removed.
    pub fn remove_ring(&mut self) -> bool {
        if self.rings.len() <= 1 {
            return false;
        }
        self.rings.pop();
        self.rederive();
        log::debug!("ring removed, {} total", self.rings.len());
        true
    }

    // ── Speed ───────────────────────────────────────────────────────────

    /// Move one ring's catalog index by `delta`, clamped to the catalog.
    pub fn adjust_speed(&mut self, index: usize, delta: i64, catalog: &SpeedCatalog) {
        if let Some(ring) = self.rings.get_mut(index) {
            ring.speed_index = catalog.clamp_index(ring.speed_index as i64 + delta);
        }
    }

    pub fn reset_speed(&mut self, index: usize) {
        if let Some(ring) = self.rings.get_mut(index) {
            ring.speed_index = 0;
        }
    }

    pub fn adjust_all_speeds(&mut self, delta: i64, catalog: &SpeedCatalog) {
        for ring in &mut self.rings {
            ring.speed_index = catalog.clamp_index(ring.speed_index as i64 + delta);
        }
        self.rederive();
    }

    pub fn reset_all_speeds(&mut self) {
        for ring in &mut self.rings {
            ring.speed_index = 0;
        }
    }

    /// Propagate speed indices outward: each ring gains its inner
    /// neighbor's index, clamped to the catalog. On an all-zero
    /// configuration this instead seeds ring i with index i, establishing a
    /// harmonic progression.
    pub fn accumulate_speed_down(&mut self, catalog: &SpeedCatalog) {
        let max = catalog.max_index();
        if self.rings.iter().all(|r| r.speed_index == 0) {
            for (i, ring) in self.rings.iter_mut().enumerate() {
                ring.speed_index = i.min(max);
            }
            self.rederive();
            return;
        }
        for i in 0..self.rings.len().saturating_sub(1) {
            let inner = self.rings[i].speed_index;
            let ring = &mut self.rings[i + 1];
            ring.speed_index = (ring.speed_index + inner).min(max);
        }
        self.rederive();
    }

    /// Mirror of [`Self::accumulate_speed_down`], propagating inward; the
    /// all-zero seed is reversed (ring i gets index n-1-i).
    pub fn accumulate_speed_up(&mut self, catalog: &SpeedCatalog) {
        let max = catalog.max_index();
        let n = self.rings.len();
        if self.rings.iter().all(|r| r.speed_index == 0) {
            for (i, ring) in self.rings.iter_mut().enumerate() {
                ring.speed_index = (n - 1 - i).min(max);
            }
            self.rederive();
            return;
        }
        for i in (1..n).rev() {
            let outer = self.rings[i].speed_index;
            let ring = &mut self.rings[i - 1];
            ring.speed_index = (ring.speed_index + outer).min(max);
        }
        self.rederive();
    }

    // ── Wedges ──────────────────────────────────────────────────────────

    /// Change one ring's wedge count by `delta`, floored at 1.
    pub fn adjust_wedges(&mut self, index: usize, delta: i64) {
        if let Some(ring) = self.rings.get_mut(index) {
            ring.motif.wedge_count = clamp_wedges(i64::from(ring.motif.wedge_count) + delta);
        }
    }

    pub fn reset_wedges(&mut self, index: usize) {
        if let Some(ring) = self.rings.get_mut(index) {
            ring.motif.wedge_count = 1;
        }
    }

    pub fn adjust_all_wedges(&mut self, delta: i64) {
        for ring in &mut self.rings {
            ring.motif.wedge_count = clamp_wedges(i64::from(ring.motif.wedge_count) + delta);
        }
        self.rederive();
    }

    pub fn reset_all_wedges(&mut self) {
        for ring in &mut self.rings {
            ring.motif.wedge_count = 1;
        }
    }

    /// Propagate wedge counts outward: each ring gains its inner neighbor's
    /// count.
    pub fn accumulate_wedges_down(&mut self) {
        for i in 0..self.rings.len().saturating_sub(1) {
            let inner = self.rings[i].motif.wedge_count;
            self.rings[i + 1].motif.wedge_count += inner;
        }
        self.rederive();
    }

    /// Propagate wedge counts inward.
    pub fn accumulate_wedges_up(&mut self) {
        for i in (1..self.rings.len()).rev() {
            let outer = self.rings[i].motif.wedge_count;
            self.rings[i - 1].motif.wedge_count += outer;
        }
        self.rederive();
    }

    // ── Width ───────────────────────────────────────────────────────────

    /// Move one ring's width by `steps` of 0.05, clamped to
    /// `[WIDTH_MIN, WIDTH_MAX]`.
    pub fn adjust_width(&mut self, index: usize, steps: i64) {
        if let Some(ring) = self.rings.get_mut(index) {
            ring.motif.width_factor = clamp_width(ring.motif.width_factor + steps as f64 * WIDTH_STEP);
        }
    }

    pub fn reset_width(&mut self, index: usize) {
        if let Some(ring) = self.rings.get_mut(index) {
            ring.motif.width_factor = WIDTH_DEFAULT;
        }
    }

    pub fn adjust_all_widths(&mut self, steps: i64) {
        for ring in &mut self.rings {
            ring.motif.width_factor = clamp_width(ring.motif.width_factor + steps as f64 * WIDTH_STEP);
        }
    }

    pub fn reset_all_widths(&mut self) {
        for ring in &mut self.rings {
            ring.motif.width_factor = WIDTH_DEFAULT;
        }
    }

    /// Blend widths outward: each ring takes
    /// `clamp(own + inner_neighbor * 0.5)`.
    pub fn accumulate_width_down(&mut self) {
        for i in 0..self.rings.len().saturating_sub(1) {
            let inner = self.rings[i].motif.width_factor;
            let ring = &mut self.rings[i + 1];
            ring.motif.width_factor = clamp_width(ring.motif.width_factor + inner * 0.5);
        }
        self.rederive();
    }

    /// Blend widths inward.
    pub fn accumulate_width_up(&mut self) {
        for i in (1..self.rings.len()).rev() {
            let outer = self.rings[i].motif.width_factor;
            let ring = &mut self.rings[i - 1];
            ring.motif.width_factor = clamp_width(ring.motif.width_factor + outer * 0.5);
        }
        self.rederive();
    }

    // ── Direction and phase ─────────────────────────────────────────────

    pub fn toggle_direction(&mut self, index: usize) {
        if let Some(ring) = self.rings.get_mut(index) {
            ring.direction = -ring.direction;
        }
    }

    pub fn invert_all_directions(&mut self) {
        for ring in &mut self.rings {
            ring.direction = -ring.direction;
        }
    }

    pub fn toggle_phase(&mut self, index: usize) {
        if let Some(ring) = self.rings.get_mut(index) {
            ring.phase_shifted = !ring.phase_shifted;
        }
    }

    // ── Derivation ──────────────────────────────────────────────────────

    /// Rederive radii and shades from the current membership.
    fn rederive(&mut self) {
        let k = self.rings.len();
        for (i, ring) in self.rings.iter_mut().enumerate() {
            ring.inner_radius = i as f64 / k as f64 * self.max_radius;
            ring.outer_radius = (i + 1) as f64 / k as f64 * self.max_radius;
            ring.motif.gray = gray_for_ring(i, k);
        }
    }
}

fn clamp_wedges(value: i64) -> u32 {
    value.clamp(1, i64::from(u32::MAX)) as u32
}

fn clamp_width(value: f64) -> f64 {
    value.clamp(WIDTH_MIN, WIDTH_MAX)
}

/// Index-linear grayscale between the dark and light endpoints.
fn gray_for_ring(index: usize, total: usize) -> u8 {
    let t = if total > 1 {
        index as f64 / (total - 1) as f64
    } else {
        0.0
    };
    let span = f64::from(GRAY_LIGHT) - f64::from(GRAY_DARK);
    (f64::from(GRAY_DARK) + span * t).round() as u8
}
