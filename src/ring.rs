//! Per-ring configuration and pure angle derivation.
//!
//! A ring's angle is always a function of the global elapsed time, never an
//! independently accumulated quantity. That keeps linear playback and
//! arbitrary seeks mathematically consistent: both read the same clock.

use std::f64::consts::PI;

use crate::catalog::SpeedCatalog;

/// Lower clamp for a wedge's angular fill.
pub const WIDTH_MIN: f64 = 0.05;
/// Upper clamp for a wedge's angular fill.
pub const WIDTH_MAX: f64 = 1.0;
/// Reset target for the width controls.
pub const WIDTH_DEFAULT: f64 = 0.5;

/// Visual pattern of one ring.
#[derive(Debug, Clone, PartialEq)]
pub struct MotifConfig {
    /// Congruent angular divisions per full rotation, >= 1.
    pub wedge_count: u32,
    /// Fraction of each sector the wedge fills, in `[WIDTH_MIN, WIDTH_MAX]`.
    pub width_factor: f64,
    /// Grayscale shade, derived from the ring's index by the collection.
    pub gray: u8,
    pub opacity: f64,
    pub show_rims: bool,
}

impl MotifConfig {
    /// `#rrggbb` form of the derived shade, for display collaborators.
    pub fn hex_color(&self) -> String {
        format!("#{0:02x}{0:02x}{0:02x}", self.gray)
    }
}

impl Default for MotifConfig {
    fn default() -> Self {
        Self {
            wedge_count: 1,
            width_factor: WIDTH_DEFAULT,
            gray: 0x33,
            opacity: 0.9,
            show_rims: false,
        }
    }
}

impl MotifConfig {
    /// Softer display defaults used for rings appended after the first.
    pub(crate) fn appended() -> Self {
        Self {
            gray: 0x88,
            opacity: 0.8,
            show_rims: true,
            ..Self::default()
        }
    }
}

/// Full configuration of one ring. Radii are derived by the owning
/// collection, never set independently.
#[derive(Debug, Clone, PartialEq)]
pub struct RingConfig {
    /// Index into the speed catalog.
    pub speed_index: usize,
    /// Rotation sense, +1 or -1.
    pub direction: i8,
    /// Rotate the pattern by half a sector, for interleaving neighbors.
    pub phase_shifted: bool,
    pub motif: MotifConfig,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            speed_index: 0,
            direction: 1,
            phase_shifted: false,
            motif: MotifConfig::default(),
            inner_radius: 0.0,
            outer_radius: 0.0,
        }
    }
}

/// Absolute angular position of a ring at the given elapsed time, in
/// `[0, 2π)`.
///
/// The `π/2` offset orients the zero angle at the top; a phase-shifted ring
/// gets an extra `π / wedge_count`, half a sector.
pub fn angle_of(elapsed: f64, tempo_bpm: f64, ring: &RingConfig, catalog: &SpeedCatalog) -> f64 {
    let option = catalog.at(ring.speed_index);
    let rps = option.rotations_per_second * (tempo_bpm / 60.0);
    let mut raw = rps * elapsed * 2.0 * PI * f64::from(ring.direction) + PI / 2.0;
    if ring.phase_shifted {
        raw += PI / f64::from(ring.motif.wedge_count.max(1));
    }
    raw.rem_euclid(2.0 * PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SpeedCatalog {
        SpeedCatalog::from_periods([4, 2, 1])
    }

    #[test]
    fn zero_time_points_up() {
        let ring = RingConfig::default();
        let a = angle_of(0.0, 60.0, &ring, &catalog());
        assert!((a - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn angle_is_periodic_over_the_ring_period() {
        let ring = RingConfig::default(); // period 4
        let cat = catalog();
        for t in [0.0, 0.3, 1.7, 10.1] {
            let a = angle_of(t, 60.0, &ring, &cat);
            let b = angle_of(t + 4.0, 60.0, &ring, &cat);
            assert!((a - b).abs() < 1e-9, "t={}: {} vs {}", t, a, b);
        }
    }

    #[test]
    fn tempo_scales_the_effective_period() {
        // At 120 bpm a period-4 ring completes in 2 elapsed units.
        let ring = RingConfig::default();
        let cat = catalog();
        let a = angle_of(0.5, 120.0, &ring, &cat);
        let b = angle_of(2.5, 120.0, &ring, &cat);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn negative_direction_stays_normalized() {
        let ring = RingConfig {
            direction: -1,
            ..RingConfig::default()
        };
        let cat = catalog();
        for t in [0.1, 1.0, 3.9, 100.0] {
            let a = angle_of(t, 60.0, &ring, &cat);
            assert!((0.0..2.0 * PI).contains(&a), "angle {} out of range", a);
        }
    }

    #[test]
    fn phase_shift_adds_half_a_sector() {
        let cat = catalog();
        let plain = RingConfig {
            motif: MotifConfig {
                wedge_count: 4,
                ..MotifConfig::default()
            },
            ..RingConfig::default()
        };
        let shifted = RingConfig {
            phase_shifted: true,
            ..plain.clone()
        };
        let a = angle_of(1.0, 60.0, &plain, &cat);
        let b = angle_of(1.0, 60.0, &shifted, &cat);
        let delta = (b - a).rem_euclid(2.0 * PI);
        assert!((delta - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn hex_color_formats_gray() {
        let motif = MotifConfig {
            gray: 0x33,
            ..MotifConfig::default()
        };
        assert_eq!(motif.hex_color(), "#333333");
    }
}
