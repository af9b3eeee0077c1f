//! Ordered catalog of rotation speeds.
//!
//! Index 0 is the slowest option (largest period). The catalog is immutable
//! once built; rings address it by index and index adjustments clamp to the
//! catalog bounds.

/// One selectable rotation speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedOption {
    /// Time units for one full rotation.
    pub period: u64,
    /// Derived speed, `1 / period`.
    pub rotations_per_second: f64,
}

impl SpeedOption {
    fn new(period: u64) -> Self {
        Self {
            period,
            rotations_per_second: 1.0 / period as f64,
        }
    }
}

/// Immutable, index-addressed speed catalog.
#[derive(Debug, Clone)]
pub struct SpeedCatalog {
    options: Vec<SpeedOption>,
}

impl SpeedCatalog {
    /// Build a catalog from integer periods, in the given order. Periods of
    /// zero are dropped; an empty result falls back to a single period-1
    /// option so the catalog is never empty.
    pub fn from_periods<I>(periods: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut options: Vec<SpeedOption> = periods
            .into_iter()
            .filter(|&p| p >= 1)
            .map(SpeedOption::new)
            .collect();
        if options.is_empty() {
            options.push(SpeedOption::new(1));
        }
        Self { options }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Largest valid index.
    pub fn max_index(&self) -> usize {
        self.options.len() - 1
    }

    /// Option at `index`, clamped into the catalog bounds.
    pub fn at(&self, index: usize) -> &SpeedOption {
        &self.options[index.min(self.max_index())]
    }

    /// Clamp a signed index computation into `[0, len-1]`.
    pub fn clamp_index(&self, index: i64) -> usize {
        index.clamp(0, self.max_index() as i64) as usize
    }

    pub fn options(&self) -> &[SpeedOption] {
        &self.options
    }
}

impl Default for SpeedCatalog {
    /// Fifty integer periods, descending so index 0 is the slowest.
    fn default() -> Self {
        Self::from_periods((1..=50).rev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_slowest_first() {
        let c = SpeedCatalog::default();
        assert_eq!(c.len(), 50);
        assert_eq!(c.at(0).period, 50);
        assert_eq!(c.at(c.max_index()).period, 1);
        assert!(c.at(0).rotations_per_second < c.at(c.max_index()).rotations_per_second);
    }

    #[test]
    fn at_clamps_out_of_range() {
        let c = SpeedCatalog::from_periods([8, 4, 2]);
        assert_eq!(c.at(999).period, 2);
    }

    #[test]
    fn clamp_index_never_wraps() {
        let c = SpeedCatalog::from_periods([8, 4, 2]);
        assert_eq!(c.clamp_index(-3), 0);
        assert_eq!(c.clamp_index(7), 2);
        assert_eq!(c.clamp_index(1), 1);
    }

    #[test]
    fn zero_periods_are_dropped() {
        let c = SpeedCatalog::from_periods([0, 6, 0, 3]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.at(0).period, 6);
    }

    #[test]
    fn empty_input_falls_back_to_unit_period() {
        let c = SpeedCatalog::from_periods(std::iter::empty());
        assert!(!c.is_empty());
        assert_eq!(c.len(), 1);
        assert_eq!(c.at(0).period, 1);
    }
}
