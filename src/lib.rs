//! # crownwheel
//!
//! Temporal synchronization engine for a set of concentric rotating rings
//! ("crowns"), each spinning at an independently configurable rational
//! speed and wedge division.
//!
//! The core of the crate is the clockwork, not the drawing:
//!
//! - [`recurrence`] computes the exact least-common-recurrence time at
//!   which every ring simultaneously returns to its synchronized start
//!   state, with integer lcm arithmetic so no floating-point error
//!   accumulates.
//! - [`ease`] shapes time advancement with a deceleration/acceleration
//!   curve near cycle boundaries.
//! - [`clock`] owns the single authoritative elapsed-time value, detects
//!   cycle wraps, and supports absolute seeking into the cycle.
//! - [`ring`] derives every ring's angle as a pure function of that one
//!   clock, so linear playback and seeking can never drift apart.
//! - [`collection`] holds the ordered ring set and its mutation operations,
//!   rederiving radii and shades whenever membership changes.
//! - [`session`] bundles the above into one explicitly owned aggregate and
//!   exposes the read-only views consumed by rendering and UI
//!   collaborators.
//!
//! Rendering ring geometry into vector paths and the UI control surface are
//! external collaborators; the crate exposes finalized read-only views for
//! them and nothing more.

pub mod catalog;
pub mod clock;
pub mod collection;
pub mod ease;
pub mod rational;
pub mod recurrence;
pub mod ring;
pub mod session;

pub mod prelude {
    pub use crate::catalog::{SpeedCatalog, SpeedOption};
    pub use crate::clock::{ClockEngine, DEFAULT_TEMPO_BPM, FLASH_DURATION};
    pub use crate::collection::{RingCollection, DEFAULT_MAX_RADIUS};
    pub use crate::ease::{speed_factor, SPEED_FLOOR};
    pub use crate::recurrence::{recurrence_seconds, recurrence_time};
    pub use crate::ring::{angle_of, MotifConfig, RingConfig};
    pub use crate::session::{ClockView, RingView, SimulationSession};
}
