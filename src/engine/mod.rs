//! The scoring and replacement-value engine.
//!
//! Pure, synchronous functions over in-memory snapshots: scoring and the
//! DST schedule adjustment ([`compute`]), replacement baselines and VORP
//! assignment over the whole pool ([`board`]), and the advisory roster
//! needs evaluation ([`roster`]). Persistence and presentation live in the
//! surrounding application; the engine only transforms the values it is
//! handed.

pub mod board;
pub mod compute;
pub mod roster;
pub mod types;

pub use board::recompute_board;
pub use roster::evaluate_roster;
pub use types::{Player, PositionRequirements, ReplacementRanks, ScoringSettings};
