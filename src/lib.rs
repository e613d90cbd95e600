//! Fantasy Football Draft Assistant Library
//!
//! A Rust library and CLI for running a single-user fantasy football draft:
//! it keeps a player pool with projected and historical statistics, computes
//! each player's value over replacement (VORP) under configurable scoring
//! settings, and tracks your roster against configurable position
//! requirements while you mark players drafted.
//!
//! ## Features
//!
//! - **VORP Board**: Per-position replacement baselines and value-over-
//!   replacement rankings, recomputed in one pass from the active settings
//! - **Flexible Scoring**: Per-category point rates (passing, rushing,
//!   receiving, defense), editable and resettable
//! - **Schedule Adjustment**: Strength-of-schedule factor applied to
//!   defense/special-teams projections
//! - **Roster Tracking**: Drafted / my-team flags with advisory position
//!   needs and flex coverage reporting
//! - **Dual Storage**: SQLite database with a JSON file fallback, both
//!   speaking the seed data's wire format
//!
//! ## Quick Start
//!
//! ```rust
//! use ffl_draft::engine::{recompute_board, ReplacementRanks, ScoringSettings};
//! use ffl_draft::Player;
//!
//! let seed = serde_json::json!([
//!     {
//!         "id": "rb-barkley",
//!         "name": "Saquon Barkley",
//!         "position": "RB",
//!         "team": "PHI",
//!         "projectedStats2025": { "rushingYards": 1800.0, "rushingTDs": 12.0 }
//!     },
//!     {
//!         "id": "rb-gibbs",
//!         "name": "Jahmyr Gibbs",
//!         "position": "RB",
//!         "team": "DET",
//!         "projectedStats2025": { "rushingYards": 1400.0, "rushingTDs": 10.0 }
//!     }
//! ]);
//! let mut players: Vec<Player> = serde_json::from_value(seed).unwrap();
//!
//! recompute_board(
//!     &mut players,
//!     &ScoringSettings::default(),
//!     &ReplacementRanks::default(),
//! );
//!
//! assert_eq!(players[0].name, "Saquon Barkley");
//! assert!(players[0].vorp > 0.0);
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a custom data directory (database and JSON files):
//! ```bash
//! export FFL_DRAFT_DATA_DIR=~/drafts/2025
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod engine;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{PlayerId, Position};
pub use engine::types::{Player, PositionRequirements, ReplacementRanks, ScoringSettings};
pub use error::{DraftError, Result};

pub const DATA_DIR_ENV_VAR: &str = "FFL_DRAFT_DATA_DIR";
