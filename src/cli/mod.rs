//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{PlayerId, Position};

#[derive(Debug, Parser)]
#[clap(name = "ffl-draft", about = "Fantasy football draft assistant CLI")]
pub struct DraftCli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show draft data: the VORP board, your roster, or the active settings
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Update draft state: player flags or the active settings
    Set {
        #[clap(subcommand)]
        cmd: SetCmd,
    },

    /// Import players from JSON seed files.
    ///
    /// Each file holds an array of players in the seed format. Players
    /// upsert by id; use --replace to reset the pool first.
    Import {
        /// JSON files to import.
        #[clap(required = true)]
        files: Vec<PathBuf>,

        /// Clear all existing players before importing.
        #[clap(long)]
        replace: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Show the player pool ranked by value over replacement.
    ///
    /// Recomputes points and VORP from the active scoring settings; the
    /// result is cached until players or settings change.
    Board {
        /// Filter by position (repeatable): `-p QB -p RB`.
        #[clap(short = 'p', long = "position")]
        positions: Option<Vec<Position>>,

        /// Filter by player name or team (substring match, repeatable).
        #[clap(long, short = 'n')]
        name: Option<Vec<String>>,

        /// Show only flex-eligible positions (RB/WR/TE).
        #[clap(long)]
        flex: bool,

        /// Hide players already drafted.
        #[clap(long)]
        available: bool,

        /// Show only players on my team.
        #[clap(long)]
        mine: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Recompute even if a cached board matches the current inputs.
        #[clap(long)]
        refresh: bool,

        /// Show only the top N rows.
        #[clap(long)]
        limit: Option<usize>,
    },

    /// Show my roster versus the position requirements.
    Roster {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the active scoring settings.
    Scoring {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the active position requirements.
    Requirements {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum SetCmd {
    /// Mark a player drafted (or available again with --undo).
    Drafted {
        /// Player id from the seed data.
        id: PlayerId,

        /// Clear the flag instead of setting it.
        #[clap(long)]
        undo: bool,
    },

    /// Mark a player as on my team (implies drafted).
    Mine {
        /// Player id from the seed data.
        id: PlayerId,

        /// Clear the flag instead of setting it.
        #[clap(long)]
        undo: bool,
    },

    /// Replace the active scoring settings.
    Scoring {
        /// JSON file with the new settings.
        #[clap(long)]
        file: Option<PathBuf>,

        /// Reset to the stock scoring table.
        #[clap(long)]
        reset: bool,
    },

    /// Replace the active position requirements (validated before saving).
    Requirements {
        /// JSON file with the new requirements.
        #[clap(long)]
        file: Option<PathBuf>,

        /// Reset to the default requirements.
        #[clap(long)]
        reset: bool,
    },
}
