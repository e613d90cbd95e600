//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use ffl_draft::{
    cli::{Commands, DraftCli, GetCmd, SetCmd},
    commands::{
        board::{handle_board, BoardParams},
        import::handle_import,
        mark::{handle_mark, MarkTarget},
        roster::handle_roster,
        settings::{
            handle_requirements_set, handle_requirements_show, handle_scoring_set,
            handle_scoring_show,
        },
    },
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = DraftCli::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Board {
                positions,
                name,
                flex,
                available,
                mine,
                json,
                refresh,
                limit,
            } => handle_board(BoardParams {
                as_json: json,
                positions,
                names: name,
                flex_only: flex,
                available_only: available,
                mine_only: mine,
                refresh,
                limit,
            })?,

            GetCmd::Roster { json } => handle_roster(json)?,

            GetCmd::Scoring { json } => handle_scoring_show(json)?,

            GetCmd::Requirements { json } => handle_requirements_show(json)?,
        },

        Commands::Set { cmd } => match cmd {
            SetCmd::Drafted { id, undo } => handle_mark(id, MarkTarget::Drafted, !undo)?,

            SetCmd::Mine { id, undo } => handle_mark(id, MarkTarget::MyTeam, !undo)?,

            SetCmd::Scoring { file, reset } => handle_scoring_set(file, reset)?,

            SetCmd::Requirements { file, reset } => handle_requirements_set(file, reset)?,
        },

        Commands::Import { files, replace } => handle_import(files, replace)?,
    }

    Ok(())
}
