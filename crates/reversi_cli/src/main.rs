//! Interactive Reversi session on stdin/stdout.
//!
//! Commands follow the classic loop: `newgame <black|white> <size> <depth>`,
//! `play <cell>`, `cont`, `showstate`, `quit`. Board and reports go to
//! stdout; logs go to stderr and honor `RUST_LOG`.

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use minimax_engine::MinimaxEngine;
use reversi_core::{
    coord_to_name, name_to_coord, Color, ComputerMove, Coord, GameSession, SessionConfig, Standing,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod render;

use render::{color_name, counts_line, render_board};

/// Column letters run a..z, so the renderer caps the board size.
const MAX_DISPLAY_SIZE: u8 = 26;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    let mut session: Option<GameSession> = None;
    let mut first = true;

    loop {
        write!(stdout, "{}", if first { ">" } else { "\n>" }).ok();
        stdout.flush().ok();
        first = false;

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "newgame" => cmd_newgame(&mut session, &parts, &mut stdout),
            "play" => cmd_play(&mut session, &parts, &mut stdout),
            "cont" => cmd_cont(&mut session, &mut stdout),
            "showstate" => cmd_showstate(&session, &mut stdout),
            "quit" => break,
            other => reject_input(&mut stdout, other),
        }
        stdout.flush().ok();
    }
}

/// Shared rejection path: log the reason, tell the user.
fn reject_input(stdout: &mut io::Stdout, why: &str) {
    warn!("rejected input: {why}");
    writeln!(stdout, "Invalid input").ok();
}

fn parse_newgame(parts: &[&str]) -> Option<SessionConfig> {
    if parts.len() != 4 {
        return None;
    }
    let human_color = match parts[1].to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "white" => Color::White,
        _ => return None,
    };
    let board_size: u8 = parts[2].parse().ok()?;
    let search_depth: u8 = parts[3].parse().ok()?;
    if board_size > MAX_DISPLAY_SIZE {
        return None;
    }
    Some(SessionConfig {
        human_color,
        board_size,
        search_depth,
    })
}

fn cmd_newgame(session: &mut Option<GameSession>, parts: &[&str], stdout: &mut io::Stdout) {
    let config = match parse_newgame(parts) {
        Some(config) => config,
        None => {
            reject_input(stdout, "newgame wants <black|white> <size> <depth>");
            return;
        }
    };

    match GameSession::new(config, Box::new(MinimaxEngine::new())) {
        Ok(game) => {
            info!(
                "new game: human plays {} on a {}x{} board, {} at depth {}",
                color_name(game.human_color()),
                game.board().size(),
                game.board().size(),
                game.engine_name(),
                game.search_depth()
            );
            report_turn_and_counts(&game, stdout);
            *session = Some(game);
        }
        Err(err) => {
            warn!("newgame rejected: {err}");
            writeln!(stdout, "{err}").ok();
        }
    }
}

fn cmd_play(session: &mut Option<GameSession>, parts: &[&str], stdout: &mut io::Stdout) {
    let game = match session.as_mut() {
        Some(game) => game,
        None => {
            reject_input(stdout, "play without an active game");
            return;
        }
    };

    let coord = parts
        .get(1)
        .and_then(|name| name_to_coord(name, game.board().size()));
    let coord = match coord {
        Some(coord) => coord,
        None => {
            reject_input(stdout, "play wants a cell like d3");
            return;
        }
    };

    match game.attempt_human_move(coord) {
        Ok(flipped) => {
            debug!("human played {} flipping {}", coord_to_name(coord), flipped);
        }
        Err(err) => {
            reject_input(stdout, &err.to_string());
            return;
        }
    }

    write!(stdout, "{}", render_board(game.board(), &HashSet::new())).ok();
    writeln!(stdout, "Move played: {}", coord_to_name(coord)).ok();

    if finish_if_over(game, stdout) {
        *session = None;
        return;
    }
    report_turn_and_counts(game, stdout);
}

fn cmd_cont(session: &mut Option<GameSession>, stdout: &mut io::Stdout) {
    let game = match session.as_mut() {
        Some(game) => game,
        None => {
            reject_input(stdout, "cont without an active game");
            return;
        }
    };
    if game.is_human_turn() {
        reject_input(stdout, "cont on the human's turn");
        return;
    }

    let outcome = game.computer_move();

    let marks: HashSet<Coord> = game
        .current_legal_moves(game.human_color())
        .into_iter()
        .collect();
    write!(stdout, "{}", render_board(game.board(), &marks)).ok();

    match outcome {
        ComputerMove::Played { coord, flipped } => {
            debug!(
                "computer played {} flipping {}",
                coord_to_name(coord),
                flipped
            );
            writeln!(stdout, "Move played: {}", coord_to_name(coord)).ok();
        }
        ComputerMove::Passed => {
            writeln!(stdout, "No move possible for computer").ok();
        }
    }

    if finish_if_over(game, stdout) {
        *session = None;
        return;
    }

    // A blocked human passes automatically; the next `cont` moves the
    // computer again.
    if game.current_legal_moves(game.human_color()).is_empty() {
        writeln!(stdout, "No move possible for human").ok();
        game.human_pass();
    }

    report_turn_and_counts(game, stdout);
}

fn cmd_showstate(session: &Option<GameSession>, stdout: &mut io::Stdout) {
    let game = match session {
        Some(game) => game,
        None => {
            reject_input(stdout, "showstate without an active game");
            return;
        }
    };

    let marks: HashSet<Coord> = if game.is_human_turn() {
        game.current_legal_moves(game.human_color())
            .into_iter()
            .collect()
    } else {
        HashSet::new()
    };
    write!(stdout, "{}", render_board(game.board(), &marks)).ok();
    report_turn_and_counts(game, stdout);
}

/// Prints the end-of-game report when the position is final.
fn finish_if_over(game: &GameSession, stdout: &mut io::Stdout) -> bool {
    if !game.is_game_over() {
        return false;
    }

    let (black, white) = game.disk_counts();
    info!("game over: white {white} black {black}");

    writeln!(stdout, "END OF GAME").ok();
    writeln!(stdout, "{}", counts_line(black, white)).ok();
    match game.standing() {
        Some(Standing::Winner(color)) => {
            writeln!(stdout, "{} player wins", color_name(color)).ok();
        }
        Some(Standing::Draw) => {
            writeln!(stdout, "Draw").ok();
        }
        None => {}
    }
    true
}

/// "<Color> player (<role>) plays now" plus the disk counts.
fn report_turn_and_counts(game: &GameSession, stdout: &mut io::Stdout) {
    let role = if game.is_human_turn() {
        "human"
    } else {
        "computer"
    };
    writeln!(
        stdout,
        "{} player ({}) plays now",
        color_name(game.to_move()),
        role
    )
    .ok();
    let (black, white) = game.disk_counts();
    writeln!(stdout, "{}", counts_line(black, white)).ok();
}
