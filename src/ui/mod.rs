use crate::core::{Difficulty, GameOutcome};
use crate::display::{render_board, DisplayState};
use crate::game::GameSession;
use crate::logic::winning_line;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;
use tracing::info;

fn next_key() -> anyhow::Result<KeyCode> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if kind == KeyEventKind::Press {
                    return Ok(code);
                }
            }
        }
    }
}

/// 対局ループ (q で終了)
pub fn run(session: &mut GameSession) -> anyhow::Result<()> {
    let mut state = DisplayState::new();

    loop {
        state.difficulty = session.difficulty();
        state.turn = session.turn();
        render_board(session.board(), &state)?;

        match next_key()? {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Up => state.cursor = state.cursor.up(),
            KeyCode::Down => state.cursor = state.cursor.down(),
            KeyCode::Left => state.cursor = state.cursor.left(),
            KeyCode::Right => state.cursor = state.cursor.right(),
            KeyCode::Char('e') => {
                session.set_difficulty(Difficulty::Easy);
                state.status_msg = Some("Difficulty set to Easy".to_string());
            }
            KeyCode::Char('h') => {
                session.set_difficulty(Difficulty::Hard);
                state.status_msg = Some("Difficulty set to Hard".to_string());
            }
            KeyCode::Char('r') => {
                session.reset_game();
                state.new_game();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let target = state.cursor;
                let report = session.attempt_move(target.row(), target.col())?;
                if !report.applied {
                    state.status_msg = Some(format!("Cell {} is not available", target));
                    continue;
                }

                state.last_move = report.opponent_move;
                match report.final_outcome {
                    GameOutcome::InProgress => {
                        state.status_msg = report
                            .opponent_move
                            .map(|mv| format!("Computer played {}", mv));
                    }
                    outcome => {
                        acknowledge_outcome(session, &mut state, outcome)?;
                    }
                }
            }
            _ => {}
        }
    }
}

/// Shows the result until a key is pressed, then starts a new game.
fn acknowledge_outcome(
    session: &mut GameSession,
    state: &mut DisplayState,
    outcome: GameOutcome,
) -> anyhow::Result<()> {
    info!(%outcome, "game finished");
    state.highlights = winning_line(session.board())
        .map(|(_, line)| line.to_vec())
        .unwrap_or_default();
    state.show_cursor = false;
    state.turn = session.turn();
    state.status_msg = Some(format!("{} Press any key for a new game.", outcome));
    render_board(session.board(), state)?;

    next_key()?;
    session.reset_game();
    state.new_game();
    Ok(())
}
