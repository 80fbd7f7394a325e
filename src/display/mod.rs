use crate::core::{Board, Cell, Difficulty, Player, Position, BOARD_SIZE};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{stdout, Write};

pub struct DisplayState {
    pub cursor: Position,
    pub highlights: Vec<Position>,
    pub status_msg: Option<String>,
    pub last_move: Option<Position>,
    pub difficulty: Difficulty,
    pub turn: Player,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Position::CENTER,
            highlights: Vec::new(),
            status_msg: None,
            last_move: None,
            difficulty: Difficulty::default(),
            turn: Player::X,
            show_cursor: true,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears per-game decorations, keeps the cursor where it is.
    pub fn new_game(&mut self) {
        self.highlights.clear();
        self.last_move = None;
        self.status_msg = None;
        self.show_cursor = true;
    }
}

fn cell_text(cell: Cell, prefix: &str, suffix: &str) -> String {
    format!("{}{}{}", prefix, cell.display_char(), suffix)
}

pub fn render_board(board: &Board, state: &DisplayState) -> anyhow::Result<()> {
    let mut out = stdout();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    print!("=== Tic-Tac-Toe ===\r\n");
    print!(
        "Difficulty: {} | Turn: {}\r\n",
        state.difficulty.to_string().bold(),
        state.turn
    );
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    print!("    ");
    for col in 0..BOARD_SIZE {
        print!("  {}  ", col);
    }
    print!("\r\n");
    print!("   +{}+\r\n", "-----".repeat(BOARD_SIZE));

    for row in 0..BOARD_SIZE {
        print!("{:2} |", row);
        for col in 0..BOARD_SIZE {
            let pos = Position::ALL[row * BOARD_SIZE + col];
            let cell = board.get(pos);
            let is_cursor = state.show_cursor && state.cursor == pos;
            let is_highlight = state.highlights.contains(&pos);
            let is_last_move = state.last_move == Some(pos);

            let (prefix, suffix) = if is_cursor {
                (" [", "] ")
            } else if is_highlight {
                (" (", ") ")
            } else if is_last_move {
                (" {", "} ")
            } else {
                ("  ", "  ")
            };
            let text = cell_text(cell, prefix, suffix);

            if is_cursor {
                print!("{}", text.yellow());
            } else if is_highlight {
                print!("{}", text.green());
            } else if is_last_move {
                print!("{}", text.red());
            } else {
                match cell {
                    Cell::Mark(Player::X) => print!("{}", text.cyan()),
                    Cell::Mark(Player::O) => print!("{}", text.magenta()),
                    Cell::Empty => print!("{}", text),
                }
            }
        }
        print!("|\r\n");
    }
    print!("   +{}+\r\n", "-----".repeat(BOARD_SIZE));
    print!("\r\n");
    print!("[Arrows]: Move | [Enter]: Place | [e]/[h]: Easy/Hard | [r]: Reset | [q]: Quit\r\n");

    out.flush()?;
    Ok(())
}
