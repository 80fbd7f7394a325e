#[cfg(test)]
mod tests {
    use crate::core::{board_from_strings, Board, Cell, Difficulty, GameOutcome, Player, Position};
    use crate::game::{GameSession, MoveReport};
    use crate::logic_tests::tests::reachable_boards;
    use crate::player::ai::{alpha_beta, minimax, SearchStats};
    use crate::player::{AlphaBetaAI, PlayerController};

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_center_opening_hard() {
        let mut session = GameSession::new(Difficulty::Hard);
        let report = session.attempt_move(1, 1).unwrap();

        assert!(report.applied);
        assert_eq!(report.outcome, GameOutcome::InProgress);
        assert_eq!(report.final_outcome, GameOutcome::InProgress);
        let reply = report.opponent_move.unwrap();
        assert!(reply.is_corner(), "reply {} is not a corner", reply);
        assert_eq!(reply, pos(0, 0));
        assert_eq!(session.get_cell(0, 0), Ok(Cell::Mark(Player::O)));
        assert_eq!(session.turn(), Player::X);
    }

    #[test]
    fn test_human_completes_row() {
        let board = board_from_strings(["X X .", "O O .", ". . ."]).unwrap();
        let mut session = GameSession::from_board(board, Difficulty::Hard);
        assert_eq!(session.turn(), Player::X);

        let report = session.attempt_move(0, 2).unwrap();
        assert_eq!(
            report,
            MoveReport {
                applied: true,
                outcome: GameOutcome::Win(Player::X),
                opponent_move: None,
                final_outcome: GameOutcome::Win(Player::X),
            }
        );
        assert_eq!(session.board().count(Player::O), 2);
    }

    #[test]
    fn test_computer_reply_ends_game() {
        let board = board_from_strings(["O O .", "X X .", ". . ."]).unwrap();
        let mut session = GameSession::from_board(board, Difficulty::Hard);
        assert_eq!(session.turn(), Player::X);

        let report = session.attempt_move(2, 0).unwrap();
        assert_eq!(
            report,
            MoveReport {
                applied: true,
                outcome: GameOutcome::InProgress,
                opponent_move: Some(pos(0, 2)),
                final_outcome: GameOutcome::Win(Player::O),
            }
        );
        assert_eq!(session.outcome(), GameOutcome::Win(Player::O));
        assert_eq!(session.get_cell(0, 2), Ok(Cell::Mark(Player::O)));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut session = GameSession::with_seed(Difficulty::Easy, 3);
        session.attempt_move(0, 0).unwrap();
        let before = session.board_snapshot();
        let turn = session.turn();

        let report = session.attempt_move(0, 0).unwrap();
        assert!(!report.applied);
        assert_eq!(report.opponent_move, None);
        assert_eq!(report.outcome, GameOutcome::InProgress);
        assert_eq!(session.board_snapshot(), before);
        assert_eq!(session.turn(), turn);
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let board = board_from_strings(["X X X", "O O .", ". . ."]).unwrap();
        let mut session = GameSession::from_board(board, Difficulty::Hard);
        let report = session.attempt_move(2, 2).unwrap();
        assert!(!report.applied);
        assert_eq!(report.final_outcome, GameOutcome::Win(Player::X));
        assert_eq!(*session.board(), board);
    }

    #[test]
    fn test_out_of_range_is_error() {
        let mut session = GameSession::new(Difficulty::Easy);
        assert!(session.attempt_move(3, 1).is_err());
        assert!(session.get_cell(0, 9).is_err());
        assert_eq!(*session.board(), Board::new());
    }

    #[test]
    fn test_reset_round_trip() {
        let mut session = GameSession::with_seed(Difficulty::Easy, 11);
        session.attempt_move(1, 1).unwrap();
        session.attempt_move(2, 2).unwrap();
        session.reset_game();

        assert!(session
            .board_snapshot()
            .iter()
            .flatten()
            .all(|&c| c == Cell::Empty));
        assert_eq!(session.turn(), Player::X);
        assert_eq!(session.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_difficulty_read_at_move_time() {
        let mut session = GameSession::with_seed(Difficulty::Easy, 5);
        assert_eq!(session.difficulty(), Difficulty::Easy);
        session.set_difficulty(Difficulty::Hard);
        let report = session.attempt_move(1, 1).unwrap();
        assert_eq!(report.opponent_move, Some(pos(0, 0)));
    }

    #[test]
    fn test_opponent_to_move_from_board() {
        let board = board_from_strings(["X . .", ". . .", ". . ."]).unwrap();
        let mut session = GameSession::from_board(board, Difficulty::Hard);
        assert_eq!(session.turn(), Player::O);

        // 人間の手番ではない
        let report = session.attempt_move(2, 2).unwrap();
        assert!(!report.applied);

        assert_eq!(session.opponent_move(), Some(pos(1, 1)));
        assert_eq!(session.turn(), Player::X);
        // 人間の手番では相手は指さない
        assert_eq!(session.opponent_move(), None);
    }

    #[test]
    fn test_full_board_draw() {
        let board = board_from_strings(["O X O", "O X X", "X O X"]).unwrap();
        assert_eq!(board.outcome(), GameOutcome::Draw);
        let session = GameSession::from_board(board, Difficulty::Hard);
        assert_eq!(session.outcome(), GameOutcome::Draw);
    }

    #[test]
    fn test_easy_games_finish() {
        let mut session = GameSession::with_seed(Difficulty::Easy, 2024);
        for _ in 0..50 {
            while !session.outcome().is_terminal() {
                let target = session.board().empty_cells()[0];
                let report = session.attempt_move(target.row(), target.col()).unwrap();
                assert!(report.applied);
                assert_eq!(report.final_outcome, session.outcome());
            }
            session.reset_game();
        }
    }

    /// Tries every legal X continuation against the Hard engine.
    fn assert_hard_never_loses(board: &mut Board, engine: &AlphaBetaAI) -> usize {
        match board.outcome() {
            GameOutcome::Win(Player::X) => panic!("hard engine lost: {:?}", board),
            GameOutcome::Win(Player::O) | GameOutcome::Draw => return 1,
            GameOutcome::InProgress => {}
        }

        let mut games = 0;
        for x_move in Position::ALL {
            if !board.is_empty_at(x_move) {
                continue;
            }
            let mut after_x = board.hypothetical(x_move, Player::X);
            if after_x.outcome().is_terminal() {
                games += assert_hard_never_loses(&mut after_x, engine);
                continue;
            }
            let reply = engine
                .choose_move(&after_x, &after_x.empty_cells())
                .expect("engine must reply on an undecided board");
            let mut after_o = after_x.hypothetical(reply, Player::O);
            games += assert_hard_never_loses(&mut after_o, engine);
        }
        games
    }

    #[test]
    fn test_hard_never_loses() {
        let engine = AlphaBetaAI::new(Player::O, "Hard");
        let games = assert_hard_never_loses(&mut Board::new(), &engine);
        assert!(games > 0);
    }

    #[test]
    fn test_hard_never_loses_in_session() {
        let mut session = GameSession::with_seed(Difficulty::Hard, 0);
        let x_picker = crate::player::RandomAI::with_seed("X", 77);
        for _ in 0..100 {
            while !session.outcome().is_terminal() {
                let moves = session.board().empty_cells();
                let mv = x_picker.choose_move(session.board(), &moves).unwrap();
                session.attempt_move(mv.row(), mv.col()).unwrap();
            }
            assert_ne!(session.outcome(), GameOutcome::Win(Player::X));
            session.reset_game();
        }
    }

    #[test]
    fn test_pruning_matches_full_minimax() {
        for board in reachable_boards() {
            if board.outcome().is_terminal() {
                continue;
            }
            for is_maximizing in [true, false] {
                let mut scratch = board;
                let mut pruned_stats = SearchStats::default();
                let mut full_stats = SearchStats::default();
                let pruned = alpha_beta(
                    &mut scratch,
                    i32::MIN,
                    i32::MAX,
                    is_maximizing,
                    &mut pruned_stats,
                );
                let full = minimax(&mut scratch, is_maximizing, &mut full_stats);
                assert!(pruned_stats.nodes <= full_stats.nodes);
                assert_eq!(pruned, full, "board {:?} maximizing={}", board, is_maximizing);
                assert_eq!(scratch, board);
            }
        }
    }
}
