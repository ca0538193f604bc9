//! Properties of the board model and the move-selection engine

use std::collections::BTreeSet;

use rand::{SeedableRng, rngs::StdRng};
use tictactoe_engine::{
    engine::{
        Difficulty, Minimax, MoveSelector, Reason, Tactic, best_move, best_move_for,
        find_immediate_move, select_move,
    },
    tictactoe::{BoardState, Cell, GameResult, LineAnalyzer, Mark, WINNING_LINES},
};

mod common;

use common::{board, reachable_boards};

mod board_model {
    use super::*;

    #[test]
    fn test_reachable_position_count() {
        assert_eq!(reachable_boards().len(), 5478);
    }

    #[test]
    fn test_winner_iff_monochrome_line() {
        for state in reachable_boards() {
            let monochrome = WINNING_LINES.iter().find_map(|&[a, b, c]| {
                let cell = state.cells[a];
                (cell != Cell::Empty && cell == state.cells[b] && cell == state.cells[c])
                    .then(|| cell.to_mark())
                    .flatten()
            });
            assert_eq!(state.winner(), monochrome, "board {}", state.encode());
        }
    }

    #[test]
    fn test_full_iff_no_empty_cells() {
        for state in reachable_boards() {
            assert_eq!(
                state.is_full(),
                state.empty_cells().next().is_none(),
                "board {}",
                state.encode()
            );
        }
    }

    #[test]
    fn test_status_agrees_with_winner_and_fullness() {
        for state in reachable_boards() {
            let expected = match (state.winner(), state.is_full()) {
                (Some(Mark::X), _) => GameResult::XWins,
                (Some(Mark::O), _) => GameResult::OWins,
                (None, true) => GameResult::Draw,
                (None, false) => GameResult::InProgress,
            };
            assert_eq!(state.status(), expected);
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let state = board("XOXXOOOXX");
        assert_eq!(state.winner(), None);
        assert!(state.is_full());
        assert_eq!(state.status(), GameResult::Draw);
    }

    #[test]
    fn test_empty_cells_is_ascending_and_restartable() {
        let state = board("X...O...X");
        let cells = state.empty_cells();
        let first: Vec<usize> = cells.clone().collect();
        let second: Vec<usize> = cells.collect();
        assert_eq!(first, vec![1, 2, 3, 5, 6, 7]);
        assert_eq!(first, second);
    }
}

mod heuristic {
    use super::*;

    #[test]
    fn test_immediate_win_for_own_mark() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[1] = Cell::O;
        assert_eq!(
            find_immediate_move(&BoardState::from_cells(cells), Mark::O),
            Some(2)
        );
    }

    #[test]
    fn test_no_completion_available() {
        assert_eq!(find_immediate_move(&board("X...O...."), Mark::O), None);
        assert_eq!(find_immediate_move(&BoardState::new(), Mark::X), None);
    }

    #[test]
    fn test_first_line_in_canonical_order_wins() {
        // O completes the middle column at 1 and the main diagonal at 0;
        // the column comes first in line order.
        let state = board("...XOXXOO");
        assert_eq!(
            LineAnalyzer::winning_moves(&state.cells, Mark::O),
            BTreeSet::from([0, 1])
        );
        assert_eq!(find_immediate_move(&state, Mark::O), Some(1));
    }
}

mod selection {
    use super::*;

    #[test]
    fn test_block_opponent_pair() {
        let state = board("XX..O....");
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            let mut selector = MoveSelector::with_seed(11);
            assert_eq!(selector.select(&state, difficulty), Some(2), "{difficulty}");
        }
    }

    #[test]
    fn test_medium_prefers_win_over_block() {
        let state = board("XX.OO.X..");
        let mut selector = MoveSelector::with_seed(0);
        assert_eq!(
            selector.select_explained(&state, Difficulty::Medium),
            Some((5, Reason::Tactic(Tactic::Win)))
        );
    }

    #[test]
    fn test_medium_always_takes_wins_and_blocks() {
        let mut selector = MoveSelector::with_seed(99);
        for state in reachable_boards() {
            if state.is_terminal() {
                continue;
            }
            let mark = state.to_move();
            let Some(pos) = selector.select(&state, Difficulty::Medium) else {
                panic!("no move on live board {}", state.encode());
            };
            if let Some(win) = find_immediate_move(&state, mark) {
                assert_eq!(pos, win, "missed win on {}", state.encode());
            } else if let Some(block) = find_immediate_move(&state, mark.opponent()) {
                assert_eq!(pos, block, "missed block on {}", state.encode());
            }
        }
    }

    #[test]
    fn test_prevents_fork_between_opposite_corners() {
        let state = board("X...O...X");
        assert_eq!(best_move(&state), Some(1));

        let scores = Minimax::new(Mark::O).score_moves(&state);
        assert_eq!(
            scores,
            vec![(1, 0), (2, -1), (3, 0), (5, 0), (6, -1), (7, 0)]
        );
    }

    #[test]
    fn test_no_move_on_finished_boards() {
        let mut rng = StdRng::seed_from_u64(1);
        for text in ["XOXXOOOXX", "XXXOO....", "XOXOXOXOX"] {
            let state = board(text);
            assert_eq!(best_move(&state), None, "{text}");
            for difficulty in Difficulty::ALL {
                assert_eq!(select_move(&state, difficulty, &mut rng), None, "{text}");
            }
        }
    }

    #[test]
    fn test_seeded_selection_is_deterministic() {
        let state = board("X...O....");
        for difficulty in Difficulty::ALL {
            let mut a = StdRng::seed_from_u64(2024);
            let mut b = StdRng::seed_from_u64(2024);
            let first: Vec<_> = (0..20)
                .map(|_| select_move(&state, difficulty, &mut a))
                .collect();
            let second: Vec<_> = (0..20)
                .map(|_| select_move(&state, difficulty, &mut b))
                .collect();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_easy_picks_only_empty_cells() {
        let state = board("XO.XO....");
        let mut selector = MoveSelector::with_seed(8);
        for _ in 0..200 {
            let pos = selector.select(&state, Difficulty::Easy).unwrap();
            assert!(state.is_empty(pos));
        }
    }
}

mod hard_play {
    use super::*;

    /// Let the opponent try every legal move while `seat` plays minimax; count losses.
    fn losses_against_every_line(state: BoardState, seat: Mark) -> usize {
        if state.is_terminal() {
            return usize::from(state.winner() == Some(seat.opponent()));
        }
        if state.to_move() == seat {
            let pos = best_move_for(&state, seat).expect("live board has a move");
            losses_against_every_line(state.apply_move(pos).unwrap(), seat)
        } else {
            state
                .empty_cells()
                .map(|pos| losses_against_every_line(state.apply_move(pos).unwrap(), seat))
                .sum()
        }
    }

    #[test]
    fn test_hard_never_loses_as_o() {
        assert_eq!(losses_against_every_line(BoardState::new(), Mark::O), 0);
    }

    #[test]
    fn test_hard_never_loses_as_x() {
        assert_eq!(losses_against_every_line(BoardState::new(), Mark::X), 0);
    }

    #[test]
    fn test_hard_vs_hard_draws() {
        let mut selector = MoveSelector::with_seed(0);
        let mut state = BoardState::new();
        while let Some(pos) = selector.select(&state, Difficulty::Hard) {
            state = state.apply_move(pos).unwrap();
        }
        assert_eq!(state.status(), GameResult::Draw);
        assert!(state.is_full());
    }
}
