//! Parsing and move-application errors

use tictactoe_engine::{
    Error,
    engine::Difficulty,
    tictactoe::{BoardState, Cell, Game, GameOutcome, GameResult, Mark},
};

mod parsing {
    use super::*;

    #[test]
    fn test_accepts_alternative_characters() {
        let state = BoardState::from_string("xo.\nx0.\n...").unwrap();
        assert_eq!(state.get(0), Cell::X);
        assert_eq!(state.get(1), Cell::O);
        assert_eq!(state.get(4), Cell::O);
        assert_eq!(state.encode(), "XO.XO....");
    }

    #[test]
    fn test_wrong_length() {
        assert!(matches!(
            BoardState::from_string("XO"),
            Err(Error::InvalidBoardLength {
                expected: 9,
                got: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_bad_character() {
        assert!(matches!(
            BoardState::from_string("XO.Z....."),
            Err(Error::InvalidCellCharacter {
                character: 'Z',
                position: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_impossible_piece_counts() {
        assert!(matches!(
            BoardState::from_string("XX......."),
            Err(Error::InvalidPieceCounts {
                x_count: 2,
                o_count: 0
            })
        ));
        assert!(matches!(
            BoardState::from_string("O........"),
            Err(Error::InvalidPieceCounts { .. })
        ));
    }

    #[test]
    fn test_display_round_trip() {
        let state: BoardState = "XO..X...O".parse().unwrap();
        assert_eq!(state.to_string(), "XO.\n.X.\n..O");
        assert_eq!(BoardState::from_string(&state.to_string()).unwrap(), state);
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!(" Hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("EASY".parse::<Difficulty>().unwrap(), Difficulty::Easy);

        let err = "expert".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, Error::InvalidDifficulty { .. }));
        assert!(err.to_string().contains("expert"));
    }

    #[test]
    fn test_mark_parsing() {
        assert_eq!("o".parse::<Mark>().unwrap(), Mark::O);
        assert!(matches!(
            "Y".parse::<Mark>(),
            Err(Error::InvalidMarkString { .. })
        ));
    }
}

mod moves {
    use super::*;

    #[test]
    fn test_out_of_range_position() {
        assert!(matches!(
            BoardState::new().apply_move(9),
            Err(Error::InvalidPosition { position: 9 })
        ));
    }

    #[test]
    fn test_occupied_cell() {
        let state = BoardState::new().apply_move(4).unwrap();
        assert!(matches!(
            state.apply_move(4),
            Err(Error::InvalidMove { position: 4 })
        ));
    }

    #[test]
    fn test_no_moves_after_win() {
        let state = BoardState::from_string("XXXOO....").unwrap();
        assert!(matches!(state.apply_move(5), Err(Error::GameOver)));
    }

    #[test]
    fn test_game_session_restart() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4] {
            assert_eq!(game.play(pos).unwrap(), GameResult::InProgress);
        }
        assert_eq!(game.play(2).unwrap(), GameResult::XWins);
        assert_eq!(game.outcome(), Some(GameOutcome::Win(Mark::X)));
        assert!(game.play(5).is_err());

        game.reset();
        assert_eq!(game.state(), &BoardState::new());
        assert!(game.moves().is_empty());
        assert_eq!(game.to_move(), Mark::X);
    }
}
