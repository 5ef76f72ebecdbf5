//! Tests for the game session lifecycle.

use tictactoe::{
    Board, Cell, GameConfig, GameMode, GameSession, MoveError, Outcome, PlayMode, Player,
    Position, evaluate,
};

fn play(session: &mut GameSession, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        session
            .apply_move(row, col)
            .unwrap_or_else(|e| panic!("move ({row}, {col}) rejected: {e}"));
    }
}

#[test]
fn test_top_row_win() {
    let mut session = GameSession::new();
    play(&mut session, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);

    assert_eq!(evaluate(session.board()), Outcome::Win(Player::X));
    assert_eq!(session.current_state().outcome, Outcome::Win(Player::X));
}

#[test]
fn test_full_board_draw() {
    let mut session = GameSession::new();
    // X O X / X O O / O X X
    play(
        &mut session,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert!(session.board().is_full());
    assert_eq!(session.current_state().outcome, Outcome::Draw);
}

#[test]
fn test_five_x_marks_with_a_diagonal_is_a_win_not_a_draw() {
    let mut board = Board::new();
    for (row, col) in [(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)] {
        board.set(row, col, Player::X).unwrap();
    }
    for (row, col) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
        board.set(row, col, Player::O).unwrap();
    }
    assert_eq!(evaluate(&board), Outcome::Win(Player::X));
}

#[test]
fn test_turn_alternates_until_game_ends() {
    let mut session = GameSession::new();
    let moves = [(0, 0), (1, 1), (0, 1), (1, 0)];
    let mut expected = Player::X;
    for (row, col) in moves {
        assert_eq!(session.turn(), expected);
        session.apply_move(row, col).unwrap();
        expected = expected.opponent();
    }

    session.apply_move(0, 2).unwrap();
    assert_eq!(session.turn(), Player::X, "winning move must not pass the turn");
}

#[test]
fn test_rejected_move_leaves_state_unchanged() {
    let mut session = GameSession::new();
    play(&mut session, &[(1, 1), (0, 0)]);
    let before = session.current_state();
    let history = session.history().to_vec();

    assert_eq!(
        session.apply_move(0, 0),
        Err(MoveError::OccupiedCell(Position::TopLeft))
    );
    assert_eq!(
        session.apply_move(0, 3),
        Err(MoveError::OutOfRange { row: 0, col: 3 })
    );
    assert_eq!(session.current_state(), before);
    assert_eq!(session.history(), history.as_slice());
}

#[test]
fn test_terminal_state_rejects_moves() {
    let mut session = GameSession::new();
    play(&mut session, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    let err = session.apply_move(2, 2).unwrap_err();
    assert!(matches!(err, MoveError::InvalidMove(_)));
    assert_eq!(session.board().get(2, 2).unwrap(), Cell::Empty);
}

#[test]
fn test_restart_after_win() {
    let mut session = GameSession::new();
    play(&mut session, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    session.restart().unwrap();

    let state = session.current_state();
    assert_eq!(state.board, Board::new());
    assert_eq!(state.turn, Player::X);
    assert_eq!(state.outcome, Outcome::InProgress);
}

#[test]
fn test_restart_mid_game_is_rejected() {
    let mut session = GameSession::new();
    play(&mut session, &[(0, 0)]);
    let before = session.current_state();
    assert!(matches!(session.restart(), Err(MoveError::InvalidMove(_))));
    assert_eq!(session.current_state(), before);
}

#[test]
fn test_snapshot_serializes() {
    let mut session = GameSession::new();
    play(&mut session, &[(1, 1)]);
    let json = serde_json::to_value(session.current_state()).unwrap();
    assert_eq!(json["turn"], "O");
    assert_eq!(json["outcome"], "InProgress");
    assert_eq!(json["board"]["cells"][4]["Occupied"], "X");
}

#[test]
fn test_session_from_config() {
    let config = GameConfig::default()
        .with_mode(PlayMode::Computer)
        .with_computer(Player::X);
    let session = GameSession::from_config(&config);
    assert!(matches!(
        session.mode(),
        GameMode::VsComputer {
            computer: Player::X,
            ..
        }
    ));
    assert!(session.is_computer_turn());

    let session = GameSession::from_config(&GameConfig::default());
    assert_eq!(session.mode(), GameMode::TwoPlayer);
}

#[test]
fn test_human_vs_computer_match_runs_to_completion() {
    let mut session = GameSession::from_config(
        &GameConfig::default()
            .with_mode(PlayMode::Computer)
            .with_difficulty(tictactoe::Difficulty::Easy)
            .with_seed(11),
    );

    while !session.outcome().is_terminal() {
        if session.is_computer_turn() {
            session.play_computer_turn().unwrap();
        } else {
            let pos = session.board().legal_moves()[0];
            session.apply_position(pos).unwrap();
        }
    }

    assert!(session.restart().is_ok());
}
