//! End-to-end game scenarios through the view layer.

use strictly_rewind::{
    GameEvent, GameState, GameView, Glyphs, LINES, Mark, Position, SortOrder, Status,
    winning_line,
};

fn play(indices: &[usize]) -> GameState {
    indices.iter().fold(GameState::new(), |state, &i| {
        state.apply(GameEvent::Activate(Position::ALL[i]))
    })
}

#[test]
fn test_diagonal_win() {
    // X: 0, 4, 8   O: 1, 2
    let state = play(&[0, 1, 4, 2, 8]);
    let view = GameView::new(&state, &Glyphs::default());

    assert_eq!(*view.status(), Status::Winner(Mark::X));
    assert_eq!(view.status_text(), "Winner: X");
    assert_eq!(
        state.winning_line(),
        Some([Position::TopLeft, Position::Center, Position::BottomRight])
    );
    let lit: Vec<usize> = view
        .board()
        .squares()
        .iter()
        .filter(|s| *s.highlighted())
        .map(|s| s.position().to_index())
        .collect();
    assert_eq!(lit, [0, 4, 8]);
}

#[test]
fn test_clicks_after_win_are_ignored() {
    let state = play(&[0, 1, 4, 2, 8]);
    for pos in Position::ALL {
        let after = state.clone().apply(GameEvent::Activate(pos));
        assert_eq!(after.history().len(), state.history().len());
        assert_eq!(after.step(), state.step());
    }
}

#[test]
fn test_full_board_draw() {
    // X O X / X O O / O X X
    let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let view = GameView::new(&state, &Glyphs::default());

    assert_eq!(state.history().len(), 10);
    assert_eq!(*view.status(), Status::Draw);
    assert_eq!(view.status_text(), "It's a draw");
    assert_eq!(state.winning_line(), None);
    assert!(view.board().squares().iter().all(|s| !*s.highlighted()));
}

/// Walks every legal sequence of up to `depth` more moves from `state` and
/// returns how many sequences were visited.
fn walk_without_winner(state: &GameState, depth: usize) -> usize {
    assert_eq!(winning_line(state.current_board()), None);
    assert_eq!(state.history().len(), state.current_board().mark_count() + 1);
    if depth == 0 {
        return 1;
    }
    let mut visited = 1;
    for pos in Position::ALL {
        if state.current_board().is_empty(pos) {
            let next = state.clone().apply(GameEvent::Activate(pos));
            visited += walk_without_winner(&next, depth - 1);
        }
    }
    visited
}

#[test]
fn test_no_winner_with_fewer_than_five_marks() {
    let visited = walk_without_winner(&GameState::new(), 4);
    assert_eq!(visited, 1 + 9 + 9 * 8 + 9 * 8 * 7 + 9 * 8 * 7 * 6);
}

#[test]
fn test_each_line_alone_is_reported() {
    for line in LINES {
        let mut board = strictly_rewind::Board::new();
        for pos in line {
            board = board.with_mark(pos, Mark::O);
        }
        assert_eq!(winning_line(&board), Some(line));
    }
}

#[test]
fn test_sort_toggle_reverses_move_list() {
    let state = play(&[4, 0, 8]);
    let asc = GameView::new(&state, &Glyphs::default());
    let desc_state = state.clone().apply(GameEvent::ToggleOrder);
    let desc = GameView::new(&desc_state, &Glyphs::default());

    let asc_steps: Vec<usize> = asc.moves().entries().iter().map(|e| *e.step()).collect();
    let desc_steps: Vec<usize> = desc.moves().entries().iter().map(|e| *e.step()).collect();
    assert_eq!(asc_steps, [0, 1, 2, 3]);
    assert_eq!(desc_steps, [3, 2, 1, 0]);

    assert_eq!(asc.moves().toggle_label(), "Normal");
    assert_eq!(desc.moves().toggle_label(), "Reversed");
    assert_eq!(*desc.moves().order(), SortOrder::Descending);
    assert_eq!(asc.status_text(), desc.status_text());
    assert_eq!(desc_state.step(), state.step());
}

#[test]
fn test_move_labels() {
    let state = play(&[4, 0, 8]);
    let view = GameView::new(&state, &Glyphs::default());
    let labels: Vec<&str> = view
        .moves()
        .entries()
        .iter()
        .map(|e| e.label().as_str())
        .collect();
    assert_eq!(
        labels,
        [
            "Go to game start",
            "Go to move #1 (2, 2)",
            "Go to move #2 (1, 1)",
            "Go to move #3 (3, 3)",
        ]
    );
    let current: Vec<bool> = view.moves().entries().iter().map(|e| *e.current()).collect();
    assert_eq!(current, [false, false, false, true]);
}
