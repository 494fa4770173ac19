use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Computer.opponent(), Player::Human);
    assert_eq!(Player::Human.opponent(), Player::Computer);
}

#[test]
fn test_cell_values() {
    assert_eq!(Cell::Empty.value(), 0);
    assert_eq!(Cell::Computer.value(), Player::Computer.sign());
    assert_eq!(Cell::Human.value(), Player::Human.sign());
    assert_eq!(Cell::from(Player::Human).owner(), Some(Player::Human));
    assert_eq!(Cell::Computer.swapped(), Cell::Human);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(3);
    assert_eq!(board.size(), 3);
    assert_eq!(board.mark_count(), 0);
    assert!(!board.is_full());
    assert_eq!(board.empty_cells().count(), 9);
}

#[test]
#[should_panic]
fn test_zero_size_board_panics() {
    let _ = Board::new(0);
}

#[test]
fn test_apply_and_clear() {
    let mut board = Board::new(3);
    let pos = Pos::new(1, 2);

    board.apply(pos, Player::Human);
    assert_eq!(board.get(pos), Cell::Human);
    assert!(!board.is_empty(pos));

    board.clear(pos);
    assert!(board.is_empty(pos));
}

#[test]
#[should_panic(expected = "already occupied")]
fn test_apply_on_occupied_cell_panics() {
    let mut board = Board::new(3);
    board.apply(Pos::new(0, 0), Player::Computer);
    board.apply(Pos::new(0, 0), Player::Human);
}

#[test]
#[should_panic(expected = "off the 3x3 board")]
fn test_apply_past_right_edge_panics() {
    // (0, 3) would otherwise alias (1, 0) in row-major storage
    let mut board = Board::new(3);
    board.apply(Pos::new(0, 3), Player::Human);
}

#[test]
#[should_panic(expected = "off the 3x3 board")]
fn test_get_past_bottom_edge_panics() {
    let board = Board::new(3);
    let _ = board.get(Pos::new(3, 0));
}

#[test]
#[should_panic(expected = "off the 4x4 board")]
fn test_cell_off_board_panics() {
    let board = Board::new(4);
    let _ = board.cell(0, 4);
}

#[test]
fn test_empty_cells_row_major() {
    let board = Board::from_rows(&["O.X", ".X.", "..O"]);
    let cells: Vec<Pos> = board.empty_cells().collect();
    assert_eq!(
        cells,
        vec![
            Pos::new(0, 1),
            Pos::new(1, 0),
            Pos::new(1, 2),
            Pos::new(2, 0),
            Pos::new(2, 1),
        ]
    );
    let mut sorted = cells.clone();
    sorted.sort();
    assert_eq!(cells, sorted);
}

#[test]
fn test_empty_cells_restartable() {
    let board = Board::from_rows(&["OX", ".."]);
    let first: Vec<Pos> = board.empty_cells().collect();
    let second: Vec<Pos> = board.empty_cells().collect();
    assert_eq!(first, second);
}

#[test]
fn test_is_full() {
    let mut board = Board::from_rows(&["OXO", "XOX", "XO."]);
    assert!(!board.is_full());
    board.apply(Pos::new(2, 2), Player::Human);
    assert!(board.is_full());
    assert_eq!(board.empty_cells().next(), None);
}

#[test]
fn test_placement_restores_cell() {
    let mut board = Board::new(3);
    let before = board.clone();
    {
        let placed = board.place(Pos::new(1, 1), Player::Computer);
        assert_eq!(placed.get(Pos::new(1, 1)), Cell::Computer);
        assert_eq!(placed.pos(), Pos::new(1, 1));
    }
    assert_eq!(board, before);
}

#[test]
fn test_nested_placements_restore_in_order() {
    let mut board = Board::from_rows(&["X..", "...", "..."]);
    let before = board.clone();
    {
        let mut outer = board.place(Pos::new(0, 1), Player::Computer);
        {
            let inner = outer.place(Pos::new(0, 2), Player::Human);
            assert_eq!(inner.mark_count(), 3);
        }
        assert_eq!(outer.mark_count(), 2);
    }
    assert_eq!(board, before);
}

#[test]
fn test_reset() {
    let mut board = Board::from_rows(&["OX", "XO"]);
    board.reset();
    assert_eq!(board, Board::new(2));
}

#[test]
fn test_swapped() {
    let board = Board::from_rows(&["OX.", "...", "..."]);
    let swapped = board.swapped();
    assert_eq!(swapped.get(Pos::new(0, 0)), Cell::Human);
    assert_eq!(swapped.get(Pos::new(0, 1)), Cell::Computer);
    assert_eq!(swapped.swapped(), board);
}

#[test]
fn test_display() {
    let board = Board::from_rows(&["OX.", "...", "..X"]);
    assert_eq!(board.to_string(), "|O|X| |\n| | | |\n| | |X|\n");
}

#[test]
fn test_contains() {
    let board = Board::new(7);
    assert!(board.contains(0, 0));
    assert!(board.contains(6, 6));
    assert!(!board.contains(-1, 0));
    assert!(!board.contains(0, 7));
}
