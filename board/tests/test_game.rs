use board::{BoardConfig, Cell, ClickOutcome, Game, Grid, PieceKind};

fn setup() -> (Grid, Game) {
    let config = BoardConfig::default();
    (Grid::from_config(&config), Game::new(config.piece_radius))
}

/// 某格中心的畫布座標
fn center_of(grid: &Grid, row: usize, col: usize) -> (f32, f32) {
    grid.square(row * grid.side() + col).center()
}

#[test]
fn test_place_on_empty_square() {
    let (grid, mut game) = setup();
    let (x, y) = center_of(&grid, 0, 0);

    let outcome = game.handle_click(&grid, x, y);

    assert_eq!(
        outcome,
        ClickOutcome::Placed {
            id: 0,
            kind: PieceKind::Brown,
            tile: 0
        }
    );
    assert!(game.is_occupied(0));
    assert_eq!(game.piece_count(), 1);
    assert_eq!(game.selected(), None);
}

#[test]
fn test_kinds_alternate_by_creation_order() {
    let (grid, mut game) = setup();

    let mut kinds = Vec::new();
    for col in 0..4 {
        let (x, y) = center_of(&grid, 0, col);
        match game.handle_click(&grid, x, y) {
            ClickOutcome::Placed { kind, .. } => kinds.push(kind),
            other => panic!("預期放置棋子，卻得到 {:?}", other),
        }
    }

    assert_eq!(
        kinds,
        [
            PieceKind::Brown,
            PieceKind::Green,
            PieceKind::Brown,
            PieceKind::Green
        ]
    );
}

#[test]
fn test_click_piece_selects_it() {
    let (grid, mut game) = setup();
    let (x, y) = center_of(&grid, 2, 2);
    let placed = game.handle_click(&grid, x, y);
    let ClickOutcome::Placed { id, .. } = placed else {
        panic!("預期放置棋子，卻得到 {:?}", placed);
    };

    let outcome = game.handle_click(&grid, x, y);

    assert_eq!(outcome, ClickOutcome::Selected { id });
    assert_eq!(game.selected(), Some(id));
    assert!(game.piece(id).unwrap().is_highlighted());
}

#[test]
fn test_selection_takes_first_match_in_placement_order() {
    let (grid, mut game) = setup();
    let square = grid.square(0);
    let first = game.force_place(PieceKind::Brown, square);
    let _second = game.force_place(PieceKind::Green, square);

    // 兩個棋子同圓心，命中時取先放置者
    let (x, y) = square.center();
    let outcome = game.handle_click(&grid, x, y);

    assert_eq!(outcome, ClickOutcome::Selected { id: first });
}

#[test]
fn test_move_selected_to_empty_square() {
    let (grid, mut game) = setup();
    let (x, y) = center_of(&grid, 0, 0);
    game.handle_click(&grid, x, y); // 放置
    game.handle_click(&grid, x, y); // 選取

    let (tx, ty) = center_of(&grid, 3, 4);
    let outcome = game.handle_click(&grid, tx, ty);

    let ClickOutcome::Moved { id, tile } = outcome else {
        panic!("預期移動棋子，卻得到 {:?}", outcome);
    };
    assert_eq!(tile, 3 * grid.side() + 4);

    let piece = game.piece(id).unwrap();
    assert_eq!(piece.tile(), tile);
    assert_eq!(piece.cell(), Cell { row: 3, col: 4 });
    assert_eq!((piece.x(), piece.y()), grid.square(tile).center());
    assert!(!piece.is_highlighted());
    assert_eq!(game.selected(), None);
    assert!(!game.is_occupied(0));
    assert!(game.is_occupied(tile));
}

#[test]
fn test_move_to_occupied_square_is_blocked() {
    let (grid, mut game) = setup();
    let (ax, ay) = center_of(&grid, 0, 0);
    let (bx, by) = center_of(&grid, 1, 1);
    game.handle_click(&grid, ax, ay);
    game.handle_click(&grid, bx, by);

    let selected = game.handle_click(&grid, ax, ay);
    let ClickOutcome::Selected { id } = selected else {
        panic!("預期選取棋子，卻得到 {:?}", selected);
    };

    let outcome = game.handle_click(&grid, bx, by);

    // 目標被佔用：位置與選取狀態都不變
    assert_eq!(
        outcome,
        ClickOutcome::Blocked {
            tile: grid.side() + 1
        }
    );
    let piece = game.piece(id).unwrap();
    assert_eq!(piece.tile(), 0);
    assert!(piece.is_highlighted());
    assert_eq!(game.selected(), Some(id));
}

#[test]
fn test_move_to_own_square_is_blocked() {
    let (grid, mut game) = setup();
    let (x, y) = center_of(&grid, 5, 5);
    game.handle_click(&grid, x, y);
    game.handle_click(&grid, x, y);

    // 選取中棋子自己佔的格子也算被佔用
    let square = grid.square(5 * grid.side() + 5);
    let outcome = game.handle_click(&grid, square.x() + 1.0, square.y() + 1.0);

    assert!(matches!(outcome, ClickOutcome::Blocked { .. }));
    assert!(game.selected().is_some());
}

#[test]
fn test_place_blocked_when_click_misses_occupant() {
    let (grid, mut game) = setup();
    let (x, y) = center_of(&grid, 0, 0);
    game.handle_click(&grid, x, y);

    // 點同一格的角落，避開棋子圓
    let square = grid.square(0);
    let outcome = game.handle_click(&grid, square.x() + 1.0, square.y() + 1.0);

    assert_eq!(outcome, ClickOutcome::Blocked { tile: 0 });
    assert_eq!(game.piece_count(), 1);
}

#[test]
fn test_click_outside_is_ignored() {
    let (grid, mut game) = setup();

    let outcome = game.handle_click(&grid, 0.0, 0.0);

    assert_eq!(outcome, ClickOutcome::Outside);
    assert_eq!(game.piece_count(), 0);
    assert_eq!(game.selected(), None);
}

#[test]
fn test_remove_at_removes_all_pieces_on_cell() {
    let (grid, mut game) = setup();
    let shared = grid.square(2 * grid.side() + 3);
    game.force_place(PieceKind::Brown, shared);
    game.force_place(PieceKind::Green, shared);
    let (x, y) = center_of(&grid, 5, 5);
    game.handle_click(&grid, x, y);
    assert_eq!(game.piece_count(), 3);

    let removed = game.remove_at(Cell { row: 2, col: 3 });

    assert_eq!(removed, 2);
    assert_eq!(game.piece_count(), 1);
    assert!(!game.is_occupied(shared.index()));
}

#[test]
fn test_remove_at_unmatched_cell_removes_nothing() {
    let (grid, mut game) = setup();
    let (x, y) = center_of(&grid, 0, 0);
    game.handle_click(&grid, x, y);

    // 負座標與盤面外座標都解析得出來，只是找不到棋子
    assert_eq!(game.remove_at(Cell { row: -1, col: 0 }), 0);
    assert_eq!(game.remove_at(Cell { row: 9, col: 9 }), 0);
    assert_eq!(game.remove_at(Cell { row: 0, col: 1 }), 0);
    assert_eq!(game.piece_count(), 1);
}

#[test]
fn test_invalid_cell_text_leaves_pieces_untouched() {
    let (grid, mut game) = setup();
    let (x, y) = center_of(&grid, 0, 0);
    game.handle_click(&grid, x, y);

    // 解析失敗時不會走到移除流程
    assert!(Cell::parse("abc", "0").is_err());
    assert_eq!(game.piece_count(), 1);
    assert!(game.is_occupied(0));
}

#[test]
fn test_remove_selected_piece_clears_selection() {
    let (grid, mut game) = setup();
    let (x, y) = center_of(&grid, 4, 4);
    game.handle_click(&grid, x, y);
    game.handle_click(&grid, x, y);
    assert!(game.selected().is_some());

    let removed = game.remove_at(Cell { row: 4, col: 4 });

    assert_eq!(removed, 1);
    assert_eq!(game.selected(), None);

    // 後續點擊回到放置流程
    let outcome = game.handle_click(&grid, x, y);
    assert!(matches!(outcome, ClickOutcome::Placed { .. }));
}

#[test]
fn test_remove_keeps_selection_of_surviving_piece() {
    let (grid, mut game) = setup();
    let (ax, ay) = center_of(&grid, 0, 0);
    let (bx, by) = center_of(&grid, 7, 7);
    game.handle_click(&grid, ax, ay);
    game.handle_click(&grid, bx, by);
    let selected = game.handle_click(&grid, ax, ay);
    let ClickOutcome::Selected { id } = selected else {
        panic!("預期選取棋子，卻得到 {:?}", selected);
    };

    assert_eq!(game.remove_at(Cell { row: 7, col: 7 }), 1);

    assert_eq!(game.selected(), Some(id));
    assert!(game.piece(id).unwrap().is_highlighted());
}

#[test]
fn test_ids_stay_stable_after_removal() {
    let (grid, mut game) = setup();
    let (ax, ay) = center_of(&grid, 0, 0);
    let (bx, by) = center_of(&grid, 1, 1);
    let (cx, cy) = center_of(&grid, 2, 2);
    game.handle_click(&grid, ax, ay);
    game.handle_click(&grid, bx, by);
    game.handle_click(&grid, cx, cy);

    // 移除中間的棋子，其餘 id 不變，之後也不重發舊 id
    game.remove_at(Cell { row: 1, col: 1 });
    let ids: Vec<_> = game.pieces().iter().map(|p| p.id()).collect();
    assert_eq!(ids, [0, 2]);

    let (dx, dy) = center_of(&grid, 3, 3);
    let outcome = game.handle_click(&grid, dx, dy);
    assert!(matches!(outcome, ClickOutcome::Placed { id: 3, .. }));
}
