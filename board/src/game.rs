//! 點擊互動控制器：放置、選取、移動、移除

use crate::constants::DEFAULT_PIECE_RADIUS;
use crate::grid::{Grid, Square};
use crate::piece::{Piece, PieceKind};
use crate::{Cell, PieceId};

// ==================== 點擊結果 ====================

/// 單次點擊對盤面造成的效果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// 在空格生成新棋子
    Placed {
        id: PieceId,
        kind: PieceKind,
        tile: usize,
    },
    /// 選取既有棋子
    Selected { id: PieceId },
    /// 選取中的棋子移到空格
    Moved { id: PieceId, tile: usize },
    /// 目標格已被佔用，不動作
    Blocked { tile: usize },
    /// 點在盤面外，不動作
    Outside,
}

// ==================== 控制器 ====================

/// 持有全部棋子與選取狀態的互動控制器
///
/// 棋子依放置順序存放，繪製與點擊命中都依這個順序；
/// PieceId 由遞增計數器發放，棋子被移除後不再重用
#[derive(Debug)]
pub struct Game {
    pieces: Vec<Piece>,
    selected: Option<PieceId>,
    next_kind: PieceKind,
    next_id: PieceId,
    piece_radius: f32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DEFAULT_PIECE_RADIUS)
    }
}

impl Game {
    pub fn new(piece_radius: f32) -> Self {
        Game {
            pieces: Vec::new(),
            selected: None,
            next_kind: PieceKind::default(),
            next_id: 0,
            piece_radius,
        }
    }

    /// 處理一次盤面點擊，依目前是否有選取棋子分流
    pub fn handle_click(&mut self, grid: &Grid, x: f32, y: f32) -> ClickOutcome {
        let Some(tile) = grid.square_at(x, y) else {
            return ClickOutcome::Outside;
        };

        match self.selected {
            Some(id) => self.move_selected(grid, id, tile),
            None => self.select_or_place(grid, tile, x, y),
        }
    }

    /// 已有選取棋子：目標為空格則移過去並取消選取，否則不動作
    ///
    /// 選取中棋子自己佔的格子也算被佔用，點它等同不動作
    fn move_selected(&mut self, grid: &Grid, id: PieceId, tile: usize) -> ClickOutcome {
        if self.is_occupied(tile) {
            return ClickOutcome::Blocked { tile };
        }
        let square = grid.square(tile);
        let piece = self
            .piece_mut(id)
            .expect("內部邏輯錯誤：選取中的棋子必定存在");
        piece.move_to(square);
        piece.set_highlighted(false);
        self.selected = None;
        ClickOutcome::Moved { id, tile }
    }

    /// 未選取：點中棋子則選取，否則在空格放置新棋子
    fn select_or_place(&mut self, grid: &Grid, tile: usize, x: f32, y: f32) -> ClickOutcome {
        // 依放置順序找第一個涵蓋點擊位置的棋子，取先不取近
        if let Some(piece) = self.pieces.iter_mut().find(|p| p.contains(x, y)) {
            let id = piece.id();
            piece.set_highlighted(true);
            self.selected = Some(id);
            return ClickOutcome::Selected { id };
        }
        if self.is_occupied(tile) {
            return ClickOutcome::Blocked { tile };
        }
        let kind = self.next_kind;
        let id = self.push_piece(kind, grid.square(tile));
        self.next_kind = kind.next();
        ClickOutcome::Placed { id, kind, tile }
    }

    /// 移除所有位於該格座標的棋子，回傳移除數量
    ///
    /// 盤面外的座標不會對應任何棋子，移除數量為 0
    pub fn remove_at(&mut self, cell: Cell) -> usize {
        let before = self.pieces.len();
        self.pieces.retain(|p| p.cell() != cell);
        let removed = before - self.pieces.len();

        // 選取中的棋子被移除時一併清除選取
        if let Some(id) = self.selected {
            if self.piece(id).is_none() {
                self.selected = None;
            }
        }
        removed
    }

    /// 是否有棋子佔據該格
    pub fn is_occupied(&self, tile: usize) -> bool {
        self.pieces.iter().any(|p| p.tile() == tile)
    }

    /// 放置順序的所有棋子
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id() == id)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.id() == id)
    }

    fn push_piece(&mut self, kind: PieceKind, square: &Square) -> PieceId {
        let id = self.next_id;
        self.next_id += 1;
        self.pieces.push(Piece::new(id, kind, square, self.piece_radius));
        id
    }

    /// 測試輔助：跳過佔用檢查直接放置棋子
    #[cfg(feature = "test-helpers")]
    pub fn force_place(&mut self, kind: PieceKind, square: &Square) -> PieceId {
        self.push_piece(kind, square)
    }
}
