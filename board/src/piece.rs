//! 棋子種類、配色與幾何

use crate::constants::*;
use crate::grid::Square;
use crate::{Cell, PieceId, Rgb};
use strum_macros::{Display, EnumIter};

// ==================== 棋子種類 ====================

/// 棋子種類，只決定配色；放置時依 Brown、Green 交替
#[derive(Debug, Clone, Copy, Default, Display, EnumIter, PartialEq, Eq)]
pub enum PieceKind {
    #[default]
    Brown,
    Green,
}

impl PieceKind {
    /// 交替順序的下一個種類
    pub fn next(self) -> Self {
        match self {
            PieceKind::Brown => PieceKind::Green,
            PieceKind::Green => PieceKind::Brown,
        }
    }

    /// 本種類的基本配色
    pub fn palette(self) -> Palette {
        match self {
            PieceKind::Brown => Palette {
                outline: BROWN_OUTLINE,
                fill: BROWN_FILL,
            },
            PieceKind::Green => Palette {
                outline: GREEN_OUTLINE,
                fill: GREEN_FILL,
            },
        }
    }
}

/// 外框色與填色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub outline: Rgb,
    pub fill: Rgb,
}

/// 選取中棋子一律改用的配色
pub const SELECTED_PALETTE: Palette = Palette {
    outline: SELECTED_OUTLINE,
    fill: SELECTED_FILL,
};

// ==================== 棋子 ====================

/// 盤面上的圓形棋子，建構時即定位於某格中心
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    x: f32,
    y: f32,
    radius: f32,
    cell: Cell,
    tile: usize,
    highlighted: bool,
}

impl Piece {
    pub fn new(id: PieceId, kind: PieceKind, square: &Square, radius: f32) -> Self {
        let (x, y) = square.center();
        Piece {
            id,
            kind,
            x,
            y,
            radius,
            cell: square.cell(),
            tile: square.index(),
            highlighted: false,
        }
    }

    /// 點是否落在棋子圓內（含圓周）
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// 目前應使用的配色，選取中以高亮色取代
    pub fn palette(&self) -> Palette {
        if self.highlighted {
            SELECTED_PALETTE
        } else {
            self.kind.palette()
        }
    }

    /// 移到另一格，位置、格座標、格索引一起更新
    pub fn move_to(&mut self, square: &Square) {
        let (x, y) = square.center();
        self.x = x;
        self.y = y;
        self.cell = square.cell();
        self.tile = square.index();
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// 圓心的畫布座標
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// 所在格子的線性索引
    pub fn tile(&self) -> usize {
        self.tile
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}
