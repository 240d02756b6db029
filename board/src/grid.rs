//! 盤面格子佈局與座標換算

use crate::config::BoardConfig;
use crate::{Cell, Coord};

// ==================== 格子 ====================

/// 單一格子的幾何描述，佈局完成後不再變動
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    index: usize,
    cell: Cell,
    x: f32,
    y: f32,
    width: f32,
}

impl Square {
    /// 列優先的線性索引
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn row(&self) -> Coord {
        self.cell.row
    }

    pub fn col(&self) -> Coord {
        self.cell.col
    }

    /// 左上角的畫布座標
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.width / 2.0)
    }
}

// ==================== 盤面 ====================

/// side × side 的正方形盤面，佈局由設定一次決定
#[derive(Debug, Clone)]
pub struct Grid {
    squares: Vec<Square>,
    side: usize,
    origin_x: f32,
    origin_y: f32,
    square_width: f32,
}

impl Grid {
    /// 由原點開始鋪出所有格子，無縫隙也無重疊
    pub fn from_config(config: &BoardConfig) -> Self {
        let mut squares = Vec::with_capacity(config.side * config.side);
        for row in 0..config.side {
            for col in 0..config.side {
                squares.push(Square {
                    index: row * config.side + col,
                    cell: Cell {
                        row: row as Coord,
                        col: col as Coord,
                    },
                    x: config.origin_x + col as f32 * config.square_width,
                    y: config.origin_y + row as f32 * config.square_width,
                    width: config.square_width,
                });
            }
        }
        Grid {
            squares,
            side: config.side,
            origin_x: config.origin_x,
            origin_y: config.origin_y,
            square_width: config.square_width,
        }
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn square_width(&self) -> f32 {
        self.square_width
    }

    /// 索引越界屬程式錯誤，直接 panic
    pub fn square(&self, index: usize) -> &Square {
        &self.squares[index]
    }

    /// 列優先順序的所有格子
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// 將畫布座標換算成所在格子的索引
    ///
    /// 每格涵蓋左上邊界、不含右下邊界，盤面外回傳 None
    pub fn square_at(&self, x: f32, y: f32) -> Option<usize> {
        let rel_x = x - self.origin_x;
        let rel_y = y - self.origin_y;

        if rel_x < 0.0 || rel_y < 0.0 {
            return None; // 點在盤面左方或上方
        }
        let col = (rel_x / self.square_width) as usize;
        let row = (rel_y / self.square_width) as usize;
        (row < self.side && col < self.side).then_some(row * self.side + col)
    }
}
