use serde::{Deserialize, Serialize};

mod config;
mod constants;
mod error;
mod game;
mod grid;
mod piece;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use game::*;
pub use grid::*;
pub use piece::*;

pub type Coord = i32;
pub type Rgb = [u8; 3];
pub type PieceId = u64;

/// 格座標（列、行）
///
/// 座標刻意使用有號整數：移除輸入框允許任何整數，
/// 超出盤面的值只是找不到棋子，不算錯誤
#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Cell {
    pub row: Coord,
    pub col: Coord,
}

impl Cell {
    /// 解析兩個輸入框的文字，非整數即回報錯誤
    pub fn parse(row_text: &str, col_text: &str) -> Result<Self> {
        let row = row_text.parse().map_err(|_| Error::InvalidCellText {
            text: row_text.to_string(),
        })?;
        let col = col_text.parse().map_err(|_| Error::InvalidCellText {
            text: col_text.to_string(),
        })?;
        Ok(Cell { row, col })
    }
}
