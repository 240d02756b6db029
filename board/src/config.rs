//! 盤面設定
//!
//! 建構後即固定，其他模組只讀取不修改

use crate::Rgb;
use crate::constants::*;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// 盤面左上角在畫布上的位置
    pub origin_x: f32,
    pub origin_y: f32,
    /// 單一格子邊長
    pub square_width: f32,
    /// 每邊格數
    pub side: usize,
    /// 棋盤格底色，依 (列 + 行) 奇偶交錯
    pub even_fill: Rgb,
    pub odd_fill: Rgb,
    /// 棋子半徑
    pub piece_radius: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            origin_x: DEFAULT_ORIGIN_X,
            origin_y: DEFAULT_ORIGIN_Y,
            square_width: DEFAULT_SQUARE_WIDTH,
            side: DEFAULT_BOARD_SIDE,
            even_fill: DEFAULT_EVEN_FILL,
            odd_fill: DEFAULT_ODD_FILL,
            piece_radius: DEFAULT_PIECE_RADIUS,
        }
    }
}

impl BoardConfig {
    /// 從 TOML 文字解析設定，缺少的欄位沿用預設值
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: BoardConfig = toml::from_str(text).map_err(|e| Error::ConfigParse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.side == 0 {
            return Err(Error::InvalidConfig {
                reason: "side 必須大於 0".to_string(),
            });
        }
        if self.square_width <= 0.0 {
            return Err(Error::InvalidConfig {
                reason: "square_width 必須大於 0".to_string(),
            });
        }
        if self.piece_radius <= 0.0 {
            return Err(Error::InvalidConfig {
                reason: "piece_radius 必須大於 0".to_string(),
            });
        }
        // 棋子超過半格就會蓋到鄰格，命中判定會互相干擾
        if self.piece_radius > self.square_width / 2.0 {
            return Err(Error::InvalidConfig {
                reason: "piece_radius 不可超過格子邊長的一半".to_string(),
            });
        }
        Ok(())
    }
}
