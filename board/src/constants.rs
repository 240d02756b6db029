use crate::Rgb;

// 盤面預設佈局
pub const DEFAULT_ORIGIN_X: f32 = 75.0;
pub const DEFAULT_ORIGIN_Y: f32 = 45.0;
pub const DEFAULT_SQUARE_WIDTH: f32 = 40.0;
pub const DEFAULT_BOARD_SIDE: usize = 8;

// 棋子預設半徑
pub const DEFAULT_PIECE_RADIUS: f32 = 15.0;

// 棋盤格底色（預設兩色相同，皆為亮灰）
pub const DEFAULT_EVEN_FILL: Rgb = [211, 211, 211];
pub const DEFAULT_ODD_FILL: Rgb = [211, 211, 211];

// 棋子配色
pub const BROWN_OUTLINE: Rgb = [255, 255, 255];
pub const BROWN_FILL: Rgb = [165, 42, 42];
pub const GREEN_OUTLINE: Rgb = [0, 0, 255];
pub const GREEN_FILL: Rgb = [144, 238, 144];

// 選取中棋子的配色（黃框橘底）
pub const SELECTED_OUTLINE: Rgb = [255, 255, 0];
pub const SELECTED_FILL: Rgb = [255, 165, 0];
