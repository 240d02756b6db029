pub const APP_TITLE: &str = "Grid Game";

// 視窗與畫布尺寸
pub const WINDOW_WIDTH: f32 = 500.0;
pub const WINDOW_HEIGHT: f32 = 500.0;
pub const CANVAS_WIDTH: f32 = 500.0;
pub const CANVAS_HEIGHT: f32 = 400.0;

// 畫布底色（淺藍）
pub const CANVAS_COLOR: egui::Color32 = egui::Color32::from_rgb(173, 216, 230);

// 棋子外框寬度
pub const STROKE_WIDTH: f32 = 1.0;

// UI 間距
pub const SPACING_SMALL: f32 = 5.0;
pub const SPACING_MEDIUM: f32 = 10.0;

// 座標輸入框
pub const CELL_FIELD_WIDTH: f32 = 40.0;
pub const DEFAULT_CELL_TEXT: &str = "0";

// 圖例圓點直徑
pub const LEGEND_MARKER_SIZE: f32 = 12.0;

// 檔案相關
pub const CONFIG_FILE_PATH: &str = "board.toml";

// 狀態列文字
pub const STATUS_INVALID_CELL: &str = "Invalid row or column number.";
