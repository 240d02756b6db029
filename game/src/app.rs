//! 應用程式狀態與畫面配置

use crate::board_view;
use crate::constants::*;
use board::{BoardConfig, Cell, Game, Grid};

/// 狀態列訊息
#[derive(Debug, Default)]
struct StatusLine {
    text: String,
    is_error: bool,
}

impl StatusLine {
    fn info(&mut self, text: String) {
        self.text = text;
        self.is_error = false;
    }

    fn error(&mut self, text: &str) {
        self.text = text.to_string();
        self.is_error = true;
    }
}

pub struct GameApp {
    config: BoardConfig,
    grid: Grid,
    game: Game,
    row_text: String,
    col_text: String,
    status: StatusLine,
}

impl GameApp {
    pub fn new() -> Self {
        let config = load_config();
        let grid = Grid::from_config(&config);
        let game = Game::new(config.piece_radius);
        GameApp {
            config,
            grid,
            game,
            row_text: DEFAULT_CELL_TEXT.to_string(),
            col_text: DEFAULT_CELL_TEXT.to_string(),
            status: StatusLine::default(),
        }
    }

    /// 移除輸入座標上的所有棋子；解析失敗顯示固定錯誤訊息
    fn handle_remove(&mut self) {
        match Cell::parse(&self.row_text, &self.col_text) {
            Ok(cell) => {
                let removed = self.game.remove_at(cell);
                log::debug!("移除 ({}, {}) 上的 {} 個棋子", cell.row, cell.col, removed);
                self.show_piece_count();
            }
            Err(err) => {
                log::debug!("座標輸入無效：{}", err);
                self.status.error(STATUS_INVALID_CELL);
            }
        }
    }

    fn show_piece_count(&mut self) {
        self.status
            .info(format!("Num pieces: {}", self.game.piece_count()));
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Row:");
            ui.add(egui::TextEdit::singleline(&mut self.row_text).desired_width(CELL_FIELD_WIDTH));
            ui.label("Col:");
            ui.add(egui::TextEdit::singleline(&mut self.col_text).desired_width(CELL_FIELD_WIDTH));
            if ui.button("Remove").clicked() {
                self.handle_remove();
            }

            ui.add_space(SPACING_MEDIUM);
            board_view::render_piece_legend(ui);
        });
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        if self.status.is_error {
            ui.colored_label(egui::Color32::RED, &self.status.text);
        } else {
            ui.label(&self.status.text);
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(SPACING_SMALL);
            self.render_controls(ui);
            ui.add_space(SPACING_SMALL);
            self.render_status(ui);
            ui.add_space(SPACING_SMALL);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let outcome = board_view::render_board(ui, &self.grid, &mut self.game, &self.config);
            if let Some(outcome) = outcome {
                log::debug!("點擊結果：{:?}", outcome);
                self.show_piece_count();
            }
        });
    }
}

/// 啟動時讀取工作目錄下的設定檔，缺檔或無效時改用預設值
fn load_config() -> BoardConfig {
    match std::fs::read_to_string(CONFIG_FILE_PATH) {
        Ok(text) => match BoardConfig::from_toml(&text) {
            Ok(config) => {
                log::info!("已載入盤面設定 {}", CONFIG_FILE_PATH);
                config
            }
            Err(err) => {
                log::warn!("盤面設定無效，改用預設值：{}", err);
                BoardConfig::default()
            }
        },
        Err(err) => {
            log::info!("未讀取 {}（{}），使用預設盤面設定", CONFIG_FILE_PATH, err);
            BoardConfig::default()
        }
    }
}
