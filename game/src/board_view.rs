//! 盤面畫布：格子與棋子的繪製、點擊換算

use crate::constants::*;
use board::{BoardConfig, ClickOutcome, Game, Grid, PieceKind, Rgb};
use strum::IntoEnumIterator;

fn to_color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// 繪製整個畫布並處理點擊，有點擊時回傳結果
pub fn render_board(
    ui: &mut egui::Ui,
    grid: &Grid,
    game: &mut Game,
    config: &BoardConfig,
) -> Option<ClickOutcome> {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(CANVAS_WIDTH, CANVAS_HEIGHT), egui::Sense::click());

    // 先處理點擊再繪製，畫面立即反映這次點擊的效果
    let mut outcome = None;
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let local = pos - rect.min;
            outcome = Some(game.handle_click(grid, local.x, local.y));
        }
    }

    render_canvas(ui, rect, grid, game, config);
    outcome
}

/// 依序繪製底色、格子、棋子
fn render_canvas(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    grid: &Grid,
    game: &Game,
    config: &BoardConfig,
) {
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, CANVAS_COLOR);

    for square in grid.squares() {
        let square_rect = egui::Rect::from_min_size(
            rect.min + egui::vec2(square.x(), square.y()),
            egui::vec2(square.width(), square.width()),
        );
        let fill = if (square.row() + square.col()) % 2 == 0 {
            config.even_fill
        } else {
            config.odd_fill
        };
        painter.rect_filled(square_rect, 0.0, to_color32(fill));
    }

    // 依放置順序繪製，與點擊命中順序一致
    for piece in game.pieces() {
        let center = rect.min + egui::vec2(piece.x(), piece.y());
        let palette = piece.palette();
        painter.circle_filled(center, piece.radius(), to_color32(palette.fill));
        painter.circle_stroke(
            center,
            piece.radius(),
            egui::Stroke::new(STROKE_WIDTH, to_color32(palette.outline)),
        );
    }
}

/// 繪製棋子種類圖例
pub fn render_piece_legend(ui: &mut egui::Ui) {
    for kind in PieceKind::iter() {
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(LEGEND_MARKER_SIZE, LEGEND_MARKER_SIZE),
            egui::Sense::empty(),
        );
        let palette = kind.palette();
        ui.painter()
            .circle_filled(rect.center(), LEGEND_MARKER_SIZE / 2.0, to_color32(palette.fill));
        ui.painter().circle_stroke(
            rect.center(),
            LEGEND_MARKER_SIZE / 2.0,
            egui::Stroke::new(STROKE_WIDTH, to_color32(palette.outline)),
        );
        ui.label(kind.to_string());
    }
}
