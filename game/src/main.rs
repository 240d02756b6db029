mod app;
mod board_view;
mod constants;

use app::GameApp;
use constants::{APP_TITLE, WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            setup_visuals(&cc.egui_ctx);
            Ok(Box::new(GameApp::new()))
        }),
    )
}

fn setup_visuals(ctx: &egui::Context) {
    // 淺色主題，配合淺藍畫布
    ctx.set_visuals(egui::Visuals::light());
}
