//! squared - Numbered squares in an adaptive grid
//!
//! Two sliders control items per row and padding; the cells stay square
//! in any window shape.

mod app;

use app::SquaredApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([320.0, 480.0])
            .with_title("squared"),
        ..Default::default()
    };

    eframe::run_native(
        "squared",
        options,
        Box::new(|cc| {
            squarecore::SquaredTheme::default().apply(&cc.egui_ctx);
            Box::new(SquaredApp::new(cc))
        }),
    )
}
