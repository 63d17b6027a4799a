//! Shared widgets for the squared app.

use egui::{Align2, Color32, FontId, Painter, Rect, Sense, Stroke, Ui};

use crate::palette::Palette;

/// Draw a custom 0.0–1.0 slider bar filled with `accent`, with the current
/// value centered on it. Returns Some(new fraction) if clicked or dragged.
pub fn accent_bar(ui: &mut Ui, fill_pct: f32, label: &str, accent: Color32) -> Option<f32> {
    let desired = egui::vec2(ui.spacing().slider_width, 20.0);
    let (rect, response) = ui.allocate_exact_size(desired, Sense::click_and_drag());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, Palette::WHITE);
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Palette::BLACK));
        let fill_w = rect.width() * fill_pct.clamp(0.0, 1.0);
        let fill_rect = Rect::from_min_size(rect.min, egui::vec2(fill_w, rect.height()));
        painter.rect_filled(fill_rect, 0.0, accent);
        let text_color = if fill_pct > 0.5 { Palette::WHITE } else { Palette::BLACK };
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(11.0),
            text_color,
        );
    }
    if response.clicked() || response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            return Some(((pos.x - rect.min.x) / rect.width()).clamp(0.0, 1.0));
        }
    }
    None
}

/// Status bar: white bg, 1px top border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(Palette::WHITE)
        .stroke(Stroke::new(1.0, Palette::GREY))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}

/// Paint one grid cell: a filled square with its 1-based label centered in
/// white. The label font scales with the cell so the number keeps fitting as
/// cells shrink.
pub fn paint_cell(painter: &Painter, rect: Rect, label: &str, fill: Color32) {
    painter.rect_filled(rect, 0.0, fill);

    let chars = label.chars().count().max(1) as f32;
    let font_px = (rect.width() * 1.4 / chars)
        .min(rect.height() * 0.55)
        .max(4.0);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(font_px),
        Palette::WHITE,
    );
}
