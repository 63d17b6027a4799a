//! Squared application

use egui::{Context, Key};
use squarecore::layout::{self, CellGeometry, GridConfig, LayoutCache, Viewport};
use squarecore::palette::{self, Palette};
use squarecore::repaint::RepaintController;
use squarecore::theme::menu_bar;
use squarecore::widgets::{accent_bar, paint_cell, status_bar};

/// Window width requested at startup. The real width (frame 0) replaces it
/// as the basis for the padding ceiling.
const REQUESTED_WIDTH: f32 = 320.0;

/// Padding step for the arrow keys.
const PADDING_STEP: f32 = 5.0;

pub struct SquaredApp {
    config: GridConfig,
    cache: LayoutCache,
    accent: egui::Color32,
    initial_width: f32,
    /// Geometry painted by the most recent layout pass (drives the status
    /// line; refreshed via a one-shot repaint whenever it changes).
    last_geometry: Option<CellGeometry>,
    show_about: bool,
    repaint: RepaintController,
}

impl SquaredApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut config = GridConfig::for_initial_width(REQUESTED_WIDTH);
        if let Some((items, padding)) = squarecore::grid_override() {
            config.set_items_per_row(items);
            config.set_padding(padding);
            log::info!(
                "startup grid override: {} per row, padding {}",
                config.items_per_row(),
                config.padding()
            );
        }
        Self {
            config,
            cache: LayoutCache::new(),
            accent: Palette::CYAN,
            initial_width: REQUESTED_WIDTH,
            last_geometry: None,
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    fn reset_layout(&mut self) {
        self.config = GridConfig::for_initial_width(self.initial_width);
        self.cache.invalidate();
        self.repaint.mark_needs_repaint();
    }

    fn step_items(&mut self, delta: i32) {
        let items = self.config.items_per_row().saturating_add_signed(delta);
        self.config.set_items_per_row(items);
    }

    fn step_padding(&mut self, delta: f32) {
        self.config.set_padding(self.config.padding() + delta);
    }

    fn menu(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("view", |ui| {
                    for (name, color) in palette::ACCENTS {
                        let selected = self.accent == *color;
                        let label = if selected {
                            format!("* {}", name)
                        } else {
                            format!("  {}", name)
                        };
                        if ui.button(&label).clicked() {
                            self.accent = *color;
                            ui.close_menu();
                        }
                    }
                    if ui.button("  shuffle").clicked() {
                        self.accent = palette::random();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("reset layout").clicked() {
                        self.reset_layout();
                        ui.close_menu();
                    }
                });

                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn controls(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.spacing_mut().slider_width = 96.0;

                ui.label("padding");
                let max = self.config.max_padding();
                let fill = if max > 0.0 { self.config.padding() / max } else { 0.0 };
                let value = format!("{:.0}", self.config.padding());
                if let Some(frac) = accent_bar(ui, fill, &value, Palette::RED) {
                    self.config.set_padding(frac * max);
                }

                ui.separator();

                ui.label("squares");
                let mut items = self.config.items_per_row();
                ui.scope(|ui| {
                    ui.visuals_mut().selection.bg_fill = Palette::BLUE;
                    let resp = ui.add(
                        egui::Slider::new(
                            &mut items,
                            layout::MIN_ITEMS_PER_ROW..=layout::MAX_ITEMS_PER_ROW,
                        )
                        .show_value(false)
                        .trailing_fill(true),
                    );
                    if resp.changed() {
                        self.config.set_items_per_row(items);
                    }
                });
                ui.label(format!("{}", self.config.items_per_row()));
            });
            ui.add_space(4.0);
        });
    }

    fn status(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let n = self.config.items_per_row();
            let status = match self.last_geometry {
                Some(g) => format!(
                    "{}×{}, {} squares  |  side {:.0}  |  gaps {:.0}×{:.0}",
                    n,
                    n,
                    self.config.item_count(),
                    g.side,
                    g.column_spacing,
                    g.row_spacing
                ),
                None => format!("{}×{}, {} squares", n, n, self.config.item_count()),
            };
            status_bar(ui, &status);
        });
    }

    fn grid(&mut self, ctx: &Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Palette::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                let area = ui.available_rect_before_wrap();
                let viewport = match Viewport::new(area.width(), area.height()) {
                    Ok(viewport) => viewport,
                    Err(err) => {
                        // Transient zero-size area while the window settles.
                        log::debug!("skipping grid paint: {}", err);
                        return;
                    }
                };

                let geometry = self.cache.geometry(viewport, &self.config);
                if self.last_geometry != Some(geometry) {
                    self.last_geometry = Some(geometry);
                    // One follow-up frame so the status line shows the
                    // fresh numbers.
                    self.repaint.mark_needs_repaint();
                }

                let n = self.config.items_per_row();
                let (grid_w, grid_h) = geometry.grid_size(n);
                let cols = n as usize;
                let step_x = geometry.side + geometry.column_spacing;
                let step_y = geometry.side + geometry.row_spacing;
                let accent = self.accent;

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let desired = egui::vec2(area.width().max(grid_w), grid_h);
                        let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
                        let painter = ui.painter();

                        for item in self.config.items() {
                            let row = (item.index / cols) as f32;
                            let col = (item.index % cols) as f32;
                            let min = rect.min + egui::vec2(col * step_x, row * step_y);
                            let cell =
                                egui::Rect::from_min_size(min, egui::Vec2::splat(geometry.side));
                            if ui.is_rect_visible(cell) {
                                paint_cell(painter, cell, &item.label(), accent);
                            }
                        }
                    });
            });
    }

    fn about_dialog(&mut self, ctx: &Context) {
        let screen = ctx.screen_rect();
        let max_h = (screen.height() - 60.0).max(120.0);
        egui::Window::new("about squared")
            .collapsible(false)
            .resizable(false)
            .default_width(280.0)
            .max_height(max_h)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("squared");
                    ui.label("version 0.1.0");
                    ui.add_space(8.0);
                    ui.label("numbered squares in an adaptive grid");
                });
                ui.add_space(8.0);
                ui.separator();
                ui.add_space(4.0);
                ui.label("controls:");
                ui.label("  padding bar: gap between squares");
                ui.label("  squares slider: squares per row");
                ui.label("  up/down keys: squares per row");
                ui.label("  left/right keys: padding");
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for SquaredApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);

        if self.repaint.frame() == 0 {
            // The real window width can differ from the requested one; the
            // padding ceiling is fixed from whatever we actually got.
            let width = ctx.screen_rect().width();
            if width > 0.0 {
                self.initial_width = width;
                self.config.rebind_padding_limit(width);
            }
            log::info!(
                "starting with {} per row, padding {} (max {})",
                self.config.items_per_row(),
                self.config.padding(),
                self.config.max_padding()
            );
        }

        ctx.input(|i| {
            if i.key_pressed(Key::ArrowUp) {
                self.step_items(1);
            }
            if i.key_pressed(Key::ArrowDown) {
                self.step_items(-1);
            }
            if i.key_pressed(Key::ArrowRight) {
                self.step_padding(PADDING_STEP);
            }
            if i.key_pressed(Key::ArrowLeft) {
                self.step_padding(-PADDING_STEP);
            }
        });

        self.menu(ctx);
        self.status(ctx);
        self.controls(ctx);
        self.grid(ctx);

        if self.show_about {
            self.about_dialog(ctx);
        }

        self.repaint.end_frame(ctx);
    }
}
