//! squarecore: shared library for the squared demo application

pub mod layout;
pub mod palette;
pub mod repaint;
pub mod theme;
pub mod widgets;

pub use layout::{CellGeometry, GridConfig, LayoutCache, Viewport};
pub use repaint::RepaintController;
pub use theme::SquaredTheme;

/// Startup grid override from the SQUARED_GRID environment variable.
/// Format: `"items,padding"` (e.g. `SQUARED_GRID=5,40`).
/// Returns None when unset; malformed values are logged and ignored.
/// Handy for launching the demo in a known state for screenshots.
pub fn grid_override() -> Option<(u32, f32)> {
    let raw = std::env::var("SQUARED_GRID").ok()?;
    let parsed = parse_grid_override(&raw);
    if parsed.is_none() {
        log::warn!("ignoring malformed SQUARED_GRID value {:?}", raw);
    }
    parsed
}

fn parse_grid_override(raw: &str) -> Option<(u32, f32)> {
    let (items, padding) = raw.split_once(',')?;
    let items = items.trim().parse::<u32>().ok()?;
    let padding = padding.trim().parse::<f32>().ok()?;
    Some((items, padding))
}
