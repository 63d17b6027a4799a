//! Adaptive square-grid sizing.
//!
//! Given a viewport, an items-per-row count, and a padding value, compute a
//! single square cell side and the row/column gaps so that the grid fills the
//! tighter viewport axis without overflowing either one. The math is pure and
//! stateless; [`LayoutCache`] adds input-change invalidation on top so apps
//! never paint stale geometry.

use thiserror::Error;

/// Slider bounds for the items-per-row control.
pub const MIN_ITEMS_PER_ROW: u32 = 2;
pub const MAX_ITEMS_PER_ROW: u32 = 40;

/// Padding is capped at this fraction of the initial viewport width.
pub const MAX_PADDING_FRACTION: f32 = 0.9;

/// Startup layout: 3×3 grid with 20px gaps.
pub const DEFAULT_ITEMS_PER_ROW: u32 = 3;
pub const DEFAULT_PADDING: f32 = 20.0;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("viewport must be positive and finite, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

/// Available drawing area for the grid. Re-supplied on every layout pass;
/// dimensions are validated once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, GeometryError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(GeometryError::InvalidViewport { width, height })
        }
    }
}

/// User-adjustable layout parameters. Values are clamped at the setters, so
/// a constructed config is always within bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    items_per_row: u32,
    padding: f32,
    max_padding: f32,
}

impl GridConfig {
    /// Build the startup config. The padding ceiling is a fraction of the
    /// initial viewport width and stays fixed for the session.
    pub fn for_initial_width(width: f32) -> Self {
        let mut config = Self {
            items_per_row: DEFAULT_ITEMS_PER_ROW,
            padding: 0.0,
            max_padding: padding_limit(width),
        };
        config.set_padding(DEFAULT_PADDING);
        config
    }

    pub fn items_per_row(&self) -> u32 {
        self.items_per_row
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn max_padding(&self) -> f32 {
        self.max_padding
    }

    pub fn set_items_per_row(&mut self, items: u32) {
        self.items_per_row = items.clamp(MIN_ITEMS_PER_ROW, MAX_ITEMS_PER_ROW);
    }

    /// Rounded to whole units, clamped to `[0, max_padding]`.
    pub fn set_padding(&mut self, padding: f32) {
        if !padding.is_finite() {
            return;
        }
        self.padding = padding.round().clamp(0.0, self.max_padding);
    }

    /// Re-derive the padding ceiling once the real initial viewport width is
    /// known (the first frame may differ from the requested window size).
    pub fn rebind_padding_limit(&mut self, initial_width: f32) {
        self.max_padding = padding_limit(initial_width);
        self.padding = self.padding.clamp(0.0, self.max_padding);
    }

    /// Total cell count. The control reads "items per row", but the grid
    /// always renders a full square, so the total is that count squared.
    /// The name describes the slider, not the population.
    pub fn item_count(&self) -> usize {
        (self.items_per_row * self.items_per_row) as usize
    }

    /// Cells in row-major order.
    pub fn items(&self) -> impl Iterator<Item = GridItem> {
        (0..self.item_count()).map(|index| GridItem { index })
    }
}

fn padding_limit(initial_width: f32) -> f32 {
    if !initial_width.is_finite() {
        return 0.0;
    }
    (MAX_PADDING_FRACTION * initial_width.max(0.0)).round()
}

/// One cell's identity. Display labels are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridItem {
    pub index: usize,
}

impl GridItem {
    pub fn label(&self) -> String {
        (self.index + 1).to_string()
    }
}

/// Computed layout for one (viewport, config) pair. `side` is shared by every
/// cell in the grid: the grid contains only squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    pub side: f32,
    pub row_spacing: f32,
    pub column_spacing: f32,
}

impl CellGeometry {
    pub fn compute(viewport: Viewport, config: &GridConfig) -> Self {
        Self {
            side: cell_side(viewport, config.items_per_row, config.padding),
            row_spacing: row_spacing(viewport, config.items_per_row, config.padding),
            column_spacing: column_spacing(viewport, config.items_per_row, config.padding),
        }
    }

    /// Footprint of the whole grid at this geometry: `n` cells plus `n - 1`
    /// gaps along each axis.
    pub fn grid_size(&self, items_per_row: u32) -> (f32, f32) {
        let n = items_per_row as f32;
        let gaps = items_per_row.saturating_sub(1) as f32;
        (
            n * self.side + gaps * self.column_spacing,
            n * self.side + gaps * self.row_spacing,
        )
    }
}

/// Side length of every cell in the grid.
///
/// Takes the smaller of a width-driven and a height-driven candidate, so the
/// square grid never overflows either axis regardless of orientation. The
/// height candidate is shrunk by 1px to avoid edge clipping in the taller
/// dimension. Sides below 1px clamp to 1.
pub fn cell_side(viewport: Viewport, items_per_row: u32, padding: f32) -> f32 {
    if items_per_row < 2 {
        // Single cell: no gaps to distribute, just fit the tighter axis.
        return viewport.width.min(viewport.height).max(1.0);
    }
    let n = items_per_row as f32;
    let w_side = (viewport.width - padding * (n - 1.0)) / n;
    let h_side = (viewport.height - padding * (n - 1.0)) / n - 1.0;
    let side = w_side.min(h_side);
    if side < 1.0 {
        1.0
    } else {
        side
    }
}

/// Vertical gap between rows: whatever is needed to spread the rows across
/// the leftover height, but never tighter than the configured padding.
pub fn row_spacing(viewport: Viewport, items_per_row: u32, padding: f32) -> f32 {
    if items_per_row < 2 {
        return 0.0;
    }
    let n = items_per_row as f32;
    let cell = (viewport.width - padding * (n - 1.0)) / n - 1.0;
    let portrait = (viewport.height - cell * n) / (n - 1.0);
    portrait.max(padding)
}

/// Horizontal gap between columns. Mirror of [`row_spacing`] with the axes
/// swapped: a height-driven cell estimate, spread across the leftover width.
pub fn column_spacing(viewport: Viewport, items_per_row: u32, padding: f32) -> f32 {
    if items_per_row < 2 {
        return 0.0;
    }
    let n = items_per_row as f32;
    let cell = (viewport.height - padding * (n - 1.0)) / n;
    let landscape = (viewport.width - cell * n) / (n - 1.0);
    landscape.max(padding)
}

/// Memoizes the last computed geometry. Any change to the viewport or the
/// config drops the cached value and recomputes before the next paint.
#[derive(Debug, Default)]
pub struct LayoutCache {
    cached: Option<(Viewport, GridConfig, CellGeometry)>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Geometry for the given inputs, recomputing only when they changed
    /// since the last call. Identical inputs return identical geometry.
    pub fn geometry(&mut self, viewport: Viewport, config: &GridConfig) -> CellGeometry {
        if let Some((v, c, geometry)) = self.cached {
            if v == viewport && c == *config {
                return geometry;
            }
        }
        let geometry = CellGeometry::compute(viewport, config);
        log::debug!(
            "layout recomputed: {}x{} viewport, {} per row, padding {} -> side {:.2}, gaps {:.2}x{:.2}",
            viewport.width,
            viewport.height,
            config.items_per_row(),
            config.padding(),
            geometry.side,
            geometry.column_spacing,
            geometry.row_spacing,
        );
        self.cached = Some((viewport, *config, geometry));
        geometry
    }

    /// Drop the cached geometry; the next call recomputes unconditionally.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp(width: f32, height: f32) -> Viewport {
        Viewport::new(width, height).unwrap()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_viewport_validation() {
        assert!(Viewport::new(320.0, 480.0).is_ok());
        assert!(Viewport::new(0.0, 480.0).is_err());
        assert!(Viewport::new(320.0, -1.0).is_err());
        assert!(Viewport::new(f32::NAN, 480.0).is_err());
        assert!(Viewport::new(f32::INFINITY, 480.0).is_err());
    }

    #[test]
    fn test_portrait_example() {
        // 320x480, 3 per row, padding 20: width is the binding axis.
        let viewport = vp(320.0, 480.0);
        assert!(approx(cell_side(viewport, 3, 20.0), 280.0 / 3.0));
        // Width-driven cell estimate is (280/3 - 1); the leftover height is
        // spread across the two gaps.
        assert!(approx(row_spacing(viewport, 3, 20.0), 101.5));
        // Leftover width is negative in portrait, so columns fall back to
        // the configured padding.
        assert!(approx(column_spacing(viewport, 3, 20.0), 20.0));
    }

    #[test]
    fn test_landscape_is_tighter_than_portrait() {
        let portrait = cell_side(vp(320.0, 480.0), 3, 20.0);
        let landscape = cell_side(vp(480.0, 320.0), 3, 20.0);
        // The 1px shrink applies to the binding axis after rotation.
        assert!(approx(landscape, 280.0 / 3.0 - 1.0));
        assert!(landscape < portrait);
    }

    #[test]
    fn test_degenerate_viewport_clamps_to_unit_cell() {
        let side = cell_side(vp(1.0, 1.0), 40, 0.0);
        assert_eq!(side, 1.0);
        assert!(cell_side(vp(1.0, 1.0), 40, 50.0) == 1.0);
    }

    #[test]
    fn test_side_monotone_in_items_per_row() {
        let viewport = vp(320.0, 480.0);
        let mut previous = f32::INFINITY;
        for n in MIN_ITEMS_PER_ROW..=MAX_ITEMS_PER_ROW {
            let side = cell_side(viewport, n, 10.0);
            assert!(side <= previous, "side grew at n={}", n);
            previous = side;
        }
    }

    #[test]
    fn test_side_monotone_in_padding() {
        let viewport = vp(320.0, 480.0);
        let mut previous = f32::INFINITY;
        for step in 0..=60 {
            let side = cell_side(viewport, 4, step as f32 * 2.0);
            assert!(side <= previous, "side grew at padding={}", step * 2);
            previous = side;
        }
    }

    #[test]
    fn test_single_item_special_case() {
        let viewport = vp(300.0, 200.0);
        assert_eq!(cell_side(viewport, 1, 20.0), 200.0);
        assert_eq!(row_spacing(viewport, 1, 20.0), 0.0);
        assert_eq!(column_spacing(viewport, 1, 20.0), 0.0);
        // Unit guard still applies below 1px.
        assert_eq!(cell_side(vp(0.5, 0.5), 1, 0.0), 1.0);
    }

    #[test]
    fn test_spacing_never_below_padding() {
        let viewport = vp(480.0, 320.0);
        for n in MIN_ITEMS_PER_ROW..=MAX_ITEMS_PER_ROW {
            assert!(row_spacing(viewport, n, 15.0) >= 15.0);
            assert!(column_spacing(viewport, n, 15.0) >= 15.0);
        }
    }

    #[test]
    fn test_geometry_idempotent() {
        let viewport = vp(375.0, 667.0);
        let config = GridConfig::for_initial_width(375.0);
        let a = CellGeometry::compute(viewport, &config);
        let b = CellGeometry::compute(viewport, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_config_clamping() {
        let mut config = GridConfig::for_initial_width(320.0);
        assert_eq!(config.items_per_row(), DEFAULT_ITEMS_PER_ROW);
        assert_eq!(config.padding(), DEFAULT_PADDING);
        assert_eq!(config.max_padding(), 288.0);

        config.set_items_per_row(1);
        assert_eq!(config.items_per_row(), MIN_ITEMS_PER_ROW);
        config.set_items_per_row(99);
        assert_eq!(config.items_per_row(), MAX_ITEMS_PER_ROW);

        config.set_padding(-5.0);
        assert_eq!(config.padding(), 0.0);
        config.set_padding(1000.0);
        assert_eq!(config.padding(), 288.0);
        config.set_padding(20.4);
        assert_eq!(config.padding(), 20.0);
        config.set_padding(f32::NAN);
        assert_eq!(config.padding(), 20.0);
    }

    #[test]
    fn test_item_count_is_squared() {
        let mut config = GridConfig::for_initial_width(320.0);
        config.set_items_per_row(7);
        assert_eq!(config.item_count(), 49);
        let labels: Vec<String> = config.items().take(3).map(|i| i.label()).collect();
        assert_eq!(labels, ["1", "2", "3"]);
        assert_eq!(config.items().count(), 49);
    }

    #[test]
    fn test_cache_tracks_input_changes() {
        let mut cache = LayoutCache::new();
        let viewport = vp(320.0, 480.0);
        let mut config = GridConfig::for_initial_width(320.0);

        let first = cache.geometry(viewport, &config);
        assert_eq!(first, CellGeometry::compute(viewport, &config));
        assert_eq!(cache.geometry(viewport, &config), first);

        config.set_items_per_row(5);
        let changed = cache.geometry(viewport, &config);
        assert_ne!(changed, first);
        assert_eq!(changed, CellGeometry::compute(viewport, &config));

        let rotated = cache.geometry(vp(480.0, 320.0), &config);
        assert_ne!(rotated, changed);

        cache.invalidate();
        assert_eq!(cache.geometry(viewport, &config), changed);
    }

    #[test]
    fn test_grid_size_footprint() {
        let geometry = CellGeometry {
            side: 10.0,
            row_spacing: 4.0,
            column_spacing: 2.0,
        };
        let (w, h) = geometry.grid_size(3);
        assert!(approx(w, 34.0));
        assert!(approx(h, 38.0));
    }
}
