// Core data model shared between grid construction, the per-frame update
// pass and the UI.

/// Unscaled dot diameter; the size slider multiplies this.
pub const BASE_DOT_SIZE: f32 = 10.0;

/// A single rendered circle.
///
/// The size bounds are fixed when the containing grid is built; `size` is
/// recomputed every frame from the pointer distance and always stays within
/// `[size_min, size_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub size_min: f32,
    pub size_max: f32,
}

/// The full rectangular lattice of dots for one configuration.
///
/// Shape is immutable once built; only the dots' current sizes mutate. A new
/// configuration discards the grid and builds a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct DotGrid {
    /// Origin (top-left lattice point), chosen so the grid is centered in
    /// the viewport. May lie outside the viewport for large grids.
    pub x: f32,
    pub y: f32,
    pub cols: u32,
    pub rows: u32,
    /// Column-major: all dots of column 0 first, then column 1, and so on.
    pub dots: Vec<Dot>,
}

impl DotGrid {
    pub fn empty() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            cols: 0,
            rows: 0,
            dots: Vec::new(),
        }
    }
}

/// Current values of the four user controls. Compared as a whole against the
/// last-applied snapshot to decide whether the grid needs a rebuild.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectConfig {
    /// Dot size as a fraction of [`BASE_DOT_SIZE`], 0..=1.
    pub size_ratio: f32,
    /// Upper size bound multiplier, 1..=5.
    pub max_scale: f32,
    /// Columns and rows (the grid is square), 1..=200.
    pub dot_count: u32,
    /// Gap between lattice points in pixels, 1..=30.
    pub gap: f32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            size_ratio: 0.5,
            max_scale: 2.0,
            dot_count: 4,
            gap: 10.0,
        }
    }
}

impl EffectConfig {
    /// Effective dot diameter fed to the grid builder.
    pub fn dot_size(&self) -> f32 {
        BASE_DOT_SIZE * self.size_ratio
    }
}
