// Grid construction and the per-frame pointer pass.

use crate::sampler::BrightnessMap;
use crate::types::{Dot, DotGrid};

/// Pointer influence radius in canvas pixels. A dot right under the pointer
/// renders at `size_max`; at or beyond this distance it renders at
/// `size_min`.
pub const MAX_POINTER_DIST: f32 = 200.0;

/// How each cell's size bounds are derived during a rebuild.
#[derive(Clone, Copy)]
pub enum GridStyle<'a> {
    /// Uniform bounds for every dot.
    Plain,
    /// Both bounds scaled per-cell by sampled image brightness.
    ImageWeighted(&'a BrightnessMap),
}

/// Builds a centered, column-major lattice of dots.
///
/// The grid extent is `cols * (dot_size + gap)` by `rows * (dot_size + gap)`
/// and the origin is chosen so that extent is centered in the viewport; the
/// grid is never clipped and may overflow the viewport edges. `cols == 0` or
/// `rows == 0` yields an empty dot sequence.
pub fn build_grid(
    cols: u32,
    rows: u32,
    dot_size: f32,
    gap: f32,
    max_scale: f32,
    style: GridStyle<'_>,
    viewport_w: f32,
    viewport_h: f32,
) -> DotGrid {
    let min_size = dot_size;
    let max_size = dot_size * max_scale;
    let step = dot_size + gap;

    let mut grid = DotGrid {
        x: viewport_w / 2.0 - cols as f32 * (min_size + gap) / 2.0,
        y: viewport_h / 2.0 - rows as f32 * (min_size + gap) / 2.0,
        cols,
        rows,
        dots: Vec::with_capacity((cols * rows) as usize),
    };

    for col in 0..cols {
        for row in 0..rows {
            let mut dot = Dot {
                x: grid.x + col as f32 * step,
                y: grid.y + row as f32 * step,
                size: dot_size,
                size_min: min_size,
                size_max: max_size,
            };
            if let GridStyle::ImageWeighted(map) = style {
                let factor = map.cell_factor(col, row, cols, rows);
                dot.size_min *= factor;
                dot.size_max *= factor;
            }
            grid.dots.push(dot);
        }
    }

    grid
}

/// Recomputes every dot's rendered size from its distance to the pointer.
///
/// Distance 0 maps to `size_max`, [`MAX_POINTER_DIST`] and beyond to
/// `size_min`, linearly in between. Pure function of the current pointer
/// position; sizes jump as the pointer moves, no smoothing between frames.
pub fn update_sizes(grid: &mut DotGrid, pointer_x: f32, pointer_y: f32) {
    for dot in &mut grid.dots {
        let dist = (dot.x - pointer_x).hypot(dot.y - pointer_y);
        let t = (dist / MAX_POINTER_DIST).clamp(0.0, 1.0);
        let size = dot.size_max + (dot.size_min - dot.size_max) * t;
        // Interpolation is already in range; the clamp guards float error.
        dot.size = size.clamp(dot.size_min, dot.size_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn default_grid() -> DotGrid {
        // Slider defaults on an 800x600 viewport: dot_size 5, gap 10,
        // max_scale 2, 4x4 dots.
        build_grid(4, 4, 5.0, 10.0, 2.0, GridStyle::Plain, 800.0, 600.0)
    }

    #[test]
    fn builds_cols_times_rows_dots_with_fixed_bounds() {
        let grid = default_grid();
        assert_eq!(grid.dots.len(), 16);
        assert_eq!(grid.cols, 4);
        assert_eq!(grid.rows, 4);
        for dot in &grid.dots {
            assert_eq!(dot.size_min, 5.0);
            assert_eq!(dot.size_max, 10.0);
            assert_eq!(dot.size, 5.0);
            assert!(dot.size_min <= dot.size_max);
        }
    }

    #[test]
    fn grid_is_centered_in_viewport() {
        let grid = default_grid();
        assert!((grid.x - 370.0).abs() < EPS);
        assert!((grid.y - 270.0).abs() < EPS);
        // Origin plus half the lattice extent lands on the viewport center.
        assert!((grid.x + 4.0 * 15.0 / 2.0 - 400.0).abs() < EPS);
        assert!((grid.y + 4.0 * 15.0 / 2.0 - 300.0).abs() < EPS);
    }

    #[test]
    fn dots_sit_on_a_column_major_lattice() {
        let grid = build_grid(3, 2, 5.0, 10.0, 2.0, GridStyle::Plain, 800.0, 600.0);
        assert_eq!(grid.dots.len(), 6);
        // First `rows` dots are column 0, top to bottom.
        assert!((grid.dots[0].x - grid.x).abs() < EPS);
        assert!((grid.dots[0].y - grid.y).abs() < EPS);
        assert!((grid.dots[1].x - grid.x).abs() < EPS);
        assert!((grid.dots[1].y - (grid.y + 15.0)).abs() < EPS);
        // Next dot starts column 1.
        assert!((grid.dots[2].x - (grid.x + 15.0)).abs() < EPS);
        assert!((grid.dots[2].y - grid.y).abs() < EPS);
    }

    #[test]
    fn zero_cols_or_rows_builds_an_empty_grid() {
        let grid = build_grid(0, 5, 5.0, 10.0, 2.0, GridStyle::Plain, 800.0, 600.0);
        assert!(grid.dots.is_empty());
        let grid = build_grid(5, 0, 5.0, 10.0, 2.0, GridStyle::Plain, 800.0, 600.0);
        assert!(grid.dots.is_empty());
    }

    #[test]
    fn pointer_on_dot_maxes_size_and_far_pointer_mins_it() {
        let mut grid = default_grid();
        let (x, y) = (grid.dots[0].x, grid.dots[0].y);

        update_sizes(&mut grid, x, y);
        assert_eq!(grid.dots[0].size, grid.dots[0].size_max);

        update_sizes(&mut grid, x + MAX_POINTER_DIST, y);
        assert_eq!(grid.dots[0].size, grid.dots[0].size_min);

        update_sizes(&mut grid, x + 5000.0, y);
        assert_eq!(grid.dots[0].size, grid.dots[0].size_min);
    }

    #[test]
    fn halfway_pointer_interpolates_linearly() {
        let mut grid = default_grid();
        let (x, y) = (grid.dots[0].x, grid.dots[0].y);
        update_sizes(&mut grid, x + 100.0, y);
        assert!((grid.dots[0].size - 7.5).abs() < EPS);
    }

    #[test]
    fn update_is_idempotent_for_a_fixed_pointer() {
        let mut grid = default_grid();
        update_sizes(&mut grid, 412.0, 333.0);
        let first: Vec<f32> = grid.dots.iter().map(|d| d.size).collect();
        update_sizes(&mut grid, 412.0, 333.0);
        let second: Vec<f32> = grid.dots.iter().map(|d| d.size).collect();
        assert_eq!(first, second);
    }
}
