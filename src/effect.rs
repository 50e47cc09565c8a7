// Per-session effect state: owns the current grid, the last-applied control
// values and the loaded image, and decides when a rebuild is needed.

use crate::grid::{self, GridStyle};
use crate::sampler::BrightnessMap;
use crate::types::{DotGrid, EffectConfig};

pub struct EffectState {
    grid: DotGrid,
    /// Snapshot of the control values the current grid was built from;
    /// `None` until the first frame, which therefore always rebuilds.
    applied: Option<EffectConfig>,
    image: Option<BrightnessMap>,
    force_rebuild: bool,
}

impl EffectState {
    pub fn new() -> Self {
        Self {
            grid: DotGrid::empty(),
            applied: None,
            image: None,
            force_rebuild: false,
        }
    }

    pub fn grid(&self) -> &DotGrid {
        &self.grid
    }

    /// Stores a freshly decoded image; the next [`apply`](Self::apply)
    /// rebuilds the grid image-weighted.
    pub fn set_image(&mut self, map: BrightnessMap) {
        self.image = Some(map);
        self.force_rebuild = true;
    }

    /// Drops the loaded image and reverts to proximity-only mode on the
    /// next frame.
    pub fn clear_image(&mut self) {
        if self.image.take().is_some() {
            self.force_rebuild = true;
        }
    }

    /// Requests an unconditional rebuild on the next frame (used on canvas
    /// resize so the grid stays centered).
    pub fn force_rebuild(&mut self) {
        self.force_rebuild = true;
    }

    /// Applies the current control values, rebuilding the grid only when
    /// they differ from the last-applied snapshot or a rebuild was forced.
    /// Returns whether a rebuild happened; otherwise the existing grid is
    /// reused untouched.
    pub fn apply(&mut self, config: EffectConfig, viewport_w: f32, viewport_h: f32) -> bool {
        if !self.force_rebuild && self.applied == Some(config) {
            return false;
        }

        let style = match &self.image {
            Some(map) => GridStyle::ImageWeighted(map),
            None => GridStyle::Plain,
        };
        self.grid = grid::build_grid(
            config.dot_count,
            config.dot_count,
            config.dot_size(),
            config.gap,
            config.max_scale,
            style,
            viewport_w,
            viewport_h,
        );
        self.applied = Some(config);
        self.force_rebuild = false;
        true
    }

    /// Per-frame pointer pass over the current grid.
    pub fn update_pointer(&mut self, x: f32, y: f32) {
        grid::update_sizes(&mut self.grid, x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};

    fn white_map() -> BrightnessMap {
        BrightnessMap::from_image(&DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            8,
            8,
            Rgba([255, 255, 255, 255]),
        )))
    }

    fn black_map() -> BrightnessMap {
        BrightnessMap::from_image(&DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            8,
            8,
            Rgba([0, 0, 0, 255]),
        )))
    }

    #[test]
    fn default_config_matches_the_slider_defaults() {
        let cfg = EffectConfig::default();
        assert_eq!(cfg.dot_size(), 5.0);
        assert_eq!(cfg.max_scale, 2.0);
        assert_eq!(cfg.dot_count, 4);
        assert_eq!(cfg.gap, 10.0);
    }

    #[test]
    fn apply_rebuilds_only_when_the_config_changes() {
        let mut state = EffectState::new();
        let cfg = EffectConfig::default();

        // First frame always builds.
        assert!(state.apply(cfg, 800.0, 600.0));
        assert_eq!(state.grid().dots.len(), 16);
        let buf = state.grid().dots.as_ptr();

        // Unchanged config reuses the same grid object.
        assert!(!state.apply(cfg, 800.0, 600.0));
        assert_eq!(state.grid().dots.as_ptr(), buf);

        // Any one changed control triggers exactly one rebuild.
        let changed = EffectConfig { gap: 12.0, ..cfg };
        assert!(state.apply(changed, 800.0, 600.0));
        assert!(!state.apply(changed, 800.0, 600.0));
    }

    #[test]
    fn force_rebuild_bypasses_the_guard() {
        let mut state = EffectState::new();
        let cfg = EffectConfig::default();
        assert!(state.apply(cfg, 800.0, 600.0));
        state.force_rebuild();
        assert!(state.apply(cfg, 800.0, 600.0));
        assert!(!state.apply(cfg, 800.0, 600.0));
    }

    #[test]
    fn white_image_collapses_every_dot() {
        let mut state = EffectState::new();
        let cfg = EffectConfig::default();
        assert!(state.apply(cfg, 800.0, 600.0));

        state.set_image(white_map());
        // The new image forces a rebuild even though the sliders are unchanged.
        assert!(state.apply(cfg, 800.0, 600.0));
        for dot in &state.grid().dots {
            assert_eq!(dot.size_min, 0.0);
            assert_eq!(dot.size_max, 0.0);
        }
    }

    #[test]
    fn black_image_keeps_the_plain_bounds() {
        let mut state = EffectState::new();
        let cfg = EffectConfig::default();
        state.set_image(black_map());
        assert!(state.apply(cfg, 800.0, 600.0));
        for dot in &state.grid().dots {
            assert_eq!(dot.size_min, 5.0);
            assert_eq!(dot.size_max, 10.0);
        }
    }

    #[test]
    fn clearing_the_image_reverts_to_plain_bounds() {
        let mut state = EffectState::new();
        let cfg = EffectConfig::default();
        state.set_image(white_map());
        assert!(state.apply(cfg, 800.0, 600.0));

        state.clear_image();
        assert!(state.apply(cfg, 800.0, 600.0));
        for dot in &state.grid().dots {
            assert_eq!(dot.size_min, 5.0);
            assert_eq!(dot.size_max, 10.0);
        }
        // Clearing when nothing is loaded does not schedule a rebuild.
        state.clear_image();
        assert!(!state.apply(cfg, 800.0, 600.0));
    }
}
