// Brightness sampling from a loaded image. Darker pixels allow larger dots,
// pure white collapses a cell to nothing.

use image::DynamicImage;

/// A decoded image reduced to its per-pixel brightness plane.
///
/// Built once on the decode thread; the frame loop only reads it. Sampling
/// is random-access with no caching or downscaling — a large image behind a
/// dense grid simply costs what it costs.
pub struct BrightnessMap {
    width: u32,
    height: u32,
    luma: Vec<u8>,
}

impl BrightnessMap {
    pub fn from_image(img: &DynamicImage) -> Self {
        let luma = img.to_luma8();
        let (width, height) = luma.dimensions();
        Self {
            width,
            height,
            luma: luma.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Brightness in 0..=255 at a pixel; out-of-bounds coordinates read as
    /// black, matching what the original canvas host returns there.
    fn brightness_at(&self, x: u32, y: u32) -> u8 {
        if x < self.width && y < self.height {
            self.luma[(y * self.width + x) as usize]
        } else {
            0
        }
    }

    /// Size-bound factor for grid cell `(col, row)`: `1 - brightness/255`.
    ///
    /// Quirk kept from the original effect: the row step is derived from the
    /// image *width* as well, so non-square images sample rows on a
    /// stretched axis (and a wide image samples rows past its bottom edge).
    pub fn cell_factor(&self, col: u32, row: u32, cols: u32, rows: u32) -> f32 {
        let tile_col = self.width as f32 / cols as f32;
        let tile_row = self.width as f32 / rows as f32;
        let x = (tile_col * col as f32) as u32;
        let y = (tile_row * row as f32) as u32;
        1.0 - self.brightness_at(x, y) as f32 / 255.0
    }
}
