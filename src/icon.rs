//! The rendered icon raster.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::Pixmap;

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// The output of one render pass.
///
/// A square RGBA buffer with straight (non-premultiplied) alpha and a
/// transparent background, ready to be composited onto a map. The raster is
/// immutable; a renderer replaces it as a whole when it re-renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRaster {
    data: RgbaImage,
}

impl IconRaster {
    /// Copies a premultiplied tiny-skia surface into a straight-alpha raster.
    pub(crate) fn from_pixmap(pixmap: &Pixmap) -> Self {
        let mut data = RgbaImage::new(pixmap.width(), pixmap.height());
        for (dst, src) in data.pixels_mut().zip(pixmap.pixels()) {
            let color = src.demultiply();
            *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
        }
        Self { data }
    }

    /// Returns the pixel dimensions of the raster.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    pub fn width(&self) -> u32 {
        self.data.width()
    }

    pub fn height(&self) -> u32 {
        self.data.height()
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.data.get_pixel_checked(x, y).copied()
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.data.as_raw()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.data
    }

    pub fn into_image(self) -> RgbaImage {
        self.data
    }

    /// Returns true if no pixel has any coverage.
    pub fn is_blank(&self) -> bool {
        self.data.pixels().all(|p| p[3] == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resvg::tiny_skia::Color;

    #[test]
    fn size_px_is_square() {
        assert!(SizePx::new(21, 21).is_square());
        assert!(!SizePx::new(21, 20).is_square());
    }

    #[test]
    fn from_pixmap_unpremultiplies() {
        let mut pixmap = Pixmap::new(3, 2).unwrap();
        pixmap.fill(Color::from_rgba8(255, 0, 0, 255));
        let raster = IconRaster::from_pixmap(&pixmap);

        assert_eq!(raster.dimensions(), SizePx::new(3, 2));
        assert_eq!(raster.pixel(2, 1).unwrap().0, [255, 0, 0, 255]);
        assert!(raster.pixel(3, 0).is_none());
        assert!(!raster.is_blank());
    }

    #[test]
    fn transparent_pixmap_is_blank() {
        let pixmap = Pixmap::new(4, 4).unwrap();
        let raster = IconRaster::from_pixmap(&pixmap);
        assert!(raster.is_blank());
        assert_eq!(raster.as_raw().len(), 4 * 4 * 4);
    }
}
