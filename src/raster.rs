//! Drawing surface and shape rasterization using tiny-skia.
//!
//! The canvas is a square pixmap whose drawing origin sits at
//! `pixel_radius / 2` on both axes. Shapes are drawn through a rotation
//! applied to a copy of the origin transform, so the canvas frame is never
//! left rotated after a draw.

use palette::Srgba;
use resvg::tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::color::{Accents, to_skia};
use crate::error::IconError;
use crate::icon::IconRaster;
use crate::shape::{CompoundDots, Polygon, Shape, Vertex};

/// Stroke width of the selection ring.
pub const SELECTION_STROKE: f32 = 2.0;

/// Stroke width of shape outlines.
pub const OUTLINE_STROKE: f32 = 1.0;

/// Largest accepted pixel radius. Map icons are tens of pixels; anything
/// beyond this is treated as an allocation failure.
pub const MAX_PIXEL_RADIUS: u32 = 4096;

/// Everything a shape needs to draw itself.
pub(crate) struct DrawStyle {
    pub pixel_radius: u32,
    pub fill: Srgba<u8>,
    pub accents: Accents,
}

// ============================================================================
// IconCanvas
// ============================================================================

/// A reusable square drawing surface.
pub(crate) struct IconCanvas {
    pixmap: Pixmap,
    origin: Transform,
}

impl IconCanvas {
    /// Allocates a `(pixel_radius + 1)` square surface.
    pub fn new(pixel_radius: u32) -> Result<Self, IconError> {
        if pixel_radius == 0 {
            return Err(IconError::InvalidRadius(pixel_radius));
        }
        let side = pixel_radius.saturating_add(1);
        if pixel_radius > MAX_PIXEL_RADIUS {
            return Err(IconError::Allocation {
                width: side,
                height: side,
            });
        }
        let pixmap = Pixmap::new(side, side).ok_or(IconError::Allocation {
            width: side,
            height: side,
        })?;
        let center = (pixel_radius / 2) as f32;
        Ok(Self {
            pixmap,
            origin: Transform::from_translate(center, center),
        })
    }

    pub fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    /// Draws the selection ring: radius `pixel_radius / 2 - 1`, unfilled.
    ///
    /// Too small icons get no ring.
    pub fn draw_selection_ring(&mut self, style: &DrawStyle) {
        let radius = (style.pixel_radius / 2) as f32 - 1.0;
        if radius <= 0.0 {
            return;
        }
        let Some(ring) = PathBuilder::from_circle(0.0, 0.0, radius) else {
            return;
        };
        let stroke = Stroke {
            width: SELECTION_STROKE,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &ring,
            &paint(style.accents.selection),
            &stroke,
            self.origin,
            None,
        );
    }

    /// Draws `shape` rotated by `degrees` about the origin.
    pub fn draw_shape(&mut self, shape: &Shape, degrees: f32, style: &DrawStyle) {
        let frame = self.origin.pre_rotate(degrees);
        shape.draw(&mut self.pixmap, frame, style);
    }

    pub fn to_raster(&self) -> IconRaster {
        IconRaster::from_pixmap(&self.pixmap)
    }
}

fn paint(color: Srgba<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_skia(color));
    paint.anti_alias = true;
    paint
}

fn outline() -> Stroke {
    Stroke {
        width: OUTLINE_STROKE,
        ..Stroke::default()
    }
}

/// Fills `path` and strokes it with the outline color.
fn fill_outlined(
    pixmap: &mut Pixmap,
    path: &Path,
    fill: Srgba<u8>,
    style: &DrawStyle,
    frame: Transform,
) {
    pixmap.fill_path(path, &paint(fill), FillRule::Winding, frame, None);
    pixmap.stroke_path(path, &paint(style.accents.outline), &outline(), frame, None);
}

// ============================================================================
// Shape drawing
// ============================================================================

impl Shape {
    /// Draws the shape in `frame`, which already holds origin and rotation.
    ///
    /// Unit coordinates are scaled into pixels before the path is built so
    /// that outline widths stay in pixels.
    pub(crate) fn draw(&self, pixmap: &mut Pixmap, frame: Transform, style: &DrawStyle) {
        match self {
            Self::Polygon { polygon, .. } | Self::Triangle(polygon) => {
                polygon.draw(pixmap, frame, style)
            }
            Self::CompoundDots(dots) => dots.draw(pixmap, frame, style),
        }
    }
}

impl Polygon {
    fn draw(&self, pixmap: &mut Pixmap, frame: Transform, style: &DrawStyle) {
        let size = style.pixel_radius as f32 * self.scale();
        let Some(path) = polygon_path(self.vertices(), size) else {
            return;
        };
        fill_outlined(pixmap, &path, style.fill, style, frame);
    }
}

impl CompoundDots {
    fn draw(&self, pixmap: &mut Pixmap, frame: Transform, style: &DrawStyle) {
        let size = style.pixel_radius as f32 * self.scale;
        let radius = style.pixel_radius as f32 * self.dot_radius_ratio;

        for center in &self.secondary {
            draw_dot(pixmap, *center, size, radius, style.fill, style, frame);
        }
        draw_dot(
            pixmap,
            self.front,
            size,
            radius,
            style.accents.heading_marker,
            style,
            frame,
        );
    }
}

fn draw_dot(
    pixmap: &mut Pixmap,
    center: Vertex,
    size: f32,
    radius: f32,
    fill: Srgba<u8>,
    style: &DrawStyle,
    frame: Transform,
) {
    if let Some(dot) = PathBuilder::from_circle(center.x * size, center.y * size, radius) {
        fill_outlined(pixmap, &dot, fill, style, frame);
    }
}

/// Builds a closed path from unit vertices scaled by `size`.
fn polygon_path(vertices: &[Vertex], size: f32) -> Option<Path> {
    let (first, rest) = vertices.split_first()?;
    let mut builder = PathBuilder::with_capacity(vertices.len() + 1, vertices.len() + 1);
    builder.move_to(first.x * size, first.y * size);
    for vertex in rest {
        builder.line_to(vertex.x * size, vertex.y * size);
    }
    builder.close();
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airframe::Airframe;
    use crate::shape::shape_for;

    fn style(pixel_radius: u32) -> DrawStyle {
        DrawStyle {
            pixel_radius,
            fill: Srgba::new(0, 0, 255, 255),
            accents: Accents::default(),
        }
    }

    #[test]
    fn canvas_side_is_radius_plus_one() {
        assert_eq!(IconCanvas::new(20).unwrap().to_raster().width(), 21);
        assert_eq!(IconCanvas::new(1).unwrap().to_raster().height(), 2);
    }

    #[test]
    fn zero_radius_is_rejected() {
        assert!(matches!(IconCanvas::new(0), Err(IconError::InvalidRadius(0))));
    }

    #[test]
    fn oversized_radius_is_rejected() {
        assert!(matches!(
            IconCanvas::new(u32::MAX),
            Err(IconError::Allocation { .. })
        ));
        assert!(IconCanvas::new(MAX_PIXEL_RADIUS + 1).is_err());
    }

    #[test]
    fn ring_is_drawn_in_selection_color() {
        let mut canvas = IconCanvas::new(20).unwrap();
        canvas.clear();
        canvas.draw_selection_ring(&style(20));
        let raster = canvas.to_raster();

        // Topmost point of the ring: centre (10, 10), radius 9.
        let pixel = raster.pixel(10, 1).unwrap();
        assert!(pixel[3] > 0);
        assert_eq!(pixel[2], 0, "ring should be yellow");
        // Centre stays empty.
        assert_eq!(raster.pixel(10, 10).unwrap()[3], 0);
    }

    #[test]
    fn polygon_fills_around_origin() {
        let mut canvas = IconCanvas::new(40).unwrap();
        canvas.clear();
        canvas.draw_shape(&shape_for(Airframe::Generic), 180.0, &style(40));
        let raster = canvas.to_raster();

        // The triangle's centroid sits slightly off the origin; the pixel
        // just below the centre is well inside it.
        assert_eq!(raster.pixel(19, 20).unwrap().0, [0, 0, 255, 255]);
        assert_eq!(raster.pixel(0, 0).unwrap()[3], 0);
    }

    #[test]
    fn polygon_path_requires_vertices() {
        assert!(polygon_path(&[], 10.0).is_none());
    }
}
