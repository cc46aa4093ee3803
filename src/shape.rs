//! Normalized icon shapes per vehicle class.
//!
//! Shapes live in a unit square centred on the origin (coordinates roughly in
//! `[-0.5, 0.5]`), independent of the final pixel size. The renderer scales
//! them by `pixel_radius * scale` and rotates them by the heading.
//!
//! Every family except the long-range fixed wing points its nose along local
//! `+y`. The long-range outline is drawn nose down and needs an extra half
//! turn, see [`Shape::forward_correction`].

use crate::airframe::{Airframe, ShapeFamily};

/// A point in unit-square shape coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl Vertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

const fn v(x: f32, y: f32) -> Vertex {
    Vertex::new(x, y)
}

// ============================================================================
// Vertex tables
// ============================================================================

/// Predator/Reaper silhouette, nose at local `-y`.
const LONG_RANGE_OUTLINE: [Vertex; 24] = [
    v(0.000000, -0.312500),
    v(0.025000, -0.287500),
    v(0.037500, -0.237500),
    v(0.031250, -0.187500),
    v(0.025000, -0.043750),
    v(0.500000, -0.025000),
    v(0.500000, 0.025000),
    v(0.025000, 0.043750),
    v(0.025000, 0.162500),
    v(0.137500, 0.181250),
    v(0.137500, 0.218750),
    v(0.025000, 0.206250),
    v(-0.025000, 0.206250),
    v(-0.137500, 0.218750),
    v(-0.137500, 0.181250),
    v(-0.025000, 0.162500),
    v(-0.025000, 0.043750),
    v(-0.500000, 0.025000),
    v(-0.500000, -0.025000),
    v(-0.025000, -0.043750),
    v(-0.031250, -0.187500),
    v(-0.037500, -0.237500),
    v(-0.031250, -0.262500),
    v(0.000000, -0.312500),
];

/// Small fixed-wing silhouette, nose at local `+y`.
const FIXED_WING_OUTLINE: [Vertex; 32] = [
    v(0.000000, 0.362319),
    v(0.018116, 0.340580),
    v(0.028986, 0.318841),
    v(0.036232, 0.166667),
    v(0.326087, 0.170290),
    v(0.420290, 0.130435),
    v(0.456522, 0.108696),
    v(0.500000, 0.000000),
    v(0.456522, 0.021739),
    v(0.391304, 0.021739),
    v(0.028986, 0.021739),
    v(0.021739, -0.239130),
    v(0.094203, -0.246377),
    v(0.123188, -0.268116),
    v(0.144928, -0.304348),
    v(0.000000, -0.307971),
    v(0.000000, -0.307971),
    v(-0.144928, -0.304348),
    v(-0.123188, -0.268116),
    v(-0.094203, -0.246377),
    v(-0.021739, -0.239130),
    v(-0.028986, 0.021739),
    v(-0.391304, 0.021739),
    v(-0.456522, 0.021739),
    v(-0.500000, 0.000000),
    v(-0.456522, 0.108696),
    v(-0.420290, 0.130435),
    v(-0.326087, 0.170290),
    v(-0.036232, 0.166667),
    v(-0.028986, 0.318841),
    v(-0.018116, 0.340580),
    v(-0.000000, 0.362319),
];

/// Isosceles pointer, apex at local `+y`.
const POINTER_OUTLINE: [Vertex; 3] = [v(0.0, 0.3), v(-0.2, -0.2), v(0.2, -0.2)];

/// Distance of the multi-rotor dots from the centre.
const ROTOR_OFFSET: f32 = 0.2;

// ============================================================================
// Shape
// ============================================================================

/// A closed polygon in unit-square coordinates.
///
/// The closing edge from the last vertex back to the first is implicit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polygon {
    vertices: &'static [Vertex],
    scale: f32,
}

impl Polygon {
    pub fn vertices(&self) -> &[Vertex] {
        self.vertices
    }

    /// Fraction of the pixel radius one unit maps to.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

/// Four dots marking a multi-rotor frame.
///
/// The front dot is drawn in the heading marker color; the others use the
/// icon's fill color. Each dot has radius `pixel_radius * dot_radius_ratio`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundDots {
    pub front: Vertex,
    pub secondary: [Vertex; 3],
    pub scale: f32,
    pub dot_radius_ratio: f32,
}

/// A normalized icon shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Airplane outlines.
    Polygon {
        family: ShapeFamily,
        polygon: Polygon,
    },
    /// Multi-rotor dots.
    CompoundDots(CompoundDots),
    /// The generic pointer, also used for unknown classes.
    Triangle(Polygon),
}

impl Shape {
    pub fn family(&self) -> ShapeFamily {
        match self {
            Self::Polygon { family, .. } => *family,
            Self::CompoundDots(_) => ShapeFamily::MultiRotor,
            Self::Triangle(_) => ShapeFamily::Generic,
        }
    }

    /// Extra rotation in degrees needed to point this shape's nose along the
    /// common forward axis.
    pub fn forward_correction(&self) -> f32 {
        match self.family() {
            ShapeFamily::LongRangeFixedWing => 180.0,
            _ => 0.0,
        }
    }

    /// Number of outline vertices, or zero for dot shapes.
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Polygon { polygon, .. } | Self::Triangle(polygon) => polygon.vertices.len(),
            Self::CompoundDots(_) => 0,
        }
    }
}

/// Returns the normalized shape for an airframe.
///
/// Never fails: unknown classes get the generic pointer.
pub fn shape_for(airframe: Airframe) -> Shape {
    match airframe.family() {
        ShapeFamily::LongRangeFixedWing => Shape::Polygon {
            family: ShapeFamily::LongRangeFixedWing,
            polygon: Polygon {
                vertices: &LONG_RANGE_OUTLINE,
                scale: 0.9,
            },
        },
        ShapeFamily::MultiRotor => Shape::CompoundDots(CompoundDots {
            front: v(0.0, ROTOR_OFFSET),
            secondary: [
                v(-ROTOR_OFFSET, 0.0),
                v(ROTOR_OFFSET, 0.0),
                v(0.0, -ROTOR_OFFSET),
            ],
            scale: 1.0,
            dot_radius_ratio: 1.0 / 8.0,
        }),
        ShapeFamily::FixedWing => Shape::Polygon {
            family: ShapeFamily::FixedWing,
            polygon: Polygon {
                vertices: &FIXED_WING_OUTLINE,
                scale: 0.7,
            },
        },
        ShapeFamily::Generic => Shape::Triangle(Polygon {
            vertices: &POINTER_OUTLINE,
            scale: 0.9,
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_classes_get_triangle() {
        for code in [-999, -1, 8, 10, 11, 12, 1000, i32::MIN, i32::MAX] {
            let shape = shape_for(Airframe::from_code(code));
            assert!(matches!(shape, Shape::Triangle(_)), "code {code}");
            assert_eq!(shape.vertex_count(), 3);
        }
        assert_eq!(shape_for(Airframe::Generic).vertex_count(), 3);
    }

    #[test]
    fn long_range_outline() {
        for airframe in [Airframe::Predator, Airframe::Reaper] {
            let shape = shape_for(airframe);
            assert_eq!(shape.family(), ShapeFamily::LongRangeFixedWing);
            assert_eq!(shape.vertex_count(), 24);
            assert_eq!(shape.forward_correction(), 180.0);
        }
    }

    #[test]
    fn fixed_wing_outline() {
        let shape = shape_for(Airframe::Pteryx);
        assert_eq!(shape.vertex_count(), 32);
        assert_eq!(shape.forward_correction(), 0.0);
        let Shape::Polygon { polygon, .. } = shape else {
            panic!("expected polygon");
        };
        assert_eq!(polygon.scale(), 0.7);
        assert_eq!(polygon.vertices()[0], Vertex::new(0.0, 0.362319));
    }

    #[test]
    fn multi_rotor_dots() {
        let Shape::CompoundDots(dots) = shape_for(Airframe::Cheetah) else {
            panic!("expected dots");
        };
        assert_eq!(dots.front, Vertex::new(0.0, 0.2));
        assert!(dots.secondary.contains(&Vertex::new(-0.2, 0.0)));
        assert!(dots.secondary.contains(&Vertex::new(0.2, 0.0)));
        assert!(dots.secondary.contains(&Vertex::new(0.0, -0.2)));
        assert_eq!(dots.dot_radius_ratio, 0.125);
    }

    #[test]
    fn outlines_fit_unit_square() {
        for airframe in [Airframe::Predator, Airframe::Merlin, Airframe::Generic] {
            let (Shape::Polygon { polygon, .. } | Shape::Triangle(polygon)) = shape_for(airframe)
            else {
                unreachable!()
            };
            for vertex in polygon.vertices() {
                assert!(vertex.x.abs() <= 0.5 && vertex.y.abs() <= 0.5);
            }
        }
    }

    #[test]
    fn lookup_is_deterministic() {
        for code in -2..14 {
            let airframe = Airframe::from_code(code);
            assert_eq!(shape_for(airframe), shape_for(airframe));
        }
    }
}
