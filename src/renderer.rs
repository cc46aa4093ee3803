//! Per-icon render cache with heading hysteresis.

use std::f64::consts::PI;

use log::{debug, trace};
use palette::Srgba;

use crate::airframe::Airframe;
use crate::color::Accents;
use crate::descriptor::IconDescriptor;
use crate::error::IconError;
use crate::icon::IconRaster;
use crate::raster::{DrawStyle, IconCanvas};
use crate::shape::shape_for;

/// Heading changes at or below this many radians do not re-render.
pub const HEADING_THRESHOLD: f64 = 0.1;

/// Differences above this are reduced with `%` before the subtraction loop.
const REDUCTION_LOOP_LIMIT: f64 = 64.0 * PI;

// ============================================================================
// Hysteresis
// ============================================================================

/// Reduces the absolute heading difference by repeatedly subtracting π.
///
/// The difference is stored as `f32` but every comparison and subtraction
/// against π happens in `f64`. Since `f32` π is slightly above the true π,
/// a difference of exactly `f32` π or 2π reduces to almost nothing.
/// Headings either side of ±π are still compared the long way round.
///
/// Returns `None` for non-finite input.
pub fn reduced_heading_difference(last: f32, heading: f32) -> Option<f32> {
    let mut diff = (heading - last).abs();
    if !diff.is_finite() {
        return None;
    }
    if f64::from(diff) > REDUCTION_LOOP_LIMIT {
        // Same result as the loop below, without walking a huge difference
        // down in steps of π.
        let mut reduced = f64::from(diff) % PI;
        if reduced == 0.0 {
            reduced = PI;
        }
        diff = reduced as f32;
    }
    while f64::from(diff) > PI {
        diff = (f64::from(diff) - PI) as f32;
    }
    Some(diff)
}

/// Returns true if moving from `last` to `heading` warrants a re-render.
///
/// A finite heading always replaces a non-finite one.
pub fn heading_changed(last: f32, heading: f32) -> bool {
    if !last.is_finite() {
        return heading.is_finite();
    }
    reduced_heading_difference(last, heading)
        .is_some_and(|diff| f64::from(diff) > HEADING_THRESHOLD)
}

/// Final rotation in degrees for a heading, before the shape's own
/// forward correction.
pub fn heading_rotation(heading: f32) -> f32 {
    (f64::from(heading) / PI * 180.0 + 180.0) as f32
}

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from an [`IconDescriptor`].
pub trait Configurable {
    /// Applies a descriptor's settings to this instance.
    fn apply_descriptor(&mut self, descriptor: &IconDescriptor) -> Result<(), IconError>;

    /// Exports the current settings as a descriptor.
    fn export_descriptor(&self) -> IconDescriptor;
}

// ============================================================================
// IconRenderer
// ============================================================================

/// State of the last completed render.
///
/// `raster` always matches the renderer's airframe, radius and color together
/// with `heading` and `selected` as stored here.
#[derive(Debug, Clone)]
struct RenderState {
    heading: f32,
    selected: bool,
    raster: IconRaster,
    version: u64,
}

/// Renders and caches the map icon of one vehicle.
///
/// The raster is produced once on construction and afterwards only when the
/// selection flag changes or the heading moves by more than
/// [`HEADING_THRESHOLD`]. Reading the raster never renders.
///
/// # Example
///
/// ```
/// use vehicle_icon::{Airframe, IconRenderer, default_fill};
///
/// let mut icon = IconRenderer::new(Airframe::Mikrokopter, 20, default_fill(), 0.0, false)?;
/// assert_eq!(icon.current_raster().width(), 21);
///
/// // Telemetry jitter is ignored.
/// assert!(!icon.set_heading(0.05));
/// assert_eq!(icon.heading(), 0.0);
///
/// assert!(icon.set_heading(0.3));
/// assert!(icon.set_selection(true));
/// # Ok::<(), vehicle_icon::IconError>(())
/// ```
pub struct IconRenderer {
    airframe: Airframe,
    pixel_radius: u32,
    fill_color: Srgba<u8>,
    accents: Accents,
    canvas: IconCanvas,
    state: RenderState,
}

impl IconRenderer {
    /// Creates a renderer and performs the first render.
    ///
    /// Fails if `pixel_radius` is zero or too large to allocate.
    pub fn new(
        airframe: Airframe,
        pixel_radius: u32,
        fill_color: Srgba<u8>,
        heading: f32,
        selected: bool,
    ) -> Result<Self, IconError> {
        let mut canvas = IconCanvas::new(pixel_radius)?;
        let accents = Accents::default();
        let raster = draw(
            &mut canvas,
            airframe,
            &DrawStyle {
                pixel_radius,
                fill: fill_color,
                accents,
            },
            heading,
            selected,
        );
        let renderer = Self {
            airframe,
            pixel_radius,
            fill_color,
            accents,
            canvas,
            state: RenderState {
                heading,
                selected,
                raster,
                version: 1,
            },
        };
        renderer.log_render();
        Ok(renderer)
    }

    /// Creates a renderer from a descriptor.
    pub fn from_descriptor(descriptor: &IconDescriptor) -> Result<Self, IconError> {
        Self::new(
            descriptor.airframe,
            descriptor.pixel_radius,
            descriptor.fill_color,
            descriptor.heading,
            descriptor.selected,
        )
    }

    /// Updates the selection flag.
    ///
    /// Re-renders only if the flag changed. Returns true if it did.
    pub fn set_selection(&mut self, selected: bool) -> bool {
        if selected == self.state.selected {
            trace!("icon selection unchanged ({selected})");
            return false;
        }
        self.render(self.state.heading, selected);
        true
    }

    /// Updates the heading in radians, 0 = north, positive clockwise.
    ///
    /// Re-renders only if the heading moved by more than
    /// [`HEADING_THRESHOLD`] from the last rendered heading, see
    /// [`reduced_heading_difference`]. A suppressed update leaves the stored
    /// heading alone, so slow drift still triggers a render once it adds up.
    ///
    /// Returns true if a render happened.
    pub fn set_heading(&mut self, heading: f32) -> bool {
        if !heading_changed(self.state.heading, heading) {
            trace!(
                "icon heading {heading} within threshold of {}",
                self.state.heading
            );
            return false;
        }
        self.render(heading, self.state.selected);
        true
    }

    /// Replaces the selection, heading marker and outline colors.
    ///
    /// Re-renders only if they changed. Returns true if it did.
    pub fn set_accents(&mut self, accents: Accents) -> bool {
        if accents == self.accents {
            return false;
        }
        self.accents = accents;
        self.render(self.state.heading, self.state.selected);
        true
    }

    /// Returns the most recently rendered raster.
    pub fn current_raster(&self) -> &IconRaster {
        &self.state.raster
    }

    /// Returns the heading of the last render.
    pub fn heading(&self) -> f32 {
        self.state.heading
    }

    pub fn is_selected(&self) -> bool {
        self.state.selected
    }

    pub fn airframe(&self) -> Airframe {
        self.airframe
    }

    pub fn pixel_radius(&self) -> u32 {
        self.pixel_radius
    }

    pub fn fill_color(&self) -> Srgba<u8> {
        self.fill_color
    }

    /// Number of renders performed so far, starting at 1 after construction.
    pub fn version(&self) -> u64 {
        self.state.version
    }

    fn style(&self) -> DrawStyle {
        DrawStyle {
            pixel_radius: self.pixel_radius,
            fill: self.fill_color,
            accents: self.accents,
        }
    }

    fn render(&mut self, heading: f32, selected: bool) {
        let style = self.style();
        let raster = draw(&mut self.canvas, self.airframe, &style, heading, selected);
        self.state = RenderState {
            heading,
            selected,
            raster,
            version: self.state.version.wrapping_add(1),
        };
        self.log_render();
    }

    fn log_render(&self) {
        debug!(
            "rendered {:?} icon r={} heading={} selected={} (version {})",
            self.airframe,
            self.pixel_radius,
            self.state.heading,
            self.state.selected,
            self.state.version
        );
    }
}

/// Runs one full render pass on `canvas`.
fn draw(
    canvas: &mut IconCanvas,
    airframe: Airframe,
    style: &DrawStyle,
    heading: f32,
    selected: bool,
) -> IconRaster {
    canvas.clear();
    if selected {
        canvas.draw_selection_ring(style);
    }
    let shape = shape_for(airframe);
    let degrees = heading_rotation(heading) + shape.forward_correction();
    canvas.draw_shape(&shape, degrees, style);
    canvas.to_raster()
}

impl Configurable for IconRenderer {
    /// Applies a descriptor.
    ///
    /// A different airframe, radius or color forces a render at the
    /// descriptor's heading and selection. Otherwise selection and heading
    /// follow the same rules as [`set_selection`](IconRenderer::set_selection)
    /// and [`set_heading`](IconRenderer::set_heading), with at most one render
    /// for both. On error the renderer is left unchanged.
    fn apply_descriptor(&mut self, descriptor: &IconDescriptor) -> Result<(), IconError> {
        let restyled = descriptor.airframe != self.airframe
            || descriptor.pixel_radius != self.pixel_radius
            || descriptor.fill_color != self.fill_color;

        if restyled {
            if descriptor.pixel_radius != self.pixel_radius {
                self.canvas = IconCanvas::new(descriptor.pixel_radius)?;
            }
            self.airframe = descriptor.airframe;
            self.pixel_radius = descriptor.pixel_radius;
            self.fill_color = descriptor.fill_color;
            self.render(descriptor.heading, descriptor.selected);
            return Ok(());
        }

        let heading_moved = heading_changed(self.state.heading, descriptor.heading);
        let heading = if heading_moved {
            descriptor.heading
        } else {
            self.state.heading
        };
        let selection_changed = descriptor.selected != self.state.selected;
        if heading_moved || selection_changed {
            self.render(heading, descriptor.selected);
        }
        Ok(())
    }

    fn export_descriptor(&self) -> IconDescriptor {
        IconDescriptor {
            airframe: self.airframe,
            pixel_radius: self.pixel_radius,
            fill_color: self.fill_color,
            selected: self.state.selected,
            heading: self.state.heading,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
