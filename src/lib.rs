//! vehicle-icon: Heading-aware vehicle icons for 2D maps
//!
//! This crate renders the small map marker of a moving vehicle: a shape
//! chosen by airframe class, rotated by heading, optionally ringed with a
//! selection indicator. Each [`IconRenderer`] caches its raster and only
//! re-renders when the selection changes or the heading moves by more than
//! [`HEADING_THRESHOLD`].
//!
//! # Example
//!
//! ```
//! use vehicle_icon::{Airframe, IconRenderer, default_fill};
//!
//! let mut icon = IconRenderer::new(Airframe::Predator, 32, default_fill(), 0.0, false)?;
//!
//! // Feed telemetry as it arrives; small changes are absorbed.
//! icon.set_heading(0.02);
//! icon.set_heading(0.8);
//! icon.set_selection(true);
//!
//! let raster = icon.current_raster();
//! assert_eq!((raster.width(), raster.height()), (33, 33));
//! # Ok::<(), vehicle_icon::IconError>(())
//! ```
//!
//! # Serializable Descriptors
//!
//! Icons can also be configured from an [`IconDescriptor`] through the
//! [`Configurable`] trait:
//!
//! ```
//! use vehicle_icon::{Configurable, IconDescriptor, IconRenderer};
//!
//! let descriptor = IconDescriptor::from_json(r#"{"airframe": 5, "selected": true}"#)?;
//! let mut icon = IconRenderer::from_descriptor(&descriptor)?;
//!
//! icon.apply_descriptor(&descriptor.with_heading(1.0))?;
//! let json = icon.export_descriptor().to_json()?;
//! # Ok::<(), vehicle_icon::IconError>(())
//! ```

mod airframe;
mod color;
mod descriptor;
mod error;
mod icon;
mod raster;
mod renderer;
mod shape;

pub use airframe::{Airframe, ShapeFamily};
pub use color::{Accents, default_fill, parse_hex, to_hex};
pub use descriptor::{DEFAULT_PIXEL_RADIUS, IconDescriptor};
pub use error::IconError;
pub use icon::{IconRaster, SizePx};
pub use raster::{MAX_PIXEL_RADIUS, OUTLINE_STROKE, SELECTION_STROKE};
pub use renderer::{
    Configurable, HEADING_THRESHOLD, IconRenderer, heading_changed, heading_rotation,
    reduced_heading_difference,
};
pub use shape::{CompoundDots, Polygon, Shape, Vertex, shape_for};
