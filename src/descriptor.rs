//! Serializable icon descriptor.
//!
//! An [`IconDescriptor`] carries everything the caller owns about one icon in
//! a form that can be stored as JSON and handed across process boundaries.
//!
//! # Example
//!
//! ```
//! use vehicle_icon::{Airframe, IconDescriptor};
//!
//! let descriptor = IconDescriptor::from_json(
//!     r##"{"airframe": 5, "pixelRadius": 32, "fillColor": "#00ff00"}"##,
//! )?;
//! assert_eq!(descriptor.airframe, Airframe::Mikrokopter);
//! assert_eq!(descriptor.fill_color.alpha, 255);
//! assert!(!descriptor.selected);
//!
//! let json = descriptor.to_json()?;
//! assert!(json.contains("\"pixelRadius\":32"));
//! # Ok::<(), vehicle_icon::IconError>(())
//! ```

use palette::Srgba;
use serde::{Deserialize, Serialize};

use crate::airframe::Airframe;
use crate::color::{self, default_fill};
use crate::error::IconError;

/// Radius used when a descriptor does not specify one.
pub const DEFAULT_PIXEL_RADIUS: u32 = 20;

/// Per-vehicle inputs to the icon renderer.
///
/// # JSON Format
///
/// ```json
/// {
///   "airframe": 7,
///   "pixelRadius": 20,
///   "fillColor": "#ffff00ff",
///   "selected": false,
///   "heading": 0.0
/// }
/// ```
///
/// `airframe` is the numeric class code; `fillColor` accepts `#rrggbb` or
/// `#rrggbbaa`. Missing fields take the [`Default`] values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconDescriptor {
    pub airframe: Airframe,

    /// Icon size in pixels. Must be positive.
    pub pixel_radius: u32,

    #[serde(with = "color::hex")]
    pub fill_color: Srgba<u8>,

    pub selected: bool,

    /// Heading in radians, 0 = north, positive clockwise.
    pub heading: f32,
}

impl Default for IconDescriptor {
    /// A generic, unselected, yellow icon of radius 20 facing north.
    fn default() -> Self {
        Self {
            airframe: Airframe::Generic,
            pixel_radius: DEFAULT_PIXEL_RADIUS,
            fill_color: default_fill(),
            selected: false,
            heading: 0.0,
        }
    }
}

impl IconDescriptor {
    pub fn new(airframe: Airframe, pixel_radius: u32, fill_color: Srgba<u8>) -> Self {
        Self {
            airframe,
            pixel_radius,
            fill_color,
            ..Self::default()
        }
    }

    /// Sets the heading.
    pub fn with_heading(mut self, heading: f32) -> Self {
        self.heading = heading;
        self
    }

    /// Sets the selection flag.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Serializes the descriptor to a JSON string.
    pub fn to_json(&self) -> Result<String, IconError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the descriptor to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, IconError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a descriptor from a JSON string.
    ///
    /// Only the format is checked here; the radius is validated when a
    /// renderer is built from the descriptor.
    pub fn from_json(json: &str) -> Result<Self, IconError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
