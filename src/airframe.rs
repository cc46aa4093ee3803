//! Vehicle class identifiers.
//!
//! Codes follow the ground-station airframe enumeration. Any integer is a
//! valid class id: codes without a named variant are kept as
//! [`Airframe::Other`] and draw the generic marker.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Vehicle class selecting which icon shape is drawn.
///
/// Airframes compare by class code, so `Other(5)` equals `Mikrokopter`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Airframe {
    #[default]
    Generic,
    EasyStar,
    TwinStar,
    Merlin,
    Cheetah,
    Mikrokopter,
    Reaper,
    Predator,
    Coaxial,
    Pteryx,
    Tricopter,
    Hexcopter,
    /// A code with no named variant.
    Other(i32),
}

/// Shape family an airframe is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeFamily {
    /// Long-range fixed wing (Predator, Reaper).
    LongRangeFixedWing,
    /// Multi-rotor (Mikrokopter, Cheetah).
    MultiRotor,
    /// Standard fixed wing (EasyStar, Merlin, TwinStar, Pteryx).
    FixedWing,
    /// Everything else.
    Generic,
}

impl Airframe {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Generic,
            1 => Self::EasyStar,
            2 => Self::TwinStar,
            3 => Self::Merlin,
            4 => Self::Cheetah,
            5 => Self::Mikrokopter,
            6 => Self::Reaper,
            7 => Self::Predator,
            8 => Self::Coaxial,
            9 => Self::Pteryx,
            10 => Self::Tricopter,
            11 => Self::Hexcopter,
            other => Self::Other(other),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Generic => 0,
            Self::EasyStar => 1,
            Self::TwinStar => 2,
            Self::Merlin => 3,
            Self::Cheetah => 4,
            Self::Mikrokopter => 5,
            Self::Reaper => 6,
            Self::Predator => 7,
            Self::Coaxial => 8,
            Self::Pteryx => 9,
            Self::Tricopter => 10,
            Self::Hexcopter => 11,
            Self::Other(code) => code,
        }
    }

    /// Returns the shape family used to draw this airframe.
    ///
    /// Coaxial, tricopter and hexcopter frames have no dedicated shape and
    /// fall back to the generic marker.
    pub fn family(self) -> ShapeFamily {
        // Other(5) built by hand still draws as a multi-rotor.
        match Self::from_code(self.code()) {
            Self::Predator | Self::Reaper => ShapeFamily::LongRangeFixedWing,
            Self::Mikrokopter | Self::Cheetah => ShapeFamily::MultiRotor,
            Self::EasyStar | Self::Merlin | Self::TwinStar | Self::Pteryx => {
                ShapeFamily::FixedWing
            }
            _ => ShapeFamily::Generic,
        }
    }
}

impl PartialEq for Airframe {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for Airframe {}

impl Hash for Airframe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl From<i32> for Airframe {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<Airframe> for i32 {
    fn from(airframe: Airframe) -> Self {
        airframe.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_codes_round_trip() {
        for code in 0..=11 {
            let airframe = Airframe::from_code(code);
            assert!(!matches!(airframe, Airframe::Other(_)), "code {code}");
            assert_eq!(airframe.code(), code);
        }
    }

    #[test]
    fn unknown_codes_are_kept() {
        assert_eq!(Airframe::from_code(-999), Airframe::Other(-999));
        assert_eq!(Airframe::from(42).code(), 42);
        assert_eq!(Airframe::Other(-999).family(), ShapeFamily::Generic);
    }

    #[test]
    fn equality_follows_code() {
        assert_eq!(Airframe::Other(5), Airframe::Mikrokopter);
        assert_eq!(Airframe::Other(0), Airframe::Generic);
        assert_ne!(Airframe::Other(12), Airframe::Hexcopter);
        assert_eq!(Airframe::Other(7).family(), ShapeFamily::LongRangeFixedWing);
    }

    #[test]
    fn families() {
        assert_eq!(Airframe::Predator.family(), ShapeFamily::LongRangeFixedWing);
        assert_eq!(Airframe::Reaper.family(), ShapeFamily::LongRangeFixedWing);
        assert_eq!(Airframe::Mikrokopter.family(), ShapeFamily::MultiRotor);
        assert_eq!(Airframe::Cheetah.family(), ShapeFamily::MultiRotor);
        for airframe in [
            Airframe::EasyStar,
            Airframe::Merlin,
            Airframe::TwinStar,
            Airframe::Pteryx,
        ] {
            assert_eq!(airframe.family(), ShapeFamily::FixedWing);
        }
        assert_eq!(Airframe::Generic.family(), ShapeFamily::Generic);
        assert_eq!(Airframe::Hexcopter.family(), ShapeFamily::Generic);
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Airframe::Mikrokopter).unwrap(), "5");
        let parsed: Airframe = serde_json::from_str("-3").unwrap();
        assert_eq!(parsed, Airframe::Other(-3));
    }
}
