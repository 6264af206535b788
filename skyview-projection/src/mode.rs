use std::fmt;

use crate::projection::{Azimuthal, MapProjection};

/// The ten selectable projections, grouped by family.
///
/// Numeric ids are the ones the sky engine reports. Any id outside the
/// table (including the unused 6) selects perspective.
///
/// | id | mode |
/// |----|------|
/// | 0 | perspective |
/// | 1 | stereographic |
/// | 2 | equal-area |
/// | 3 | fisheye |
/// | 4 | Hammer |
/// | 5 | cylindrical |
/// | 7 | Mercator |
/// | 8 | orthographic |
/// | 9 | sinusoidal |
/// | 10 | Miller |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProjectionMode {
    Azimuthal(Azimuthal),
    Map(MapProjection),
}

impl ProjectionMode {
    pub const PERSPECTIVE: Self = Self::Azimuthal(Azimuthal::Perspective);
    pub const STEREOGRAPHIC: Self = Self::Azimuthal(Azimuthal::Stereographic);
    pub const EQUAL_AREA: Self = Self::Azimuthal(Azimuthal::EqualArea);
    pub const FISHEYE: Self = Self::Azimuthal(Azimuthal::Fisheye);
    pub const ORTHOGRAPHIC: Self = Self::Azimuthal(Azimuthal::Orthographic);
    pub const HAMMER: Self = Self::Map(MapProjection::Hammer);
    pub const CYLINDRICAL: Self = Self::Map(MapProjection::Cylindrical);
    pub const MERCATOR: Self = Self::Map(MapProjection::Mercator);
    pub const SINUSOIDAL: Self = Self::Map(MapProjection::Sinusoidal);
    pub const MILLER: Self = Self::Map(MapProjection::Miller);

    pub const ALL: [Self; 10] = [
        Self::PERSPECTIVE,
        Self::STEREOGRAPHIC,
        Self::EQUAL_AREA,
        Self::FISHEYE,
        Self::HAMMER,
        Self::CYLINDRICAL,
        Self::MERCATOR,
        Self::ORTHOGRAPHIC,
        Self::SINUSOIDAL,
        Self::MILLER,
    ];

    pub fn from_id(id: i32) -> Self {
        match id {
            1 => Self::STEREOGRAPHIC,
            2 => Self::EQUAL_AREA,
            3 => Self::FISHEYE,
            4 => Self::HAMMER,
            5 => Self::CYLINDRICAL,
            7 => Self::MERCATOR,
            8 => Self::ORTHOGRAPHIC,
            9 => Self::SINUSOIDAL,
            10 => Self::MILLER,
            _ => Self::PERSPECTIVE,
        }
    }

    pub fn id(self) -> i32 {
        match self {
            Self::Azimuthal(Azimuthal::Perspective) => 0,
            Self::Azimuthal(Azimuthal::Stereographic) => 1,
            Self::Azimuthal(Azimuthal::EqualArea) => 2,
            Self::Azimuthal(Azimuthal::Fisheye) => 3,
            Self::Map(MapProjection::Hammer) => 4,
            Self::Map(MapProjection::Cylindrical) => 5,
            Self::Map(MapProjection::Mercator) => 7,
            Self::Azimuthal(Azimuthal::Orthographic) => 8,
            Self::Map(MapProjection::Sinusoidal) => 9,
            Self::Map(MapProjection::Miller) => 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Azimuthal(az) => az.name(),
            Self::Map(map) => map.name(),
        }
    }

    #[inline]
    pub fn is_azimuthal(self) -> bool {
        matches!(self, Self::Azimuthal(_))
    }
}

impl Default for ProjectionMode {
    fn default() -> Self {
        Self::PERSPECTIVE
    }
}

impl From<i32> for ProjectionMode {
    fn from(id: i32) -> Self {
        Self::from_id(id)
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
