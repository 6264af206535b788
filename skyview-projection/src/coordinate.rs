/// Normalized device coordinates: the visible area spans [-1, 1] on both
/// axes, `+x` right and `+y` up. Values outside that square are legal and
/// describe off-screen directions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NdcPoint {
    x: f64,
    y: f64,
}

impl NdcPoint {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Inside the visible [-1, 1] square.
    #[inline]
    pub fn is_on_screen(&self) -> bool {
        self.x.abs() <= 1.0 && self.y.abs() <= 1.0
    }
}

/// Position in client pixels (origin top-left, `+y` down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    x: f64,
    y: f64,
}

impl PixelPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Canvas bounding rectangle in client pixels, as reported by the page on
/// every event. Not cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl CanvasRect {
    #[inline]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Finite position and strictly positive size.
    pub fn is_valid(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    pub fn client_to_ndc(&self, client_x: f64, client_y: f64) -> NdcPoint {
        let x = client_x - self.left;
        let y = client_y - self.top;
        NdcPoint::new((x / self.width) * 2.0 - 1.0, 1.0 - (y / self.height) * 2.0)
    }

    pub fn ndc_to_client(&self, ndc: NdcPoint) -> PixelPoint {
        PixelPoint::new(
            self.left + (ndc.x() + 1.0) / 2.0 * self.width,
            self.top + (1.0 - ndc.y()) / 2.0 * self.height,
        )
    }
}

/// Longitude/latitude pair (radians) read off a view-space direction for
/// the map projections. `lon` is measured around the vertical axis from the
/// view direction, positive to the right; `lat` is the elevation above the
/// horizontal plane, positive up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCoord {
    lon: f64,
    lat: f64,
}

impl MapCoord {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }
}

/// Un-normalized projected plane coordinates, in the units of each map
/// projection's formula (radians for the cylindrical family).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneCoord {
    x: f64,
    y: f64,
}

impl PlaneCoord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
}
