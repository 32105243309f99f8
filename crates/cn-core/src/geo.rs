//! Geographic anchor type.
//!
//! Contact networks are non-spatial: the anchor is carried only so that
//! reports and visualizations can place a network on a map.  Nothing in the
//! transmission path reads it.

/// A WGS-84 coordinate stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f32,
    pub lon: f32,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }

    /// Build from the longitude-first order used by most population files.
    #[inline]
    pub fn from_lon_lat(lon: f32, lat: f32) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
