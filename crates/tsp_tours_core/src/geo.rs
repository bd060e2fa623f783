use std::fmt;

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `rhs` via the haversine formula, in meters.
    pub fn dist(self, rhs: &Self) -> f64 {
        let (lat1, lat2) = (self.lat.to_radians(), rhs.lat.to_radians());
        let dlat = (rhs.lat - self.lat).to_radians();
        let dlon = (rhs.lon - self.lon).to_radians();
        let s1 = (dlat / 2.0).sin();
        let s2 = (dlon / 2.0).sin();
        let h = s1 * s1 + lat1.cos() * lat2.cos() * s2 * s2;
        2.0 * EARTH_RADIUS_M * h.sqrt().asin()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b1 = ryu::Buffer::new();
        let mut b2 = ryu::Buffer::new();
        write!(f, "{},{}", b1.format(self.lat), b2.format(self.lon))
    }
}
