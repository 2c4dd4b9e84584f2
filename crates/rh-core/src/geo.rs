//! Geographic coordinate type and flat-plane distances.
//!
//! `Coord` uses `f64` (double-precision) latitude/longitude.  All distances
//! here are plain norms in degree space on a locally-flat plane: the
//! desiderata this simulator tracks are defined over that approximation, and
//! the path engine's heuristics must use the exact same metric the network's
//! speed limit is scaled against.

/// A geographic coordinate stored as double-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Euclidean norm in degree space.
    #[inline]
    pub fn distance(self, other: Coord) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Squared Euclidean norm — cheaper when only comparisons are needed
    /// (nearest-node queries compare radii, never absolute distances).
    #[inline]
    pub fn distance_sq(self, other: Coord) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        dlat * dlat + dlon * dlon
    }

    /// Manhattan norm `|Δlat| + |Δlon|` in degree space.
    #[inline]
    pub fn manhattan(self, other: Coord) -> f64 {
        (self.lat - other.lat).abs() + (self.lon - other.lon).abs()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
