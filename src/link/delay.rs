//! Propagation delay estimation from geocoordinates.
//!
//! The cable between two switches is approximated by the great-circle arc
//! between them (spherical law of cosines). The signal travels through
//! fibre at `c / n`, with `n` the refractive index of the fibre.
//!
//! Note on units: the arc length in metres is multiplied by 1000 before it
//! is divided by the signal speed in m/s, and the quotient is emitted as a
//! millisecond value. The factor is kept so that generated topologies stay
//! comparable with previously generated ones.

use serde::{Deserialize, Serialize};

/// Equatorial earth radius in metres (WGS 84)
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;
/// Speed of light in vacuum, rounded as the delay model assumes it
pub const SPEED_OF_LIGHT_M_PER_S: f64 = 3.0e8;
/// Typical refractive index of optical fibre
pub const FIBER_REFRACTIVE_INDEX: f64 = 1.52;

const DISTANCE_SCALE: f64 = 1000.0;

/// A point on the earth, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Physical constants of the delay estimation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayModel {
    pub earth_radius_m: f64,
    pub speed_of_light_m_per_s: f64,
    pub refractive_index: f64,
}

impl Default for DelayModel {
    fn default() -> Self {
        Self {
            earth_radius_m: EARTH_RADIUS_M,
            speed_of_light_m_per_s: SPEED_OF_LIGHT_M_PER_S,
            refractive_index: FIBER_REFRACTIVE_INDEX,
        }
    }
}

impl DelayModel {
    /// Central angle between two points in radians.
    ///
    /// The cosine is clamped to [-1, 1] since rounding can push it slightly
    /// outside for (nearly) identical points.
    pub fn central_angle(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
        if a == b {
            return 0.0;
        }
        let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
        let delta_lon = (b.longitude.to_radians() - a.longitude.to_radians()).abs();
        let cosine = lat2.sin() * lat1.sin() + lat2.cos() * lat1.cos() * delta_lon.cos();
        cosine.clamp(-1.0, 1.0).acos()
    }

    /// Scaled cable length, see the module documentation
    pub fn cable_length(&self, a: GeoCoordinate, b: GeoCoordinate) -> f64 {
        Self::central_angle(a, b) * self.earth_radius_m * DISTANCE_SCALE
    }

    /// Signal speed inside the fibre
    pub fn signal_speed(&self) -> f64 {
        self.speed_of_light_m_per_s / self.refractive_index
    }

    /// Estimated one-way delay between two switches, in milliseconds.
    pub fn delay_ms(&self, a: GeoCoordinate, b: GeoCoordinate) -> f64 {
        self.cable_length(a, b) / self.signal_speed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_delay(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
        let angle = (b.latitude.to_radians().sin() * a.latitude.to_radians().sin()
            + b.latitude.to_radians().cos()
                * a.latitude.to_radians().cos()
                * (b.longitude.to_radians() - a.longitude.to_radians()).cos())
        .acos();
        angle * 6378137.0 * 1000.0 / (3.0e8 / 1.52)
    }

    #[test]
    fn test_one_degree_along_equator() {
        let model = DelayModel::default();
        let a = GeoCoordinate::new(0.0, 0.0);
        let b = GeoCoordinate::new(0.0, 1.0);

        let delay = model.delay_ms(a, b);
        assert!((delay - reference_delay(a, b)).abs() < 1e-9);
        // 111.32 km arc
        assert!((delay - 0.5640187).abs() < 1e-6);
    }

    #[test]
    fn test_delay_is_symmetric() {
        let model = DelayModel::default();
        let zurich = GeoCoordinate::new(47.3769, 8.5417);
        let new_york = GeoCoordinate::new(40.7128, -74.006);

        assert_eq!(model.delay_ms(zurich, new_york), model.delay_ms(new_york, zurich));
        assert!((model.delay_ms(zurich, new_york) - reference_delay(zurich, new_york)).abs() < 1e-6);
    }

    #[test]
    fn test_identical_points_have_zero_delay() {
        let model = DelayModel::default();
        for point in [
            GeoCoordinate::new(0.0, 0.0),
            GeoCoordinate::new(47.3769, 8.5417),
            GeoCoordinate::new(-33.8688, 151.2093),
        ] {
            assert_eq!(model.delay_ms(point, point), 0.0);
        }
    }

    #[test]
    fn test_nearly_identical_points_stay_finite() {
        let model = DelayModel::default();
        let a = GeoCoordinate::new(51.5074, -0.1278);
        let b = GeoCoordinate::new(51.5074, -0.12780000000001);
        let delay = model.delay_ms(a, b);
        assert!(delay.is_finite());
        assert!(delay >= 0.0);
    }

    #[test]
    fn test_antipodal_points() {
        let model = DelayModel::default();
        let angle = DelayModel::central_angle(GeoCoordinate::new(0.0, 0.0), GeoCoordinate::new(0.0, 180.0));
        assert!((angle - std::f64::consts::PI).abs() < 1e-12);
        assert!(model.delay_ms(GeoCoordinate::new(0.0, 0.0), GeoCoordinate::new(0.0, 180.0)).is_finite());
    }

    #[test]
    fn test_refractive_index_scales_delay() {
        let a = GeoCoordinate::new(0.0, 0.0);
        let b = GeoCoordinate::new(10.0, 10.0);
        let vacuum = DelayModel {
            refractive_index: 1.0,
            ..DelayModel::default()
        };
        let fibre = DelayModel::default();
        assert!((fibre.delay_ms(a, b) / vacuum.delay_ms(a, b) - 1.52).abs() < 1e-12);
    }
}
