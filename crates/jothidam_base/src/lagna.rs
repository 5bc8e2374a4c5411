//! Lagna (ascendant) computation.
//!
//! Standard spherical astronomy (Meeus ch. 13): the ascendant's tropical
//! longitude follows from local sidereal time, geographic latitude, and the
//! obliquity of the ecliptic; subtracting the ayanamsha yields the sidereal
//! lagna. GMST is evaluated from the Earth Rotation Angle plus the
//! Capitaine et al. 2003 polynomial; the sub-second UT1-UTC correction is
//! ignored, which is far below the precision a rashi-level lagna needs.

use std::f64::consts::{PI, TAU};

use jothidam_time::J2000_JD;

use crate::ephemeris::Ephemeris;
use crate::geo::GeoPosition;
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Mean obliquity of the ecliptic at J2000.0, radians.
const OBLIQUITY_J2000_RAD: f64 = 23.439_291_111 * PI / 180.0;

/// Arcseconds to radians.
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle at a UT Julian Date (IERS 2010, eq. 5.15).
fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time (Capitaine et al. 2003).
fn gmst_rad(jd_ut: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut);
    let t = (jd_ut - J2000_JD) / 36525.0;
    let poly_arcsec = 0.014506
        + t * (4612.156534 + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956))));
    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Sidereal ecliptic longitude of the lagna in degrees [0, 360).
///
/// `Asc = atan2(-cos(LST), sin(LST)*cos(eps) + tan(phi)*sin(eps))`,
/// then the provider's ayanamsha is subtracted.
pub fn lagna_sidereal_longitude(eph: &dyn Ephemeris, jd: f64, geo: &GeoPosition) -> f64 {
    let lst = (gmst_rad(jd) + geo.longitude_rad()).rem_euclid(TAU);
    let eps = OBLIQUITY_J2000_RAD;
    let phi = geo.latitude_rad();

    let asc = f64::atan2(-lst.cos(), lst.sin() * eps.cos() + phi.tan() * eps.sin());
    let tropical = asc.rem_euclid(TAU).to_degrees();
    normalize_360(tropical - eph.ayanamsha_deg(jd))
}

/// The rashi the lagna occupies.
pub fn lagna_rashi(eph: &dyn Ephemeris, jd: f64, geo: &GeoPosition) -> Rashi {
    rashi_from_longitude(lagna_sidereal_longitude(eph, jd, geo)).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{Body, EclipticState, EphemerisError, RiseEvent};
    use crate::geo::DEFAULT_LOCATION;

    struct NoAyanamsha;

    impl Ephemeris for NoAyanamsha {
        fn tropical_position(&self, _: Body, _: f64) -> Result<EclipticState, EphemerisError> {
            Err(EphemerisError::OutOfRange("not needed"))
        }
        fn ayanamsha_deg(&self, _: f64) -> f64 {
            0.0
        }
        fn rise_transit(
            &self,
            _: f64,
            _: RiseEvent,
            _: &GeoPosition,
        ) -> Result<Option<f64>, EphemerisError> {
            Ok(None)
        }
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-01-01 0h UT: GMST ~ 99.97 deg
        let g = gmst_rad(2_451_544.5).to_degrees();
        assert!((g - 99.97).abs() < 0.1, "gmst = {g}");
    }

    #[test]
    fn lagna_in_range_and_advances() {
        let eph = NoAyanamsha;
        let a = lagna_sidereal_longitude(&eph, 2_451_545.0, &DEFAULT_LOCATION);
        let b = lagna_sidereal_longitude(&eph, 2_451_545.0 + 2.0 / 24.0, &DEFAULT_LOCATION);
        assert!((0.0..360.0).contains(&a));
        assert!((0.0..360.0).contains(&b));
        // Two hours of rotation moves the ascendant by roughly 30 deg.
        let delta = normalize_360(b - a);
        assert!(delta > 10.0 && delta < 60.0, "delta = {delta}");
    }

    #[test]
    fn lagna_cycles_in_a_day() {
        let eph = NoAyanamsha;
        let a = lagna_sidereal_longitude(&eph, 2_460_000.5, &DEFAULT_LOCATION);
        let b = lagna_sidereal_longitude(&eph, 2_460_000.5 + 1.0, &DEFAULT_LOCATION);
        // One solar day later the ascendant has nearly lapped the zodiac.
        let delta = normalize_360(b - a);
        assert!(delta < 15.0 || delta > 345.0, "delta = {delta}");
    }
}
