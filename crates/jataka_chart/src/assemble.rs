//! The chart assembler.

use jataka_ephem::{BodyId, BodyPosition, Centering, Ephemeris, GeoPoint};
use jataka_time::angle::normalize_360;
use jataka_time::{UtcDateTime, delta_t_seconds, local_sidereal_hours};
use jataka_vedic::{
    Planet, apply_ayanamsa, house_of, nakshatra_info, sidereal_cusps, sign_of,
};

use crate::error::ChartError;
use crate::settings::{CalcMode, ChartSettings, NodeMode, Zodiac};
use crate::types::{CelestialPoint, ChartMeta, ChartResult, HouseCusp};

/// The bodies queried for a chart, as a pure function of the node mode.
///
/// Rahu maps to the true or mean node; Ketu is absent because it is
/// derived from Rahu, never queried.
pub fn tracked_bodies(node_mode: NodeMode) -> [(Planet, BodyId); 8] {
    let rahu = match node_mode {
        NodeMode::True => BodyId::TrueNode,
        NodeMode::Mean => BodyId::MeanNode,
    };
    [
        (Planet::Sun, BodyId::Sun),
        (Planet::Moon, BodyId::Moon),
        (Planet::Mars, BodyId::Mars),
        (Planet::Mercury, BodyId::Mercury),
        (Planet::Jupiter, BodyId::Jupiter),
        (Planet::Venus, BodyId::Venus),
        (Planet::Saturn, BodyId::Saturn),
        (Planet::Rahu, rahu),
    ]
}

/// Build a point from a final (zodiac-corrected) longitude.
fn make_point(
    name: &'static str,
    longitude: f64,
    latitude: f64,
    speed: f64,
    house: u8,
) -> CelestialPoint {
    let sign = sign_of(longitude);
    let nak = nakshatra_info(longitude);
    CelestialPoint {
        name,
        longitude,
        latitude,
        speed,
        sign: sign.sign,
        degree_in_sign: sign.degrees_in_sign,
        house,
        nakshatra: nak.nakshatra,
        pada: nak.pada,
        star_lord: nak.star_lord,
        sub_lord: nak.sub_lord,
        is_retrograde: speed < 0.0,
    }
}

/// Calculate a complete birth chart.
///
/// `birth_utc` must already be in UTC (timezone conversion is the
/// caller's responsibility). `latitude`/`longitude` are the birth place
/// in degrees, east longitude positive.
///
/// Any per-body ephemeris failure aborts the calculation; all failed
/// bodies are reported together in [`ChartError::Ephemeris`].
pub fn calculate_chart<E: Ephemeris + ?Sized>(
    adapter: &E,
    birth_utc: UtcDateTime,
    latitude: f64,
    longitude: f64,
    settings: &ChartSettings,
) -> Result<ChartResult, ChartError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ChartError::InvalidInput("latitude outside [-90, 90]"));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ChartError::InvalidInput("longitude outside [-180, 180]"));
    }

    let julian_day = birth_utc.to_jd();
    let delta_t = delta_t_seconds(birth_utc.year, birth_utc.month);
    let ephemeris_time = julian_day + delta_t / 86_400.0;

    let ayanamsa_value = match settings.zodiac {
        Zodiac::Sidereal => adapter.ayanamsa_of(ephemeris_time, settings.ayanamsa),
        Zodiac::Tropical => 0.0,
    };

    let centering = match settings.calc_mode {
        CalcMode::Geocentric => Centering::Geocentric,
        CalcMode::Topocentric => Centering::Topocentric(GeoPoint {
            latitude_deg: latitude,
            longitude_deg: longitude,
            altitude_m: 0.0,
        }),
    };

    // Houses: one backend call, then the same ayanamsa shift on all cusps.
    let raw = adapter
        .houses_of(julian_day, latitude, longitude, settings.house_system.code())
        .map_err(ChartError::Houses)?;
    let cusps = sidereal_cusps(&raw.cusps, ayanamsa_value);
    let ascendant = normalize_360(raw.ascendant() - ayanamsa_value);

    let houses = std::array::from_fn(|i| {
        let lon = cusps[i];
        let sign = sign_of(lon);
        let nak = nakshatra_info(lon);
        HouseCusp {
            index: (i + 1) as u8,
            longitude: lon,
            sign: sign.sign,
            degree_in_sign: sign.degrees_in_sign,
            star_lord: nak.star_lord,
            sub_lord: nak.sub_lord,
        }
    });

    // Ascendant is house 1 by definition, whatever the placement test says.
    let mut points = Vec::with_capacity(10);
    points.push(make_point("Ascendant", ascendant, 0.0, 0.0, 1));

    let mut failures: Vec<(Planet, jataka_ephem::EphemerisError)> = Vec::new();
    let mut rahu_position: Option<BodyPosition> = None;

    for (planet, body) in tracked_bodies(settings.node_mode) {
        match adapter.position_of(ephemeris_time, body, centering) {
            Ok(pos) => {
                let lon = apply_ayanamsa(pos.longitude, ayanamsa_value);
                let house = house_of(lon, &cusps);
                points.push(make_point(
                    planet.name(),
                    lon,
                    pos.latitude,
                    pos.speed_longitude,
                    house,
                ));
                if planet == Planet::Rahu {
                    rahu_position = Some(pos);
                }
            }
            Err(e) => failures.push((planet, e)),
        }
    }

    // Ketu: exactly opposite Rahu, with its nakshatra data derived from
    // its own shifted longitude. The node axis moves as one, so Ketu
    // carries Rahu's speed and the negated latitude.
    if let Some(rahu) = rahu_position {
        let rahu_lon = apply_ayanamsa(rahu.longitude, ayanamsa_value);
        let ketu_lon = normalize_360(rahu_lon + 180.0);
        let house = house_of(ketu_lon, &cusps);
        points.push(make_point(
            Planet::Ketu.name(),
            ketu_lon,
            -rahu.latitude,
            rahu.speed_longitude,
            house,
        ));
    }

    if !failures.is_empty() {
        return Err(ChartError::Ephemeris { failures });
    }

    let sidereal_time = adapter.sidereal_time_of(julian_day);
    let meta = ChartMeta {
        settings: *settings,
        birth_utc,
        latitude,
        longitude,
        julian_day,
        delta_t,
        ephemeris_time,
        obliquity: adapter.obliquity_of(ephemeris_time),
        sidereal_time,
        local_sidereal_time: local_sidereal_hours(sidereal_time, longitude),
        ayanamsa_value,
    };

    Ok(ChartResult {
        meta,
        points,
        houses,
    })
}
