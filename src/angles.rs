use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::types::{CivilMoment, Location, SceneConfig, ShadowAngles, SolarPosition, EPS};

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn moment_from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> CivilMoment {
    CivilMoment {
        year: dt.year(),
        month: dt.month(),
        day: dt.day(),
        hour: dt.hour(),
        minute: dt.minute(),
        second: dt.second(),
    }
}

pub fn julian_day(year: i32, month: u32, day: u32, fractional_hour: f64) -> f64 {
    let mut y = year;
    let mut m = month as i32;
    // January/February count as months 13/14 of the previous year.
    if m <= 2 {
        y -= 1;
        m += 12;
    }

    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    let jd0 = (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor()
        + day as f64
        + b
        - 1524.5;

    jd0 + fractional_hour / 24.0
}

pub fn solar_position(moment: &CivilMoment, loc: &Location) -> SolarPosition {
    // The fractional hour absorbs the offset; the day-count formula is
    // continuous, so hours outside [0, 24) roll into the adjacent day.
    let utc_hour = moment.hour as f64 + moment.minute as f64 / 60.0 + moment.second as f64 / 3600.0
        - loc.utc_offset_hours;
    let jd = julian_day(moment.year, moment.month, moment.day, utc_hour);
    let t = (jd - 2451545.0) / 36525.0;

    let l0 = (280.46646 + t * (36000.76983 + 0.0003032 * t)).rem_euclid(360.0);
    let m = 357.52911 + t * (35999.05029 - 0.0001537 * t);
    let e = 0.016708634 - t * (0.000042037 + 0.0000001267 * t);

    let m_rad = deg_to_rad(m);
    let c = m_rad.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m_rad).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m_rad).sin() * 0.000289;

    let true_long = l0 + c;
    let omega = deg_to_rad(125.04 - 1934.136 * t);
    let lambda_app = true_long - 0.00569 - 0.00478 * omega.sin();

    let eps0 =
        23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.00059 - 0.001813 * t))) / 60.0) / 60.0;
    let eps = deg_to_rad(eps0 + 0.00256 * omega.cos());

    let lam_rad = deg_to_rad(lambda_app);
    let decl = (eps.sin() * lam_rad.sin()).asin();

    let y = (eps / 2.0).tan().powi(2);
    let l0_rad = deg_to_rad(l0);
    let equation_of_time = 4.0
        * rad_to_deg(
            y * (2.0 * l0_rad).sin() - 2.0 * e * m_rad.sin()
                + 4.0 * e * y * m_rad.sin() * (2.0 * l0_rad).cos()
                - 0.5 * y * y * (4.0 * l0_rad).sin()
                - 1.25 * e * e * (2.0 * m_rad).sin(),
        );

    let clock_minutes =
        moment.hour as f64 * 60.0 + moment.minute as f64 + moment.second as f64 / 60.0;
    let time_offset =
        equation_of_time + 4.0 * loc.longitude_deg - 60.0 * loc.utc_offset_hours;
    let true_solar_time = (clock_minutes + time_offset).rem_euclid(1440.0);
    let hour_angle = true_solar_time / 4.0 - 180.0;

    let lat_rad = deg_to_rad(loc.latitude_deg);
    let ha_rad = deg_to_rad(hour_angle);

    let cos_zenith = (lat_rad.sin() * decl.sin() + lat_rad.cos() * decl.cos() * ha_rad.cos())
        .clamp(-1.0, 1.0);
    let zenith = rad_to_deg(cos_zenith.acos());
    let elevation = 90.0 - zenith;

    let azimuth = normalize_angle(
        rad_to_deg(
            ha_rad
                .sin()
                .atan2(ha_rad.cos() * lat_rad.sin() - decl.tan() * lat_rad.cos()),
        ) + 180.0,
    );

    SolarPosition {
        julian_day: jd,
        declination: rad_to_deg(decl),
        equation_of_time,
        true_solar_time,
        hour_angle,
        zenith,
        elevation,
        azimuth,
    }
}

pub fn shadow_angles(
    solar: &SolarPosition,
    pole_height: f64,
    cfg: &SceneConfig,
) -> Option<ShadowAngles> {
    if solar.elevation <= 0.0 {
        return None;
    }

    let a = deg_to_rad(solar.azimuth);
    let e = deg_to_rad(solar.elevation);

    let x_east = e.cos() * a.sin();
    let z_up = e.sin();
    let alpha = z_up.atan2(x_east.abs() + EPS);

    let shadow_length = pole_height / e.tan();
    let x_tip = -shadow_length * a.sin();
    let y_tip = -shadow_length * a.cos();
    let rho = (x_tip * x_tip + (y_tip - cfg.observer_distance).powi(2)).sqrt();

    let beta =
        ((cfg.eye_height * a.cos()).abs() / (cfg.observer_distance * a.sin()).abs()).atan();

    Some(ShadowAngles {
        alpha,
        beta,
        tan_alpha: alpha.tan(),
        tan_beta: beta.tan(),
        shadow_length,
        rho,
    })
}
