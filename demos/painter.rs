use chrono::TimeZone;
use chrono_tz::America::Fortaleza;

use shadow_painter::angles::{moment_from_datetime, shadow_angles, solar_position};
use shadow_painter::sweep::{example_scene, sweep_frames};
use shadow_painter::types::{SceneConfig, SweepConfig};

fn main() {
    example_scene();

    // Same pipeline driven from a zoned datetime.
    let cfg = SceneConfig::default();
    let dt = Fortaleza.with_ymd_and_hms(2026, 3, 20, 15, 30, 0).unwrap();
    let moment = moment_from_datetime(&dt);
    let pos = solar_position(&moment, &cfg.location);

    println!();
    println!("{}", dt);
    println!(
        "Azimuth: {:.2}°  Elevation: {:.2}°",
        pos.azimuth, pos.elevation
    );
    if let Some(shadow) = shadow_angles(&pos, 10.0, &cfg) {
        println!(
            "tan(alpha) = {:.3}, tan(beta) = {:.3}, shadow {:.2} m",
            shadow.tan_alpha, shadow.tan_beta, shadow.shadow_length
        );
    }

    let sweep = SweepConfig {
        month_min: 1,
        month_max: 12,
        month_step: 3,
        hour_min: 7,
        hour_max: 16,
        hour_step: 3,
        ..SweepConfig::default()
    };
    let cells = sweep_frames(&cfg, &sweep);
    println!();
    println!("Gallery sweep: {} daylight frames", cells.len());
    for cell in cells.iter().take(4) {
        println!(
            "  month {:2} {:02}:00 -> q={:.3} p={:.3} (shade outline: {} pts)",
            cell.month,
            cell.hour,
            cell.q,
            cell.p,
            cell.outline.shade.len()
        );
    }
}
