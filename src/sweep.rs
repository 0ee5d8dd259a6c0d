use crate::angles::{rad_to_deg, shadow_angles, solar_position};
use crate::contour::contour_points;
use crate::frame::{fill_outline, frame_rays};
use crate::surface::{abar, abar_grid, closest_index, find_label_position, grid_axis};
use crate::types::{
    CivilMoment, ExampleResult, SceneConfig, SweepCell, SweepConfig, DEFAULT_LEVELS,
};

pub fn sweep_frames(cfg: &SceneConfig, sweep: &SweepConfig) -> Vec<SweepCell> {
    let month_min = sweep.month_min.clamp(1, 12);
    let month_max = sweep.month_max.clamp(1, 12);
    let month_step = sweep.month_step.max(1);
    let hour_min = sweep.hour_min.min(23);
    let hour_max = sweep.hour_max.min(23);
    let hour_step = sweep.hour_step.max(1);
    let p_min = sweep.p_min.clamp(0.0, 1.0);
    let p_max = sweep.p_max.clamp(0.0, 1.0);
    let target = sweep.abar_target.clamp(0.0, 1.0);

    let q_vals = grid_axis(180);
    let mut cells = Vec::new();

    let mut month = month_min;
    while month <= month_max {
        let mut hour = hour_min;
        while hour <= hour_max {
            let ramp = if hour_max > hour_min {
                (hour - hour_min) as f64 / (hour_max - hour_min) as f64
            } else {
                0.0
            };
            let p_sel = p_min + ramp * (p_max - p_min);

            let moment = CivilMoment {
                year: sweep.year,
                month,
                day: sweep.day,
                hour,
                minute: sweep.minute,
                second: 0,
            };
            let pos = solar_position(&moment, &cfg.location);
            if let Some(angles) = shadow_angles(&pos, sweep.pole_height, cfg) {
                let row = abar_grid(&q_vals, &[p_sel], angles.tan_alpha, angles.tan_beta);
                let q_sel = q_vals[closest_index(&row.z[0], target)];
                let rays = frame_rays(q_sel, p_sel, angles.tan_alpha, angles.tan_beta, 300);
                let outline = fill_outline(&rays);
                cells.push(SweepCell {
                    month,
                    hour,
                    q: q_sel,
                    p: p_sel,
                    tan_alpha: angles.tan_alpha,
                    tan_beta: angles.tan_beta,
                    rays,
                    outline,
                });
            }
            hour += hour_step;
        }
        month += month_step;
    }

    cells
}

pub fn example_scene() -> ExampleResult {
    let cfg = SceneConfig::default();
    let moment = CivilMoment {
        year: 2026,
        month: 3,
        day: 20,
        hour: 9,
        minute: 30,
        second: 0,
    };
    let pole_height = 10.0;
    let (q_sel, p_sel) = (0.45, 0.6);

    let pos = solar_position(&moment, &cfg.location);

    println!("=== Pole-shadow frame example ===");
    println!(
        "Location: Fortaleza ({:.6}°, {:.6}°, UTC{:+.0})",
        cfg.location.latitude_deg, cfg.location.longitude_deg, cfg.location.utc_offset_hours
    );
    println!(
        "Moment: {:04}-{:02}-{:02} {:02}:{:02} local, pole {:.1} m",
        moment.year, moment.month, moment.day, moment.hour, moment.minute, pole_height
    );
    println!(
        "Azimuth: {:.2}°  Elevation: {:.2}°",
        pos.azimuth, pos.elevation
    );

    let Some(shadow) = shadow_angles(&pos, pole_height, &cfg) else {
        println!("Sun below the horizon, no frame geometry for this moment.");
        return ExampleResult {
            position: pos,
            shadow: None,
            abar_at_selection: None,
            contour_count: 0,
            label: None,
            rays: None,
        };
    };

    println!(
        "alpha = {:.2}° (tan {:.3})  beta = {:.2}° (tan {:.3})",
        rad_to_deg(shadow.alpha),
        shadow.tan_alpha,
        rad_to_deg(shadow.beta),
        shadow.tan_beta
    );
    println!(
        "Shadow length ~ {:.2} m, tip-to-observer ~ {:.2} m",
        shadow.shadow_length, shadow.rho
    );

    let abar_at_selection = abar(q_sel, p_sel, shadow.tan_alpha, shadow.tan_beta);
    let axis = grid_axis(180);
    let grid = abar_grid(&axis, &axis, shadow.tan_alpha, shadow.tan_beta);
    let rays = frame_rays(q_sel, p_sel, shadow.tan_alpha, shadow.tan_beta, 300);

    println!(
        "Abar({:.2}, {:.2}) = {:.3}",
        q_sel, p_sel, abar_at_selection
    );

    let mut curve_len = 0;
    let mut label = None;
    for (&level, target_q) in DEFAULT_LEVELS.iter().zip([0.2, 0.5, 0.8]) {
        let curve = contour_points(shadow.tan_alpha, shadow.tan_beta, level, 600);
        let at = find_label_position(&grid, level, target_q, 0.85);
        print!("Abar = {:.2} curve: {} sample points", level, curve.len());
        match at {
            Some(at) => println!(", label anchor q={:.3} p={:.3}", at.q, at.p),
            None => println!(", not present on the grid"),
        }
        if (level - 0.5).abs() < 1e-12 {
            curve_len = curve.len();
            label = at;
        }
    }
    println!(
        "Junctions at q: ({:.3}, {:.3}) and ({:.3}, {:.3})",
        rays.junction_upper.0, rays.junction_upper.1, rays.junction_lower.0, rays.junction_lower.1
    );

    ExampleResult {
        position: pos,
        shadow: Some(shadow),
        abar_at_selection: Some(abar_at_selection),
        contour_count: curve_len,
        label,
        rays: Some(rays),
    }
}
